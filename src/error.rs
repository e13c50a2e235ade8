use std::fmt;

/// Custom error type for VIREO operations
/// Implements Clone so results can be replayed through test stubs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Style catalog missing or malformed at load time
    CatalogLoad(String)
  , /// Requested style is not in the catalog
    UnknownStyle(String)
  , /// User text is empty after trimming
    EmptyInput
  , /// Generation parameters rejected at construction
    InvalidConfiguration(String)
  , /// The generation gateway failed
    Generation(GenerationError)
}

/// Cause of a failed generation exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError
{   /// HTTP transport error
    Http(String)
  , /// Authentication rejected (401/403)
    Auth(String)
  , /// Rate limit exceeded (429)
    RateLimited
  , /// API returned a non-success response
    Api(String)
  , /// Failed to parse API response
    Parse(String)
  , /// No choices in API response
    NoChoicesInResponse
  , /// Request rejected before sending
    InvalidRequest(String)
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::CatalogLoad(msg) => {
              write!(f, "Failed to load style catalog: {}", msg)
            }
          , Error::UnknownStyle(name) => {
              write!(f, "Unknown style: {}", name)
            }
          , Error::EmptyInput => {
              write!(f, "Input text is empty")
            }
          , Error::InvalidConfiguration(msg) => {
              write!(f, "Invalid configuration: {}", msg)
            }
          , Error::Generation(cause) => {
              write!(f, "Generation failed: {}", cause)
            }
        }
    }
}

impl fmt::Display for GenerationError
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   GenerationError::Http(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , GenerationError::Auth(msg) => {
              write!(f, "Authentication error: {}", msg)
            }
          , GenerationError::RateLimited => {
              write!(f, "API rate limit exceeded")
            }
          , GenerationError::Api(msg) => {
              write!(f, "API error: {}", msg)
            }
          , GenerationError::Parse(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , GenerationError::NoChoicesInResponse => {
              write!(f, "API response contained no choices")
            }
          , GenerationError::InvalidRequest(msg) => {
              write!(f, "Invalid request: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for GenerationError {}

impl From<GenerationError> for Error
{   fn from(cause: GenerationError) -> Self
    {   Error::Generation(cause)
    }
}
