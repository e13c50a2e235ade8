//! Configuration for access gating and generation parameters

use serde::{Deserialize, Serialize};
use log::debug;

/// Models the generation gateway will accept
pub const ALLOWED_MODELS: [&str; 3]
  = ["gpt-3.5-turbo", "gpt-4", "gpt-4o-mini"];

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f32 = 0.8;
pub const DEFAULT_MAX_TOKENS: usize = 60;

/// Which path the caller asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode
{   /// Offline deterministic translation only
    Demo
  , /// Live generation, gated on credentials
    Api
}

/// Access configuration
/// Built once, passed by reference; never read ambiently
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessConfig
{   /// Requested mode
    pub mode: AccessMode
  , /// API key for the generation service
    pub api_key: Option<String>
  , /// Allow-list of authorization codes (empty = no code gate)
    pub access_codes: Vec<String>
  , /// Code supplied by the user for this session
    pub access_code: Option<String>
}

impl Default for AccessConfig
{   fn default() -> Self
    {   AccessConfig
        {   mode: AccessMode::Demo
          , api_key: None
          , access_codes: vec![]
          , access_code: None
        }
    }
}

impl AccessConfig
{   /// Load access configuration from the environment
    ///
    /// Reads OPENAI_API_KEY, VIREO_MODE ("api" or "demo"),
    /// VIREO_ACCESS_CODES (comma-separated) and VIREO_ACCESS_CODE.
    pub fn from_env() -> Self
    {   debug!("Loading AccessConfig from environment");
        let mode = match std::env::var("VIREO_MODE")
        {   Ok(v) if v.trim().eq_ignore_ascii_case("api") => {
              AccessMode::Api
            }
          , _ => AccessMode::Demo
        };

        let api_key = std::env::var("OPENAI_API_KEY")
          .ok()
          .filter(|k| !k.trim().is_empty());

        let access_codes: Vec<String>
          = std::env::var("VIREO_ACCESS_CODES")
            .map(|raw| {
              raw.split(',')
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect()
            })
            .unwrap_or_default();

        let access_code = std::env::var("VIREO_ACCESS_CODE")
          .ok()
          .filter(|c| !c.trim().is_empty());

        AccessConfig
        {   mode
          , api_key
          , access_codes
          , access_code
        }
    }

    /// Check the API key is present and non-blank
    pub fn key_ok(&self) -> bool
    {   match &self.api_key
        {   Some(key) => !key.trim().is_empty()
          , None => false
        }
    }

    /// Check the access-code gate
    /// An empty allow-list leaves only the key check
    pub fn code_ok(&self) -> bool
    {   if self.access_codes.is_empty()
        {   return true;
        }
        match &self.access_code
        {   Some(code) => {
              let code = code.trim();
              self.access_codes.iter().any(|c| c == code)
            }
          , None => false
        }
    }
}

/// Sampling parameters for one generation exchange
/// Validated at construction; passed through to the wire unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig
{   /// Model name, one of ALLOWED_MODELS
    pub model: String
  , /// Sampling temperature
    pub temperature: f32
  , /// Max tokens to generate
    pub max_tokens: usize
}

impl Default for GenerationConfig
{   fn default() -> Self
    {   GenerationConfig
        {   model: DEFAULT_MODEL.to_string()
          , temperature: DEFAULT_TEMPERATURE
          , max_tokens: DEFAULT_MAX_TOKENS
        }
    }
}

impl GenerationConfig
{   /// Create a validated generation configuration
    pub fn new(
      model: String
    , temperature: f32
    , max_tokens: usize
    ) -> Result<Self, crate::error::Error>
    {   if !ALLOWED_MODELS.contains(&model.as_str())
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("model not allowed: {}", model)
            ));
        }
        if !(0.0..=2.0).contains(&temperature)
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("temperature out of range: {}", temperature)
            ));
        }
        if max_tokens == 0 || max_tokens > 4096
        {   return Err(crate::error::Error::InvalidConfiguration(
              format!("max_tokens out of range: {}", max_tokens)
            ));
        }

        debug!(
          "GenerationConfig: {} temp={} max_tokens={}",
          model, temperature, max_tokens
        );
        Ok(GenerationConfig
        {   model
          , temperature
          , max_tokens
        })
    }
}
