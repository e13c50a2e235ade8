//! Demo-vs-live orchestration for one translation request

use log::{debug, info, warn};

use crate::catalog::StyleCatalog;
use crate::config::{AccessConfig, AccessMode, GenerationConfig};
use crate::error::{Error, GenerationError};
use crate::fallback::demo_line;
use crate::prompt::{build_turns, Turn};

/// Seam between the resolver and the generation service
///
/// Implementors perform one exchange and do not retry; whether a
/// failure degrades or surfaces is decided by the caller.
#[allow(async_fn_in_trait)]
pub trait CompletionGateway
{   async fn complete(
      &self
    , turns: &[Turn]
    , params: &GenerationConfig
    ) -> Result<String, GenerationError>;
}

/// Which path produced a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateMode
{   /// Deterministic offline template
    Demo
  , /// External generation service
    Live
}

/// One translation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest
{   /// Style name; must exist in the catalog
    pub style: String
  , /// Raw user text
    pub text: String
}

/// Result of one translation; constructed fresh per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult
{   pub text: String
  , pub mode: TranslateMode
}

/// Orchestrator over catalog, access gate, and gateway
pub struct Translator<G>
{   catalog: StyleCatalog
  , access: AccessConfig
  , generation: GenerationConfig
  , gateway: G
}

impl<G> Translator<G>
where
  G: CompletionGateway
{   /// Assemble a translator from explicitly constructed parts
    pub fn new(
      catalog: StyleCatalog
    , access: AccessConfig
    , generation: GenerationConfig
    , gateway: G
    ) -> Self
    {   debug!(
          "Creating Translator with {} styles",
          catalog.len()
        );
        Translator
        {   catalog
          , access
          , generation
          , gateway
        }
    }

    /// The loaded style catalog
    pub fn catalog(&self) -> &StyleCatalog
    {   &self.catalog
    }

    /// The wired generation gateway
    pub fn gateway(&self) -> &G
    {   &self.gateway
    }

    /// Effective mode, re-evaluated for every request
    ///
    /// Api mode goes live only with a usable key and a passing
    /// access-code gate; anything else stays demo.
    pub fn mode(&self) -> TranslateMode
    {   match self.access.mode
        {   AccessMode::Demo => TranslateMode::Demo
          , AccessMode::Api => {
              if self.access.key_ok() && self.access.code_ok()
              {   TranslateMode::Live
              } else
              {   debug!("Api mode locked; staying in demo");
                  TranslateMode::Demo
              }
            }
        }
    }

    /// Resolve one request into exactly one line
    pub async fn resolve(
      &self
    , request: &TranslationRequest
    ) -> Result<TranslationResult, Error>
    {   self.translate(&request.style, &request.text).await
    }

    /// Caller-facing surface: one style, one thought, one line back
    ///
    /// Generation failure never surfaces from here; the request
    /// downgrades to the demo line and the next request
    /// re-evaluates availability.
    pub async fn translate(
      &self
    , style_name: &str
    , user_text: &str
    ) -> Result<TranslationResult, Error>
    {   let trimmed = user_text.trim();
        if trimmed.is_empty()
        {   return Err(Error::EmptyInput);
        }

        // Reject unknown styles before any gateway traffic
        self.catalog.lookup(style_name)?;

        match self.mode()
        {   TranslateMode::Demo => {
              debug!("Demo translation for style: {}", style_name);
              Ok(TranslationResult
              {   text: demo_line(trimmed, style_name)
                , mode: TranslateMode::Demo
              })
            }
          , TranslateMode::Live => {
              let turns = build_turns(
                &self.catalog,
                style_name,
                trimmed
              )?;
              debug!("Live translation with {} turns", turns.len());

              match self.gateway
                .complete(&turns, &self.generation)
                .await
              {   Ok(text) => {
                    info!("Live translation succeeded");
                    Ok(TranslationResult
                    {   text
                      , mode: TranslateMode::Live
                    })
                  }
                , Err(e) => {
                    warn!("Generation failed, degrading: {}", e);
                    Ok(TranslationResult
                    {   text: demo_line(trimmed, style_name)
                      , mode: TranslateMode::Demo
                    })
                  }
              }
            }
        }
    }
}

impl Translator<crate::providers::OpenAiClient>
{   /// Wire the stock OpenAI gateway from the access config
    pub fn with_openai(
      catalog: StyleCatalog
    , access: AccessConfig
    , generation: GenerationConfig
    ) -> Self
    {   let api_key = access.api_key
          .clone()
          .unwrap_or_default();
        let gateway
          = crate::providers::OpenAiClient::new(api_key);
        Translator::new(catalog, access, generation, gateway)
    }
}
