//! VIREO: turn one raw thought into one clear line
//!
//! Style-templated text translation. Pick a voice from the style
//! catalog and either ask the generation service for a line in
//! that voice, or fall back to a deterministic local template.
//! The caller-facing surface is `Translator::translate`: one
//! style, one thought, one line back, always.
//!
//! ```no_run
//! use vireo::{
//!   AccessConfig, GenerationConfig, StyleCatalog, Translator,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), vireo::Error> {
//!     let catalog
//!       = StyleCatalog::load_from_path("poetic_modes.json")?;
//!     let translator = Translator::with_openai(
//!       catalog,
//!       AccessConfig::from_env(),
//!       GenerationConfig::default(),
//!     );
//!
//!     let result = translator
//!       .translate("Stoic", "I feel stuck and overwhelmed.")
//!       .await?;
//!     println!("{}", result.text);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod config;
pub mod catalog;
pub mod prompt;
pub mod fallback;
pub mod providers;
pub mod resolver;

pub use error::{Error, GenerationError};
pub use config::{
  AccessConfig, AccessMode, GenerationConfig, ALLOWED_MODELS,
};
pub use catalog::{ExampleTurn, StyleCatalog, StyleRecord};
pub use prompt::{build_turns, Role, Turn};
pub use fallback::{demo_line, KnownStyle};
pub use providers::OpenAiClient;
pub use resolver::{
  CompletionGateway, TranslateMode, TranslationRequest,
  TranslationResult, Translator,
};
