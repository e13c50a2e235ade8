//! Style registry: named voices loaded once per session

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use log::{debug, error, info};

/// Reserved document key carrying catalog-wide settings
pub const META_KEY: &str = "_meta";

// ===== Style Types =====

/// One few-shot pair steering the model toward a voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleTurn
{   /// Sample raw thought
    #[serde(default)]
    pub thought: String
  , /// The line the voice answers with
    #[serde(default)]
    pub line: String
}

/// One named rhetorical voice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord
{   /// Unique style name
    pub name: String
  , /// System instruction, used verbatim and never mutated
    pub prompt: String
  , /// Few-shot pairs in fixed order
    pub examples: Vec<ExampleTurn>
}

impl StyleRecord
{   /// Short description: first sentence of the prompt
    pub fn description(&self) -> &str
    {   self.prompt
          .split('.')
          .next()
          .unwrap_or("")
          .trim()
    }
}

// ===== Document Shapes =====

/// Accepted entry shapes in the catalog document
/// Legacy entries map the style name straight to a prompt string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStyle
{   Block
    {   prompt: String
      , #[serde(default)]
        examples: Vec<ExampleTurn>
    }
  , Legacy(String)
}

#[derive(Debug, Default, Deserialize)]
struct RawMeta
{   #[serde(default)]
    system_prefix: Option<String>
}

// ===== Catalog =====

/// Catalog of styles, insertion-ordered, read-only after load
#[derive(Debug, Clone, PartialEq)]
pub struct StyleCatalog
{   system_prefix: Option<String>
  , styles: IndexMap<String, StyleRecord>
}

impl StyleCatalog
{   /// Parse a catalog from a JSON document
    pub fn from_json_str(raw: &str)
      -> Result<Self, crate::error::Error>
    {   debug!("Parsing style catalog ({} bytes)", raw.len());

        let doc: IndexMap<String, serde_json::Value>
          = serde_json::from_str(raw).map_err(|e| {
              error!("Catalog is not a JSON mapping: {}", e);
              crate::error::Error::CatalogLoad(
                format!("not a mapping: {}", e)
              )
            })?;

        let mut system_prefix = None;
        let mut styles = IndexMap::new();

        for (name, value) in doc
        {   if name == META_KEY
            {   let meta: RawMeta
                  = serde_json::from_value(value)
                    .map_err(|e| {
                      error!("Malformed _meta entry: {}", e);
                      crate::error::Error::CatalogLoad(
                        format!("malformed _meta entry: {}", e)
                      )
                    })?;
                system_prefix = meta.system_prefix
                  .filter(|p| !p.trim().is_empty());
                continue;
            }

            let raw_style: RawStyle
              = serde_json::from_value(value)
                .map_err(|e| {
                  error!("Malformed entry for {}: {}", name, e);
                  crate::error::Error::CatalogLoad(
                    format!("malformed entry for {}: {}", name, e)
                  )
                })?;

            let record = match raw_style
            {   RawStyle::Block { prompt, examples } => {
                  StyleRecord
                  {   name: name.clone()
                    , prompt
                    , examples
                  }
                }
              , RawStyle::Legacy(prompt) => {
                  StyleRecord
                  {   name: name.clone()
                    , prompt
                    , examples: vec![]
                  }
                }
            };

            if record.prompt.trim().is_empty()
            {   error!("Style {} is missing prompt text", name);
                return Err(crate::error::Error::CatalogLoad(
                  format!("style {} is missing prompt text", name)
                ));
            }

            styles.insert(name, record);
        }

        info!("Loaded {} styles", styles.len());
        Ok(StyleCatalog
        {   system_prefix
          , styles
        })
    }

    /// Read and parse a catalog file
    pub fn load_from_path(path: &str)
      -> Result<Self, crate::error::Error>
    {   debug!("Loading style catalog from: {}", path);
        let raw = std::fs::read_to_string(path)
          .map_err(|e| {
            error!("Failed to read {}: {}", path, e);
            crate::error::Error::CatalogLoad(
              format!("failed to read {}: {}", path, e)
            )
          })?;
        StyleCatalog::from_json_str(&raw)
    }

    /// Resolve a style by name
    pub fn lookup(&self, name: &str)
      -> Result<&StyleRecord, crate::error::Error>
    {   self.styles.get(name).ok_or_else(|| {
          error!("Unknown style: {}", name);
          crate::error::Error::UnknownStyle(name.to_string())
        })
    }

    pub fn contains(&self, name: &str) -> bool
    {   self.styles.contains_key(name)
    }

    /// Style names in insertion order
    pub fn style_names(&self) -> Vec<&str>
    {   self.styles.keys().map(|k| k.as_str()).collect()
    }

    /// The default style: first in document order
    pub fn first(&self) -> Option<&StyleRecord>
    {   self.styles.first().map(|(_, record)| record)
    }

    /// Draw one style uniformly from the catalog
    pub fn random(&self) -> Option<&StyleRecord>
    {   use rand::Rng;

        if self.styles.is_empty()
        {   return None;
        }
        let idx = rand::thread_rng()
          .gen_range(0..self.styles.len());
        debug!("Surprise pick: index {}", idx);
        self.styles.get_index(idx).map(|(_, record)| record)
    }

    /// Global preamble from the document's _meta entry
    pub fn system_prefix(&self) -> Option<&str>
    {   self.system_prefix.as_deref()
    }

    pub fn len(&self) -> usize
    {   self.styles.len()
    }

    pub fn is_empty(&self) -> bool
    {   self.styles.is_empty()
    }
}
