//! Ordered message turns for a generation request

use serde::{Deserialize, Serialize};
use log::{debug, error};

/// Speaker of one message turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role
{   System
  , User
  , Assistant
}

/// One message unit in a generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn
{   pub role: Role
  , pub content: String
}

/// Build the turn sequence for one translation request
///
/// Order is preamble, style prompt, few-shot pairs in catalog
/// order, then the user input. No turn carries empty content.
pub fn build_turns(
  catalog: &crate::catalog::StyleCatalog
, style_name: &str
, user_text: &str
) -> Result<Vec<Turn>, crate::error::Error>
{   let trimmed = user_text.trim();
    if trimmed.is_empty()
    {   error!("Refusing to build turns for blank input");
        return Err(crate::error::Error::EmptyInput);
    }

    let record = catalog.lookup(style_name)?;
    debug!("Building turns for style: {}", style_name);

    let mut turns = Vec::new();

    if let Some(prefix) = catalog.system_prefix()
    {   turns.push(Turn
        {   role: Role::System
          , content: prefix.to_string()
        });
    }

    turns.push(Turn
    {   role: Role::System
      , content: record.prompt.clone()
    });

    for example in &record.examples
    {   let thought = example.thought.trim();
        let line = example.line.trim();
        if thought.is_empty() || line.is_empty()
        {   debug!("Skipping incomplete example pair");
            continue;
        }
        turns.push(Turn
        {   role: Role::User
          , content: thought.to_string()
        });
        turns.push(Turn
        {   role: Role::Assistant
          , content: line.to_string()
        });
    }

    turns.push(Turn
    {   role: Role::User
      , content: trimmed.to_string()
    });

    debug!("Built {} turns", turns.len());
    Ok(turns)
}
