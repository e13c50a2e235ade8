//! Deterministic offline translation templates
//!
//! The demo path: no network, no randomness, no failure. Every
//! style name maps to exactly one line for a given input.

/// Substituted when the input trims to nothing
const EMPTY_THOUGHT: &str = "this moment";

/// Styles with a fixed demo template
///
/// A sealed set: adding a style is a deliberate extension here,
/// and names outside the set render through the generic arm of
/// `demo_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownStyle
{   Poetic
  , Stoic
  , Shakespearean
  , Deep
  , Comic
  , Zen
  , Mystical
  , MythicMirror
  , Haiku
  , Lyrical
  , Oracular
  , Surrealist
  , Romantic
  , Minimalist
  , Elegiac
  , EpicGrand
  , Satirical
  , Ecstatic
  , JournalStyle
  , RapSpokenWord
  , Childlike
  , Cinematic
}

impl KnownStyle
{   /// Match a catalog style name to its fixed template
    pub fn from_name(name: &str) -> Option<Self>
    {   match name
        {   "Poetic" => Some(KnownStyle::Poetic)
          , "Stoic" => Some(KnownStyle::Stoic)
          , "Shakespearean" => Some(KnownStyle::Shakespearean)
          , "Deep" => Some(KnownStyle::Deep)
          , "Comic" => Some(KnownStyle::Comic)
          , "Zen" => Some(KnownStyle::Zen)
          , "Mystical" => Some(KnownStyle::Mystical)
          , "Mythic Mirror" => Some(KnownStyle::MythicMirror)
          , "Haiku" => Some(KnownStyle::Haiku)
          , "Lyrical" => Some(KnownStyle::Lyrical)
          , "Oracular" => Some(KnownStyle::Oracular)
          , "Surrealist" => Some(KnownStyle::Surrealist)
          , "Romantic" => Some(KnownStyle::Romantic)
          , "Minimalist" => Some(KnownStyle::Minimalist)
          , "Elegiac" => Some(KnownStyle::Elegiac)
          , "Epic/Grand" => Some(KnownStyle::EpicGrand)
          , "Satirical" => Some(KnownStyle::Satirical)
          , "Ecstatic (Rumi-style)" => Some(KnownStyle::Ecstatic)
          , "Journal-style" => Some(KnownStyle::JournalStyle)
          , "Rap/Spoken Word" => Some(KnownStyle::RapSpokenWord)
          , "Childlike" => Some(KnownStyle::Childlike)
          , "Cinematic" => Some(KnownStyle::Cinematic)
          , _ => None
        }
    }

    fn render(&self, t: &str) -> String
    {   match self
        {   KnownStyle::Poetic => {
              format!("Like tide over stone, {} learns to soften.", t)
            }
          , KnownStyle::Stoic => {
              format!(
                "{} is opinion; choose the next right action.",
                capitalize(t)
              )
            }
          , KnownStyle::Shakespearean => {
              format!("{} weighs the hour; still, I answer dawn.", t)
            }
          , KnownStyle::Deep => {
              format!("The root of {} is asking to be seen.", t)
            }
          , KnownStyle::Comic => {
              format!(
                "{}? You’re not broken—you’re buffering. Try a heart refresh.",
                t
              )
            }
          , KnownStyle::Zen => {
              format!("{} is a cloud; the sky remains.", t)
            }
          , KnownStyle::Mystical => {
              format!(
                "Within {}, a hidden lantern waits for your name.",
                t
              )
            }
          , KnownStyle::MythicMirror => {
              format!(
                "You stand at the gate of {}; the key is your true name.",
                t
              )
            }
          , KnownStyle::Haiku => {
              format!(
                "{} in one breath— old knots loosening— spring finds a door",
                t
              )
            }
          , KnownStyle::Lyrical => {
              format!(
                "I hum through {} till the melody turns me light.",
                t
              )
            }
          , KnownStyle::Oracular => {
              format!(
                "From {}, a sign: choose the narrow way and become wide.",
                t
              )
            }
          , KnownStyle::Surrealist => {
              format!("{} grew feathers; the clock drank the sea.", t)
            }
          , KnownStyle::Romantic => {
              format!(
                "In {}, the heart still hears a distant, faithful lighthouse.",
                t
              )
            }
          , KnownStyle::Minimalist => {
              format!("{}. Then—space.", t)
            }
          , KnownStyle::Elegiac => {
              format!(
                "I lay down the old name of {} and listen for the quiet.",
                t
              )
            }
          , KnownStyle::EpicGrand => {
              format!(
                "Across the ridge of {}, your small step moves the mountain.",
                t
              )
            }
          , KnownStyle::Satirical => {
              format!("{}? Install fewer chaos-plugins.", t)
            }
          , KnownStyle::Ecstatic => {
              format!(
                "Beloved, even {} is a doorway wearing your face.",
                t
              )
            }
          , KnownStyle::JournalStyle => {
              format!(
                "Today felt like {}. One truthful line eased it.",
                t
              )
            }
          , KnownStyle::RapSpokenWord => {
              format!(
                "{} in my chest—ride the beat, let the walls confess.",
                t
              )
            }
          , KnownStyle::Childlike => {
              format!("{} feels big. I am bigger.", t)
            }
          , KnownStyle::Cinematic => {
              format!(
                "The room tightens with {}; a window brightens—you exhale.",
                t
              )
            }
        }
    }
}

/// First character uppercased, remainder lowercased
fn capitalize(text: &str) -> String
{   let mut chars = text.chars();
    match chars.next()
    {   Some(first) => {
          first.to_uppercase().collect::<String>()
            + &chars.as_str().to_lowercase()
        }
      , None => String::new()
    }
}

/// Deterministic demo translation, total over all inputs
///
/// Blank input renders with a placeholder phrase; style names the
/// fixed table does not know get the generic line.
pub fn demo_line(user_text: &str, style_name: &str) -> String
{   let trimmed = user_text.trim();
    let t = if trimmed.is_empty()
    {   EMPTY_THOUGHT
    } else
    {   trimmed
    };

    match KnownStyle::from_name(style_name)
    {   Some(style) => style.render(t)
      , None => format!("{} turns toward light.", t)
    }
}
