//! Structured search intent and query augmentation.
//!
//! The chat model is asked to reduce a free-text query to three signals:
//! mood, learning goal, and life situation. Its reply must be one strict
//! JSON object; anything else is rejected rather than repaired.

use serde::Deserialize;

use crate::error::{FeteError, Result};

/// Intent signals inferred from a user query.
///
/// Every field is always present after extraction; a signal the query never
/// mentioned is the empty string, not a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Intent {
  #[serde(default)]
  pub mood: String,
  #[serde(default)]
  pub learning_goal: String,
  #[serde(default)]
  pub life_situation: String,
}

impl Intent {
  /// Parse a raw chat completion as a strict intent record.
  ///
  /// The whole response must be a single JSON object with no unexpected
  /// keys. Prose around the JSON is a parse failure, never scanned for an
  /// embedded object.
  pub fn from_completion(raw: &str) -> Result<Self> {
    serde_json::from_str(raw.trim()).map_err(|e| FeteError::intent_parse(e.to_string()))
  }

  /// True when the model found none of the three signals
  pub fn is_blank(&self) -> bool {
    self.mood.is_empty() && self.learning_goal.is_empty() && self.life_situation.is_empty()
  }
}

/// Build the extraction prompt for a user query
pub fn intent_prompt(query: &str) -> String {
  format!(
    r#"Given the following user query, identify:

- Mood (like Relaxed, Excited, Curious, Lonely, etc.)
- Learning Goal (like 'learn AI', 'explore arts', etc.)
- Life Situation (like 'new to city', 'graduating', etc.)

If nothing is mentioned for a field, leave it blank.

User Query: "{query}"

Respond strictly in JSON format:
{{
  "mood": "",
  "learning_goal": "",
  "life_situation": ""
}}"#
  )
}

/// Build the intent-aware text that gets embedded in place of the raw query.
///
/// Deterministic string construction; empty signals still contribute their
/// labeled clause so identical inputs always produce identical output.
pub fn augment_query(query: &str, intent: &Intent) -> String {
  format!(
    "{query}. Mood: {}. Learning goal: {}. Life situation: {}.",
    intent.mood, intent.learning_goal, intent.life_situation
  )
}
