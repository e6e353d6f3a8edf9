//! Error taxonomy for the search pipeline.
//!
//! Three failure classes: configuration problems caught at startup, intent
//! responses that are not the promised JSON shape, and upstream service
//! failures tagged with the pipeline stage that was running. Zero search
//! results is not an error anywhere in this crate.

use thiserror::Error;

/// The pipeline stage that was executing when a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
  IntentExtraction,
  Embedding,
  Retrieval,
  Summarization,
}

impl std::fmt::Display for Stage {
  fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      Stage::IntentExtraction => "intent extraction",
      Stage::Embedding => "embedding",
      Stage::Retrieval => "retrieval",
      Stage::Summarization => "summarization",
    };
    write!(formatter, "{name}")
  }
}

#[derive(Error, Debug)]
pub enum FeteError {
  #[error("Configuration error: {message}")]
  Config { message: String },

  #[error("Intent response was not the expected JSON shape: {message}")]
  IntentParse { message: String },

  #[error("The {stage} call failed: {message}")]
  Upstream { stage: Stage, message: String },
}

impl FeteError {
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config { message: message.into() }
  }

  pub fn intent_parse(message: impl Into<String>) -> Self {
    Self::IntentParse { message: message.into() }
  }

  pub fn upstream(stage: Stage, message: impl Into<String>) -> Self {
    Self::Upstream { stage, message: message.into() }
  }
}

pub type Result<T> = std::result::Result<T, FeteError>;
