//! Service seams for the hosted AI services.
//!
//! Each external dependency sits behind one async trait so the pipeline is
//! handed its collaborators explicitly and tests can drive it with fakes.

use async_trait::async_trait;

use crate::error::Result;
use crate::event::EventMatch;
use crate::intent::Intent;

#[async_trait]
pub trait IntentExtractor: Send + Sync {
  /// Infer structured intent from a raw user query
  async fn extract_intent(&self, query: &str) -> Result<Intent>;
}

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
  /// Turn a text string into a fixed-length embedding vector
  async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

#[async_trait]
pub trait VectorIndex: Send + Sync {
  /// Return up to `top_k` nearest records for the query vector, best first
  async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<EventMatch>>;
}

#[async_trait]
pub trait Summarizer: Send + Sync {
  /// Produce a short plain-text summary of an event description
  async fn summarize(&self, description: &str) -> Result<String>;
}
