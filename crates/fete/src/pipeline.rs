//! The query pipeline: intent extraction, augmentation, embedding, and
//! retrieval, in that order.
//!
//! One run issues exactly one call to each injected service. There is no
//! caching, no retry, and no partial result: the first failing stage aborts
//! the run with an error naming that stage.

use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::event::EventMatch;
use crate::intent::{augment_query, Intent};
use crate::providers::{EmbeddingProvider, IntentExtractor, VectorIndex};

/// Outcome of one pipeline run
#[derive(Debug)]
pub enum SearchOutcome {
  /// The query was empty; nothing was called and nothing was searched
  Idle,
  /// The index answered, possibly with zero matches
  Done { intent: Intent, matches: Vec<EventMatch> },
}

/// Orchestrator over the three hosted services, built once per process
/// from explicitly injected clients
pub struct SearchPipeline {
  intent: Arc<dyn IntentExtractor>,
  embedder: Arc<dyn EmbeddingProvider>,
  index: Arc<dyn VectorIndex>,
  top_k: usize,
}

impl SearchPipeline {
  pub fn new(
    intent: Arc<dyn IntentExtractor>,
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    top_k: usize,
  ) -> Self {
    Self { intent, embedder, index, top_k }
  }

  /// Run one query through the full pipeline
  pub async fn run(&self, query: &str) -> Result<SearchOutcome> {
    if query.trim().is_empty() {
      debug!("empty query, pipeline stays idle");
      return Ok(SearchOutcome::Idle);
    }

    debug!(stage = "intent", "extracting search intent");
    let intent = self.intent.extract_intent(query).await?;

    let augmented = augment_query(query, &intent);
    debug!(stage = "augment", text = %augmented, "built augmented query");

    debug!(stage = "embed", "requesting query embedding");
    let vector = self.embedder.embed(&augmented).await?;

    debug!(stage = "retrieve", top_k = self.top_k, "querying the vector index");
    let mut matches = self.index.query(&vector, self.top_k).await?;

    // the index is asked for top_k records; hold it to that
    matches.truncate(self.top_k);

    debug!(stage = "done", count = matches.len(), "pipeline finished");
    Ok(SearchOutcome::Done { intent, matches })
  }
}
