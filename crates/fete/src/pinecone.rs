//! Pinecone vector index client.
//!
//! The control plane maps an index name to its data-plane host. That lookup
//! happens once, at startup, so a missing index or bad credential fails
//! before any query; searches then go straight to the index host.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::Config;
use crate::error::{FeteError, Result, Stage};
use crate::event::{EventMatch, EventMetadata};
use crate::providers::VectorIndex;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Handle to one Pinecone index, resolved and ready to query
pub struct PineconeIndex {
  client: Client,
  api_key: String,
  host: String,
}

#[derive(Debug, Deserialize)]
struct DescribeIndexResponse {
  host: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryRequest<'a> {
  vector: &'a [f32],
  top_k: usize,
  include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
  #[serde(default)]
  matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
  id: String,
  #[serde(default)]
  score: f32,
  #[serde(default)]
  metadata: Option<EventMetadata>,
}

impl PineconeIndex {
  /// Resolve the configured index to its data-plane host.
  ///
  /// Called once at startup; an unknown index name or rejected credential
  /// surfaces here as a configuration failure.
  pub async fn connect(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
      .build()
      .map_err(|e| FeteError::config(format!("Failed to build HTTP client: {e}")))?;

    let url = format!("{}/indexes/{}", config.pinecone_api_base, config.index_name);
    let response = timeout(
      Duration::from_secs(REQUEST_TIMEOUT_SECS),
      client.get(&url).header("Api-Key", &config.pinecone_api_key).send(),
    )
    .await
    .map_err(|_| FeteError::config("Index lookup timed out"))?
    .map_err(|e| FeteError::config(format!("Could not reach the index service: {e}")))?;

    if !response.status().is_success() {
      let status = response.status();
      return Err(FeteError::config(format!(
        "Index '{}' could not be resolved: HTTP {status}",
        config.index_name
      )));
    }

    let described: DescribeIndexResponse = response
      .json()
      .await
      .map_err(|e| FeteError::config(format!("Malformed index description: {e}")))?;

    Ok(Self {
      client,
      api_key: config.pinecone_api_key.clone(),
      host: normalize_host(&described.host),
    })
  }

  pub fn host(&self) -> &str {
    &self.host
  }
}

/// The control plane reports hosts without a scheme
fn normalize_host(host: &str) -> String {
  if host.starts_with("http://") || host.starts_with("https://") {
    host.trim_end_matches('/').to_string()
  } else {
    format!("https://{}", host.trim_end_matches('/'))
  }
}

#[async_trait]
impl VectorIndex for PineconeIndex {
  async fn query(&self, vector: &[f32], top_k: usize) -> Result<Vec<EventMatch>> {
    let stage = Stage::Retrieval;
    let request = QueryRequest { vector, top_k, include_metadata: true };

    let url = format!("{}/query", self.host);
    let response = timeout(
      Duration::from_secs(REQUEST_TIMEOUT_SECS),
      self.client.post(&url).header("Api-Key", &self.api_key).json(&request).send(),
    )
    .await
    .map_err(|_| FeteError::upstream(stage, "Request timed out"))?
    .map_err(|e| FeteError::upstream(stage, e.to_string()))?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(FeteError::upstream(stage, format!("HTTP {status}: {body}")));
    }

    let parsed: QueryResponse = response
      .json()
      .await
      .map_err(|e| FeteError::upstream(stage, format!("Malformed response body: {e}")))?;

    let matches = parsed
      .matches
      .into_iter()
      .map(|record| EventMatch {
        id: record.id,
        score: record.score,
        metadata: record.metadata.unwrap_or_default(),
      })
      .collect();

    Ok(matches)
  }
}
