//! Retrieved event records and their metadata.
//!
//! The index stores opaque key-value metadata per vector. The keys below
//! are recognized but none are required; every accessor substitutes a named
//! fallback so a sparse record still renders.

use serde::Deserialize;

pub const FALLBACK_TITLE: &str = "No Title";
pub const FALLBACK_LOCATION: &str = "Unknown";
pub const FALLBACK_DATE_TIME: &str = "Unknown";
pub const FALLBACK_LINK: &str = "#";
pub const FALLBACK_DESCRIPTION: &str = "No Description";

/// Metadata stored alongside each vector in the index.
/// Keys the index adds beyond these are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventMetadata {
  #[serde(default)]
  pub title: Option<String>,
  #[serde(default)]
  pub location: Option<String>,
  #[serde(default)]
  pub date_time: Option<String>,
  #[serde(default)]
  pub link: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
}

/// One retrieved event with its similarity score
#[derive(Debug, Clone)]
pub struct EventMatch {
  pub id: String,
  pub score: f32,
  pub metadata: EventMetadata,
}

impl EventMatch {
  pub fn title(&self) -> &str {
    self.metadata.title.as_deref().unwrap_or(FALLBACK_TITLE)
  }

  pub fn location(&self) -> &str {
    self.metadata.location.as_deref().unwrap_or(FALLBACK_LOCATION)
  }

  pub fn date_time(&self) -> &str {
    self.metadata.date_time.as_deref().unwrap_or(FALLBACK_DATE_TIME)
  }

  pub fn link(&self) -> &str {
    self.metadata.link.as_deref().unwrap_or(FALLBACK_LINK)
  }

  pub fn description(&self) -> &str {
    self.metadata.description.as_deref().unwrap_or(FALLBACK_DESCRIPTION)
  }
}
