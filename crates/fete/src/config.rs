//! Process configuration, read once at startup.
//!
//! Credentials and the index name come from the environment. Anything
//! missing or malformed fails here, before a single query runs. The API
//! base URLs can be overridden via env vars for testing.

use std::env;

use url::Url;

use crate::error::{FeteError, Result};

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_PINECONE_API_BASE: &str = "https://api.pinecone.io";

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";
const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TOP_K: usize = 9;

/// Read-only process configuration shared by every command
#[derive(Debug, Clone)]
pub struct Config {
  pub openai_api_key: String,
  pub openai_api_base: String,
  pub pinecone_api_key: String,
  pub pinecone_api_base: String,
  pub index_name: String,
  pub embedding_model: String,
  pub chat_model: String,
  pub top_k: usize,
}

impl Config {
  /// Read and validate configuration from the environment
  pub fn from_env() -> Result<Self> {
    let openai_api_key = required("OPENAI_API_KEY")?;
    let pinecone_api_key = required("PINECONE_API_KEY")?;
    let index_name = required("PINECONE_INDEX_NAME")?;

    let openai_api_base = base_url("FETE_OPENAI_API_BASE", DEFAULT_OPENAI_API_BASE)?;
    let pinecone_api_base = base_url("FETE_PINECONE_API_BASE", DEFAULT_PINECONE_API_BASE)?;

    let embedding_model =
      env::var("FETE_EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());
    let chat_model =
      env::var("FETE_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

    let top_k = match env::var("FETE_TOP_K") {
      Err(_) => DEFAULT_TOP_K,
      Ok(raw) => raw.parse::<usize>().ok().filter(|k| *k > 0).ok_or_else(|| {
        FeteError::config(format!("FETE_TOP_K must be a positive integer, got '{raw}'"))
      })?,
    };

    Ok(Self {
      openai_api_key,
      openai_api_base,
      pinecone_api_key,
      pinecone_api_base,
      index_name,
      embedding_model,
      chat_model,
      top_k,
    })
  }
}

/// Fetch a required env var, rejecting blank values
fn required(name: &str) -> Result<String> {
  match env::var(name) {
    Ok(value) if !value.trim().is_empty() => Ok(value),
    _ => Err(FeteError::config(format!("{name} is not set"))),
  }
}

/// Fetch an optional base URL override, validating that it parses
fn base_url(name: &str, default: &str) -> Result<String> {
  let raw = env::var(name).unwrap_or_else(|_| default.to_string());
  Url::parse(&raw)
    .map_err(|e| FeteError::config(format!("{name} is not a valid URL: {e}")))?;
  Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn set_required_vars() {
    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var("PINECONE_API_KEY", "pc-test");
    env::set_var("PINECONE_INDEX_NAME", "events");
  }

  fn clear_all_vars() {
    for name in [
      "OPENAI_API_KEY",
      "PINECONE_API_KEY",
      "PINECONE_INDEX_NAME",
      "FETE_OPENAI_API_BASE",
      "FETE_PINECONE_API_BASE",
      "FETE_EMBEDDING_MODEL",
      "FETE_CHAT_MODEL",
      "FETE_TOP_K",
    ] {
      env::remove_var(name);
    }
  }

  #[test]
  #[serial]
  fn test_defaults_applied() {
    clear_all_vars();
    set_required_vars();

    let config = Config::from_env().unwrap();
    assert_eq!(config.openai_api_base, DEFAULT_OPENAI_API_BASE);
    assert_eq!(config.pinecone_api_base, DEFAULT_PINECONE_API_BASE);
    assert_eq!(config.embedding_model, "text-embedding-ada-002");
    assert_eq!(config.chat_model, "gpt-3.5-turbo");
    assert_eq!(config.top_k, 9);
  }

  #[test]
  #[serial]
  fn test_missing_credential_fails_fast() {
    clear_all_vars();
    env::set_var("PINECONE_API_KEY", "pc-test");
    env::set_var("PINECONE_INDEX_NAME", "events");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("OPENAI_API_KEY"));
  }

  #[test]
  #[serial]
  fn test_blank_credential_rejected() {
    clear_all_vars();
    set_required_vars();
    env::set_var("PINECONE_INDEX_NAME", "   ");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("PINECONE_INDEX_NAME"));
  }

  #[test]
  #[serial]
  fn test_top_k_override_and_validation() {
    clear_all_vars();
    set_required_vars();

    env::set_var("FETE_TOP_K", "4");
    assert_eq!(Config::from_env().unwrap().top_k, 4);

    env::set_var("FETE_TOP_K", "zero");
    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("FETE_TOP_K"));

    env::set_var("FETE_TOP_K", "0");
    assert!(Config::from_env().is_err());
  }

  #[test]
  #[serial]
  fn test_base_url_override_strips_trailing_slash() {
    clear_all_vars();
    set_required_vars();
    env::set_var("FETE_OPENAI_API_BASE", "http://localhost:8080/v1/");

    let config = Config::from_env().unwrap();
    assert_eq!(config.openai_api_base, "http://localhost:8080/v1");
  }

  #[test]
  #[serial]
  fn test_invalid_base_url_rejected() {
    clear_all_vars();
    set_required_vars();
    env::set_var("FETE_PINECONE_API_BASE", "not a url");

    let result = Config::from_env();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("FETE_PINECONE_API_BASE"));
  }
}
