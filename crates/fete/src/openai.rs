//! OpenAI API client: embeddings plus the two chat-completion prompts
//! (intent extraction and summarization).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::time::timeout;

use crate::config::Config;
use crate::error::{FeteError, Result, Stage};
use crate::intent::{intent_prompt, Intent};
use crate::providers::{EmbeddingProvider, IntentExtractor, Summarizer};

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the OpenAI embeddings and chat completions endpoints
pub struct OpenAiClient {
  client: Client,
  api_base: String,
  api_key: String,
  embedding_model: String,
  chat_model: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
  input: [&'a str; 1],
  model: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
  data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
  embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'a str,
  content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
  message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
  content: String,
}

impl OpenAiClient {
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
      .build()
      .map_err(|e| FeteError::config(format!("Failed to build HTTP client: {e}")))?;

    Ok(Self {
      client,
      api_base: config.openai_api_base.clone(),
      api_key: config.openai_api_key.clone(),
      embedding_model: config.embedding_model.clone(),
      chat_model: config.chat_model.clone(),
    })
  }

  /// Issue one single-message chat completion and return the reply text
  async fn chat(&self, prompt: &str, stage: Stage) -> Result<String> {
    let request = ChatRequest {
      model: &self.chat_model,
      messages: vec![ChatMessage { role: "user", content: prompt }],
    };

    let url = format!("{}/chat/completions", self.api_base);
    let response = timeout(
      Duration::from_secs(REQUEST_TIMEOUT_SECS),
      self
        .client
        .post(&url)
        .header("Authorization", format!("Bearer {}", self.api_key))
        .json(&request)
        .send(),
    )
    .await
    .map_err(|_| FeteError::upstream(stage, "Request timed out"))?
    .map_err(|e| FeteError::upstream(stage, e.to_string()))?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(FeteError::upstream(stage, format!("HTTP {status}: {body}")));
    }

    let parsed: ChatResponse = response
      .json()
      .await
      .map_err(|e| FeteError::upstream(stage, format!("Malformed response body: {e}")))?;

    parsed
      .choices
      .into_iter()
      .next()
      .map(|choice| choice.message.content)
      .ok_or_else(|| FeteError::upstream(stage, "Response contained no choices"))
  }
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
  async fn embed(&self, text: &str) -> Result<Vec<f32>> {
    let stage = Stage::Embedding;
    let request = EmbeddingRequest { input: [text], model: &self.embedding_model };

    let url = format!("{}/embeddings", self.api_base);
    let response = timeout(
      Duration::from_secs(REQUEST_TIMEOUT_SECS),
      self
        .client
        .post(&url)
        .header("Authorization", format!("Bearer {}", self.api_key))
        .json(&request)
        .send(),
    )
    .await
    .map_err(|_| FeteError::upstream(stage, "Request timed out"))?
    .map_err(|e| FeteError::upstream(stage, e.to_string()))?;

    if !response.status().is_success() {
      let status = response.status();
      let body = response.text().await.unwrap_or_default();
      return Err(FeteError::upstream(stage, format!("HTTP {status}: {body}")));
    }

    let parsed: EmbeddingResponse = response
      .json()
      .await
      .map_err(|e| FeteError::upstream(stage, format!("Malformed response body: {e}")))?;

    parsed
      .data
      .into_iter()
      .next()
      .map(|data| data.embedding)
      .ok_or_else(|| FeteError::upstream(stage, "Response contained no embedding"))
  }
}

#[async_trait]
impl IntentExtractor for OpenAiClient {
  async fn extract_intent(&self, query: &str) -> Result<Intent> {
    let reply = self.chat(&intent_prompt(query), Stage::IntentExtraction).await?;
    Intent::from_completion(&reply)
  }
}

#[async_trait]
impl Summarizer for OpenAiClient {
  async fn summarize(&self, description: &str) -> Result<String> {
    let prompt = format!("Summarize the following event in 2-3 sentences:\n\n{description}");
    let reply = self.chat(&prompt, Stage::Summarization).await?;
    Ok(reply.trim().to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_embedding_request_wire_format() {
    let request = EmbeddingRequest { input: ["some text"], model: "text-embedding-ada-002" };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["input"], serde_json::json!(["some text"]));
    assert_eq!(value["model"], "text-embedding-ada-002");
  }

  #[test]
  fn test_chat_request_wire_format() {
    let request = ChatRequest {
      model: "gpt-3.5-turbo",
      messages: vec![ChatMessage { role: "user", content: "hello" }],
    };
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "gpt-3.5-turbo");
    assert_eq!(value["messages"][0]["role"], "user");
    assert_eq!(value["messages"][0]["content"], "hello");
  }

  #[test]
  fn test_chat_response_parses_first_choice() {
    let raw = r#"{"choices": [{"message": {"role": "assistant", "content": "A summary."}}],
                  "usage": {"prompt_tokens": 10, "completion_tokens": 5}}"#;
    let parsed: ChatResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(parsed.choices[0].message.content, "A summary.");
  }

  #[test]
  fn test_embedding_response_parses_vector() {
    let raw = r#"{"object": "list", "data": [{"object": "embedding", "index": 0,
                  "embedding": [0.1, -0.2, 0.3]}], "model": "text-embedding-ada-002"}"#;
    let parsed: EmbeddingResponse = serde_json::from_str(raw).unwrap();

    assert_eq!(parsed.data[0].embedding, vec![0.1, -0.2, 0.3]);
  }
}
