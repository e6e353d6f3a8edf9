//! Command handlers: thin composition of config, clients, and pipeline

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;

use crate::cli::display;
use crate::config::Config;
use crate::event::EventMatch;
use crate::openai::OpenAiClient;
use crate::pinecone::PineconeIndex;
use crate::pipeline::{SearchOutcome, SearchPipeline};
use crate::providers::Summarizer;

/// Run a search and render the results
pub async fn search(query: &str, no_interact: bool) -> Result<()> {
  let config = Config::from_env()?;

  if query.trim().is_empty() {
    quill::warn("Empty query, nothing to search");
    return Ok(());
  }

  let openai = Arc::new(OpenAiClient::new(&config)?);

  quill::step("Connecting to the event index...");
  let index = Arc::new(PineconeIndex::connect(&config).await?);
  quill::info(&format!("Using index '{}'", config.index_name));

  let pipeline = SearchPipeline::new(openai.clone(), openai.clone(), index, config.top_k);

  quill::step("Understanding your search intent...");
  let outcome = pipeline.run(query).await?;

  let (intent, matches) = match outcome {
    SearchOutcome::Idle => return Ok(()),
    SearchOutcome::Done { intent, matches } => (intent, matches),
  };

  display::display_intent(&intent);

  if matches.is_empty() {
    display::display_no_results(query);
    return Ok(());
  }

  quill::done(&format!("Found {} matching events", matches.len()));
  println!();

  for (position, event) in matches.iter().enumerate() {
    display::display_event_card(position + 1, event);
  }

  if !no_interact {
    summarize_loop(openai.as_ref(), &matches).await?;
  }

  quill::event(&format!("search complete: {} results", matches.len()));
  Ok(())
}

/// Summarize arbitrary event text: the same call the search loop makes
pub async fn summarize(description: &str) -> Result<()> {
  let config = Config::from_env()?;
  let openai = OpenAiClient::new(&config)?;

  quill::step("Summarizing...");
  let summary = openai.summarize(description).await?;
  display::display_summary(&summary);

  Ok(())
}

/// Offer per-result summaries until the user opts out.
///
/// Each accepted number issues a fresh summarization call, placeholder
/// descriptions included; nothing is cached between requests. A failed
/// summary is reported and the loop keeps going.
async fn summarize_loop(summarizer: &dyn Summarizer, matches: &[EventMatch]) -> Result<()> {
  loop {
    print!("Summarize which result? (1-{}, Enter to finish): ", matches.len());
    std::io::stdout().flush()?;

    let mut input = String::new();
    let bytes_read = std::io::stdin().read_line(&mut input)?;
    let input = input.trim();

    if bytes_read == 0 || input.is_empty() {
      return Ok(());
    }

    let Ok(position) = input.parse::<usize>() else {
      quill::warn("Enter a result number, or press Enter to finish");
      continue;
    };

    if position == 0 || position > matches.len() {
      quill::warn(&format!("No result number {position}"));
      continue;
    }

    quill::step("Summarizing...");
    match summarizer.summarize(matches[position - 1].description()).await {
      Ok(summary) => display::display_summary(&summary),
      Err(e) => quill::fail(&format!("Summarization failed: {e}")),
    }
  }
}
