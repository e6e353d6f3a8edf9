//! End-to-end CLI tests.
//!
//! No hosted service is contacted: configuration failures happen before
//! any request, and the reachability tests point the base URLs at a local
//! port nothing listens on.

use assert_cmd::Command;
use predicates::prelude::*;

const ENV_VARS: &[&str] = &[
  "OPENAI_API_KEY",
  "PINECONE_API_KEY",
  "PINECONE_INDEX_NAME",
  "FETE_OPENAI_API_BASE",
  "FETE_PINECONE_API_BASE",
  "FETE_EMBEDDING_MODEL",
  "FETE_CHAT_MODEL",
  "FETE_TOP_K",
];

// a local port with no listener, so connection attempts fail immediately
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9";

fn fete() -> Command {
  let mut command = Command::cargo_bin("fete").unwrap();
  for name in ENV_VARS {
    command.env_remove(name);
  }
  command
}

fn fete_configured() -> Command {
  let mut command = fete();
  command
    .env("OPENAI_API_KEY", "sk-test")
    .env("PINECONE_API_KEY", "pc-test")
    .env("PINECONE_INDEX_NAME", "events");
  command
}

#[test]
fn test_help_lists_subcommands() {
  fete()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("search").and(predicate::str::contains("summarize")));
}

#[test]
fn test_missing_credentials_fail_before_any_query() {
  fete()
    .args(["search", "tech workshops in Boston"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("OPENAI_API_KEY"));
}

#[test]
fn test_invalid_top_k_fails_at_startup() {
  fete_configured()
    .env("FETE_TOP_K", "lots")
    .args(["search", "anything"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("FETE_TOP_K"));
}

#[test]
fn test_empty_query_is_a_quiet_no_op() {
  // the dead endpoints prove no call is attempted: reaching one would fail
  fete_configured()
    .env("FETE_OPENAI_API_BASE", DEAD_ENDPOINT)
    .env("FETE_PINECONE_API_BASE", DEAD_ENDPOINT)
    .args(["search", ""])
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

#[test]
fn test_unreachable_index_service_is_reported() {
  fete_configured()
    .env("FETE_PINECONE_API_BASE", DEAD_ENDPOINT)
    .args(["search", "live music tonight"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("index"));
}

#[test]
fn test_unreachable_summarization_service_names_the_stage() {
  fete_configured()
    .env("FETE_OPENAI_API_BASE", DEAD_ENDPOINT)
    .args(["summarize", "A hands-on Rust workshop for beginners."])
    .assert()
    .failure()
    .stderr(predicate::str::contains("summarization"));
}

#[test]
fn test_search_requires_a_query_argument() {
  fete().arg("search").assert().failure();
}
