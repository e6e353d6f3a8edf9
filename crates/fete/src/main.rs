use anyhow::Result;
use clap::{Parser, Subcommand};
use fete::cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fete")]
#[command(
  about = "Fete - Semantic Event Search\nIntent-aware discovery over a hosted event index"
)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Search for events matching a free-text description
  Search {
    /// What you're looking for (e.g. 'tech workshops in Boston')
    #[arg(required = true)]
    query: Vec<String>,
    /// Print results and exit without the summarize prompt
    #[arg(long)]
    no_interact: bool,
  },
  /// Summarize an event description in 2-3 sentences
  Summarize {
    /// The event description text
    description: String,
  },
}

async fn handle(command: Command) -> Result<()> {
  match command {
    Command::Search { query, no_interact } => commands::search(&query.join(" "), no_interact).await,
    Command::Summarize { description } => commands::summarize(&description).await,
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  handle(cli.command).await
}
