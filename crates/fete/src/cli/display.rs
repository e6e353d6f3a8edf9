//! Terminal rendering for search results and summaries

use colored::*;
use console::Term;

use crate::event::EventMatch;
use crate::intent::Intent;

const MIN_WRAP_WIDTH: usize = 40;
const MAX_WRAP_WIDTH: usize = 80;

/// Show the intent the model detected in the query
pub fn display_intent(intent: &Intent) {
  if intent.is_blank() {
    println!("{} No particular mood, goal, or situation detected", "🔍".cyan());
    return;
  }

  println!(
    "{} Detected mood: {}, goal: {}, life situation: {}",
    "🔍".cyan(),
    intent.mood.magenta(),
    intent.learning_goal.magenta(),
    intent.life_situation.magenta()
  );
}

/// Render one numbered result card
pub fn display_event_card(position: usize, event: &EventMatch) {
  println!("{} {}", format!("{position}.").green().bold(), event.title().green().bold());
  println!("   📍 {}", event.location().bold());
  println!("   🗓  {}", event.date_time().bold());
  println!("   🔗 {}", event.link().cyan());
  println!("   {} {:.3}", "similarity".dimmed(), event.score);
  println!();
}

/// Render a summary, wrapped to the terminal width
pub fn display_summary(summary: &str) {
  let width = wrap_width();
  for line in wrap_text(summary, width) {
    println!("  {line}");
  }
  println!();
}

/// Notice for a query the index answered with zero matches
pub fn display_no_results(query: &str) {
  println!("{} No events found matching your query: {}", "⚡".yellow(), query.yellow());
}

fn wrap_width() -> usize {
  let (_rows, cols) = Term::stdout().size();
  (cols as usize).saturating_sub(4).clamp(MIN_WRAP_WIDTH, MAX_WRAP_WIDTH)
}

/// Wrap text to fit within a specified width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();

  for paragraph in text.split('\n') {
    if paragraph.trim().is_empty() {
      lines.push(String::new());
      continue;
    }

    let words: Vec<&str> = paragraph.split_whitespace().collect();
    let mut current_line = String::new();

    for word in words {
      if current_line.is_empty() {
        current_line = word.to_string();
      } else if current_line.len() + 1 + word.len() <= width {
        current_line.push(' ');
        current_line.push_str(word);
      } else {
        lines.push(current_line);
        current_line = word.to_string();
      }
    }

    if !current_line.is_empty() {
      lines.push(current_line);
    }
  }

  lines
}
