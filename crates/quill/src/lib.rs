//! Terminal status and logging helpers.
//!
//! Everything goes to stderr so command output on stdout stays pipeable.
//! Levels: `info()`, `warn()`, `fail()`, `done()`, `dbug()`. Progress
//! reporting for multi-stage work: `step()`. Timestamped one-liners:
//! `event()`. Section headers: `headline()`.

use chrono::Local;
use colored::*;

/// Write a message to stderr, one line at a time
pub fn log(message: &str) {
  for line in message.lines() {
    eprintln!("{line}");
  }
}

/// Format a colored, bracketed level prefix
fn prefix(color: Color, label: &str) -> String {
  format!("[{}]", label.color(color).bold())
}

/// General information
pub fn info(message: &str) {
  let tag = prefix(Color::Blue, "info");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Something needs attention but work continues
pub fn warn(message: &str) {
  let tag = prefix(Color::Yellow, "warn");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Something went wrong
pub fn fail(message: &str) {
  let tag = prefix(Color::Red, "fail");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Something completed successfully
pub fn done(message: &str) {
  let tag = prefix(Color::Green, "done");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Detailed diagnostic output
pub fn dbug(message: &str) {
  let tag = prefix(Color::Magenta, "dbug");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Announce one stage of a multi-stage operation
pub fn step(message: &str) {
  let tag = prefix(Color::Cyan, "step");
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// Timestamped event line, for completion records
pub fn event(message: &str) {
  let timestamp = Local::now().format("%H:%M:%S").to_string();
  let tag = format!("[{}] [{}]", "event".blue().bold(), timestamp.cyan());
  for line in message.lines() {
    log(&format!("{tag} {line}"));
  }
}

/// A horizontal rule of the given width
pub fn rule(width: usize) -> String {
  "=".repeat(width)
}

/// Display a message between two horizontal rules
pub fn headline(message: &str) {
  let width = message.lines().map(str::len).max().unwrap_or(0).max(40);
  let bar = rule(width);

  log(&bar);
  log(message);
  log(&bar);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rule_width() {
    assert_eq!(rule(4), "====");
    assert_eq!(rule(0), "");
  }

  #[test]
  fn test_prefix_contains_label() {
    let tag = prefix(Color::Blue, "info");
    assert!(tag.contains("info"));
    assert!(tag.starts_with('['));
    assert!(tag.ends_with(']'));
  }

  #[test]
  fn test_log_functions_accept_multiline() {
    // Smoke coverage: none of these should panic on multi-line input
    info("line one\nline two");
    warn("line one\nline two");
    fail("line one\nline two");
    done("line one\nline two");
    dbug("line one\nline two");
    step("line one\nline two");
    event("line one\nline two");
    headline("short");
  }
}
