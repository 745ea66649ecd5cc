//! # Output Formatting
//!
//! Colored diagnostics for the terminal. Everything here writes to stderr;
//! stdout carries the API response body and nothing else.

use owo_colors::OwoColorize;

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print the body the host sent back with a failure, if there was one
pub fn print_response_body(body: &str) {
  if body.trim().is_empty() {
    return;
  }
  eprintln!("{} {}", "response:".dimmed(), body);
}
