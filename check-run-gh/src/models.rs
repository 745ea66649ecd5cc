use serde::Deserialize;

/// The parts of a created check run worth logging
#[derive(Debug, Deserialize)]
pub struct CreatedCheckRun {
  pub id: u64,
  pub status: String,
  pub html_url: Option<String>,
}
