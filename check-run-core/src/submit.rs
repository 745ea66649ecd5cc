//! Contract for the channel that delivers a check run to the host.

use std::future::Future;

use thiserror::Error;

use crate::check_run::CheckRun;
use crate::event::RepoSlug;

/// Errors returned by a [`Submission`]
#[derive(Debug, Error)]
pub enum SubmissionError {
  #[error("failed to send check run: {source}")]
  Transport {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
  #[error(
    "check run rejected with HTTP {status}{}",
    .body_error.as_ref().map(|e| format!(" (response body unreadable: {e})")).unwrap_or_default()
  )]
  Rejected {
    status: u16,
    body: String,
    /// Set when the body could not be read in full
    body_error: Option<String>,
  },
}

impl SubmissionError {
  pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    SubmissionError::Transport { source: source.into() }
  }

  /// Whatever part of the response body was received before the failure
  pub fn body(&self) -> &str {
    match self {
      SubmissionError::Transport { .. } => "",
      SubmissionError::Rejected { body, .. } => body,
    }
  }
}

/// Something that can create a check run in a repository
///
/// Implementations perform exactly one create request per call and return the
/// raw response body on success.
pub trait Submission {
  fn submit(
    &self,
    repository: &RepoSlug,
    run: &CheckRun,
  ) -> impl Future<Output = Result<String, SubmissionError>> + Send;
}
