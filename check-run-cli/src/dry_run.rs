use check_run_core::{CheckRun, RepoSlug, Submission, SubmissionError};
use tracing::info;

/// Submitter that renders the request body instead of sending it
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRun;

impl Submission for DryRun {
  async fn submit(&self, repository: &RepoSlug, run: &CheckRun) -> Result<String, SubmissionError> {
    info!(%repository, "Dry run, check run not sent");
    serde_json::to_string_pretty(run).map_err(SubmissionError::transport)
  }
}
