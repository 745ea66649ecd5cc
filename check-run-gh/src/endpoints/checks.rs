//! # GitHub Check Run Endpoints
//!
//! Creates check runs through the checks API preview.

use check_run_core::{CheckRun, RepoSlug, Submission, SubmissionError};
use tracing::{info, instrument, warn};

use crate::client::GitHubClient;
use crate::consts::ACCEPT_CHECKS_PREVIEW;
use crate::models::CreatedCheckRun;

impl GitHubClient {
  /// Create a check run and return the raw response body.
  ///
  /// A non-success status comes back as [`SubmissionError::Rejected`] with
  /// whatever body GitHub sent, since validation failures are only explained
  /// there.
  #[instrument(skip(self, run), fields(name = %run.name, status = run.status().as_str()), level = "debug")]
  pub async fn create_check_run(&self, owner: &str, repo: &str, run: &CheckRun) -> Result<String, SubmissionError> {
    let url = format!("{}/repos/{}/{}/check-runs", self.base_url, owner, repo);

    let response = self
      .client
      .post(&url)
      .header("Accept", ACCEPT_CHECKS_PREVIEW)
      .bearer_auth(&self.token)
      .json(run)
      .send()
      .await
      .map_err(SubmissionError::transport)?;

    let status = response.status();
    let (body, body_error) = match response.text().await {
      Ok(body) => (body, None),
      Err(e) if status.is_success() => return Err(SubmissionError::transport(e)),
      Err(e) => {
        warn!(error = %e, "Failed to read error response body");
        (String::new(), Some(e.to_string()))
      }
    };

    if !status.is_success() {
      return Err(SubmissionError::Rejected {
        status: status.as_u16(),
        body,
        body_error,
      });
    }

    if let Ok(created) = serde_json::from_str::<CreatedCheckRun>(&body) {
      info!(
        id = created.id,
        status = %created.status,
        url = created.html_url.as_deref().unwrap_or_default(),
        "Created check run"
      );
    }

    Ok(body)
  }
}

impl Submission for GitHubClient {
  async fn submit(&self, repository: &RepoSlug, run: &CheckRun) -> Result<String, SubmissionError> {
    self
      .create_check_run(&repository.owner, &repository.name, run)
      .await
  }
}
