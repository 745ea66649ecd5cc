//! The normalize, build and submit steps of one report.

use check_run_core::{CheckRun, RepoSlug, RunConfig, Submission, build, is_known_conclusion, normalize};
use tracing::{info, warn};

use crate::failure::Failure;

/// A check run ready to be submitted to its repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
  pub repository: RepoSlug,
  pub run: CheckRun,
}

/// Resolve the event identity and project the check run for it
pub fn prepare(config: &RunConfig) -> Result<Report, Failure> {
  let identity = normalize(&config.event)?;
  let run = build(&identity, config.params.clone());

  if let Some(conclusion) = run.conclusion()
    && !is_known_conclusion(conclusion)
  {
    warn!(conclusion, "Conclusion is not one GitHub documents; sending it anyway");
  }

  Ok(Report {
    repository: identity.repository,
    run,
  })
}

/// Hand the report to `submitter` and return the response body
pub async fn send<S: Submission>(submitter: &S, report: &Report) -> Result<String, Failure> {
  info!(
    repository = %report.repository,
    head_sha = %report.run.head_sha,
    status = report.run.status().as_str(),
    "Submitting check run"
  );
  Ok(submitter.submit(&report.repository, &report.run).await?)
}
