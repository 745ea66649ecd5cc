//! # Check Run Projection
//!
//! Builds the check-run resource submitted to GitHub. A run is either in
//! progress or completed; which one is decided per invocation by whether a
//! conclusion was supplied. Reporting the same commit twice, first without
//! and then with a conclusion, moves the run forward on GitHub's side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::consts::TIMESTAMP_FORMAT;
use crate::event::ResourceIdentity;

/// Conclusions GitHub accepts for a completed check run
pub const KNOWN_CONCLUSIONS: &[&str] = &[
  "success",
  "failure",
  "neutral",
  "cancelled",
  "skipped",
  "timed_out",
  "action_required",
  "stale",
];

/// Whether `conclusion` is part of GitHub's conclusion vocabulary
pub fn is_known_conclusion(conclusion: &str) -> bool {
  KNOWN_CONCLUSIONS.contains(&conclusion)
}

/// A follow-up button rendered on the check run page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
  pub label: String,
  pub description: String,
  pub identifier: String,
}

/// Display fields of a check run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Output {
  pub title: String,
  pub summary: String,
  pub text: String,
}

/// Lifecycle state of a check run
///
/// Serialized into the run body as `status`, with `conclusion` and
/// `completed_at` present only once the run has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunState {
  InProgress,
  Completed { conclusion: String, completed_at: String },
}

impl RunState {
  /// The single forward transition: finish the run with `conclusion`
  pub fn complete(self, conclusion: impl Into<String>, completed_at: impl Into<String>) -> Self {
    match self {
      RunState::InProgress => RunState::Completed {
        conclusion: conclusion.into(),
        completed_at: completed_at.into(),
      },
      completed @ RunState::Completed { .. } => completed,
    }
  }

  pub const fn status(&self) -> RunStatus {
    match self {
      RunState::InProgress => RunStatus::InProgress,
      RunState::Completed { .. } => RunStatus::Completed,
    }
  }
}

/// Status value as reported to GitHub
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
  InProgress,
  Completed,
}

impl RunStatus {
  pub const fn as_str(self) -> &'static str {
    match self {
      RunStatus::InProgress => "in_progress",
      RunStatus::Completed => "completed",
    }
  }
}

/// The check-run resource sent to `POST /repos/{owner}/{repo}/check-runs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRun {
  pub name: String,
  pub head_branch: String,
  pub head_sha: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub details_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external_id: Option<String>,
  #[serde(flatten)]
  pub state: RunState,
  pub started_at: String,
  pub output: Output,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub actions: Vec<Action>,
}

impl CheckRun {
  pub const fn status(&self) -> RunStatus {
    self.state.status()
  }

  pub fn conclusion(&self) -> Option<&str> {
    match &self.state {
      RunState::Completed { conclusion, .. } => Some(conclusion),
      RunState::InProgress => None,
    }
  }

  pub fn completed_at(&self) -> Option<&str> {
    match &self.state {
      RunState::Completed { completed_at, .. } => Some(completed_at),
      RunState::InProgress => None,
    }
  }
}

/// Operator-supplied fields for one check run report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunParams {
  pub name: String,
  pub title: String,
  pub summary: String,
  pub text: String,
  /// Presence of a non-empty conclusion completes the run
  pub conclusion: Option<String>,
  pub external_id: Option<String>,
  pub details_url: Option<String>,
  /// Defaults to the build time when absent
  pub started_at: Option<String>,
  pub actions: Vec<Action>,
}

fn timestamp(at: DateTime<Utc>) -> String {
  at.format(TIMESTAMP_FORMAT).to_string()
}

/// Project the check run for `identity`, stamping timestamps with the current
/// time
pub fn build(identity: &ResourceIdentity, params: RunParams) -> CheckRun {
  build_at(identity, params, Utc::now())
}

/// Project the check run for `identity` as of `now`
pub fn build_at(identity: &ResourceIdentity, params: RunParams, now: DateTime<Utc>) -> CheckRun {
  let state = match params.conclusion.filter(|c| !c.is_empty()) {
    Some(conclusion) => RunState::InProgress.complete(conclusion, timestamp(now)),
    None => RunState::InProgress,
  };

  CheckRun {
    name: params.name,
    head_branch: identity.branch.clone(),
    head_sha: identity.commit_sha.clone(),
    details_url: params.details_url,
    external_id: params.external_id,
    state,
    started_at: params
      .started_at
      .filter(|s| !s.is_empty())
      .unwrap_or_else(|| timestamp(now)),
    output: Output {
      title: params.title,
      summary: params.summary,
      text: params.text,
    },
    actions: params.actions,
  }
}
