//! # Webhook Event Normalization
//!
//! Maps the webhook shapes that can trigger a check run onto a single
//! repository/commit/branch identity. Each recognized event type reads the
//! identity from its own field paths; `issue_comment` deliveries carry no
//! commit data, so the caller has to supply it alongside the event.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

/// One webhook delivery as handed over by the webhook gateway
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
  /// Event type tag, e.g. `check_suite`
  pub event_type: String,
  /// Raw event body; its shape depends on `event_type`
  pub body: serde_json::Value,
  /// Commit supplied out of band for events without commit data
  pub override_commit: Option<String>,
  /// Branch supplied out of band for events without branch data
  pub override_branch: Option<String>,
}

impl InboundEvent {
  /// Create an event without overrides
  pub fn new(event_type: impl Into<String>, body: serde_json::Value) -> Self {
    Self {
      event_type: event_type.into(),
      body,
      override_commit: None,
      override_branch: None,
    }
  }

  /// Attach the out-of-band commit and branch
  pub fn with_overrides(mut self, commit: impl Into<String>, branch: impl Into<String>) -> Self {
    self.override_commit = Some(commit.into());
    self.override_branch = Some(branch.into());
    self
  }
}

/// Event types that can trigger a check run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
  CheckRun,
  CheckSuite,
  IssueComment,
}

impl EventKind {
  pub const fn as_str(self) -> &'static str {
    match self {
      EventKind::CheckRun => "check_run",
      EventKind::CheckSuite => "check_suite",
      EventKind::IssueComment => "issue_comment",
    }
  }
}

impl fmt::Display for EventKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for EventKind {
  type Err = NormalizeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "check_run" => Ok(EventKind::CheckRun),
      "check_suite" => Ok(EventKind::CheckSuite),
      "issue_comment" => Ok(EventKind::IssueComment),
      other => Err(NormalizeError::UnsupportedEventType(other.to_string())),
    }
  }
}

/// Which override an `issue_comment` event was missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideField {
  Commit,
  Branch,
}

impl fmt::Display for OverrideField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OverrideField::Commit => f.write_str("commit"),
      OverrideField::Branch => f.write_str("branch"),
    }
  }
}

/// Identity field that came out of the event body empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
  HeadSha,
  HeadBranch,
}

impl fmt::Display for IdentityField {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IdentityField::HeadSha => f.write_str("head_sha"),
      IdentityField::HeadBranch => f.write_str("head_branch"),
    }
  }
}

/// Errors that can occur while normalizing an event
#[derive(Debug, Error)]
pub enum NormalizeError {
  #[error("unknown payload type {0}")]
  UnsupportedEventType(String),
  #[error("{kind} body does not match the expected shape: {source}")]
  MalformedBody {
    kind: EventKind,
    #[source]
    source: serde_json::Error,
  },
  #[error("{0} empty: issue_comment events need the {0} supplied with the payload")]
  MissingOverride(OverrideField),
  #[error("repository full name must look like 'owner/name', got '{0}'")]
  InvalidRepositoryFormat(String),
  #[error("{0} missing from the event body")]
  MissingField(IdentityField),
}

/// A repository split into owner and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
  pub owner: String,
  pub name: String,
}

impl RepoSlug {
  /// Parse `owner/name`; anything but exactly two non-empty segments is
  /// rejected
  pub fn parse(full_name: &str) -> Result<Self, NormalizeError> {
    let invalid = || NormalizeError::InvalidRepositoryFormat(full_name.to_string());
    let mut parts = full_name.split('/');
    match (parts.next(), parts.next(), parts.next()) {
      (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => Ok(Self {
        owner: owner.to_string(),
        name: name.to_string(),
      }),
      _ => Err(invalid()),
    }
  }

  pub fn full_name(&self) -> String {
    format!("{}/{}", self.owner, self.name)
  }
}

impl fmt::Display for RepoSlug {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}", self.owner, self.name)
  }
}

/// The commit a check run is reported against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdentity {
  pub repository: RepoSlug,
  pub commit_sha: String,
  pub branch: String,
}

#[derive(Default, Deserialize)]
struct RepositoryRef {
  #[serde(default)]
  full_name: Option<String>,
}

impl RepositoryRef {
  fn full_name(&self) -> &str {
    self.full_name.as_deref().unwrap_or_default()
  }
}

#[derive(Deserialize)]
struct CheckSuiteRef {
  head_sha: Option<String>,
  head_branch: Option<String>,
}

#[derive(Deserialize)]
struct CheckRunRef {
  check_suite: CheckSuiteRef,
}

#[derive(Deserialize)]
struct CheckRunEventBody {
  #[serde(default)]
  repository: RepositoryRef,
  check_run: CheckRunRef,
}

#[derive(Deserialize)]
struct CheckSuiteEventBody {
  #[serde(default)]
  repository: RepositoryRef,
  check_suite: CheckSuiteRef,
}

#[derive(Deserialize)]
struct IssueCommentEventBody {
  #[serde(default)]
  repository: RepositoryRef,
}

fn decode<T: DeserializeOwned>(kind: EventKind, body: &serde_json::Value) -> Result<T, NormalizeError> {
  T::deserialize(body).map_err(|source| NormalizeError::MalformedBody { kind, source })
}

fn override_value(value: Option<&String>, field: OverrideField) -> Result<String, NormalizeError> {
  match value {
    Some(v) if !v.is_empty() => Ok(v.clone()),
    _ => Err(NormalizeError::MissingOverride(field)),
  }
}

fn non_empty(value: Option<String>, field: IdentityField) -> Result<String, NormalizeError> {
  value
    .filter(|v| !v.is_empty())
    .ok_or(NormalizeError::MissingField(field))
}

/// Resolve the repository, commit and branch a check run belongs to
#[instrument(skip_all, fields(event_type = %event.event_type), level = "debug")]
pub fn normalize(event: &InboundEvent) -> Result<ResourceIdentity, NormalizeError> {
  let kind: EventKind = event.event_type.parse()?;

  let (repository, commit, branch) = match kind {
    EventKind::CheckRun => {
      let body: CheckRunEventBody = decode(kind, &event.body)?;
      let suite = body.check_run.check_suite;
      (body.repository, suite.head_sha, suite.head_branch)
    }
    EventKind::CheckSuite => {
      let body: CheckSuiteEventBody = decode(kind, &event.body)?;
      let suite = body.check_suite;
      (body.repository, suite.head_sha, suite.head_branch)
    }
    EventKind::IssueComment => {
      let body: IssueCommentEventBody = decode(kind, &event.body)?;
      let commit = override_value(event.override_commit.as_ref(), OverrideField::Commit)?;
      let branch = override_value(event.override_branch.as_ref(), OverrideField::Branch)?;
      (body.repository, Some(commit), Some(branch))
    }
  };

  let repository = RepoSlug::parse(repository.full_name())?;
  let commit_sha = non_empty(commit, IdentityField::HeadSha)?;
  let branch = non_empty(branch, IdentityField::HeadBranch)?;

  debug!(%repository, %commit_sha, %branch, "Resolved check run identity");

  Ok(ResourceIdentity {
    repository,
    commit_sha,
    branch,
  })
}
