//! # Run Configuration
//!
//! Everything a single report needs, read once from the process environment.
//! The normalizer and builder never look at the environment themselves; they
//! receive the [`RunConfig`] produced here.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::check_run::{Action, RunParams};
use crate::consts::*;
use crate::event::InboundEvent;

/// Errors raised while decoding the environment
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("could not parse actions: {0}")]
  MalformedActions(#[source] serde_json::Error),
  #[error("could not parse payload: {0}")]
  MalformedPayload(#[source] serde_json::Error),
}

/// Envelope the webhook gateway wraps around each delivery
#[derive(Debug, Deserialize)]
struct WebhookPayload {
  #[serde(rename = "type", default)]
  event_type: Option<String>,
  #[serde(default)]
  token: Option<String>,
  #[serde(default)]
  body: serde_json::Value,
  #[serde(default)]
  commit: Option<String>,
  #[serde(default)]
  branch: Option<String>,
}

/// Inputs for one check run report
#[derive(Debug, Clone)]
pub struct RunConfig {
  pub event: InboundEvent,
  /// Installation token carried by the payload
  pub token: String,
  pub params: RunParams,
  /// GitHub Enterprise API base URL, if any
  pub github_base_url: Option<String>,
}

impl RunConfig {
  /// Load the configuration from the process environment
  pub fn from_env() -> Result<Self, ConfigError> {
    let text_file = std::env::var_os(ENV_TEXT_FILE)
      .map(PathBuf::from)
      .unwrap_or_else(|| PathBuf::from(DEFAULT_TEXT_FILE));
    Self::load(|key| std::env::var(key).ok(), &text_file)
  }

  /// Load the configuration from `lookup`, falling back to `text_file` for
  /// the output text
  pub fn load<F>(lookup: F, text_file: &Path) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let var_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    let actions = match non_empty(ENV_ACTIONS) {
      Some(raw) => serde_json::from_str::<Vec<Action>>(&raw).map_err(ConfigError::MalformedActions)?,
      None => Vec::new(),
    };

    let raw_payload = var_or(ENV_PAYLOAD, "");
    let payload: WebhookPayload = serde_json::from_str(&raw_payload).map_err(ConfigError::MalformedPayload)?;

    let text = match lookup(ENV_TEXT) {
      Some(text) => text,
      None => read_text_file(text_file),
    };

    let params = RunParams {
      name: var_or(ENV_NAME, DEFAULT_NAME),
      title: var_or(ENV_TITLE, DEFAULT_TITLE),
      summary: var_or(ENV_SUMMARY, ""),
      text,
      conclusion: non_empty(ENV_CONCLUSION),
      external_id: non_empty(ENV_EXTERNAL_ID),
      details_url: non_empty(ENV_DETAILS_URL),
      started_at: non_empty(ENV_STARTED_AT),
      actions,
    };

    let event_type = payload.event_type.unwrap_or_default();

    debug!(
      event_type = %event_type,
      name = %params.name,
      completed = params.conclusion.is_some(),
      actions = params.actions.len(),
      "Loaded check run configuration"
    );

    Ok(Self {
      event: InboundEvent {
        event_type,
        body: payload.body,
        override_commit: payload.commit,
        override_branch: payload.branch,
      },
      token: payload.token.unwrap_or_default(),
      params,
      github_base_url: non_empty(ENV_GITHUB_BASE_URL),
    })
  }
}

fn read_text_file(path: &Path) -> String {
  match fs::read_to_string(path) {
    Ok(text) => text,
    Err(e) => {
      debug!(path = %path.display(), error = %e, "No output text file");
      String::new()
    }
  }
}
