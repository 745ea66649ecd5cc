//! Failures that end an invocation, and the exit code each one maps to.

use check_run_core::{ConfigError, NormalizeError, SubmissionError};
use check_run_gh::ChannelError;
use thiserror::Error;

pub const EXIT_MALFORMED_ACTIONS: u8 = 1;
pub const EXIT_MALFORMED_PAYLOAD: u8 = 2;
pub const EXIT_NORMALIZATION: u8 = 3;
pub const EXIT_INVALID_REPOSITORY: u8 = 4;
pub const EXIT_CHANNEL: u8 = 5;
pub const EXIT_SUBMISSION: u8 = 6;

#[derive(Debug, Error)]
pub enum Failure {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error("error processing data: {0}")]
  Normalize(#[from] NormalizeError),
  #[error("could not create GitHub client: {0}")]
  Channel(#[from] ChannelError),
  #[error("could not start async runtime: {0}")]
  Runtime(#[source] std::io::Error),
  #[error(transparent)]
  Submission(#[from] SubmissionError),
}

impl Failure {
  pub const fn exit_code(&self) -> u8 {
    match self {
      Failure::Config(ConfigError::MalformedActions(_)) => EXIT_MALFORMED_ACTIONS,
      Failure::Config(ConfigError::MalformedPayload(_)) => EXIT_MALFORMED_PAYLOAD,
      Failure::Normalize(NormalizeError::InvalidRepositoryFormat(_)) => EXIT_INVALID_REPOSITORY,
      Failure::Normalize(_) => EXIT_NORMALIZATION,
      Failure::Channel(_) | Failure::Runtime(_) => EXIT_CHANNEL,
      Failure::Submission(_) => EXIT_SUBMISSION,
    }
  }

  /// Body received from the host alongside a submission failure
  pub fn response_body(&self) -> Option<&str> {
    match self {
      Failure::Submission(err) => Some(err.body()).filter(|body| !body.is_empty()),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exit_codes_are_distinct() {
    let failures = [
      Failure::Config(ConfigError::MalformedActions(
        serde_json::from_str::<Vec<u8>>("x").unwrap_err(),
      )),
      Failure::Config(ConfigError::MalformedPayload(
        serde_json::from_str::<Vec<u8>>("x").unwrap_err(),
      )),
      Failure::Normalize(NormalizeError::UnsupportedEventType("push".to_string())),
      Failure::Normalize(NormalizeError::InvalidRepositoryFormat("widget".to_string())),
      Failure::Channel(ChannelError::MissingToken),
      Failure::Submission(SubmissionError::Rejected {
        status: 422,
        body: "{}".to_string(),
        body_error: None,
      }),
    ];

    let codes: Vec<u8> = failures.iter().map(Failure::exit_code).collect();

    assert_eq!(codes, vec![1, 2, 3, 4, 5, 6]);
  }

  #[test]
  fn test_response_body_only_for_submission_failures() {
    let rejected = Failure::Submission(SubmissionError::Rejected {
      status: 422,
      body: "{\"message\":\"Validation Failed\"}".to_string(),
      body_error: None,
    });
    assert_eq!(rejected.response_body(), Some("{\"message\":\"Validation Failed\"}"));

    let transport = Failure::Submission(SubmissionError::transport("connection reset"));
    assert_eq!(transport.response_body(), None);

    let channel = Failure::Channel(ChannelError::MissingToken);
    assert_eq!(channel.response_body(), None);
  }

  #[test]
  fn test_normalize_message() {
    let failure = Failure::from(NormalizeError::UnsupportedEventType("push".to_string()));

    assert_eq!(failure.to_string(), "error processing data: unknown payload type push");
  }
}
