//! Constants shared by the check-run crates

/// Environment variable holding the webhook envelope JSON
pub const ENV_PAYLOAD: &str = "CHECK_PAYLOAD";
pub const ENV_NAME: &str = "CHECK_NAME";
pub const ENV_TITLE: &str = "CHECK_TITLE";
pub const ENV_SUMMARY: &str = "CHECK_SUMMARY";
pub const ENV_TEXT: &str = "CHECK_TEXT";
/// Overrides the location of the output text fallback file
pub const ENV_TEXT_FILE: &str = "CHECK_TEXT_FILE";
pub const ENV_CONCLUSION: &str = "CHECK_CONCLUSION";
pub const ENV_DETAILS_URL: &str = "CHECK_DETAILS_URL";
pub const ENV_EXTERNAL_ID: &str = "CHECK_EXTERNAL_ID";
pub const ENV_STARTED_AT: &str = "CHECK_STARTED_AT";
/// JSON-encoded list of follow-up actions
pub const ENV_ACTIONS: &str = "CHECK_ACTIONS";
/// GitHub Enterprise API base URL
pub const ENV_GITHUB_BASE_URL: &str = "GITHUB_BASE_URL";
/// Log verbosity (0-3) used when no `-v` flag is given
pub const ENV_VERBOSITY: &str = "CHECK_RUN_VERBOSITY";

/// Check-run name used when `CHECK_NAME` is unset
pub const DEFAULT_NAME: &str = "Brigade";

/// Output title used when `CHECK_TITLE` is unset
pub const DEFAULT_TITLE: &str = "Running Check";

/// File read for the output text when `CHECK_TEXT` is unset
pub const DEFAULT_TEXT_FILE: &str = "/check-run/text";

/// Timestamp layout accepted by the checks API (ISO 8601, UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
