//! Constants for the check-run-gh client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com";

/// Path GitHub Enterprise serves its REST API under
pub const ENTERPRISE_API_PATH: &str = "api/v3/";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header that opts into the checks API preview
pub const ACCEPT_CHECKS_PREVIEW: &str = "application/vnd.github.antiope-preview+json";
