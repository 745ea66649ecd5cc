//! # GitHub HTTP Client
//!
//! HTTP client for the GitHub REST API, authenticated with the installation
//! token that arrives with each webhook delivery.

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::consts::{API_BASE_URL, ENTERPRISE_API_PATH, USER_AGENT};

/// Errors raised while setting up the client
#[derive(Debug, Error)]
pub enum ChannelError {
  #[error("installation token missing from payload")]
  MissingToken,
  #[error("invalid GitHub base URL '{url}': {source}")]
  InvalidBaseUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },
  #[error("GitHub base URL '{0}' must use http or https")]
  UnsupportedScheme(String),
  #[error("failed to build HTTP client: {0}")]
  Client(#[source] reqwest::Error),
}

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) token: String,
}

impl std::fmt::Debug for GitHubClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("GitHubClient")
      .field("base_url", &self.base_url)
      .finish_non_exhaustive()
  }
}

impl GitHubClient {
  /// Create a client that authenticates with an installation token.
  ///
  /// `base_url` selects a GitHub Enterprise instance; `None` targets
  /// github.com.
  pub fn from_installation_token(base_url: Option<&str>, token: &str) -> Result<Self, ChannelError> {
    if token.is_empty() {
      return Err(ChannelError::MissingToken);
    }

    let base_url = match base_url {
      Some(url) => enterprise_api_url(url)?,
      None => API_BASE_URL.to_string(),
    };

    let client = Client::builder()
      .user_agent(USER_AGENT)
      .build()
      .map_err(ChannelError::Client)?;

    Ok(Self {
      client,
      base_url,
      token: token.to_string(),
    })
  }

  /// The API root requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

/// Normalize an enterprise URL to its REST API root, appending `api/v3/` when
/// the caller passed the bare host
fn enterprise_api_url(raw: &str) -> Result<String, ChannelError> {
  let mut url = Url::parse(raw).map_err(|source| ChannelError::InvalidBaseUrl {
    url: raw.to_string(),
    source,
  })?;

  if !matches!(url.scheme(), "http" | "https") {
    return Err(ChannelError::UnsupportedScheme(raw.to_string()));
  }

  if !url.path().ends_with('/') {
    let path = format!("{}/", url.path());
    url.set_path(&path);
  }
  if !url.path().ends_with(ENTERPRISE_API_PATH) {
    let path = format!("{}{}", url.path(), ENTERPRISE_API_PATH);
    url.set_path(&path);
  }

  Ok(url.as_str().trim_end_matches('/').to_string())
}
