//! # GitHub Checks Client
//!
//! Thin GitHub REST client used to create check runs with an installation
//! token. Implements [`check_run_core::Submission`].

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;

// Re-export the client
pub use client::{ChannelError, GitHubClient};
// Re-export models
pub use models::CreatedCheckRun;
