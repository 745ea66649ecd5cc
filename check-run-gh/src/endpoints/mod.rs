//! # GitHub API Endpoints
//!
//! Endpoint implementations grouped by GitHub API resource.

pub mod checks;
