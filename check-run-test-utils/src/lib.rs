//! Test utilities shared across the check-run workspace
//!
//! This crate provides:
//! - Webhook payload builders for the supported event types ([`fixtures`])
//! - Scoped environment variable overrides ([`EnvVarGuard`])
//!
//! The dead_code lint is disabled for this crate because test utilities may
//! not be used by all tests, and the compiler cannot detect usage across crate
//! boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

// Re-export commonly used items
pub use env::EnvVarGuard;
