//! # Check Run Core
//!
//! Turns a webhook delivery into a GitHub check run. The crate normalizes the
//! three supported event shapes into one repository/commit/branch identity,
//! projects the check-run resource for that identity, and defines the
//! submission contract that HTTP clients implement. Nothing here touches the
//! network; the process environment is only read through
//! [`config::RunConfig::from_env`].

pub mod check_run;
pub mod config;
pub mod consts;
pub mod event;
pub mod output;
pub mod submit;

// Re-export the main types
pub use check_run::{Action, CheckRun, Output, RunParams, RunState, RunStatus, build, build_at, is_known_conclusion};
pub use config::{ConfigError, RunConfig};
pub use event::{EventKind, InboundEvent, NormalizeError, RepoSlug, ResourceIdentity, normalize};
pub use submit::{Submission, SubmissionError};
