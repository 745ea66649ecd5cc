//! # check-run CLI
//!
//! Composition root for the `check-run` binary: argument parsing, the
//! normalize/build/submit pipeline and the mapping from failures to exit
//! codes.

pub mod cli;
pub mod dry_run;
pub mod failure;
pub mod pipeline;

pub use cli::Cli;
pub use dry_run::DryRun;
pub use failure::Failure;
pub use pipeline::{Report, prepare, send};
