//! # check-run Entry Point
//!
//! Reads one webhook delivery and status from the environment and creates the
//! matching check run on GitHub. The response body goes to stdout; diagnostics
//! go to stderr and the exit code tells which step failed.

use std::env;
use std::process::ExitCode;

use check_run_cli::{Cli, DryRun, Failure, pipeline};
use check_run_core::RunConfig;
use check_run_core::consts::ENV_VERBOSITY;
use check_run_core::output::{print_error, print_response_body};
use check_run_gh::GitHubClient;
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(verbose: u8) {
  let verbosity = if verbose > 0 {
    verbose
  } else {
    env::var(ENV_VERBOSITY)
      .ok()
      .and_then(|v| v.parse::<u8>().ok())
      .filter(|level| *level <= 3)
      .unwrap_or(0)
  };

  let level = match verbosity {
    0 => Level::WARN,  // Default: warnings and errors
    1 => Level::INFO,  // -v: info, warnings, and errors
    2 => Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => Level::TRACE, // -vvv or more: trace and everything else
  };

  // stdout is reserved for the response body
  let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
  let filter = EnvFilter::from_default_env().add_directive(level.into());

  tracing_subscriber::registry()
    .with(filter)
    .with(fmt_layer)
    .try_init()
    .ok();

  debug!("Tracing initialized with level: {}", level);
}

fn run(cli: &Cli) -> Result<String, Failure> {
  let config = RunConfig::from_env()?;
  let report = pipeline::prepare(&config)?;

  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .map_err(Failure::Runtime)?;

  if cli.dry_run {
    return rt.block_on(pipeline::send(&DryRun, &report));
  }

  // The payload carries an installation token, so no app-level exchange is
  // needed here
  let client = GitHubClient::from_installation_token(config.github_base_url.as_deref(), &config.token)?;
  rt.block_on(pipeline::send(&client, &report))
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(&cli) {
    Ok(body) => {
      println!("{body}");
      ExitCode::SUCCESS
    }
    Err(failure) => {
      print_error(&failure.to_string());
      if let Some(body) = failure.response_body() {
        print_response_body(body);
      }
      ExitCode::from(failure.exit_code())
    }
  }
}
