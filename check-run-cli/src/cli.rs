use clap::{ArgAction, Parser};

/// CLI for the check-run reporter.
#[derive(Parser, Debug)]
#[command(
  name = "check-run",
  about = "Report a CI job's status to GitHub as a check run",
  version,
  after_help = "Configuration is read from the environment: CHECK_PAYLOAD (required), CHECK_NAME, CHECK_TITLE, \
                CHECK_SUMMARY, CHECK_TEXT (or CHECK_TEXT_FILE), CHECK_CONCLUSION, CHECK_DETAILS_URL, \
                CHECK_EXTERNAL_ID, CHECK_STARTED_AT, CHECK_ACTIONS and GITHUB_BASE_URL."
)]
pub struct Cli {
  /// Print the check run that would be created instead of sending it.
  #[arg(long, short = 'n')]
  pub dry_run: bool,

  /// Increase log verbosity (fallback for CHECK_RUN_VERBOSITY).
  #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
  pub verbose: u8,
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_parse_flags() {
    let cli = Cli::parse_from(["check-run", "-vv", "--dry-run"]);

    assert!(cli.dry_run);
    assert_eq!(cli.verbose, 2);
  }
}
