//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! `--interval` without `--watch` is deliberately accepted here and rejected
//! by `ChecksOptions::validate`, so the error is the same for every caller.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// prchecks - show CI status for a single pull request
#[derive(Parser, Debug)]
#[command(name = "prchecks")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit status is 0 when all checks passed, 1 when any check failed or is \
still pending (or on error), and 130 when interrupted.")]
pub struct Cli {
    /// Pull request number, URL or branch (default: the current branch)
    #[arg(value_name = "NUMBER | URL | BRANCH")]
    pub selector: Option<String>,

    /// Watch checks until they finish
    #[arg(long)]
    pub watch: bool,

    /// Refresh interval in seconds when using --watch
    #[arg(short, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Open the web browser to show details about checks
    #[arg(short, long)]
    pub web: bool,

    /// Select another repository
    #[arg(short = 'R', long, value_name = "[HOST/]OWNER/REPO")]
    pub repo: Option<String>,

    /// Read the pull request document from a file ('-' for stdin) instead of running gh
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output newline-delimited JSON events
    #[arg(long, conflicts_with = "web")]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["prchecks"]).unwrap();
        assert_eq!(cli.selector, None);
        assert!(!cli.watch);
        assert_eq!(cli.interval, None);
        assert!(!cli.web);
        assert!(!cli.json);
        assert_eq!(cli.color, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_cli_parse_watch_with_interval() {
        let cli = Cli::try_parse_from(["prchecks", "123", "--watch", "-i", "5"]).unwrap();
        assert_eq!(cli.selector.as_deref(), Some("123"));
        assert!(cli.watch);
        assert_eq!(cli.interval, Some(5));
    }

    #[test]
    fn test_cli_accepts_interval_without_watch() {
        let cli = Cli::try_parse_from(["prchecks", "--interval", "5"]).unwrap();
        assert!(!cli.watch);
        assert_eq!(cli.interval, Some(5));
    }

    #[test]
    fn test_cli_rejects_zero_interval() {
        assert!(Cli::try_parse_from(["prchecks", "--watch", "--interval", "0"]).is_err());
    }

    #[test]
    fn test_cli_parse_repo_and_web() {
        let cli = Cli::try_parse_from(["prchecks", "-R", "OWNER/REPO", "--web", "#7"]).unwrap();
        assert_eq!(cli.repo.as_deref(), Some("OWNER/REPO"));
        assert!(cli.web);
        assert_eq!(cli.selector.as_deref(), Some("#7"));
    }

    #[test]
    fn test_cli_json_conflicts_with_web() {
        assert!(Cli::try_parse_from(["prchecks", "--json", "--web"]).is_err());
    }

    #[test]
    fn test_cli_parse_color_and_verbosity() {
        let cli = Cli::try_parse_from(["prchecks", "--color", "never", "-vv"]).unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_input_stdin() {
        let cli = Cli::try_parse_from(["prchecks", "--input", "-"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("-")));
    }
}
