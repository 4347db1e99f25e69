//! Command-line argument parsing for credkeep.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;

use thiserror::Error;

/// Usage text printed by `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: credkeep [OPTIONS]

Options:
  --status          Restore the stored session and print a summary (default)
  --path            Print the resolved credentials path
  --clear           Delete the stored credentials
  --strict          Fail unless a complete session is stored
  --creds <PATH>    Use PATH instead of ~/.credkeep/creds.m
  -q, --quiet       Suppress status output
  -V, --version     Print version information
  -h, --help        Print this help";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Print the resolved store path
    Path,
    /// Delete the stored credentials
    Clear,
    /// Restore and summarize the stored session (default)
    Status,
}

/// Parsed command plus the options that apply to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// Explicit store path from `--creds`.
    pub creds_path: Option<PathBuf>,
    /// `--strict` was given.
    pub strict: bool,
    /// `--quiet` was given.
    pub quiet: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            command: CliCommand::Status,
            creds_path: None,
            strict: false,
            quiet: false,
        }
    }
}

/// Argument errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Parse command-line arguments.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use credkeep::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["credkeep".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => parsed.command = CliCommand::Version,
            "--help" | "-h" => parsed.command = CliCommand::Help,
            "--path" => parsed.command = CliCommand::Path,
            "--clear" => parsed.command = CliCommand::Clear,
            "--status" => parsed.command = CliCommand::Status,
            "--strict" => parsed.strict = true,
            "--quiet" | "-q" => parsed.quiet = true,
            "--creds" => {
                let value = args
                    .next()
                    .ok_or_else(|| ArgsError::MissingValue(arg.clone()))?;
                parsed.creds_path = Some(PathBuf::from(value));
            }
            other => {
                if let Some(value) = other.strip_prefix("--creds=") {
                    if value.is_empty() {
                        return Err(ArgsError::MissingValue("--creds".to_string()));
                    }
                    parsed.creds_path = Some(PathBuf::from(value));
                } else {
                    return Err(ArgsError::UnknownArgument(other.to_string()));
                }
            }
        }
    }

    Ok(parsed)
}
