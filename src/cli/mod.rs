//! CLI module for credkeep.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - Version display
//! - Session status, store path and clearing
//!
//! ```ignore
//! use credkeep::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! run_cli_command(args)?;
//! ```

pub mod args;
pub mod status;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use status::{handle_clear_command, handle_path_command, handle_status_command};
pub use version::{handle_version_command, VERSION};

use color_eyre::Result;

use crate::config::StoreConfig;

/// Merge command-line options over the environment configuration.
pub fn resolve_config(args: &CliArgs, env: StoreConfig) -> StoreConfig {
    let mut config = env;
    if let Some(path) = &args.creds_path {
        config = config.with_path_override(path.clone());
    }
    if args.strict {
        config = config.with_strict(true);
    }
    if args.quiet {
        config = config.with_silent(true);
    }
    config
}

/// Run a parsed CLI command.
pub fn run_cli_command(args: CliArgs) -> Result<()> {
    let config = resolve_config(&args, StoreConfig::from_env());

    match args.command {
        CliCommand::Version => {
            handle_version_command();
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
        CliCommand::Path => handle_path_command(&config),
        CliCommand::Clear => handle_clear_command(&config),
        CliCommand::Status => handle_status_command(&config).map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_config_cli_wins() {
        let args = CliArgs {
            command: CliCommand::Status,
            creds_path: Some(PathBuf::from("/cli/creds.m")),
            strict: true,
            quiet: false,
        };
        let env = StoreConfig::new().with_path_override("/env/creds.m");

        let config = resolve_config(&args, env);

        assert_eq!(config.path_override, Some(PathBuf::from("/cli/creds.m")));
        assert!(config.strict);
        assert!(!config.silent);
    }

    #[test]
    fn test_resolve_config_keeps_env_flags() {
        let env = StoreConfig::new().with_silent(true).with_strict(true);
        let config = resolve_config(&CliArgs::default(), env.clone());
        assert_eq!(config, env);
    }
}
