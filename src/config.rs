//! Store configuration.
//!
//! The storage location is an explicit value handed to the store rather than
//! a process-wide global. Environment lookups happen only in
//! [`StoreConfig::from_env`].

use std::path::PathBuf;

/// Environment variable overriding the store path.
pub const PATH_ENV_VAR: &str = "CREDKEEP_PATH";

/// Environment variable silencing status output (`1` or `true`).
pub const SILENT_ENV_VAR: &str = "CREDKEEP_SILENT";

/// Environment variable enabling strict restores (`1` or `true`).
pub const STRICT_ENV_VAR: &str = "CREDKEEP_STRICT";

/// Configuration for a [`CredentialStore`](crate::auth::CredentialStore).
///
/// # Example
///
/// ```
/// use credkeep::config::StoreConfig;
///
/// let config = StoreConfig::default()
///     .with_path_override("/tmp/creds.m")
///     .with_silent(true);
/// assert!(config.silent);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    /// Explicit store path. `None` means `~/.credkeep/creds.m`.
    pub path_override: Option<PathBuf>,
    /// Suppress human-readable status lines.
    pub silent: bool,
    /// Treat missing, corrupted or incomplete stores as hard failures.
    pub strict: bool,
}

impl StoreConfig {
    /// Create a new StoreConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from `CREDKEEP_*` environment variables.
    pub fn from_env() -> Self {
        let path_override = std::env::var_os(PATH_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            path_override,
            silent: env_flag(SILENT_ENV_VAR),
            strict: env_flag(STRICT_ENV_VAR),
        }
    }

    /// Set an explicit store path.
    pub fn with_path_override(mut self, path: impl Into<PathBuf>) -> Self {
        self.path_override = Some(path.into());
        self
    }

    /// Set whether status output is suppressed.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Set whether restores are strict.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
