//! Error category classification for credential store errors.
//!
//! Categories drive the two decisions callers make after a failure:
//! whether to fall back to a fresh login, and what to tell the user.

use std::fmt;

/// High-level categorization of store errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// No usable session exists (missing or incomplete credentials).
    /// Resolved by logging in again.
    Auth,

    /// The stored file exists but could not be understood.
    Storage,

    /// Filesystem or OS errors (permissions, disk space).
    System,

    /// The environment does not allow a store path to be resolved.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if a fresh login is the expected way out.
    pub fn suggests_login(&self) -> bool {
        matches!(self, ErrorCategory::Auth | ErrorCategory::Storage)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "auth",
            ErrorCategory::Storage => "storage",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Auth => "Log in again to capture a fresh session",
            ErrorCategory::Storage => {
                "Delete the stored credentials file and log in again"
            }
            ErrorCategory::System => "Check file permissions and available disk space",
            ErrorCategory::Configuration => {
                "Pass an explicit credentials path or set CREDKEEP_PATH"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
