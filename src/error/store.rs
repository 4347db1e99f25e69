//! Errors raised by the credential store.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;
use super::system::SystemError;

/// Failure conditions of [`CredentialStore`](crate::auth::CredentialStore).
///
/// Lenient restores turn the first three variants into a reported
/// [`RestoreOutcome`](crate::auth::RestoreOutcome) instead of returning them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The resolved path has no file.
    #[error("no stored session at '{}'", .path.display())]
    NoStoredSession { path: PathBuf },

    /// The file exists but could not be decoded.
    #[error("stored credentials at '{}' are corrupted: {reason}", .path.display())]
    CorruptedStore { path: PathBuf, reason: String },

    /// Decoding worked but required fields are empty.
    #[error("stored session is incomplete (missing: {})", .missing.join(", "))]
    IncompleteSession { missing: Vec<&'static str> },

    /// Writing the store failed.
    #[error("failed to write credentials to '{}': {source}", .path.display())]
    StorageWriteFailed {
        path: PathBuf,
        #[source]
        source: SystemError,
    },

    /// No explicit path was given and the home directory is unknown.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// The directory holding the store could not be created.
    #[error("failed to create directory '{}': {message}", .path.display())]
    DirectoryCreationFailed { path: PathBuf, message: String },
}

impl StoreError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StoreError::NoStoredSession { .. } | StoreError::IncompleteSession { .. } => {
                ErrorCategory::Auth
            }
            StoreError::CorruptedStore { .. } => ErrorCategory::Storage,
            StoreError::StorageWriteFailed { .. } | StoreError::DirectoryCreationFailed { .. } => {
                ErrorCategory::System
            }
            StoreError::NoHomeDirectory => ErrorCategory::Configuration,
        }
    }

    /// Whether an interactive caller can carry on by logging in afresh.
    pub fn is_recoverable(&self) -> bool {
        self.category().suggests_login()
    }

    /// Whether the failure means no usable session exists.
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            StoreError::NoStoredSession { .. }
                | StoreError::CorruptedStore { .. }
                | StoreError::IncompleteSession { .. }
        )
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NoStoredSession { .. } => "E_STORE_NO_SESSION",
            StoreError::CorruptedStore { .. } => "E_STORE_CORRUPTED",
            StoreError::IncompleteSession { .. } => "E_STORE_INCOMPLETE",
            StoreError::StorageWriteFailed { source, .. } => source.error_code(),
            StoreError::NoHomeDirectory => "E_SYS_NO_HOME",
            StoreError::DirectoryCreationFailed { .. } => "E_SYS_DIR_CREATE",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StoreError::NoStoredSession { .. } => "No stored credentials found".to_string(),
            StoreError::CorruptedStore { .. } => "Stored credentials are corrupted".to_string(),
            StoreError::IncompleteSession { missing } => {
                format!("Stored credentials are incomplete (missing {})", missing.join(", "))
            }
            StoreError::StorageWriteFailed { source, .. } => source.user_message(),
            StoreError::NoHomeDirectory => {
                "Could not determine your home directory. Please check your environment configuration.".to_string()
            }
            StoreError::DirectoryCreationFailed { path, .. } => {
                format!(
                    "Failed to create directory: '{}'.\nPlease check permissions and try again.",
                    path.display()
                )
            }
        }
    }

    /// Get a suggested recovery action.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
