//! Filesystem error classification.
//!
//! Raw `std::io::Error`s carry little context. The store wraps them in a
//! [`SystemError`] naming the path and operation so the CLI can print
//! something actionable.

use std::fmt;
use std::path::PathBuf;

/// Filesystem failures observed while reading or writing the store.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemError {
    /// File not found.
    FileNotFound { path: PathBuf },

    /// Permission denied for file/directory operation.
    PermissionDenied { path: PathBuf, operation: String },

    /// No space left on the device holding the store.
    InsufficientDiskSpace { path: PathBuf },

    /// Disk quota exceeded.
    QuotaExceeded { path: PathBuf },

    /// Generic I/O error.
    IoError {
        operation: String,
        path: Option<PathBuf>,
        message: String,
    },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                format!(
                    "Permission denied: Cannot {} '{}'.\nCheck the file permissions of the credentials directory.",
                    operation,
                    path.display()
                )
            }
            SystemError::InsufficientDiskSpace { path } => {
                format!(
                    "Not enough disk space at '{}'.\nPlease free up some disk space and try again.",
                    path.display()
                )
            }
            SystemError::QuotaExceeded { path } => {
                format!("Disk quota exceeded at '{}'.", path.display())
            }
            SystemError::IoError {
                operation, path, ..
            } => match path {
                Some(p) => format!("Failed to {} '{}'", operation, p.display()),
                None => format!("Failed to {}", operation),
            },
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::InsufficientDiskSpace { .. } => "E_SYS_DISK_SPACE",
            SystemError::QuotaExceeded { .. } => "E_SYS_QUOTA",
            SystemError::IoError { .. } => "E_SYS_IO",
        }
    }
}

impl fmt::Display for SystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SystemError::FileNotFound { path } => {
                write!(f, "File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied: {} '{}'", operation, path.display())
            }
            SystemError::InsufficientDiskSpace { path } => {
                write!(f, "Insufficient disk space at '{}'", path.display())
            }
            SystemError::QuotaExceeded { path } => {
                write!(f, "Disk quota exceeded at '{}'", path.display())
            }
            SystemError::IoError {
                operation,
                path,
                message,
            } => match path {
                Some(p) => write!(
                    f,
                    "I/O error during {} at '{}': {}",
                    operation,
                    p.display(),
                    message
                ),
                None => write!(f, "I/O error during {}: {}", operation, message),
            },
        }
    }
}

impl std::error::Error for SystemError {}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(
    err: std::io::Error,
    path: Option<PathBuf>,
    operation: &str,
) -> SystemError {
    use std::io::ErrorKind;

    let generic = |path: Option<PathBuf>, message: String| SystemError::IoError {
        operation: operation.to_string(),
        path,
        message,
    };

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        (_, Some(path)) if is_disk_space_error(&err) => {
            SystemError::InsufficientDiskSpace { path }
        }
        (_, Some(path)) if is_quota_error(&err) => SystemError::QuotaExceeded { path },
        (_, path) => generic(path, err.to_string()),
    }
}

fn is_disk_space_error(err: &std::io::Error) -> bool {
    #[cfg(unix)]
    {
        // ENOSPC
        err.raw_os_error() == Some(28)
    }
    #[cfg(not(unix))]
    {
        let msg = err.to_string().to_lowercase();
        msg.contains("no space") || msg.contains("disk full")
    }
}

fn is_quota_error(err: &std::io::Error) -> bool {
    #[cfg(unix)]
    {
        // EDQUOT is 122 on Linux, 69 on macOS
        let raw = err.raw_os_error();
        raw == Some(122) || raw == Some(69)
    }
    #[cfg(not(unix))]
    {
        err.to_string().to_lowercase().contains("quota")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_message() {
        let err = SystemError::PermissionDenied {
            path: PathBuf::from("/root/.credkeep/creds.m"),
            operation: "write".to_string(),
        };
        assert_eq!(err.error_code(), "E_SYS_PERM");
        assert!(err.user_message().contains("Permission denied"));
        assert!(err.user_message().contains("write"));
    }

    #[test]
    fn test_io_error_without_path() {
        let err = SystemError::IoError {
            operation: "rename".to_string(),
            path: None,
            message: "cross-device link".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("rename"));
        assert!(!display.contains("at '"));
    }

    #[test]
    fn test_classify_io_error_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = classify_io_error(io_err, Some(PathBuf::from("/tmp/creds.m")), "read");
        assert!(matches!(err, SystemError::FileNotFound { .. }));
    }

    #[test]
    fn test_classify_io_error_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = classify_io_error(io_err, Some(PathBuf::from("/root/creds.m")), "write");
        assert_eq!(
            err,
            SystemError::PermissionDenied {
                path: PathBuf::from("/root/creds.m"),
                operation: "write".to_string(),
            }
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_io_error_disk_full() {
        let io_err = std::io::Error::from_raw_os_error(28);
        let err = classify_io_error(io_err, Some(PathBuf::from("/tmp/creds.m")), "write");
        assert!(matches!(err, SystemError::InsufficientDiskSpace { .. }));
    }

    #[test]
    fn test_classify_io_error_other() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "unknown error");
        let err = classify_io_error(io_err, None, "write");
        assert!(matches!(err, SystemError::IoError { .. }));
    }
}
