//! Credential store: restore from and persist to disk.
//!
//! The store owns one [`Credentials`] value and the path it is saved at.
//! A login flow fills the credentials through [`CredentialStore::credentials_mut`]
//! and calls [`CredentialStore::persist`]; later runs call
//! [`CredentialStore::restore`] and check [`CredentialStore::is_complete`]
//! before doing anything that needs a session.
//!
//! Restores are all-or-nothing. The in-memory credentials are either
//! replaced wholesale by the decoded file or left exactly as they were.

use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::codec;
use super::credentials::Credentials;
use crate::config::StoreConfig;
use crate::error::{classify_io_error, StoreError, StoreResult, SystemError};
use crate::storage::resolve_store_path;
use crate::traits::{ConsoleReporter, Reporter};

/// How a restore treats missing, corrupted or incomplete stores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Return an error instead of reporting and carrying on.
    pub strict: bool,
    /// Suppress status lines. Tracing output is unaffected.
    pub silent: bool,
}

impl RestoreOptions {
    /// Report problems and continue. Used by interactive flows.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Fail on anything short of a complete session.
    pub fn strict() -> Self {
        Self {
            strict: true,
            silent: false,
        }
    }

    /// Set whether status lines are suppressed.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

impl From<&StoreConfig> for RestoreOptions {
    fn from(config: &StoreConfig) -> Self {
        Self {
            strict: config.strict,
            silent: config.silent,
        }
    }
}

/// Result of a restore that did not fail outright.
///
/// Strict restores only ever return [`RestoreOutcome::Restored`]; every
/// other case is an error for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// A complete session was loaded.
    Restored,
    /// The file decoded but required fields are empty. The data was loaded.
    Incomplete { missing: Vec<&'static str> },
    /// No file exists at the store path. Nothing changed.
    NoStoredSession,
    /// The file could not be decoded. Nothing changed.
    Corrupted { reason: String },
}

impl RestoreOutcome {
    /// Check if a complete session was loaded.
    pub fn is_restored(&self) -> bool {
        matches!(self, RestoreOutcome::Restored)
    }

    /// Check if the in-memory credentials were replaced.
    pub fn replaced_credentials(&self) -> bool {
        matches!(
            self,
            RestoreOutcome::Restored | RestoreOutcome::Incomplete { .. }
        )
    }
}

/// Owns the credentials and their on-disk location.
pub struct CredentialStore {
    path: PathBuf,
    credentials: Credentials,
    reporter: Box<dyn Reporter>,
}

impl CredentialStore {
    /// Create a store for the configured path with empty credentials.
    ///
    /// When no path override is configured this creates `~/.credkeep` if
    /// needed. No other I/O happens.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let path = resolve_store_path(config.path_override.clone())?;
        tracing::debug!("Credential store path: {:?}", path);
        Ok(Self::at_path(path))
    }

    /// Create a store for an already resolved path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            credentials: Credentials::default(),
            reporter: Box::new(ConsoleReporter),
        }
    }

    /// Replace the status line sink.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// Get the path to the credentials file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a credentials file exists at the store path.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// The in-memory credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Mutable access for login flows populating a fresh session.
    pub fn credentials_mut(&mut self) -> &mut Credentials {
        &mut self.credentials
    }

    /// Swap in a whole credential set, returning the previous one.
    pub fn replace_credentials(&mut self, credentials: Credentials) -> Credentials {
        std::mem::replace(&mut self.credentials, credentials)
    }

    /// Check if cookies, service session ids and the master token are all present.
    pub fn is_complete(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Load the stored session into memory.
    ///
    /// Lenient restores report a missing, corrupted or incomplete store and
    /// return the matching [`RestoreOutcome`]; an incomplete session is still
    /// loaded, so callers must check [`CredentialStore::is_complete`]
    /// themselves. Strict restores return the corresponding [`StoreError`]
    /// and leave the in-memory credentials untouched.
    pub fn restore(&mut self, options: RestoreOptions) -> StoreResult<RestoreOutcome> {
        let loaded = match self.read_stored() {
            Ok(credentials) => credentials,
            Err(err) => return self.handle_restore_failure(err, options),
        };

        let missing = loaded.missing_fields();
        if !missing.is_empty() && options.strict {
            tracing::warn!(
                "Stored session at {:?} is incomplete (missing: {})",
                self.path,
                missing.join(", ")
            );
            return Err(StoreError::IncompleteSession { missing });
        }

        self.credentials = loaded;

        if missing.is_empty() {
            tracing::info!("Restored credentials from {:?}", self.path);
            if !options.silent {
                self.reporter.success("Authenticated !");
            }
            return Ok(RestoreOutcome::Restored);
        }

        tracing::info!(
            "Loaded incomplete session from {:?} (missing: {})",
            self.path,
            missing.join(", ")
        );
        if !options.silent {
            self.reporter.warning(&format!(
                "Stored credentials are incomplete (missing {})",
                missing.join(", ")
            ));
        }
        Ok(RestoreOutcome::Incomplete { missing })
    }

    /// Write the in-memory credentials, replacing any stored file.
    ///
    /// The blob is written to a sibling temporary file and renamed over the
    /// target, so a crash never leaves a truncated store behind. Returns the
    /// path written to.
    pub fn persist(&self, silent: bool) -> StoreResult<PathBuf> {
        let blob = codec::encode(&self.credentials).map_err(|e| StoreError::StorageWriteFailed {
            path: self.path.clone(),
            source: SystemError::IoError {
                operation: "encode credentials".to_string(),
                path: None,
                message: e.to_string(),
            },
        })?;

        write_replacing(&self.path, &blob).map_err(|source| {
            tracing::warn!("Failed to persist credentials: {}", source);
            StoreError::StorageWriteFailed {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!("Persisted credentials to {:?}", self.path);
        if !silent {
            self.reporter.success(&format!(
                "Credentials have been saved in {} !",
                self.path.display()
            ));
        }
        Ok(self.path.clone())
    }

    /// Delete the stored file and empty the in-memory credentials.
    ///
    /// Returns `true` if a file was removed, `false` if there was none.
    pub fn clear(&mut self) -> StoreResult<bool> {
        let removed = match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                return Err(StoreError::StorageWriteFailed {
                    path: self.path.clone(),
                    source: classify_io_error(e, Some(self.path.clone()), "remove"),
                })
            }
        };

        if removed {
            tracing::info!("Removed stored credentials at {:?}", self.path);
        }
        self.credentials = Credentials::default();
        Ok(removed)
    }

    fn read_stored(&self) -> StoreResult<Credentials> {
        if !self.path.is_file() {
            return Err(StoreError::NoStoredSession {
                path: self.path.clone(),
            });
        }

        let blob = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NoStoredSession {
                path: self.path.clone(),
            },
            _ => StoreError::CorruptedStore {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        })?;

        codec::decode(&blob).map_err(|e| StoreError::CorruptedStore {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    fn handle_restore_failure(
        &self,
        err: StoreError,
        options: RestoreOptions,
    ) -> StoreResult<RestoreOutcome> {
        if options.strict {
            tracing::warn!(code = err.error_code(), "Restore failed: {}", err);
            return Err(err);
        }

        tracing::info!(code = err.error_code(), "No session restored: {}", err);

        let message = err.user_message();
        let outcome = match err {
            StoreError::NoStoredSession { .. } => RestoreOutcome::NoStoredSession,
            StoreError::CorruptedStore { reason, .. } => RestoreOutcome::Corrupted { reason },
            other => return Err(other),
        };

        if !options.silent {
            self.reporter.failure(&message);
        }
        Ok(outcome)
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("path", &self.path)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Write `contents` to `path` through a temporary sibling file.
fn write_replacing(path: &Path, contents: &str) -> Result<(), SystemError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            fs::create_dir_all(parent)
                .map_err(|e| classify_io_error(e, Some(parent.to_path_buf()), "create directory"))?;
        }
    }

    let temp_path = temp_path_for(path);
    if let Err(e) = write_private(&temp_path, contents) {
        let _ = fs::remove_file(&temp_path);
        return Err(classify_io_error(e, Some(temp_path), "write"));
    }

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(classify_io_error(e, Some(path.to_path_buf()), "replace"));
    }
    Ok(())
}

/// Create (or truncate) `path` readable by the owner only, then write.
///
/// The mode is set at creation so the secrets are never on disk with wider
/// permissions. An existing file keeps its mode, hence the explicit reset.
fn write_private(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        let mut file = options.open(path)?;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    #[cfg(not(unix))]
    {
        let mut file = options.open(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}
