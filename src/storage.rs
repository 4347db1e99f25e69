//! Resolution of the on-disk credentials location.
//!
//! The default store lives at `~/.credkeep/creds.m`. An explicit path always
//! wins and is returned untouched.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// The credentials directory name, relative to the home directory.
pub const CREDENTIALS_DIR: &str = ".credkeep";

/// The credentials file name.
pub const CREDENTIALS_FILE: &str = "creds.m";

/// Resolve the store path, defaulting to the user's home directory.
///
/// Creates `~/.credkeep` when no override is given and the directory is
/// missing. Calling this again is a plain existence check.
pub fn resolve_store_path(path_override: Option<PathBuf>) -> StoreResult<PathBuf> {
    if let Some(path) = path_override {
        return Ok(path);
    }

    let home = dirs::home_dir().ok_or(StoreError::NoHomeDirectory)?;
    resolve_store_path_in(&home, None)
}

/// Like [`resolve_store_path`], with the base directory given explicitly.
pub fn resolve_store_path_in(base: &Path, path_override: Option<PathBuf>) -> StoreResult<PathBuf> {
    if let Some(path) = path_override {
        return Ok(path);
    }

    let dir = base.join(CREDENTIALS_DIR);
    if !dir.is_dir() {
        fs::create_dir_all(&dir).map_err(|e| StoreError::DirectoryCreationFailed {
            path: dir.clone(),
            message: e.to_string(),
        })?;
        tracing::debug!("Created credentials directory {:?}", dir);
    }

    Ok(dir.join(CREDENTIALS_FILE))
}
