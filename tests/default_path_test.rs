//! Tests for the default store location under the home directory.
//!
//! These tests point `HOME` at a temporary directory, so they run serially.

#![cfg(unix)]

mod common;

use std::fs;

use common::minimal_credentials;
use credkeep::auth::{CredentialStore, RestoreOptions};
use credkeep::config::{StoreConfig, PATH_ENV_VAR};
use credkeep::storage::{resolve_store_path, CREDENTIALS_DIR, CREDENTIALS_FILE};
use credkeep::traits::NullReporter;
use serial_test::serial;
use tempfile::TempDir;

struct HomeGuard {
    previous: Option<std::ffi::OsString>,
}

impl HomeGuard {
    fn set(home: &std::path::Path) -> Self {
        let previous = std::env::var_os("HOME");
        std::env::set_var("HOME", home);
        std::env::remove_var(PATH_ENV_VAR);
        Self { previous }
    }
}

impl Drop for HomeGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}

#[test]
#[serial]
fn test_default_path_under_home() {
    let home = TempDir::new().unwrap();
    let _guard = HomeGuard::set(home.path());

    let path = resolve_store_path(None).unwrap();

    assert_eq!(
        path,
        home.path().join(CREDENTIALS_DIR).join(CREDENTIALS_FILE)
    );
    assert!(home.path().join(CREDENTIALS_DIR).is_dir());
    assert_eq!(resolve_store_path(None).unwrap(), path);
}

#[test]
#[serial]
fn test_persist_to_default_path() {
    let home = TempDir::new().unwrap();
    let _guard = HomeGuard::set(home.path());

    let mut store = CredentialStore::new(&StoreConfig::from_env())
        .unwrap()
        .with_reporter(NullReporter);
    store.replace_credentials(minimal_credentials());
    let written = store.persist(true).unwrap();

    let expected = home.path().join(CREDENTIALS_DIR).join(CREDENTIALS_FILE);
    assert_eq!(written, expected);
    assert!(fs::metadata(&expected).unwrap().len() > 0);

    let mut reloaded = CredentialStore::new(&StoreConfig::new())
        .unwrap()
        .with_reporter(NullReporter);
    assert!(reloaded
        .restore(RestoreOptions::strict())
        .unwrap()
        .is_restored());
    assert_eq!(reloaded.credentials(), &minimal_credentials());
}

#[test]
#[serial]
fn test_env_override_beats_home() {
    let home = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    let _guard = HomeGuard::set(home.path());
    let custom = other.path().join("elsewhere.m");
    std::env::set_var(PATH_ENV_VAR, &custom);

    let store = CredentialStore::new(&StoreConfig::from_env()).unwrap();
    std::env::remove_var(PATH_ENV_VAR);

    assert_eq!(store.path(), custom.as_path());
    assert!(!home.path().join(CREDENTIALS_DIR).exists());
}
