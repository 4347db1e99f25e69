//! credkeep - local store for captured session credentials
//!
//! Keeps browser session cookies, per-service session ids and device tokens
//! on disk between runs so a tool can skip logging in again.
//!
//! ```no_run
//! use credkeep::auth::{CredentialStore, RestoreOptions};
//! use credkeep::config::StoreConfig;
//!
//! # fn main() -> Result<(), credkeep::error::StoreError> {
//! let mut store = CredentialStore::new(&StoreConfig::from_env())?;
//! store.restore(RestoreOptions::lenient())?;
//! if !store.is_complete() {
//!     // run a login flow, fill store.credentials_mut(), then:
//!     store.persist(false)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod storage;
pub mod traits;
