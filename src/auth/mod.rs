//! Credential storage for credkeep.
//!
//! This module provides:
//! - The in-memory credential model (cookies, service session ids, device tokens)
//! - The text codec used for the stored file
//! - The credential store with restore/persist semantics

pub mod codec;
pub mod credentials;
pub mod store;

pub use codec::{decode, encode, CodecError};
pub use credentials::{AuthorizationToken, CredentialSummary, Credentials, DeviceCredentials};
pub use store::{CredentialStore, RestoreOptions, RestoreOutcome};
