//! In-memory credential model.
//!
//! A [`Credentials`] value holds everything captured by a login: browser
//! session cookies, per-service session ids (OSIDs) and the device-level
//! master token with the short-lived authorization tokens minted from it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the cookie map, as reported by [`Credentials::missing_fields`].
pub const FIELD_COOKIES: &str = "cookies";

/// Name of the service session id map.
pub const FIELD_SERVICE_SESSION_IDS: &str = "osids";

/// Name of the device master token.
pub const FIELD_MASTER_TOKEN: &str = "master_token";

/// A short-lived, scope-specific token.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorizationToken {
    /// The bearer token.
    pub token: String,
    /// Expiration time as Unix timestamp (seconds since epoch).
    pub expiry: i64,
}

impl AuthorizationToken {
    /// Create a token expiring at `expiry`.
    pub fn new(token: impl Into<String>, expiry: i64) -> Self {
        Self {
            token: token.into(),
            expiry,
        }
    }

    /// Check if the token is expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }

    /// Check if the token is expired at the given Unix timestamp.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.expiry
    }
}

impl fmt::Debug for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizationToken")
            .field("token", &Redacted(&self.token))
            .field("expiry", &self.expiry)
            .finish()
    }
}

/// Device-level credentials.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceCredentials {
    /// Long-lived master token. Empty means absent.
    pub master_token: String,
    /// Authorization tokens keyed by scope name.
    pub authorization_tokens: BTreeMap<String, AuthorizationToken>,
}

impl DeviceCredentials {
    /// Check if a master token is present.
    pub fn has_master_token(&self) -> bool {
        !self.master_token.is_empty()
    }

    /// Get the token for `scope` if one is stored and still valid.
    pub fn valid_authorization_token(&self, scope: &str) -> Option<&AuthorizationToken> {
        self.authorization_tokens
            .get(scope)
            .filter(|token| !token.is_expired())
    }

    /// Scopes whose token has expired at `now`.
    pub fn expired_scopes_at(&self, now: i64) -> Vec<&str> {
        self.authorization_tokens
            .iter()
            .filter(|(_, token)| token.is_expired_at(now))
            .map(|(scope, _)| scope.as_str())
            .collect()
    }
}

impl fmt::Debug for DeviceCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceCredentials")
            .field("master_token", &Redacted(&self.master_token))
            .field("authorization_tokens", &self.authorization_tokens)
            .finish()
    }
}

/// The full set of captured credentials.
///
/// Serialized field order is `cookies`, `osids`, `android`; the codec
/// relies on it.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Browser session cookies, keyed by cookie name.
    pub cookies: BTreeMap<String, String>,
    /// Per-service session identifiers, keyed by service.
    #[serde(rename = "osids")]
    pub service_session_ids: BTreeMap<String, String>,
    /// Device master token and derived authorization tokens.
    #[serde(rename = "android")]
    pub device: DeviceCredentials,
}

impl Credentials {
    /// Create new empty credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every required part of a session is present.
    ///
    /// Authorization tokens are not required: they can be minted again from
    /// the master token.
    pub fn is_complete(&self) -> bool {
        !self.cookies.is_empty()
            && !self.service_session_ids.is_empty()
            && self.device.has_master_token()
    }

    /// Check if nothing at all has been captured.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
            && self.service_session_ids.is_empty()
            && self.device.master_token.is_empty()
            && self.device.authorization_tokens.is_empty()
    }

    /// The required fields that are currently empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.cookies.is_empty() {
            missing.push(FIELD_COOKIES);
        }
        if self.service_session_ids.is_empty() {
            missing.push(FIELD_SERVICE_SESSION_IDS);
        }
        if !self.device.has_master_token() {
            missing.push(FIELD_MASTER_TOKEN);
        }
        missing
    }

    /// A summary safe to print: names and counts, never values.
    pub fn summary(&self) -> CredentialSummary {
        self.summary_at(chrono::Utc::now().timestamp())
    }

    /// Like [`Credentials::summary`], evaluating expiry at `now`.
    pub fn summary_at(&self, now: i64) -> CredentialSummary {
        CredentialSummary {
            cookie_names: self.cookies.keys().cloned().collect(),
            services: self.service_session_ids.keys().cloned().collect(),
            has_master_token: self.device.has_master_token(),
            authorization_scopes: self.device.authorization_tokens.keys().cloned().collect(),
            expired_scopes: self
                .device
                .expired_scopes_at(now)
                .into_iter()
                .map(str::to_string)
                .collect(),
            complete: self.is_complete(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("cookies", &RedactedMap(&self.cookies))
            .field("service_session_ids", &RedactedMap(&self.service_session_ids))
            .field("device", &self.device)
            .finish()
    }
}

/// Redacted view of [`Credentials`] for status output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialSummary {
    pub cookie_names: Vec<String>,
    pub services: Vec<String>,
    pub has_master_token: bool,
    pub authorization_scopes: Vec<String>,
    pub expired_scopes: Vec<String>,
    pub complete: bool,
}

struct Redacted<'a>(&'a str);

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("\"\"")
        } else {
            f.write_str("<redacted>")
        }
    }
}

struct RedactedMap<'a>(&'a BTreeMap<String, String>);

impl fmt::Debug for RedactedMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(k, v)| (k, Redacted(v))))
            .finish()
    }
}
