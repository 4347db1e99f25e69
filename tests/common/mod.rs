//! Common test utilities for integration tests.
//!
//! Credential fixtures and a reporter that records status lines.

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use credkeep::auth::{AuthorizationToken, Credentials};

/// The smallest complete credential set.
pub fn minimal_credentials() -> Credentials {
    let mut creds = Credentials::new();
    creds.cookies.insert("SID".to_string(), "x".to_string());
    creds
        .service_session_ids
        .insert("cl".to_string(), "y".to_string());
    creds.device.master_token = "tok".to_string();
    creds
}

/// A credential set shaped like a real captured session.
pub fn full_credentials() -> Credentials {
    let mut creds = minimal_credentials();
    for (name, value) in [
        ("APISID", "KVp_hgSMKp_VvQUu/A3asaJ7NiIbeREXL_"),
        ("HSID", "ALmwKCi8elB8rA9qq"),
        ("SAPISID", "vG0_HTRCe__6hCdK/A8np15DbQpcGWwGfK"),
        ("SSID", "AJZk-ubXDLQNUTqyC"),
        ("__Secure-3PSID", "aQhBZHKD5e07WmaHb7ip3CW5Awb715adqq7Z6MziZuDK-VH-OIAAC455bVuhh_O6rUUdeQ."),
    ] {
        creds.cookies.insert(name.to_string(), value.to_string());
    }
    creds
        .service_session_ids
        .insert("cloudconsole".to_string(), "aQhBZDBh8Id9Qh0FjnsAwdZ1N1Rq.".to_string());
    creds.device.master_token = "aas_et/AKppINbwXfOVV67j3j8AOyajJME1pXdYwcTOfG".to_string();
    creds.device.authorization_tokens.insert(
        "playgames".to_string(),
        AuthorizationToken::new("ya29.a0AWY7CkkbYPVFP5JfUefX9ONHhm", 1_687_728_121),
    );
    creds.device.authorization_tokens.insert(
        "drive".to_string(),
        AuthorizationToken::new("ya29.fresh", i64::MAX),
    );
    creds
}

/// A decodable credential set without a master token.
pub fn credentials_without_master_token() -> Credentials {
    let mut creds = full_credentials();
    creds.device.master_token.clear();
    creds
}
