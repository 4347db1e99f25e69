//! Text encoding of stored credentials.
//!
//! The stored blob is pretty-printed JSON wrapped in standard base64, so the
//! file is a single printable line with no JSON control characters in it.
//!
//! This is an encoding, not encryption. Anyone who can read the file can
//! decode it; protect it with filesystem permissions.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::credentials::Credentials;

/// Reasons a blob could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The blob is not valid base64.
    #[error("invalid base64: {0}")]
    InvalidEncoding(String),
    /// The decoded bytes are not UTF-8.
    #[error("decoded data is not valid UTF-8")]
    InvalidUtf8,
    /// The JSON does not have the expected shape or misses fields.
    #[error("malformed credentials: {0}")]
    Malformed(String),
    /// Serialization failed while encoding.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Encode credentials into the stored text form.
pub fn encode(credentials: &Credentials) -> Result<String, CodecError> {
    let json = serde_json::to_string_pretty(credentials)
        .map_err(|e| CodecError::Serialization(e.to_string()))?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Decode the stored text form.
///
/// Surrounding whitespace (a trailing newline added by an editor, say) is
/// ignored. Every field must be present; nothing is defaulted.
pub fn decode(blob: &str) -> Result<Credentials, CodecError> {
    let bytes = BASE64
        .decode(blob.trim())
        .map_err(|e| CodecError::InvalidEncoding(e.to_string()))?;
    let json = String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?;
    serde_json::from_str(&json).map_err(|e| CodecError::Malformed(e.to_string()))
}
