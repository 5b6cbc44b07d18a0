//! Integrity string handling. Lockfiles record a `sha512-<base64>`
//! descriptor per package, while the offline manifest wants the same
//! digest as lowercase hex.

use std::fmt::Display;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use sha2::{Digest, Sha512};

/// Algorithm tag of the only integrity form decodable inline.
pub const SHA512_TAG: &str = "sha512-";

#[derive(Debug)]
pub enum IntegrityError {
    /// Descriptor is not `sha512-` tagged.
    UnknownAlgorithm(String),
    /// Tagged value does not decode as base64.
    BadBase64(String),
}

impl Display for IntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAlgorithm(tag) => write!(f, "unknown integrity algorithm: {tag}"),
            Self::BadBase64(msg) => write!(f, "undecodable integrity value: {msg}"),
        }
    }
}

/// Decode a `sha512-<base64>` integrity string into lowercase hex.
///
/// Lockfiles mostly carry standard base64 with padding, but url-safe
/// alphabets and stripped padding show up in the wild, so both get
/// normalized before decoding.
pub fn decode_sha512(integrity: &str) -> Result<String, IntegrityError> {
    let encoded = integrity.strip_prefix(SHA512_TAG).ok_or_else(|| {
        let tag = integrity.split('-').next().unwrap_or(integrity);
        IntegrityError::UnknownAlgorithm(tag.to_string())
    })?;

    let mut normalized = encoded.replace('-', "+").replace('_', "/");
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    let raw = STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| IntegrityError::BadBase64(e.to_string()))?;

    if raw.is_empty() {
        return Err(IntegrityError::BadBase64("empty digest".to_string()));
    }

    Ok(hex::encode(raw))
}

/// Sha512 digest of `data`, rendered as lowercase hex.
pub fn sha512_hex(data: &[u8]) -> String {
    let mut hasher = Sha512::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
