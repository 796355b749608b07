//! Encrypted envelope format
//!
//! An envelope is three independently base64-encoded strings:
//!
//! ```text
//! iv  12-byte random initialization vector
//! ct  ciphertext, same length as the plaintext
//! at  16-byte GCM authentication tag
//! ```
//!
//! Nodes publish it inside their telemetry record under `s`, together with the
//! protocol version:
//!
//! ```json
//! { "s": { "v": 1, "iv": "...", "ct": "...", "at": "..." } }
//! ```
//!
//! Only the plaintext is authenticated. Anything next to the envelope (device
//! ID, timestamps, the `v` field itself) is not bound to the tag unless the
//! codec's `*_bound` operations are used with that data as associated data.

use alloc::string::String;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    constants::PROTOCOL_VERSION,
    errors::{EnvelopeError, EnvelopeResult},
};

/// One authenticated-encryption result, ready for transport
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EncryptedEnvelope {
    /// Base64 initialization vector
    pub iv: String,
    /// Base64 ciphertext
    pub ct: String,
    /// Base64 authentication tag
    pub at: String,
}

impl EncryptedEnvelope {
    /// Assemble an envelope from already encoded fields
    pub fn new(iv: String, ct: String, at: String) -> Self {
        Self { iv, ct, at }
    }

    /// Attach the protocol version for publishing
    pub fn into_wire(self) -> WireEnvelope {
        WireEnvelope::seal(self)
    }
}

/// Versioned envelope as published on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEnvelope {
    /// Protocol version
    pub v: u8,
    /// Envelope fields, flattened next to `v`
    #[serde(flatten)]
    pub envelope: EncryptedEnvelope,
}

impl WireEnvelope {
    /// Wrap an envelope with the current protocol version
    pub fn seal(envelope: EncryptedEnvelope) -> Self {
        Self {
            v: PROTOCOL_VERSION,
            envelope,
        }
    }

    /// Unwrap the envelope, refusing unknown protocol versions
    pub fn open(&self) -> EnvelopeResult<&EncryptedEnvelope> {
        if self.v != PROTOCOL_VERSION {
            log_debug!("rejecting envelope with protocol version {}", self.v);
            return Err(EnvelopeError::UnsupportedVersion { found: self.v });
        }
        Ok(&self.envelope)
    }
}

/// Key under which nodes nest the secure envelope in a telemetry record
pub const SECURE_FIELD: &str = "s";

/// Check whether a received telemetry record carries a secure envelope
///
/// True when the record has an `s` object with a numeric `v` and non-empty
/// `iv` and `ct` strings. Records from nodes without encryption return false
/// and can be consumed as plain JSON.
pub fn is_encrypted(record: &Value) -> bool {
    let Some(secure) = record.get(SECURE_FIELD) else {
        return false;
    };

    let non_empty_str = |key: &str| {
        secure
            .get(key)
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty())
    };

    secure.get("v").is_some_and(Value::is_number) && non_empty_str("iv") && non_empty_str("ct")
}

/// Extract the versioned envelope from a received telemetry record
///
/// The version is checked before the remaining fields, so an envelope from a
/// newer protocol is reported as `UnsupportedVersion` whatever its layout.
pub fn extract(record: &Value) -> EnvelopeResult<WireEnvelope> {
    let malformed = EnvelopeError::MalformedEnvelope { field: SECURE_FIELD };
    let secure = record.get(SECURE_FIELD).ok_or(malformed)?;

    let version = secure.get("v").and_then(Value::as_u64).ok_or(malformed)?;
    if version != u64::from(PROTOCOL_VERSION) {
        let found = u8::try_from(version).unwrap_or(u8::MAX);
        log_debug!("rejecting envelope with protocol version {}", version);
        return Err(EnvelopeError::UnsupportedVersion { found });
    }

    WireEnvelope::deserialize(secure).map_err(|_| EnvelopeError::MalformedEnvelope { field: SECURE_FIELD })
}
