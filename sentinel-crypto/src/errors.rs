//! Error Types for Envelope Encryption and Decryption
//!
//! ## Design Philosophy
//!
//! Every error is terminal for the call that raised it; nothing is retried
//! internally. Errors are `Copy`, carry no heap data and never carry any
//! plaintext or key material.
//!
//! ## Error Categories
//!
//! ### Caller Input
//! - `EmptyPayload`, `PayloadTooLarge`: plaintext outside `1..=max_plaintext`
//!
//! ### Provisioning
//! - `CipherInitFailed`: key has the wrong length or the cipher could not be
//!   set up. In a correctly provisioned node this never happens; treat it as
//!   fatal at the call site.
//! - `InvalidConfig`: codec limits outside what this build supports
//!
//! ### Transport
//! - `MalformedEncoding`: a field is not valid base64
//! - `MalformedEnvelope`: a field decodes to the wrong length
//! - `UnsupportedVersion`: wire envelope from a newer protocol
//! - `MalformedPayload`: decrypted bytes are not the expected JSON
//!
//! ### Security
//! - `TamperDetected`: authentication tag mismatch
//!
//! Transport errors and tamper must produce the same effect (no plaintext
//! released) but stay distinguishable: tamper is a security event, a
//! malformed envelope is most likely a transport bug.
//!
//! ```rust
//! use sentinel_crypto::{EnvelopeError, EncryptedEnvelope, SharedKey, decrypt};
//!
//! fn on_envelope(envelope: &EncryptedEnvelope, key: &SharedKey) {
//!     match decrypt(envelope, key) {
//!         Ok(plaintext) => { /* forward downstream */ }
//!         Err(e) if e.is_security_event() => { /* raise security alert */ }
//!         Err(_) => { /* count as transport error */ }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for envelope operations
pub type EnvelopeResult<T> = Result<T, EnvelopeError>;

/// Envelope field names, used in error context
pub mod field {
    /// Initialization vector
    pub const IV: &str = "iv";
    /// Ciphertext
    pub const CT: &str = "ct";
    /// Authentication tag
    pub const AT: &str = "at";
}

/// Envelope errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Plaintext is empty
    #[error("Payload is empty")]
    EmptyPayload,

    /// Plaintext exceeds the configured maximum
    #[error("Payload of {len} bytes exceeds limit of {max}")]
    PayloadTooLarge {
        /// Length of the rejected plaintext
        len: usize,
        /// Configured maximum plaintext length
        max: usize,
    },

    /// Cipher could not be initialized (key length or entropy source)
    #[error("Cipher initialization failed")]
    CipherInitFailed,

    /// A field is not valid base64
    #[error("Field '{field}' is not valid base64")]
    MalformedEncoding {
        /// Offending field (`iv`, `ct` or `at`)
        field: &'static str,
    },

    /// A field decoded to an invalid length
    #[error("Field '{field}' has invalid length")]
    MalformedEnvelope {
        /// Offending field (`iv`, `ct` or `at`)
        field: &'static str,
    },

    /// Authentication tag did not verify
    #[error("Tamper detected: authentication tag mismatch")]
    TamperDetected,

    /// Wire envelope uses an unknown protocol version
    #[error("Unsupported envelope version {found}")]
    UnsupportedVersion {
        /// Version found on the wire
        found: u8,
    },

    /// Codec configuration is not usable
    #[error("Invalid codec configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: &'static str,
    },

    /// Decrypted payload is not valid JSON for the requested type
    #[error("Decrypted payload is not valid JSON")]
    MalformedPayload,
}

impl EnvelopeError {
    /// Whether this error indicates an active attack rather than a fault
    pub fn is_security_event(&self) -> bool {
        matches!(self, Self::TamperDetected)
    }

    /// Whether this error points at a provisioning defect on this node
    pub fn is_provisioning_defect(&self) -> bool {
        matches!(self, Self::CipherInitFailed | Self::InvalidConfig { .. })
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EnvelopeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyPayload =>
                defmt::write!(fmt, "Empty payload"),
            Self::PayloadTooLarge { len, max } =>
                defmt::write!(fmt, "Payload {} bytes exceeds {}", len, max),
            Self::CipherInitFailed =>
                defmt::write!(fmt, "Cipher init failed"),
            Self::MalformedEncoding { field } =>
                defmt::write!(fmt, "Bad base64 in {}", field),
            Self::MalformedEnvelope { field } =>
                defmt::write!(fmt, "Bad length in {}", field),
            Self::TamperDetected =>
                defmt::write!(fmt, "TAMPER DETECTED"),
            Self::UnsupportedVersion { found } =>
                defmt::write!(fmt, "Unsupported version {}", found),
            Self::InvalidConfig { reason } =>
                defmt::write!(fmt, "Invalid config: {}", reason),
            Self::MalformedPayload =>
                defmt::write!(fmt, "Malformed payload"),
        }
    }
}
