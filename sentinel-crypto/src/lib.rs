//! Secure envelope codec for Harmony Sentinel telemetry
//!
//! Wraps short payloads (JSON telemetry, a few hundred bytes) in an AES-256-GCM
//! envelope under a pre-shared key, and verifies and unwraps them on the
//! receiving side.
//!
//! Key constraints:
//! - Bounded working storage, no per-call state beyond the result
//! - Fresh random IV for every envelope
//! - No plaintext released unless the tag verifies
//!
//! ```rust
//! use sentinel_crypto::{decrypt, encrypt, SharedKey};
//!
//! let key = SharedKey::from_hex(
//!     "4a7b2c9d1e5f8a3b6c0dfe4fa071e253b485d627c8196afb3ced7e0f9061b243",
//! )?;
//!
//! let envelope = encrypt(br#"{"cis":0.12}"#, &key)?;
//! assert_eq!(decrypt(&envelope, &key)?, br#"{"cis":0.12}"#);
//! # Ok::<(), sentinel_crypto::EnvelopeError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod buffer;
pub mod codec;
pub mod config;
pub mod constants;
pub mod encoding;
pub mod envelope;
pub mod errors;
pub mod key;

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

// Public API
pub use codec::EnvelopeCodec;
pub use config::{CodecConfig, SentinelConfig};
pub use constants::{MAX_PLAINTEXT, PROTOCOL_VERSION};
pub use envelope::{extract, is_encrypted, EncryptedEnvelope, WireEnvelope, SECURE_FIELD};
pub use errors::{EnvelopeError, EnvelopeResult};
pub use key::SharedKey;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Encrypt `plaintext` under `key` with the default limits
#[cfg(feature = "std")]
pub fn encrypt(plaintext: &[u8], key: &SharedKey) -> EnvelopeResult<EncryptedEnvelope> {
    EnvelopeCodec::with_defaults(key).encrypt(plaintext)
}

/// Encrypt `plaintext` under `key`, drawing the IV from `rng`
pub fn encrypt_with_rng<R>(rng: &mut R, plaintext: &[u8], key: &SharedKey) -> EnvelopeResult<EncryptedEnvelope>
where
    R: RngCore + CryptoRng,
{
    EnvelopeCodec::with_defaults(key).encrypt_with_rng(rng, plaintext)
}

/// Verify and decrypt `envelope` under `key` with the default limits
pub fn decrypt(envelope: &EncryptedEnvelope, key: &SharedKey) -> EnvelopeResult<Vec<u8>> {
    EnvelopeCodec::with_defaults(key).decrypt(envelope)
}
