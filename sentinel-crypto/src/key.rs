//! Pre-shared key handle
//!
//! The 256-bit key is provisioned outside this crate (flash, secure element,
//! config file) and handed in once at start-up. It is never mutated afterwards,
//! so a single `SharedKey` can be borrowed by any number of concurrent callers.

use core::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{
    constants::AES_KEY_SIZE,
    errors::{EnvelopeError, EnvelopeResult},
};

/// Pre-shared AES-256 key, wiped from memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedKey([u8; AES_KEY_SIZE]);

impl SharedKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; AES_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a byte slice, failing if it is not exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> EnvelopeResult<Self> {
        let array: [u8; AES_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| EnvelopeError::CipherInitFailed)?;
        Ok(Self(array))
    }

    /// Parse a 64-character hex string (`openssl rand -hex 32` format).
    pub fn from_hex(hex_key: &str) -> EnvelopeResult<Self> {
        let mut bytes = [0u8; AES_KEY_SIZE];
        hex::decode_to_slice(hex_key.trim(), &mut bytes)
            .map_err(|_| EnvelopeError::CipherInitFailed)?;
        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Generate a random key.
    #[cfg(feature = "std")]
    pub fn generate() -> Self {
        let mut bytes = [0u8; AES_KEY_SIZE];
        rand::RngCore::fill_bytes(&mut rand::rngs::OsRng, &mut bytes);
        let key = Self(bytes);
        bytes.zeroize();
        key
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; AES_KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey(<redacted>)")
    }
}

impl PartialEq for SharedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for SharedKey {}
