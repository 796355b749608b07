//! Codec and node configuration
//!
//! `SentinelConfig` is built once at process start and owns everything the
//! codec needs: the pre-shared key and the payload limits. Nothing here is
//! mutated after construction, so it can be shared by reference across tasks.
//!
//! ```rust
//! use sentinel_crypto::{CodecConfig, SentinelConfig};
//!
//! let config = SentinelConfig::from_hex(
//!     "4a7b2c9d1e5f8a3b6c0dfe4fa071e253b485d627c8196afb3ced7e0f9061b243",
//!     CodecConfig::default().with_max_plaintext(256),
//! )?;
//!
//! let codec = config.codec()?;
//! # let _ = codec;
//! # Ok::<(), sentinel_crypto::EnvelopeError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    codec::EnvelopeCodec,
    constants::{MAX_PLAINTEXT, PLAINTEXT_CAPACITY},
    errors::{EnvelopeError, EnvelopeResult},
    key::SharedKey,
};

/// Payload limits enforced by the codec
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Largest plaintext accepted by `encrypt` and produced by `decrypt`
    pub max_plaintext: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_plaintext: MAX_PLAINTEXT,
        }
    }
}

impl CodecConfig {
    /// Set the plaintext limit
    pub fn with_max_plaintext(mut self, max_plaintext: usize) -> Self {
        self.max_plaintext = max_plaintext;
        self
    }

    /// Check the limits against a working-buffer capacity
    pub fn validate(&self, capacity: usize) -> EnvelopeResult<()> {
        if self.max_plaintext == 0 {
            return Err(EnvelopeError::InvalidConfig {
                reason: "max_plaintext must be at least 1",
            });
        }
        if self.max_plaintext > capacity {
            return Err(EnvelopeError::InvalidConfig {
                reason: "max_plaintext exceeds working buffer capacity",
            });
        }
        Ok(())
    }
}

/// Process-wide configuration: key plus codec limits
#[derive(Debug, Clone)]
pub struct SentinelConfig {
    key: SharedKey,
    codec: CodecConfig,
}

impl SentinelConfig {
    /// Build from an already provisioned key
    pub fn new(key: SharedKey, codec: CodecConfig) -> EnvelopeResult<Self> {
        codec.validate(PLAINTEXT_CAPACITY)?;
        Ok(Self { key, codec })
    }

    /// Build from a hex-encoded key
    pub fn from_hex(hex_key: &str, codec: CodecConfig) -> EnvelopeResult<Self> {
        Self::new(SharedKey::from_hex(hex_key)?, codec)
    }

    /// The pre-shared key
    pub fn key(&self) -> &SharedKey {
        &self.key
    }

    /// The codec limits
    pub fn codec_config(&self) -> CodecConfig {
        self.codec
    }

    /// A codec borrowing this configuration's key
    pub fn codec(&self) -> EnvelopeResult<EnvelopeCodec<'_>> {
        EnvelopeCodec::new(&self.key, self.codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_protocol_limit() {
        assert_eq!(CodecConfig::default().max_plaintext, 512);
        assert!(CodecConfig::default().validate(PLAINTEXT_CAPACITY).is_ok());
    }

    #[test]
    fn rejects_zero_and_oversized_limits() {
        let zero = CodecConfig::default().with_max_plaintext(0);
        assert!(matches!(zero.validate(512), Err(EnvelopeError::InvalidConfig { .. })));

        let huge = CodecConfig::default().with_max_plaintext(4096);
        assert!(matches!(huge.validate(512), Err(EnvelopeError::InvalidConfig { .. })));
    }

    #[test]
    fn config_owns_key() {
        let key = SharedKey::from_bytes([7u8; 32]);
        let config = SentinelConfig::new(key.clone(), CodecConfig::default()).unwrap();
        assert_eq!(config.key(), &key);
        assert!(config.codec().is_ok());
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: CodecConfig = serde_json::from_str(r#"{"max_plaintext":256}"#).unwrap();
        assert_eq!(config.max_plaintext, 256);
    }
}
