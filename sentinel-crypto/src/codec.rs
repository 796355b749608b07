//! # Secure Envelope Codec
//!
//! AES-256-GCM authenticated encryption of short payloads under a single
//! pre-shared key, with base64 transport encoding.
//!
//! ## Security Properties
//!
//! - **Fresh IV**: every envelope draws 12 bytes from a CSPRNG. IVs are never
//!   derived from counters or payloads, so restarts cannot repeat one.
//! - **Fail closed**: on tag mismatch the working buffer is wiped and no
//!   plaintext byte is returned.
//! - **No AAD by default**: only the plaintext is authenticated. Use
//!   [`EnvelopeCodec::encrypt_bound`] / [`EnvelopeCodec::decrypt_bound`] to bind
//!   metadata such as a device ID.
//! - **Bounded**: working storage is a fixed-capacity buffer released (and
//!   wiped) on every exit path.

use alloc::vec::Vec;

use aes_gcm::{
    aead::{AeadInPlace, KeyInit, Nonce, Tag},
    Aes256Gcm,
};
use rand::{CryptoRng, RngCore};
use serde::{de::DeserializeOwned, Serialize};
use zeroize::Zeroizing;

use crate::{
    buffer::WorkingBuffer,
    config::CodecConfig,
    constants::{encoded_len, GCM_IV_SIZE, GCM_TAG_SIZE, PLAINTEXT_CAPACITY},
    encoding::{decode_field, encode_field},
    envelope::EncryptedEnvelope,
    errors::{field, EnvelopeError, EnvelopeResult},
    key::SharedKey,
};

type Buffer = WorkingBuffer<PLAINTEXT_CAPACITY>;

/// Envelope codec bound to one key and one set of limits
///
/// Stateless between calls; cheap to construct per call or keep around.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeCodec<'k> {
    key: &'k SharedKey,
    config: CodecConfig,
}

impl<'k> EnvelopeCodec<'k> {
    /// Create a codec, validating the limits against the working buffer
    pub fn new(key: &'k SharedKey, config: CodecConfig) -> EnvelopeResult<Self> {
        config.validate(PLAINTEXT_CAPACITY)?;
        Ok(Self { key, config })
    }

    /// Create a codec with the protocol default limits
    pub fn with_defaults(key: &'k SharedKey) -> Self {
        Self {
            key,
            config: CodecConfig::default(),
        }
    }

    /// Limits enforced by this codec
    pub fn config(&self) -> CodecConfig {
        self.config
    }

    /// Encrypt `plaintext` with an IV drawn from `rng`
    ///
    /// # Errors
    ///
    /// - `EmptyPayload` / `PayloadTooLarge` if the length is outside
    ///   `1..=max_plaintext`
    /// - `CipherInitFailed` if the cipher or the random source fails
    pub fn encrypt_with_rng<R>(&self, rng: &mut R, plaintext: &[u8]) -> EnvelopeResult<EncryptedEnvelope>
    where
        R: RngCore + CryptoRng,
    {
        self.seal(rng, plaintext, &[])
    }

    /// Encrypt `plaintext` with an IV from the operating system RNG
    #[cfg(feature = "std")]
    pub fn encrypt(&self, plaintext: &[u8]) -> EnvelopeResult<EncryptedEnvelope> {
        self.seal(&mut rand::rngs::OsRng, plaintext, &[])
    }

    /// Encrypt `plaintext`, authenticating `associated_data` alongside it
    pub fn encrypt_bound_with_rng<R>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> EnvelopeResult<EncryptedEnvelope>
    where
        R: RngCore + CryptoRng,
    {
        self.seal(rng, plaintext, associated_data)
    }

    /// Encrypt `plaintext`, authenticating `associated_data` alongside it
    #[cfg(feature = "std")]
    pub fn encrypt_bound(&self, plaintext: &[u8], associated_data: &[u8]) -> EnvelopeResult<EncryptedEnvelope> {
        self.seal(&mut rand::rngs::OsRng, plaintext, associated_data)
    }

    /// Serialize `value` as JSON and encrypt it
    pub fn encrypt_json_with_rng<R, T>(&self, rng: &mut R, value: &T) -> EnvelopeResult<EncryptedEnvelope>
    where
        R: RngCore + CryptoRng,
        T: Serialize + ?Sized,
    {
        let plaintext = Zeroizing::new(
            serde_json::to_vec(value).map_err(|_| EnvelopeError::MalformedPayload)?,
        );
        self.seal(rng, &plaintext, &[])
    }

    /// Serialize `value` as JSON and encrypt it
    #[cfg(feature = "std")]
    pub fn encrypt_json<T: Serialize + ?Sized>(&self, value: &T) -> EnvelopeResult<EncryptedEnvelope> {
        self.encrypt_json_with_rng(&mut rand::rngs::OsRng, value)
    }

    /// Verify and decrypt an envelope
    ///
    /// # Errors
    ///
    /// - `MalformedEncoding` if a field is not base64
    /// - `MalformedEnvelope` if a field decodes to the wrong length
    /// - `TamperDetected` if the tag does not verify; no plaintext is released
    pub fn decrypt(&self, envelope: &EncryptedEnvelope) -> EnvelopeResult<Vec<u8>> {
        self.open(envelope, &[])
    }

    /// Verify and decrypt an envelope sealed with `associated_data`
    pub fn decrypt_bound(&self, envelope: &EncryptedEnvelope, associated_data: &[u8]) -> EnvelopeResult<Vec<u8>> {
        self.open(envelope, associated_data)
    }

    /// Verify, decrypt and deserialize a JSON payload
    pub fn decrypt_json<T: DeserializeOwned>(&self, envelope: &EncryptedEnvelope) -> EnvelopeResult<T> {
        let plaintext = Zeroizing::new(self.open(envelope, &[])?);
        serde_json::from_slice(&plaintext).map_err(|_| EnvelopeError::MalformedPayload)
    }

    fn cipher(&self) -> EnvelopeResult<Aes256Gcm> {
        Aes256Gcm::new_from_slice(self.key.as_bytes()).map_err(|_| {
            log_error!("AES-256-GCM key setup failed");
            EnvelopeError::CipherInitFailed
        })
    }

    fn check_plaintext(&self, len: usize) -> EnvelopeResult<()> {
        if len == 0 {
            return Err(EnvelopeError::EmptyPayload);
        }
        if len > self.config.max_plaintext {
            return Err(EnvelopeError::PayloadTooLarge {
                len,
                max: self.config.max_plaintext,
            });
        }
        Ok(())
    }

    fn seal<R>(&self, rng: &mut R, plaintext: &[u8], associated_data: &[u8]) -> EnvelopeResult<EncryptedEnvelope>
    where
        R: RngCore + CryptoRng,
    {
        self.check_plaintext(plaintext.len())?;
        let cipher = self.cipher()?;

        let mut iv = [0u8; GCM_IV_SIZE];
        rng.try_fill_bytes(&mut iv).map_err(|_| {
            log_error!("random source failed while generating IV");
            EnvelopeError::CipherInitFailed
        })?;

        let mut buffer = Buffer::from_slice(plaintext).ok_or(EnvelopeError::PayloadTooLarge {
            len: plaintext.len(),
            max: self.config.max_plaintext,
        })?;

        let tag = cipher
            .encrypt_in_place_detached(Nonce::<Aes256Gcm>::from_slice(&iv), associated_data, &mut buffer)
            .map_err(|_| EnvelopeError::CipherInitFailed)?;

        Ok(EncryptedEnvelope::new(
            encode_field(&iv),
            encode_field(&buffer),
            encode_field(&tag),
        ))
    }

    fn open(&self, envelope: &EncryptedEnvelope, associated_data: &[u8]) -> EnvelopeResult<Vec<u8>> {
        let max = self.config.max_plaintext;

        let iv = decode_field(&envelope.iv, field::IV, encoded_len(GCM_IV_SIZE)).map_err(reject)?;
        let tag = decode_field(&envelope.at, field::AT, encoded_len(GCM_TAG_SIZE)).map_err(reject)?;
        let ct = decode_field(&envelope.ct, field::CT, encoded_len(max)).map_err(reject)?;

        if iv.len() != GCM_IV_SIZE {
            return Err(reject(EnvelopeError::MalformedEnvelope { field: field::IV }));
        }
        if tag.len() != GCM_TAG_SIZE {
            return Err(reject(EnvelopeError::MalformedEnvelope { field: field::AT }));
        }
        if ct.is_empty() || ct.len() > max {
            return Err(reject(EnvelopeError::MalformedEnvelope { field: field::CT }));
        }

        let cipher = self.cipher()?;
        let mut buffer = Buffer::from_slice(&ct)
            .ok_or(EnvelopeError::MalformedEnvelope { field: field::CT })?;

        let verified = cipher.decrypt_in_place_detached(
            Nonce::<Aes256Gcm>::from_slice(&iv),
            associated_data,
            &mut buffer,
            Tag::<Aes256Gcm>::from_slice(&tag),
        );

        if verified.is_err() {
            buffer.wipe();
            log_warn!("tamper detected: authentication tag mismatch");
            return Err(EnvelopeError::TamperDetected);
        }

        Ok(buffer.to_vec())
    }
}

fn reject(err: EnvelopeError) -> EnvelopeError {
    log_debug!("rejecting envelope: {}", err);
    err
}
