//! Protocol Constants
//!
//! Sizes and limits of the secure envelope protocol. These are shared by every
//! node and every receiver; changing one is a protocol change and requires a
//! new [`PROTOCOL_VERSION`].
//!
//! ```text
//! Algorithm:  AES-256-GCM (authenticated encryption)
//! Key:        256-bit pre-shared key
//! IV:         96-bit, random per envelope
//! Tag:        128-bit
//! Encoding:   standard base64, one string per field
//! ```

/// AES-256 key size (bytes).
pub const AES_KEY_SIZE: usize = 32;

/// GCM initialization vector size (bytes).
///
/// 96 bits is the GCM standard size; any other length forces an extra GHASH
/// pass to derive the counter block.
pub const GCM_IV_SIZE: usize = 12;

/// GCM authentication tag size (bytes).
pub const GCM_TAG_SIZE: usize = 16;

/// Default maximum plaintext length (bytes).
///
/// Sized to the JSON telemetry payload of a sensor node with headroom.
pub const MAX_PLAINTEXT: usize = 512;

/// Compiled ceiling for plaintext working storage (bytes).
///
/// Runtime limits in [`CodecConfig`](crate::CodecConfig) may be lowered per
/// deployment but never raised above this.
pub const PLAINTEXT_CAPACITY: usize = MAX_PLAINTEXT;

/// Secure envelope protocol version carried as `v` on the wire.
pub const PROTOCOL_VERSION: u8 = 1;

/// Base64 length of an encoded field of `len` bytes (padded).
pub const fn encoded_len(len: usize) -> usize {
    (len + 2) / 3 * 4
}
