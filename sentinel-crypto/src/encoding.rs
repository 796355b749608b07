//! Base64 transcoding of envelope fields

use alloc::{string::String, vec::Vec};

use base64::{alphabet, engine::general_purpose::STANDARD, Engine};

use crate::errors::{EnvelopeError, EnvelopeResult};

/// Encode one envelope field
pub fn encode_field(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode one envelope field
///
/// Text longer than `max_encoded` is not decoded. It is reported as
/// `MalformedEncoding` if it contains anything outside the base64 alphabet,
/// and as `MalformedEnvelope` otherwise.
pub fn decode_field(text: &str, field: &'static str, max_encoded: usize) -> EnvelopeResult<Vec<u8>> {
    if text.len() > max_encoded {
        if !in_alphabet(text) {
            return Err(EnvelopeError::MalformedEncoding { field });
        }
        return Err(EnvelopeError::MalformedEnvelope { field });
    }
    STANDARD
        .decode(text)
        .map_err(|_| EnvelopeError::MalformedEncoding { field })
}

fn in_alphabet(text: &str) -> bool {
    let symbols = alphabet::STANDARD.as_str().as_bytes();
    text.bytes().all(|b| b == b'=' || symbols.contains(&b))
}
