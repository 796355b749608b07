//! Bounded, self-wiping working buffer
//!
//! ## Overview
//!
//! Every encrypt and decrypt call needs scratch space for the bytes being
//! transformed in place. On a sensor node that space has to be bounded, and on
//! the decrypt path it may briefly hold plaintext that must never escape a
//! failed verification.
//!
//! `WorkingBuffer` covers both:
//!
//! - Capacity is a compile-time constant (`heapless::Vec<u8, N>`), so a call
//!   can never allocate more than `N` bytes of working storage
//! - The contents are overwritten with zeros when the buffer is dropped, on
//!   every exit path including early `?` returns
//!
//! ```text
//! encrypt:  plaintext ──copy──▶ [buffer] ──AES-GCM in place──▶ ciphertext ──base64──▶ ct
//! decrypt:  ct ──base64──▶ [buffer] ──verify + decrypt in place──▶ plaintext (or wiped)
//! ```

use core::ops::{Deref, DerefMut};

use heapless::Vec;
use zeroize::Zeroize;

/// Fixed-capacity byte buffer wiped on drop
pub struct WorkingBuffer<const N: usize> {
    data: Vec<u8, N>,
}

impl<const N: usize> WorkingBuffer<N> {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Copy `bytes` into a fresh buffer, or `None` if they do not fit
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let mut buffer = Self::new();
        buffer.data.extend_from_slice(bytes).ok()?;
        Some(buffer)
    }

    /// Maximum number of bytes this buffer can hold
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Overwrite the contents with zeros and empty the buffer
    pub fn wipe(&mut self) {
        self.data.as_mut_slice().zeroize();
        self.data.clear();
    }
}

impl<const N: usize> Default for WorkingBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for WorkingBuffer<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> DerefMut for WorkingBuffer<N> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> Drop for WorkingBuffer<N> {
    fn drop(&mut self) {
        self.wipe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_within_capacity() {
        let buffer = WorkingBuffer::<8>::from_slice(b"abc").unwrap();
        assert_eq!(&*buffer, b"abc");
        assert_eq!(buffer.capacity(), 8);
    }

    #[test]
    fn rejects_overflow() {
        assert!(WorkingBuffer::<4>::from_slice(b"abcde").is_none());
        assert!(WorkingBuffer::<4>::from_slice(b"abcd").is_some());
    }

    #[test]
    fn wipe_empties_buffer() {
        let mut buffer = WorkingBuffer::<8>::from_slice(b"secret").unwrap();
        buffer[0] = b'S';
        buffer.wipe();
        assert!(buffer.is_empty());
    }
}
