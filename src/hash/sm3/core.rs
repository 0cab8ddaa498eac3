//! SM3 streaming context and one-shot hashing
//!
//! The context buffers input into 64-byte blocks, keeps a running bit
//! count, and applies the standard Merkle–Damgård padding on `finish`:
//! a 0x80 byte, zeros up to 56 mod 64, then the message length in bits as
//! a 64-bit big-endian integer.
//!
//! After `finish` the 32-byte digest and its uppercase-hex form remain
//! readable on the context while the working state is reset to the IV, so
//! the same context can hash another message.

use crate::hash::sm3::computations::{IV, compress};
use crate::utils::bytes_to_hex_upper;

/// Streaming SM3 hash context.
pub struct Sm3 {
    state: [u32; 8],
    buffer: [u8; 64],
    buffered: usize,
    bit_count: u64,
    digest: [u8; 32],
    digest_hex: String,
}

impl Sm3 {
    /// Creates a fresh context initialized to the SM3 IV.
    pub fn new() -> Self {
        Self {
            state: IV,
            buffer: [0u8; 64],
            buffered: 0,
            bit_count: 0,
            digest: [0u8; 32],
            digest_hex: String::new(),
        }
    }

    /// Absorbs a single byte, compressing whenever 64 bytes accumulate.
    pub fn update_byte(&mut self, byte: u8) {
        self.buffer[self.buffered] = byte;
        self.buffered += 1;
        self.bit_count += 8;

        if self.buffered == 64 {
            compress(&mut self.state, &self.buffer);
            self.buffered = 0;
        }
    }

    /// Absorbs a slice of input.
    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.update_byte(byte);
        }
    }

    /// Pads and compresses the final block(s) and returns the digest.
    ///
    /// The digest and its uppercase-hex rendering stay available through
    /// [`Sm3::digest`] and [`Sm3::digest_hex`]; the working state resets
    /// to the IV so the context can be reused.
    pub fn finish(&mut self) -> [u8; 32] {
        let total_bits = self.bit_count;
        let mut pos = self.buffered;

        self.buffer[pos] = 0x80;
        pos += 1;

        // No room left for the 8-byte length: close this block first.
        if pos > 56 {
            self.buffer[pos..].fill(0);
            compress(&mut self.state, &self.buffer);
            pos = 0;
        }

        self.buffer[pos..56].fill(0);
        self.buffer[56..].copy_from_slice(&total_bits.to_be_bytes());
        compress(&mut self.state, &self.buffer);

        for (i, word) in self.state.iter().enumerate() {
            self.digest[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
        }
        self.digest_hex = bytes_to_hex_upper(&self.digest);

        self.state = IV;
        self.buffered = 0;
        self.bit_count = 0;

        self.digest
    }

    /// The digest produced by the most recent [`Sm3::finish`].
    pub fn digest(&self) -> [u8; 32] {
        self.digest
    }

    /// The digest of the most recent [`Sm3::finish`] as 64 uppercase hex
    /// characters; empty before the first `finish`.
    pub fn digest_hex(&self) -> &str {
        &self.digest_hex
    }
}

impl Default for Sm3 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the SM3 hash of `input` in one call.
pub fn sm3(input: &[u8]) -> [u8; 32] {
    let mut ctx = Sm3::new();
    ctx.update(input);
    ctx.finish()
}
