//! Codecs between `BigInt256`, hexadecimal strings, and raw bytes.
//!
//! The hex parser follows the wire conventions of the SM2 string formats:
//! an optional `0x`/`0X` prefix, big-endian nibble order, an odd-length
//! string treated as if left-padded with one zero nibble, and oversized
//! input truncated to its low 256 bits. Emission always produces exactly
//! 64 characters. The byte codec is plain 32-byte big-endian with the same
//! pad/truncate rule on input.

use crate::primitives::bigint256::BigInt256;
use crate::utils::{bytes_to_hex, bytes_to_hex_upper, hex_nibble, strip_hex_prefix};

impl BigInt256 {
    /// Parses a big-endian hexadecimal string.
    ///
    /// Accepts an optional `0x`/`0X` prefix and either letter case. An odd
    /// number of digits is read as if a zero nibble preceded the first
    /// one. Characters outside `[0-9a-fA-F]` decode as zero; input longer
    /// than 64 digits keeps only the low 256 bits.
    pub fn from_hex(s: &str) -> Self {
        let s = strip_hex_prefix(s).as_bytes();
        let odd = s.len() & 1;

        let mut raw = Vec::with_capacity((s.len() + 1) / 2);
        let byte_len = ((s.len() + 1) / 2).min(64);

        for i in 0..byte_len {
            if i == 0 && odd == 1 {
                raw.push(hex_nibble(s[0]));
            } else {
                let idx = i * 2 - odd;
                raw.push((hex_nibble(s[idx]) << 4) | hex_nibble(s[idx + 1]));
            }
        }

        Self::from_be_bytes(&raw)
    }

    /// Emits exactly 64 uppercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        bytes_to_hex_upper(&self.to_be_bytes())
    }

    /// Emits exactly 64 lowercase hexadecimal characters.
    pub fn to_hex_lower(&self) -> String {
        bytes_to_hex(&self.to_be_bytes())
    }

    /// Builds a value from big-endian bytes.
    ///
    /// Shorter input is left-zero-padded to 32 bytes; longer input keeps
    /// only its trailing 32 bytes.
    pub fn from_be_bytes(data: &[u8]) -> Self {
        let mut padded = [0u8; 32];

        let data = if data.len() > 32 {
            &data[data.len() - 32..]
        } else {
            data
        };
        padded[32 - data.len()..].copy_from_slice(data);

        let mut limbs = [0u64; 4];
        for i in 0..4 {
            let off = (3 - i) * 8;
            limbs[i] = u64::from_be_bytes(padded[off..off + 8].try_into().unwrap());
        }

        Self(limbs)
    }

    /// Exports the value as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for i in 0..4 {
            let off = (3 - i) * 8;
            out[off..off + 8].copy_from_slice(&self.0[i].to_be_bytes());
        }

        out
    }
}
