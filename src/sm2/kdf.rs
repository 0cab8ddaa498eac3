//! SM3-based key derivation
//!
//! Counter-mode derivation: the output is the concatenation of
//! `SM3(Z || ct)` for `ct = 1, 2, …` (a 4-byte big-endian counter),
//! truncated to the requested length. Two input shapes exist:
//!
//! - encryption/decryption derive from the shared point alone
//!   (`Z = x2 || y2`),
//! - key exchange extends the input with both identity digests
//!   (`Z = V.x || V.y || ZA || ZB`).

use crate::hash::sm3::core::Sm3;
use crate::sm2::curve::EcPoint;

/// Derives `key_len` bytes from a shared point (encryption shape).
pub(crate) fn kdf(point: &EcPoint, key_len: usize) -> Vec<u8> {
    derive(point, None, key_len)
}

/// Derives `key_len` bytes from a shared point and the two identity
/// digests (key-exchange shape).
pub(crate) fn kdf_session(
    point: &EcPoint,
    z_a: &[u8; 32],
    z_b: &[u8; 32],
    key_len: usize,
) -> Vec<u8> {
    derive(point, Some((z_a, z_b)), key_len)
}

fn derive(
    point: &EcPoint,
    identities: Option<(&[u8; 32], &[u8; 32])>,
    key_len: usize,
) -> Vec<u8> {
    let x = point.x.to_be_bytes();
    let y = point.y.to_be_bytes();

    let mut out = Vec::with_capacity(key_len + 32);
    let mut counter: u32 = 1;

    while out.len() < key_len {
        let mut hasher = Sm3::new();
        hasher.update(&x);
        hasher.update(&y);

        if let Some((z_a, z_b)) = identities {
            hasher.update(z_a);
            hasher.update(z_b);
        }

        hasher.update(&counter.to_be_bytes());
        out.extend_from_slice(&hasher.finish());
        counter += 1;
    }

    out.truncate(key_len);
    out
}
