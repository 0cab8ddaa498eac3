//! SM2 public-key encryption.
//!
//! The scheme is ECIES-shaped: a fresh scalar `k` produces `C1 = k·G` and
//! a shared point `P2 = k·P`, the KDF stretches `x2 || y2` into a keystream
//! XORed over the message, and `C3 = SM3(x2 || M || y2)` binds the
//! plaintext. The ciphertext is the hex concatenation
//!
//! ```text
//! C1 (130 chars) || C3 (64 chars) || C2 (2·len(M) chars)
//! ```
//!
//! The `C1 || C3 || C2` ordering follows GM/T 0009 and is part of the wire
//! contract; a decoder expecting the older `C1 || C2 || C3` layout will
//! reject everything this module produces.

use crate::hash::sm3::core::Sm3;
use crate::primitives::BigInt256;
use crate::sm2::Sm2Error;
use crate::sm2::curve::EcPoint;
use crate::sm2::kdf::kdf;
use crate::sm2::key::random_scalar;
use crate::utils::{bytes_to_hex, hex_to_bytes};

/// Encrypts a message to a public key, returning the hex ciphertext.
///
/// The scalar `k` is redrawn whenever the shared point degenerates to the
/// identity or the derived keystream is all zero, so every returned
/// ciphertext decrypts to the message.
///
/// # Errors
/// - [`Sm2Error::InvalidLength`] for an empty message,
/// - [`Sm2Error::NotOnCurve`] if the public key does not decode to a
///   point on the curve.
pub fn encrypt(plaintext: &[u8], public_key_hex: &str) -> Result<String, Sm2Error> {
    if plaintext.is_empty() {
        return Err(Sm2Error::InvalidLength);
    }

    let public = EcPoint::from_hex(public_key_hex);
    if public.is_infinity() || !public.is_on_curve() {
        return Err(Sm2Error::NotOnCurve);
    }

    loop {
        let k = random_scalar();

        let c1 = EcPoint::generator().multiply(&k);
        let p2 = public.multiply(&k);
        if p2.is_infinity() {
            continue;
        }

        let key = kdf(&p2, plaintext.len());
        if key.iter().all(|&b| b == 0) {
            continue;
        }

        let c2: Vec<u8> = plaintext
            .iter()
            .zip(key.iter())
            .map(|(m, k)| m ^ k)
            .collect();

        let mut hasher = Sm3::new();
        hasher.update(&p2.x.to_be_bytes());
        hasher.update(plaintext);
        hasher.update(&p2.y.to_be_bytes());
        let c3 = hasher.finish();

        let mut out = String::with_capacity(194 + c2.len() * 2);
        out.push_str(&c1.to_hex());
        out.push_str(&bytes_to_hex(&c3));
        out.push_str(&bytes_to_hex(&c2));

        return Ok(out);
    }
}

/// Decrypts a hex ciphertext with a private key.
///
/// # Errors
/// - [`Sm2Error::InvalidLength`] if the ciphertext is shorter than the
///   fixed `C1 || C3` prefix (194 hex characters) or not ASCII,
/// - [`Sm2Error::NotOnCurve`] if `C1` does not decode to a point on the
///   curve,
/// - [`Sm2Error::PointAtInfinity`] if `d·C1` degenerates,
/// - [`Sm2Error::IntegrityMismatch`] if the recomputed `C3` differs.
pub fn decrypt(ciphertext_hex: &str, private_key_hex: &str) -> Result<Vec<u8>, Sm2Error> {
    if ciphertext_hex.len() < 194 || !ciphertext_hex.is_ascii() {
        return Err(Sm2Error::InvalidLength);
    }

    let c1 = EcPoint::from_hex(&ciphertext_hex[..130]);
    let c3 = hex_to_bytes(&ciphertext_hex[130..194]);
    let c2 = hex_to_bytes(&ciphertext_hex[194..]);

    if !c1.is_on_curve() {
        return Err(Sm2Error::NotOnCurve);
    }

    let d = BigInt256::from_hex(private_key_hex);
    let p2 = c1.multiply(&d);
    if p2.is_infinity() {
        return Err(Sm2Error::PointAtInfinity);
    }

    let key = kdf(&p2, c2.len());
    let plaintext: Vec<u8> = c2.iter().zip(key.iter()).map(|(c, k)| c ^ k).collect();

    let mut hasher = Sm3::new();
    hasher.update(&p2.x.to_be_bytes());
    hasher.update(&plaintext);
    hasher.update(&p2.y.to_be_bytes());

    if hasher.finish().as_slice() != c3.as_slice() {
        return Err(Sm2Error::IntegrityMismatch);
    }

    Ok(plaintext)
}
