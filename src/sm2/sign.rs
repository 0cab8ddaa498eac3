//! SM2 digital signatures.
//!
//! Signing hashes `e = SM3(Z || M)` where `Z` is the user-identity
//! pre-hash, then runs the standard SM2 equation
//!
//! ```text
//! r = (e + x1) mod n        with (x1, _) = k·G
//! s = (k − r·d) · (1 + d)⁻¹ mod n
//! ```
//!
//! redrawing `k` until none of the degenerate cases (`r = 0`,
//! `r + k = n`, `s = 0`) occur.
//!
//! The wire form is `r || 'h' || s`, each half exactly 64 lowercase hex
//! characters, 129 ASCII characters total. The literal `'h'` separator is
//! a compatibility contract with peers of this library; there is no ASN.1
//! encoding.

use crate::hash::sm3::core::Sm3;
use crate::primitives::BigInt256;
use crate::sm2::curve::{EcPoint, N};
use crate::sm2::key::{public_from_private, random_scalar};
use crate::sm2::za::identity_digest;

/// Hashes the identity digest and message into the signing input `e`.
fn message_digest(user_id: &str, public: &EcPoint, message: &[u8]) -> BigInt256 {
    let z = identity_digest(user_id, public);

    let mut hasher = Sm3::new();
    hasher.update(&z);
    hasher.update(message);

    BigInt256::from_be_bytes(&hasher.finish())
}

/// Signs a message with a private key, returning `r || 'h' || s`.
pub fn sign(user_id: &str, message: &[u8], private_key_hex: &str) -> String {
    let d = BigInt256::from_hex(private_key_hex);
    let public = public_from_private(&d);
    let e = message_digest(user_id, &public, message);

    loop {
        let k = random_scalar();

        let kp = EcPoint::generator().multiply(&k);
        let x1 = kp.x.value();

        let r = e.mod_add(&x1, &N);
        if r.is_zero() {
            continue;
        }

        let (rk, carry) = r.overflowing_add(&k);
        if !carry && rk == N {
            continue;
        }

        let d_plus_1 = d.overflowing_add(&BigInt256::ONE).0;
        let d_plus_1_inv = d_plus_1.mod_inverse(&N);

        let rd = r.mod_mul(&d, &N);
        let s = k.mod_sub(&rd, &N).mod_mul(&d_plus_1_inv, &N);
        if s.is_zero() {
            continue;
        }

        return format!("{}h{}", r.to_hex_lower(), s.to_hex_lower());
    }
}

/// Verifies a `r || 'h' || s` signature against a message and public key.
///
/// Returns `false` for malformed signatures (no separator, over-long
/// halves), out-of-range `r` or `s`, a public key off the curve, or a
/// failed equation check. Never panics on attacker-controlled input.
pub fn verify(user_id: &str, signature: &str, message: &[u8], public_key_hex: &str) -> bool {
    let Some(sep) = signature.find('h') else {
        return false;
    };

    let r_str = &signature[..sep];
    let s_str = &signature[sep + 1..];
    if r_str.len() > 64 || s_str.len() > 64 {
        return false;
    }

    let r = BigInt256::from_hex(r_str);
    let s = BigInt256::from_hex(s_str);

    if r.is_zero() || r >= N || s.is_zero() || s >= N {
        return false;
    }

    let public = EcPoint::from_hex(public_key_hex);
    if !public.is_on_curve() {
        return false;
    }

    let e = message_digest(user_id, &public, message);

    let t = r.mod_add(&s, &N);
    if t.is_zero() {
        return false;
    }

    let sg = EcPoint::generator().multiply(&s);
    let tp = public.multiply(&t);
    let q = sg.add(&tp);

    if q.is_infinity() {
        return false;
    }

    e.mod_add(&q.x.value(), &N) == r
}
