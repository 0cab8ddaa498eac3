//! SM2 two-pass authenticated key exchange.
//!
//! Both parties hold a long-term pair `(d, P)` and a fresh ephemeral pair
//! `(r, R = r·G)`. After A has sent `(ID_A, P_A, R_A)`:
//!
//! 1. the **responder** B computes `t_B = (d_B + x̄(R_B)·r_B) mod n` and
//!    the shared point `V = t_B · (P_A + x̄(R_A)·R_A)`, derives the session
//!    key, and answers with the confirmation value `S_B`;
//! 2. the **initiator** A computes the mirror-image `U`, checks that the
//!    received `S_B` matches its own derivation, and answers with `S_A`;
//! 3. B finally checks `S_A` against the state it retained from step 1.
//!
//! `x̄(x) = 2¹²⁷ + (x mod 2¹²⁷)` truncates an x-coordinate to its low 127
//! bits and forces the top bit on. The session key on both sides is
//! `KDF(V.x || V.y || Z_A || Z_B, klen)`; the confirmations are
//!
//! ```text
//! inner = SM3(V.x || Z_A || Z_B || R_A.x || R_A.y || R_B.x || R_B.y)
//! S_B   = SM3(0x02 || V.y || inner)
//! S_A   = SM3(0x03 || U.y || inner)
//! ```
//!
//! By construction `U = V` whenever both sides are honest, so the key and
//! both confirmations agree.
//!
//! The responder must keep exactly one in-flight session per peer: the
//! state returned by [`responder_step`] is what [`responder_confirm`]
//! later consumes, and this module provides no locking around it.

use crate::hash::sm3::core::Sm3;
use crate::primitives::BigInt256;
use crate::sm2::Sm2Error;
use crate::sm2::curve::{EcPoint, N};
use crate::sm2::kdf::kdf_session;
use crate::sm2::za::identity_digest;
use crate::utils::bytes_to_hex;

/// `2^127`, the forced top bit of a truncated x-coordinate.
const HALF_BIT: BigInt256 = BigInt256([0, 0x8000000000000000, 0, 0]);

/// Mask selecting the low 127 bits of an x-coordinate.
const HALF_MASK: BigInt256 = BigInt256([0xFFFFFFFFFFFFFFFF, 0x7FFFFFFFFFFFFFFF, 0, 0]);

/// What the responder learns in its first step.
///
/// `v`, `z_a`, and `z_b` are the session state that must survive until
/// the initiator's confirmation arrives; `s_b` is sent to the peer and
/// `k_b` is the derived session key, both as lowercase hex.
pub struct ResponderOutcome {
    pub s_b: String,
    pub k_b: String,
    pub v: EcPoint,
    pub z_a: [u8; 32],
    pub z_b: [u8; 32],
}

/// What the initiator learns from its (single) step.
pub struct InitiatorOutcome {
    pub s_a: String,
    pub k_a: String,
}

/// Computes `x̄ = 2¹²⁷ + (x mod 2¹²⁷)`.
fn truncated_x(x: &BigInt256) -> BigInt256 {
    HALF_BIT.overflowing_add(&(*x & HALF_MASK)).0
}

/// Computes the session scalar `t = (d + x̄·r) mod n`.
fn session_scalar(ephemeral: &BigInt256, private: &BigInt256, x_bar: &BigInt256) -> BigInt256 {
    let xr = x_bar.mod_mul(ephemeral, &N);
    private.mod_add(&xr, &N)
}

/// Computes the shared point `t · (P + x̄·R)`.
fn shared_point(t: &BigInt256, x_bar: &BigInt256, p: &EcPoint, r: &EcPoint) -> EcPoint {
    let xr = r.multiply(x_bar);
    p.add(&xr).multiply(t)
}

/// Computes a confirmation value `SM3(tag || point.y || inner)`.
///
/// The tag is `0x02` for the responder's value and `0x03` for the
/// initiator's.
fn confirmation_hash(
    tag: u8,
    point: &EcPoint,
    z_a: &[u8; 32],
    z_b: &[u8; 32],
    r_a: &EcPoint,
    r_b: &EcPoint,
) -> [u8; 32] {
    let mut inner = Sm3::new();
    inner.update(&point.x.to_be_bytes());
    inner.update(z_a);
    inner.update(z_b);
    inner.update(&r_a.x.to_be_bytes());
    inner.update(&r_a.y.to_be_bytes());
    inner.update(&r_b.x.to_be_bytes());
    inner.update(&r_b.y.to_be_bytes());
    let inner = inner.finish();

    let mut outer = Sm3::new();
    outer.update_byte(tag);
    outer.update(&point.y.to_be_bytes());
    outer.update(&inner);
    outer.finish()
}

/// Compares a computed confirmation against the bytes a peer sent.
///
/// Only the leading `min(len, 32)` bytes take part, mirroring the wire
/// behavior peers of this library already rely on.
fn prefix_equal(expected: &[u8; 32], received: &[u8]) -> bool {
    let n = received.len().min(32);
    expected[..n] == received[..n]
}

/// Responder step: consumes `(ID_A, P_A, R_A)` and produces `S_B` plus
/// the session key `K_B`.
///
/// # Errors
/// - [`Sm2Error::RaNotOnCurve`] if the peer's ephemeral point is invalid,
/// - [`Sm2Error::VAtInfinity`] if the shared point degenerates.
#[allow(clippy::too_many_arguments)]
pub fn responder_step(
    key_len: usize,
    p_a: &EcPoint,
    r_a: &EcPoint,
    p_b: &EcPoint,
    d_b: &BigInt256,
    r_b: &EcPoint,
    rb: &BigInt256,
    id_a: &str,
    id_b: &str,
) -> Result<ResponderOutcome, Sm2Error> {
    let x2 = truncated_x(&r_b.x.value());
    let t_b = session_scalar(rb, d_b, &x2);

    if !r_a.is_on_curve() {
        return Err(Sm2Error::RaNotOnCurve);
    }

    let x1 = truncated_x(&r_a.x.value());
    let v = shared_point(&t_b, &x1, p_a, r_a);
    if v.is_infinity() {
        return Err(Sm2Error::VAtInfinity);
    }

    let z_a = identity_digest(id_a, p_a);
    let z_b = identity_digest(id_b, p_b);

    let k_b = kdf_session(&v, &z_a, &z_b, key_len);
    let s_b = confirmation_hash(0x02, &v, &z_a, &z_b, r_a, r_b);

    Ok(ResponderOutcome {
        s_b: bytes_to_hex(&s_b),
        k_b: bytes_to_hex(&k_b),
        v,
        z_a,
        z_b,
    })
}

/// Initiator step: consumes `(P_B, R_B)` and the received `S_B`, checks
/// it, and produces `S_A` plus the session key `K_A`.
///
/// # Errors
/// - [`Sm2Error::RbNotOnCurve`] if the peer's ephemeral point is invalid,
/// - [`Sm2Error::UAtInfinity`] if the shared point degenerates,
/// - [`Sm2Error::ConfirmationMismatch`] if `S_B` does not match.
#[allow(clippy::too_many_arguments)]
pub fn initiator_step(
    key_len: usize,
    p_b: &EcPoint,
    r_b: &EcPoint,
    p_a: &EcPoint,
    d_a: &BigInt256,
    r_a: &EcPoint,
    ra: &BigInt256,
    id_a: &str,
    id_b: &str,
    s_b: &[u8],
) -> Result<InitiatorOutcome, Sm2Error> {
    let x1 = truncated_x(&r_a.x.value());
    let t_a = session_scalar(ra, d_a, &x1);

    if !r_b.is_on_curve() {
        return Err(Sm2Error::RbNotOnCurve);
    }

    let x2 = truncated_x(&r_b.x.value());
    let u = shared_point(&t_a, &x2, p_b, r_b);
    if u.is_infinity() {
        return Err(Sm2Error::UAtInfinity);
    }

    let z_a = identity_digest(id_a, p_a);
    let z_b = identity_digest(id_b, p_b);

    let k_a = kdf_session(&u, &z_a, &z_b, key_len);

    let expected = confirmation_hash(0x02, &u, &z_a, &z_b, r_a, r_b);
    if !prefix_equal(&expected, s_b) {
        return Err(Sm2Error::ConfirmationMismatch);
    }

    let s_a = confirmation_hash(0x03, &u, &z_a, &z_b, r_a, r_b);

    Ok(InitiatorOutcome {
        s_a: bytes_to_hex(&s_a),
        k_a: bytes_to_hex(&k_a),
    })
}

/// Responder confirmation: checks the initiator's `S_A` against the state
/// retained from [`responder_step`].
pub fn responder_confirm(
    v: &EcPoint,
    z_a: &[u8; 32],
    z_b: &[u8; 32],
    r_a: &EcPoint,
    r_b: &EcPoint,
    s_a: &[u8],
) -> bool {
    let expected = confirmation_hash(0x03, v, z_a, z_b, r_a, r_b);
    prefix_equal(&expected, s_a)
}
