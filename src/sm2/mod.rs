//! SM2 public-key cryptography.
//!
//! This module implements the SM2 suite (GB/T 32918) over the standard
//! 256-bit prime-order curve:
//!
//! - key-pair generation ([`key`]),
//! - public-key encryption with an SM3-based KDF and integrity tag
//!   ([`encrypt`]),
//! - digital signatures with the user-identity pre-hash ([`sign`]),
//! - two-pass authenticated key agreement ([`exchange`]).
//!
//! The arithmetic stack underneath is explicit and self-contained: field
//! elements modulo the SM2 prime with a Solinas fast reduction ([`field`]),
//! and affine curve points backed internally by Jacobian coordinates
//! ([`curve`]).
//!
//! ## Wire formats
//!
//! All public entry points speak hexadecimal strings:
//! - private keys are 64 hex characters, public keys and curve points are
//!   `"04" || X || Y` (130 characters, `"00"` for the identity),
//! - ciphertexts are `C1 || C3 || C2`,
//! - signatures are `r || 'h' || s` with a literal `'h'` separator.
//!
//! These formats are a compatibility contract with existing peers of this
//! library, not a general SM2 interchange format: in particular there is no
//! ASN.1 layer.

use std::fmt;

pub mod curve;
pub mod encrypt;
pub mod exchange;
pub mod field;
pub mod key;
mod kdf;
pub mod sign;
mod za;

pub use curve::EcPoint;
pub use encrypt::decrypt;
pub use encrypt::encrypt;
pub use exchange::{InitiatorOutcome, ResponderOutcome, initiator_step, responder_confirm, responder_step};
pub use field::FpElement;
pub use key::{Keypair, generate_keypair, public_from_private};
pub use sign::{sign, verify};

/// Failure results of the SM2 schemes.
///
/// All protocol-level failures surface as values of this type; nothing in
/// the module panics on malformed input. Out-of-range random draws are
/// retried internally and never reach the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sm2Error {
    /// An input is empty or too short for its expected layout.
    InvalidLength,
    /// A decoded point failed the curve-membership check.
    NotOnCurve,
    /// A protocol intermediate collapsed to the group identity.
    PointAtInfinity,
    /// The C3 integrity hash of a ciphertext did not match.
    IntegrityMismatch,
    /// The peer's ephemeral point RA failed the curve-membership check.
    RaNotOnCurve,
    /// The peer's ephemeral point RB failed the curve-membership check.
    RbNotOnCurve,
    /// The shared point V collapsed to the identity at the responder.
    VAtInfinity,
    /// The shared point U collapsed to the identity at the initiator.
    UAtInfinity,
    /// The peer's key-confirmation value did not match.
    ConfirmationMismatch,
}

impl fmt::Display for Sm2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Sm2Error::InvalidLength => "input has an invalid length",
            Sm2Error::NotOnCurve => "point is not on curve",
            Sm2Error::PointAtInfinity => "point at infinity",
            Sm2Error::IntegrityMismatch => "ciphertext hash does not match",
            Sm2Error::RaNotOnCurve => "RA point is not on curve",
            Sm2Error::RbNotOnCurve => "RB point is not on curve",
            Sm2Error::VAtInfinity => "V is point at infinity",
            Sm2Error::UAtInfinity => "U is point at infinity",
            Sm2Error::ConfirmationMismatch => "B's verification value does not match",
        };

        f.write_str(message)
    }
}

impl std::error::Error for Sm2Error {}
