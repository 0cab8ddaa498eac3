//! Chinese commercial cryptography (SM2 / SM3 / SM4)
//!
//! This crate provides a from-scratch implementation of the SM family of
//! cryptographic algorithms standardized for Chinese commercial use:
//!
//! - **SM3**, a 256-bit Merkle–Damgård hash function,
//! - **SM4**, a 128-bit block cipher driven in CBC mode with PKCS#7 padding,
//! - **SM2**, public-key cryptography over a 256-bit prime-order elliptic
//!   curve: key generation, encryption, digital signatures, and a two-pass
//!   authenticated key agreement.
//!
//! The focus is on **clarity, predictability, and auditability** rather than
//! on raw speed. All arithmetic is explicit fixed-size limb arithmetic; the
//! only platform dependency is the operating system's cryptographic random
//! number generator.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size 256-bit unsigned integer arithmetic (`BigInt256`): limb-wise
//!   addition and subtraction with explicit carries, a 512-bit schoolbook
//!   product, generic modular reduction, modular exponentiation and
//!   inversion, and hexadecimal / byte codecs.
//!
//! - `hash`
//!   The SM3 hash function, exposed both as a streaming context and as a
//!   one-shot convenience function.
//!
//! - `encryption`
//!   The SM4 block cipher in CBC mode with PKCS#7 padding, including the
//!   SM3-based preparation rule applied to keys and IVs that are not exactly
//!   16 bytes long.
//!
//! - `sm2`
//!   Field arithmetic modulo the SM2 prime with a Solinas fast reduction,
//!   affine/Jacobian curve operations, and the SM2 schemes built on top of
//!   them: encrypt/decrypt, sign/verify, and key exchange.
//!
//! # Design goals
//!
//! - Explicit, fixed-size arithmetic with no hidden allocation in the hot
//!   paths
//! - Minimal API surface with well-defined failure results
//! - No global mutable state; every context is owned by its caller
//!
//! # Security notes
//!
//! Scalar multiplication uses a plain left-to-right double-and-add that
//! branches on the bits of the scalar. It is **not constant-time** and leaks
//! the scalar through timing and cache side channels. A hardened deployment
//! should substitute a Montgomery ladder or a fixed-pattern window method.

mod os;
mod utils;

pub mod encryption;
pub mod hash;
pub mod primitives;
pub mod sm2;
