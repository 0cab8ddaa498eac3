//! The SM3 cryptographic hash function.
//!
//! SM3 is a 256-bit Merkle–Damgård hash over 512-bit blocks, structurally
//! close to SHA-256 but with its own message expansion, boolean functions,
//! and a double-word feed into each round.
//!
//! The implementation is split in two:
//! - [`computations`] holds the block compression function,
//! - [`core`] holds the streaming context (buffering, padding, output).

pub mod computations;
pub mod core;
