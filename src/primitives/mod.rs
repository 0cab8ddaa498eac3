//! Fixed-size integer primitives.
//!
//! The SM2 schemes work exclusively with 256-bit non-negative integers, so
//! this module exposes a single [`BigInt256`] type with the schoolbook
//! arithmetic, modular helpers, and codecs those schemes need. It is not a
//! general big-integer library; widths other than 256 bits only ever appear
//! as the transient 512-bit product of a multiplication.

pub mod bigint256;

pub use bigint256::BigInt256;
