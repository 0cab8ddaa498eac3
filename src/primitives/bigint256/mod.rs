//! 256-bit unsigned integer primitive
//!
//! This module defines a fixed-size 256-bit unsigned integer type
//! (`BigInt256`) used as the numeric foundation of the SM2 elliptic-curve
//! layer.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases are:
//! - field elements modulo the SM2 prime,
//! - scalars modulo the curve order,
//! - conversion between hexadecimal wire strings and raw bytes.
//!
//! The internal representation is four 64-bit limbs in little-endian limb
//! order (`limbs[0]` least significant). Every value is fully reduced into
//! 256 bits; there is no sign. Operations either return new values or an
//! explicit carry/borrow bit, so overflow is always visible at the call
//! site.
//!
//! Arithmetic lives in [`arith`], codecs in [`conv`].

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

pub mod arith;
pub mod conv;

/// Fixed-size 256-bit unsigned integer.
///
/// Stored as `[u64; 4]` in little-endian limb order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BigInt256(pub(crate) [u64; 4]);

impl BigInt256 {
    /// The value zero.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// Returns `true` if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }

    /// Returns `true` if the value is one.
    pub fn is_one(&self) -> bool {
        self.0 == [1, 0, 0, 0]
    }

    /// Returns bit `i` (little-endian bit order).
    ///
    /// Indices at or beyond 256 read as zero.
    pub fn bit(&self, i: u32) -> bool {
        if i >= 256 {
            return false;
        }

        (self.0[(i / 64) as usize] >> (i % 64)) & 1 == 1
    }

    /// Returns the position of the highest set bit plus one.
    ///
    /// Zero has bit length 0.
    pub fn bit_length(&self) -> u32 {
        for i in (0..4).rev() {
            if self.0[i] != 0 {
                return (i as u32 + 1) * 64 - self.0[i].leading_zeros();
            }
        }

        0
    }
}

/// Magnitude comparison from the most significant limb downward.
impl Ord for BigInt256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..4).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for BigInt256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for BigInt256 {
    /// Formats the value as 64 uppercase hexadecimal characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(&self.to_hex())
    }
}
