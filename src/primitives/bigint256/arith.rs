//! Arithmetic on `BigInt256`
//!
//! This module implements the schoolbook arithmetic and the modular helpers
//! the SM2 layer is built on:
//!
//! - limb-wise addition and subtraction with an explicit carry/borrow bit,
//! - the full 512-bit product of two 256-bit values,
//! - generic reduction of a 512-bit value by an arbitrary 256-bit modulus
//!   (shift-and-subtract long division),
//! - modular addition, subtraction, multiplication, exponentiation, and
//!   inversion via Fermat's little theorem.
//!
//! The modular add/sub routines assume both operands are already reduced
//! into `[0, m)`; a single conditional correction then suffices. The
//! generic reduction makes no such assumption and handles any 512-bit
//! input.

use crate::primitives::bigint256::BigInt256;

use std::ops::BitAnd;

/// Adds two limbs and an incoming carry, returning the sum and the
/// outgoing carry.
#[inline(always)]
fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let (s, c1) = a.overflowing_add(b);
    let (r, c2) = s.overflowing_add(carry);

    (r, c1 as u64 + c2 as u64)
}

/// Subtracts a limb and an incoming borrow, returning the difference and
/// the outgoing borrow.
#[inline(always)]
fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let (d, b1) = a.overflowing_sub(b);
    let (r, b2) = d.overflowing_sub(borrow);

    (r, b1 as u64 + b2 as u64)
}

impl BigInt256 {
    /// Adds `rhs`, returning the 256-bit sum and the carry out of bit 255.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;

        for i in 0..4 {
            let (limb, c) = adc(self.0[i], rhs.0[i], carry);
            out[i] = limb;
            carry = c;
        }

        (Self(out), carry != 0)
    }

    /// Subtracts `rhs`, returning the 256-bit difference and the borrow
    /// out of bit 255.
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = 0u64;

        for i in 0..4 {
            let (limb, b) = sbb(self.0[i], rhs.0[i], borrow);
            out[i] = limb;
            borrow = b;
        }

        (Self(out), borrow != 0)
    }

    /// Computes the full 512-bit product `self * rhs`.
    ///
    /// The result is returned as eight 64-bit limbs in little-endian limb
    /// order. Each partial product is accumulated through a 128-bit
    /// intermediate, so no carries are lost.
    pub fn widening_mul(&self, rhs: &Self) -> [u64; 8] {
        let mut out = [0u64; 8];

        for i in 0..4 {
            let mut carry = 0u64;

            for j in 0..4 {
                let t = self.0[i] as u128 * rhs.0[j] as u128
                    + out[i + j] as u128
                    + carry as u128;
                out[i + j] = t as u64;
                carry = (t >> 64) as u64;
            }

            out[i + 4] = carry;
        }

        out
    }

    /// Modular addition. Both operands must already be in `[0, m)`.
    pub fn mod_add(&self, rhs: &Self, modulus: &Self) -> Self {
        let (sum, carry) = self.overflowing_add(rhs);

        if carry || sum >= *modulus {
            sum.overflowing_sub(modulus).0
        } else {
            sum
        }
    }

    /// Modular subtraction. Both operands must already be in `[0, m)`.
    pub fn mod_sub(&self, rhs: &Self, modulus: &Self) -> Self {
        let (diff, borrow) = self.overflowing_sub(rhs);

        if borrow {
            diff.overflowing_add(modulus).0
        } else {
            diff
        }
    }

    /// Modular multiplication via the generic 512-bit reduction.
    pub fn mod_mul(&self, rhs: &Self, modulus: &Self) -> Self {
        Self::reduce_wide(&self.widening_mul(rhs), modulus)
    }

    /// Modular exponentiation, right-to-left square-and-multiply.
    ///
    /// A zero exponent yields one regardless of the base.
    pub fn mod_pow(&self, exp: &Self, modulus: &Self) -> Self {
        if exp.is_zero() {
            return Self::ONE;
        }

        let mut result = Self::ONE;
        let mut base = *self;

        for i in 0..exp.bit_length() {
            if exp.bit(i) {
                result = result.mod_mul(&base, modulus);
            }

            base = base.mod_mul(&base, modulus);
        }

        result
    }

    /// Modular inverse via Fermat's little theorem: `self^(m-2) mod m`.
    ///
    /// Only valid when `m` is prime and `self` is not a multiple of `m`.
    pub fn mod_inverse(&self, modulus: &Self) -> Self {
        let two = Self([2, 0, 0, 0]);
        let exp = modulus.overflowing_sub(&two).0;

        self.mod_pow(&exp, modulus)
    }

    /// Reduces a 512-bit value by a 256-bit modulus.
    ///
    /// Plain shift-and-subtract long division: for each shift `s` from
    /// `bits(value) - bits(modulus)` down to zero, subtract `modulus << s`
    /// whenever the remainder still dominates it. On exit the remainder
    /// fits in 256 bits.
    ///
    /// A zero modulus yields zero; division by zero is not meaningful and
    /// this is the documented escape hatch rather than a panic.
    pub fn reduce_wide(value: &[u64; 8], modulus: &Self) -> Self {
        let mut remainder = *value;

        let dividend_bits = wide_bit_length(value);
        let modulus_bits = modulus.bit_length();

        if modulus_bits == 0 {
            return Self::ZERO;
        }

        if dividend_bits < modulus_bits {
            return Self([remainder[0], remainder[1], remainder[2], remainder[3]]);
        }

        for shift in (0..=dividend_bits - modulus_bits).rev() {
            let shifted = wide_shift_left(&modulus.0, shift);

            if wide_cmp(&remainder, &shifted) != std::cmp::Ordering::Less {
                wide_sub_assign(&mut remainder, &shifted);
            }
        }

        Self([remainder[0], remainder[1], remainder[2], remainder[3]])
    }
}

impl BitAnd for BigInt256 {
    type Output = BigInt256;

    fn bitand(self, rhs: Self) -> Self::Output {
        BigInt256([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
            self.0[3] & rhs.0[3],
        ])
    }
}

fn wide_bit_length(value: &[u64; 8]) -> u32 {
    for i in (0..8).rev() {
        if value[i] != 0 {
            return (i as u32 + 1) * 64 - value[i].leading_zeros();
        }
    }

    0
}

fn wide_cmp(a: &[u64; 8], b: &[u64; 8]) -> std::cmp::Ordering {
    for i in (0..8).rev() {
        match a[i].cmp(&b[i]) {
            std::cmp::Ordering::Equal => continue,
            unequal => return unequal,
        }
    }

    std::cmp::Ordering::Equal
}

fn wide_sub_assign(a: &mut [u64; 8], b: &[u64; 8]) {
    let mut borrow = 0u64;

    for i in 0..8 {
        let (limb, out) = sbb(a[i], b[i], borrow);
        a[i] = limb;
        borrow = out;
    }
}

/// Shifts a 256-bit value left by up to 511 bits into a 512-bit result.
fn wide_shift_left(value: &[u64; 4], shift: u32) -> [u64; 8] {
    let mut out = [0u64; 8];

    if shift == 0 {
        out[..4].copy_from_slice(value);
        return out;
    }

    let word_shift = (shift / 64) as usize;
    let bit_shift = shift % 64;

    for i in 0..4 {
        if bit_shift == 0 {
            if i + word_shift < 8 {
                out[i + word_shift] = value[i];
            }
        } else {
            if i + word_shift < 8 {
                out[i + word_shift] |= value[i] << bit_shift;
            }
            if i + word_shift + 1 < 8 {
                out[i + word_shift + 1] |= value[i] >> (64 - bit_shift);
            }
        }
    }

    out
}
