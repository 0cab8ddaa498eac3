//! Finite field arithmetic for the SM2 curve.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁶ − 2²²⁴ − 2⁹⁶ + 2⁶⁴ − 1
//! ```
//!
//! over which the SM2 curve is defined.
//!
//! ## Representation
//!
//! A field element is a [`BigInt256`] kept fully reduced into `[0, p)`.
//! Unlike limb-packed representations with deferred carries, every
//! operation here returns a canonical representative, so equality is plain
//! value equality.
//!
//! ## Reduction strategy
//!
//! `p` is a Solinas prime: `2²⁵⁶ ≡ 2²²⁴ + 2⁹⁶ − 2⁶⁴ + 1 (mod p)`, so the
//! high half of a 512-bit product folds into the low half through a fixed
//! linear combination of its 32-bit words. Multiplication and squaring use
//! this table-driven fold; addition and subtraction need only a single
//! conditional correction. Inversion is Fermat's little theorem
//! (`a^(p−2)`), evaluated with the same fast reduction rather than the
//! generic division-based one.
//!
//! ## Constant-time behavior
//!
//! None claimed. Reduction branches on the value being reduced and
//! inversion branches on exponent bits; see the crate-level security notes.

use crate::primitives::BigInt256;

use std::ops::{Add, Mul, Neg, Sub};

/// The SM2 base-field prime.
pub(crate) const P: BigInt256 = BigInt256([
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFF00000000,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFEFFFFFFFF,
]);

/// How each 32-bit word of the high half of a product folds into the
/// eight output words. Row `i` belongs to input word `c[i + 8]`, column
/// `j` to output word `j`.
const FOLD: [[i64; 8]; 8] = [
    [1, 0, -1, 1, 0, 0, 0, 1],
    [1, 1, -1, 0, 1, 0, 0, 1],
    [1, 1, 0, 0, 0, 1, 0, 1],
    [1, 1, 0, 1, 0, 0, 1, 1],
    [1, 1, 0, 1, 1, 0, 0, 2],
    [2, 1, -1, 2, 1, 1, 0, 2],
    [2, 2, -1, 1, 2, 1, 1, 2],
    [2, 2, 0, 1, 1, 2, 1, 3],
];

/// Propagates signed 32-bit carries from low words to high.
fn propagate(acc: &mut [i64; 9]) {
    for i in 0..8 {
        let carry = acc[i] >> 32;
        acc[i] &= 0xFFFF_FFFF;
        acc[i + 1] += carry;
    }
}

/// Folds a residual multiple of 2²⁵⁶ back into the low words using
/// `2²⁵⁶ ≡ 2²²⁴ + 2⁹⁶ − 2⁶⁴ + 1 (mod p)`.
fn fold_overflow(acc: &mut [i64; 9], overflow: i64) {
    acc[0] += overflow;
    acc[2] -= overflow;
    acc[3] += overflow;
    acc[7] += overflow;
    acc[8] = 0;
}

/// Reduces a 512-bit product modulo `p` via the Solinas fold.
///
/// Two residual folds suffice for any input produced by a single 256×256
/// multiplication; after them the accumulator is non-negative word by
/// word once borrows are resolved, and at most a few final subtractions
/// of `p` canonicalize the result.
fn reduce_wide_p(value: &[u64; 8]) -> BigInt256 {
    let word = |i: usize| -> i64 {
        if i % 2 == 0 {
            (value[i / 2] & 0xFFFF_FFFF) as i64
        } else {
            (value[i / 2] >> 32) as i64
        }
    };

    let mut acc = [0i64; 9];
    for j in 0..8 {
        acc[j] = word(j);
        for i in 0..8 {
            acc[j] += word(i + 8) * FOLD[i][j];
        }
    }

    propagate(&mut acc);

    if acc[8] != 0 {
        let overflow = acc[8];
        fold_overflow(&mut acc, overflow);
        propagate(&mut acc);

        if acc[8] != 0 {
            let overflow = acc[8];
            fold_overflow(&mut acc, overflow);
            propagate(&mut acc);
        }
    }

    // Resolve remaining negative words by borrowing from the next one up.
    for i in 0..8 {
        while acc[i] < 0 {
            acc[i] += 1 << 32;
            acc[i + 1] -= 1;
        }
    }

    let mut result = BigInt256([
        (acc[0] as u64 & 0xFFFF_FFFF) | (acc[1] as u64) << 32,
        (acc[2] as u64 & 0xFFFF_FFFF) | (acc[3] as u64) << 32,
        (acc[4] as u64 & 0xFFFF_FFFF) | (acc[5] as u64) << 32,
        (acc[6] as u64 & 0xFFFF_FFFF) | (acc[7] as u64) << 32,
    ]);

    while result >= P {
        result = result.overflowing_sub(&P).0;
    }

    result
}

/// Multiplies two reduced values modulo `p`.
fn mul_mod_p(a: &BigInt256, b: &BigInt256) -> BigInt256 {
    reduce_wide_p(&a.widening_mul(b))
}

/// Field element modulo the SM2 prime, always fully reduced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FpElement(pub(crate) BigInt256);

impl FpElement {
    /// The additive identity.
    pub const ZERO: Self = FpElement(BigInt256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = FpElement(BigInt256::ONE);

    /// Wraps a value, reducing by one conditional subtraction of `p`.
    ///
    /// The caller must pass `v < 2p`; any 256-bit value coming from the
    /// codecs satisfies this because `p > 2²⁵⁵`. Values from arbitrary
    /// arithmetic must go through the generic reduction first.
    pub fn new(v: BigInt256) -> Self {
        if v >= P {
            FpElement(v.overflowing_sub(&P).0)
        } else {
            FpElement(v)
        }
    }

    /// Parses a hexadecimal string and reduces it into the field.
    pub fn from_hex(s: &str) -> Self {
        Self::new(BigInt256::from_hex(s))
    }

    /// Returns `true` if this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// The reduced integer representative of this element.
    pub fn value(&self) -> BigInt256 {
        self.0
    }

    /// Exports the element as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    /// Computes `self²` using the Solinas reduction.
    pub fn square(&self) -> Self {
        FpElement(mul_mod_p(&self.0, &self.0))
    }

    /// Computes `2·self` as a single field addition.
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Computes `3·self` as two field additions.
    pub fn triple(&self) -> Self {
        self.double() + *self
    }

    /// Computes the multiplicative inverse via Fermat's little theorem.
    ///
    /// Evaluates `self^(p−2)` right-to-left over the exponent bits with
    /// the fast reduction. The inverse of zero is zero.
    pub fn invert(&self) -> Self {
        let exp = P.overflowing_sub(&BigInt256([2, 0, 0, 0])).0;

        let mut result = BigInt256::ONE;
        let mut base = self.0;

        for i in 0..exp.bit_length() {
            if exp.bit(i) {
                result = mul_mod_p(&result, &base);
            }

            base = mul_mod_p(&base, &base);
        }

        FpElement(result)
    }
}

impl Add for FpElement {
    type Output = FpElement;

    fn add(self, rhs: Self) -> Self::Output {
        FpElement(self.0.mod_add(&rhs.0, &P))
    }
}

impl Sub for FpElement {
    type Output = FpElement;

    fn sub(self, rhs: Self) -> Self::Output {
        FpElement(self.0.mod_sub(&rhs.0, &P))
    }
}

impl Mul for FpElement {
    type Output = FpElement;

    fn mul(self, rhs: Self) -> Self::Output {
        FpElement(mul_mod_p(&self.0, &rhs.0))
    }
}

impl Neg for FpElement {
    type Output = FpElement;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            self
        } else {
            FpElement(P.overflowing_sub(&self.0).0)
        }
    }
}
