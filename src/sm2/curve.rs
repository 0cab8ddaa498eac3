//! Elliptic-curve operations for SM2.
//!
//! The curve is the short Weierstrass curve `y² = x³ + ax + b` over the
//! SM2 prime field, with `a = p − 3`. Callers only ever see affine points
//! (or the group identity); doubling, mixed addition, and scalar
//! multiplication run internally on Jacobian coordinates so that a single
//! field inversion suffices per public operation.
//!
//! Scalar multiplication is a plain left-to-right double-and-add. It
//! branches on the bits of the scalar and is therefore not constant-time;
//! see the crate-level security notes.

use crate::primitives::BigInt256;
use crate::sm2::field::FpElement;
use crate::utils::{bytes_to_hex, hex_to_bytes};

/// Order of the prime-order subgroup generated by `G`.
pub(crate) const N: BigInt256 = BigInt256([
    0x53BBF40939D54123,
    0x7203DF6B21C6052B,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFEFFFFFFFF,
]);

/// Curve coefficient `a = p − 3`.
pub(crate) const A: FpElement = FpElement(BigInt256([
    0xFFFFFFFFFFFFFFFC,
    0xFFFFFFFF00000000,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFEFFFFFFFF,
]));

/// Curve coefficient `b`.
pub(crate) const B: FpElement = FpElement(BigInt256([
    0xDDBCBD414D940E93,
    0xF39789F515AB8F92,
    0x4D5A9E4BCF6509A7,
    0x28E9FA9E9D9F5E34,
]));

/// x-coordinate of the generator.
pub(crate) const GX: FpElement = FpElement(BigInt256([
    0x715A4589334C74C7,
    0x8FE30BBFF2660BE1,
    0x5F9904466A39C994,
    0x32C4AE2C1F198119,
]));

/// y-coordinate of the generator.
pub(crate) const GY: FpElement = FpElement(BigInt256([
    0x02DF32E52139F0A0,
    0xD0A9877CC62A4740,
    0x59BDCEE36B692153,
    0xBC3736A2F4F6779C,
]));

/// Affine point on the SM2 curve, or the group identity.
///
/// When `infinity` is set the coordinates are unspecified and must not be
/// interpreted.
#[derive(Copy, Clone, Debug)]
pub struct EcPoint {
    pub x: FpElement,
    pub y: FpElement,
    infinity: bool,
}

impl EcPoint {
    /// Builds a finite point from its coordinates.
    pub fn new(x: FpElement, y: FpElement) -> Self {
        Self { x, y, infinity: false }
    }

    /// The group identity ("point at infinity").
    pub fn infinity() -> Self {
        Self {
            x: FpElement::ZERO,
            y: FpElement::ZERO,
            infinity: true,
        }
    }

    /// The standard generator `G`.
    pub fn generator() -> Self {
        Self::new(GX, GY)
    }

    /// Returns `true` for the group identity.
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Decodes an uncompressed point from `"04" || X || Y` (130 hex
    /// characters).
    ///
    /// Any other encoding decodes to the identity; callers that require a
    /// valid point must follow up with [`EcPoint::is_on_curve`].
    pub fn from_hex(hex: &str) -> Self {
        if hex.len() < 2 {
            return Self::infinity();
        }

        let byte_len = hex.len() / 2;
        let data = hex_to_bytes(hex);

        if byte_len != 65 || data.len() != 65 || data[0] != 0x04 {
            return Self::infinity();
        }

        let x = FpElement::new(BigInt256::from_be_bytes(&data[1..33]));
        let y = FpElement::new(BigInt256::from_be_bytes(&data[33..65]));

        Self::new(x, y)
    }

    /// Encodes the point as `"04" || X || Y` lowercase hex, or `"00"` for
    /// the identity.
    pub fn to_hex(&self) -> String {
        if self.infinity {
            return String::from("00");
        }

        let mut encoded = [0u8; 65];
        encoded[0] = 0x04;
        encoded[1..33].copy_from_slice(&self.x.to_be_bytes());
        encoded[33..65].copy_from_slice(&self.y.to_be_bytes());

        bytes_to_hex(&encoded)
    }

    /// Checks the curve equation `y² = (x² + a)·x + b`.
    ///
    /// The identity is considered on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }

        let lhs = self.y.square();
        let rhs = (self.x.square() + A) * self.x + B;

        lhs == rhs
    }

    /// Adds two affine points.
    pub fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }

        JacobianPoint::from_affine(self).add_affine(other).to_affine()
    }

    /// Computes the scalar multiple `k·self`.
    ///
    /// Left-to-right double-and-add from the top bit of `k`. `k = 0` and
    /// the identity short-circuit to the identity; `k = 1` returns the
    /// point unchanged.
    pub fn multiply(&self, k: &BigInt256) -> Self {
        if k.is_zero() || self.infinity {
            return Self::infinity();
        }
        if k.is_one() {
            return *self;
        }

        let mut acc = JacobianPoint::identity();

        for i in (0..k.bit_length()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add_affine(self);
            }
        }

        acc.to_affine()
    }
}

/// Equality of group elements; the identity only equals itself.
impl PartialEq for EcPoint {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity || other.infinity {
            return self.infinity == other.infinity;
        }

        self.x == other.x && self.y == other.y
    }
}

impl Eq for EcPoint {}

/// Jacobian-coordinate point `(X, Y, Z)` representing affine
/// `(X/Z², Y/Z³)`; `Z = 0` encodes the identity.
#[derive(Copy, Clone)]
struct JacobianPoint {
    x: FpElement,
    y: FpElement,
    z: FpElement,
}

impl JacobianPoint {
    fn identity() -> Self {
        Self {
            x: FpElement::ONE,
            y: FpElement::ONE,
            z: FpElement::ZERO,
        }
    }

    fn from_affine(p: &EcPoint) -> Self {
        if p.infinity {
            return Self::identity();
        }

        Self {
            x: p.x,
            y: p.y,
            z: FpElement::ONE,
        }
    }

    fn to_affine(&self) -> EcPoint {
        if self.z.is_zero() {
            return EcPoint::infinity();
        }

        let z_inv = self.z.invert();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;

        EcPoint::new(self.x * z_inv2, self.y * z_inv3)
    }

    /// Point doubling (`dbl-2001-b`), valid because `a = −3 mod p`.
    fn double(&self) -> Self {
        if self.z.is_zero() || self.y.is_zero() {
            return Self::identity();
        }

        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x * gamma;

        // alpha = 3 * (X - delta) * (X + delta)
        let alpha = ((self.x - delta) * (self.x + delta)).triple();

        // X3 = alpha^2 - 8 * beta
        let beta8 = beta.double().double().double();
        let x3 = alpha.square() - beta8;

        // Z3 = (Y + Z)^2 - gamma - delta
        let z3 = (self.y + self.z).square() - gamma - delta;

        // Y3 = alpha * (4 * beta - X3) - 8 * gamma^2
        let beta4 = beta.double().double();
        let gamma_sq8 = gamma.square().double().double().double();
        let y3 = alpha * (beta4 - x3) - gamma_sq8;

        Self { x: x3, y: y3, z: z3 }
    }

    /// Mixed addition of a Jacobian point and an affine point.
    fn add_affine(&self, q: &EcPoint) -> Self {
        if q.infinity {
            return *self;
        }
        if self.z.is_zero() {
            return Self::from_affine(q);
        }

        let z1z1 = self.z.square();
        let u2 = q.x * z1z1;
        let s2 = q.y * self.z * z1z1;
        let h = u2 - self.x;
        let r = s2 - self.y;

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return Self::identity();
        }

        let hh = h.square();
        let hhh = hh * h;
        let v = self.x * hh;

        let x3 = r.square() - hhh - v.double();
        let y3 = r * (v - x3) - self.y * hhh;
        let z3 = self.z * h;

        Self { x: x3, y: y3, z: z3 }
    }
}
