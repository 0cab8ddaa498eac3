//! SM2 key-pair generation.

use crate::os::sys_random;
use crate::primitives::BigInt256;
use crate::sm2::curve::{EcPoint, N};

/// A freshly generated key pair in wire form.
///
/// The private key is 64 lowercase hex characters; the public key is the
/// 130-character uncompressed point encoding.
pub struct Keypair {
    pub private_hex: String,
    pub public_hex: String,
}

/// Draws a uniformly random scalar in `[1, n)`.
///
/// Each draw reads 32 fresh bytes from the operating system RNG;
/// out-of-range values are rejected and redrawn rather than reduced, so
/// the distribution stays uniform.
pub(crate) fn random_scalar() -> BigInt256 {
    loop {
        let mut bytes = [0u8; 32];
        sys_random(&mut bytes);

        let candidate = BigInt256::from_be_bytes(&bytes);
        if !candidate.is_zero() && candidate < N {
            return candidate;
        }
    }
}

/// Computes the public key `d·G` for a private scalar.
pub fn public_from_private(private_key: &BigInt256) -> EcPoint {
    EcPoint::generator().multiply(private_key)
}

/// Generates a new key pair from the operating system RNG.
pub fn generate_keypair() -> Keypair {
    let private = random_scalar();
    let public = public_from_private(&private);

    Keypair {
        private_hex: private.to_hex_lower(),
        public_hex: public.to_hex(),
    }
}
