//! User-identity pre-hash
//!
//! Every SM2 signature and key-exchange run binds a user identifier to a
//! public key through the digest
//!
//! ```text
//! Z = SM3(ENTL || ID || a || b || Gx || Gy || xA || yA)
//! ```
//!
//! where `ENTL` is the **bit** length of the identifier as two big-endian
//! bytes and all curve parameters and coordinates are 32-byte big-endian.

use crate::hash::sm3::core::Sm3;
use crate::sm2::curve::{A, B, EcPoint, GX, GY};

/// Computes the identity digest `Z` for a user and their public key.
pub(crate) fn identity_digest(user_id: &str, public_key: &EcPoint) -> [u8; 32] {
    let mut hasher = Sm3::new();

    let entl = (user_id.len() * 8) as u16;
    hasher.update(&entl.to_be_bytes());
    hasher.update(user_id.as_bytes());

    hasher.update(&A.to_be_bytes());
    hasher.update(&B.to_be_bytes());
    hasher.update(&GX.to_be_bytes());
    hasher.update(&GY.to_be_bytes());
    hasher.update(&public_key.x.to_be_bytes());
    hasher.update(&public_key.y.to_be_bytes());

    hasher.finish()
}
