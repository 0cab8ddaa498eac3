//! The SM4 block cipher in CBC mode.
//!
//! SM4 is a 128-bit block cipher with a 128-bit key and 32 rounds of an
//! unbalanced Feistel-like structure. This module drives it in CBC mode
//! with PKCS#7 padding and hexadecimal ciphertext, the way the SM2 suite's
//! peers exchange symmetric payloads.
//!
//! Constants (the S-box and the key-schedule tables) live in [`consts`];
//! the cipher context and the CBC layer live in [`core`].

pub mod consts;
pub mod core;
