//! SM4-CBC cipher context
//!
//! The context holds the 32 expanded round keys and the 16-byte IV. Both
//! the key and the IV pass through the same preparation rule before the
//! schedule runs: a buffer of exactly 16 bytes is used verbatim, anything
//! else is hashed with SM3 and the **first 16 characters of the uppercase
//! hex digest** are reinterpreted as the 16 raw bytes. The hex characters
//! are not decoded back to bytes; interoperating implementations must
//! replicate this rule bit for bit.
//!
//! Encryption pads with PKCS#7 (always at least one byte), chains blocks
//! in CBC mode starting from the stored IV, and emits lowercase hex.
//! Decryption reverses the chain and validates the padding. Both directions
//! operate on complete buffers; there is no streaming interface.

use crate::encryption::sm4::consts::{CK, FK, SBOX};
use crate::hash::sm3::core::Sm3;
use crate::utils::{bytes_to_hex, hex_to_bytes};

/// Errors that can occur during SM4-CBC decryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sm4Error {
    /// The ciphertext does not decode to a whole number of blocks.
    InvalidLength,
    /// The PKCS#7 padding of the final block is malformed.
    InvalidPadding,
}

/// Byte-wise S-box substitution over a 32-bit word.
#[inline(always)]
fn tau(a: u32) -> u32 {
    (SBOX[(a >> 24) as usize] as u32) << 24
        | (SBOX[(a >> 16 & 0xFF) as usize] as u32) << 16
        | (SBOX[(a >> 8 & 0xFF) as usize] as u32) << 8
        | SBOX[(a & 0xFF) as usize] as u32
}

/// Linear diffusion of the round function.
#[inline(always)]
fn l(b: u32) -> u32 {
    b ^ b.rotate_left(2) ^ b.rotate_left(10) ^ b.rotate_left(18) ^ b.rotate_left(24)
}

/// Linear diffusion of the key schedule.
#[inline(always)]
fn l_prime(b: u32) -> u32 {
    b ^ b.rotate_left(13) ^ b.rotate_left(23)
}

/// Round function: `X0 ⊕ L(τ(X1 ⊕ X2 ⊕ X3 ⊕ rk))`.
#[inline(always)]
fn round(x0: u32, x1: u32, x2: u32, x3: u32, rk: u32) -> u32 {
    x0 ^ l(tau(x1 ^ x2 ^ x3 ^ rk))
}

/// Normalizes a key or IV buffer to exactly 16 bytes.
fn prepare_key(input: &[u8]) -> [u8; 16] {
    if input.len() == 16 {
        return input.try_into().unwrap();
    }

    let mut hasher = Sm3::new();
    hasher.update(input);
    hasher.finish();

    // First 16 hex characters of the digest, taken as raw ASCII bytes.
    let mut out = [0u8; 16];
    out.copy_from_slice(&hasher.digest_hex().as_bytes()[..16]);
    out
}

fn load_words(block: &[u8; 16]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    words
}

fn store_words(words: &[u32; 4]) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (chunk, word) in out.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// SM4 cipher context bound to a key and an IV.
pub struct Sm4 {
    rk: [u32; 32],
    iv: [u8; 16],
}

impl Sm4 {
    /// Builds a context from a key and IV of any length.
    ///
    /// Both buffers go through the SM3 preparation rule described in the
    /// module documentation before the key schedule runs.
    pub fn new(key: &[u8], iv: &[u8]) -> Self {
        let key = prepare_key(key);
        let iv = prepare_key(iv);

        let mut k = [0u32; 36];
        for i in 0..4 {
            k[i] = u32::from_be_bytes(key[i * 4..i * 4 + 4].try_into().unwrap()) ^ FK[i];
        }

        let mut rk = [0u32; 32];
        for i in 0..32 {
            k[i + 4] = k[i] ^ l_prime(tau(k[i + 1] ^ k[i + 2] ^ k[i + 3] ^ CK[i]));
            rk[i] = k[i + 4];
        }

        Self { rk, iv }
    }

    /// Encrypts one block after XOR with the CBC chaining value.
    fn encrypt_block_cbc(&self, block: &[u8; 16], chain: &[u8; 16]) -> [u8; 16] {
        let mut mixed = [0u8; 16];
        for i in 0..16 {
            mixed[i] = block[i] ^ chain[i];
        }

        let mut x = [0u32; 36];
        x[..4].copy_from_slice(&load_words(&mixed));
        for i in 0..32 {
            x[i + 4] = round(x[i], x[i + 1], x[i + 2], x[i + 3], self.rk[i]);
        }

        store_words(&[x[35], x[34], x[33], x[32]])
    }

    /// Decrypts one block and XORs the CBC chaining value back out.
    fn decrypt_block_cbc(&self, block: &[u8; 16], chain: &[u8; 16]) -> [u8; 16] {
        let mut x = [0u32; 36];
        x[..4].copy_from_slice(&load_words(block));
        for i in 0..32 {
            x[i + 4] = round(x[i], x[i + 1], x[i + 2], x[i + 3], self.rk[31 - i]);
        }

        let raw = store_words(&[x[35], x[34], x[33], x[32]]);
        let mut out = [0u8; 16];
        for i in 0..16 {
            out[i] = raw[i] ^ chain[i];
        }
        out
    }

    /// Encrypts a complete plaintext, returning the ciphertext as
    /// lowercase hex.
    pub fn encrypt(&self, plaintext: &[u8]) -> String {
        let mut padded = plaintext.to_vec();
        let pad = 16 - padded.len() % 16;
        padded.extend(std::iter::repeat_n(pad as u8, pad));

        let mut out = Vec::with_capacity(padded.len());
        let mut chain = self.iv;

        for block in padded.chunks_exact(16) {
            let cipher = self.encrypt_block_cbc(block.try_into().unwrap(), &chain);
            out.extend_from_slice(&cipher);
            chain = cipher;
        }

        bytes_to_hex(&out)
    }

    /// Decrypts a complete hex-encoded ciphertext and strips the padding.
    pub fn decrypt(&self, ciphertext_hex: &str) -> Result<Vec<u8>, Sm4Error> {
        let input = hex_to_bytes(ciphertext_hex);
        if input.len() % 16 != 0 {
            return Err(Sm4Error::InvalidLength);
        }

        let mut out = Vec::with_capacity(input.len());
        let mut chain = self.iv;

        for block in input.chunks_exact(16) {
            let block: &[u8; 16] = block.try_into().unwrap();
            out.extend_from_slice(&self.decrypt_block_cbc(block, &chain));
            chain = *block;
        }

        unpad(&mut out)?;
        Ok(out)
    }
}

/// Validates and removes PKCS#7 padding in place.
fn unpad(data: &mut Vec<u8>) -> Result<(), Sm4Error> {
    let Some(&pad) = data.last() else {
        return Ok(());
    };

    let pad = pad as usize;
    if pad == 0 || pad > 16 || pad > data.len() {
        return Err(Sm4Error::InvalidPadding);
    }

    if data[data.len() - pad..].iter().any(|&b| b != pad as u8) {
        return Err(Sm4Error::InvalidPadding);
    }

    data.truncate(data.len() - pad);
    Ok(())
}
