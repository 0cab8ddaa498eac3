//! SM3 block compression
//!
//! This module implements the compression function at the heart of SM3 as
//! defined in GB/T 32905: message expansion of a 64-byte block into the
//! `W` and `W'` schedules, followed by 64 rounds over the eight-word
//! state.
//!
//! All word arithmetic is modulo 2³², expressed with `wrapping_add`.

/// Initial state of the hash (the standard's IV).
pub(crate) const IV: [u32; 8] = [
    0x7380166F, 0x4914B2B9, 0x172442D7, 0xDA8A0600,
    0xA96F30BC, 0x163138AA, 0xE38DEE4D, 0xB0FB0E4E,
];

#[inline(always)]
fn ff(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline(always)]
fn gg(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

/// Permutation applied to `TT2` before it enters the state.
#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

/// Permutation used in the message expansion.
#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Compresses a single 512-bit message block into the running state.
///
/// The first 16 rounds use the XOR boolean functions and the round
/// constant `0x79CC4519`; the remaining 48 use the majority/choose
/// functions and `0x7A879D8A`, each rotated by the round index. After the
/// 64 rounds the working variables are XOR-folded back into the state.
pub(crate) fn compress(state: &mut [u32; 8], block: &[u8; 64]) {
    // Message expansion
    let mut w = [0u32; 68];
    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *slot = u32::from_be_bytes(chunk.try_into().unwrap());
    }
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w2 = [0u32; 64];
    for j in 0..64 {
        w2[j] = w[j] ^ w[j + 4];
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for j in 0..64 {
        let a12 = a.rotate_left(12);
        let tj = if j < 16 {
            0x79CC4519u32.rotate_left(j)
        } else {
            0x7A879D8Au32.rotate_left(j % 32)
        };
        let ss1 = a12.wrapping_add(e).wrapping_add(tj).rotate_left(7);
        let ss2 = ss1 ^ a12;

        let (tt1, tt2) = if j < 16 {
            (
                (a ^ b ^ c)
                    .wrapping_add(d)
                    .wrapping_add(ss2)
                    .wrapping_add(w2[j as usize]),
                (e ^ f ^ g)
                    .wrapping_add(h)
                    .wrapping_add(ss1)
                    .wrapping_add(w[j as usize]),
            )
        } else {
            (
                ff(a, b, c)
                    .wrapping_add(d)
                    .wrapping_add(ss2)
                    .wrapping_add(w2[j as usize]),
                gg(e, f, g)
                    .wrapping_add(h)
                    .wrapping_add(ss1)
                    .wrapping_add(w[j as usize]),
            )
        };

        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    state[0] ^= a;
    state[1] ^= b;
    state[2] ^= c;
    state[3] ^= d;
    state[4] ^= e;
    state[5] ^= f;
    state[6] ^= g;
    state[7] ^= h;
}
