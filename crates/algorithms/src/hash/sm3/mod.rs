//! SM3 cryptographic hash function
//!
//! 256-bit Merkle–Damgård hash over 512-bit blocks. The padding matches
//! SHA-256; message expansion produces 68 + 64 words per block and the
//! compression runs 64 rounds whose boolean functions and round constant
//! switch at round 16.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use gmcrypt_common::security::{EphemeralSecret, ZeroizeGuard};
use gmcrypt_params::utils::hash::{SM3_BLOCK_SIZE, SM3_OUTPUT_SIZE, SM3_STATE_WORDS};

/// Initial chaining value
const IV: [u32; SM3_STATE_WORDS] = [
    0x7380166f, 0x4914b2b9, 0x172442d7, 0xda8a0600, 0xa96f30bc, 0x163138aa, 0xe38dee4d, 0xb0fb0e4e,
];

/// Round constant for rounds 0..16
const T_EARLY: u32 = 0x79cc4519;
/// Round constant for rounds 16..64
const T_LATE: u32 = 0x7a879d8a;

/// Marker type for the SM3 algorithm
pub enum Sm3Algorithm {}

impl HashAlgorithm for Sm3Algorithm {
    const OUTPUT_SIZE: usize = SM3_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SM3_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SM3";
}

/// SM3 hash function state
#[derive(Clone, Zeroize)]
pub struct Sm3 {
    state: [u32; SM3_STATE_WORDS],
    buffer: [u8; SM3_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sm3 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[inline(always)]
fn ff(x: u32, y: u32, z: u32, round: usize) -> u32 {
    if round < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (x & z) | (y & z)
    }
}

#[inline(always)]
fn gg(x: u32, y: u32, z: u32, round: usize) -> u32 {
    if round < 16 {
        x ^ y ^ z
    } else {
        (x & y) | (!x & z)
    }
}

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Round constant, already rotated by `round mod 32`
#[inline(always)]
fn t(round: usize) -> u32 {
    let base = if round < 16 { T_EARLY } else { T_LATE };
    base.rotate_left((round % 32) as u32)
}

impl Sm3 {
    fn init() -> Self {
        Sm3 {
            state: IV,
            buffer: [0u8; SM3_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn compress(state: &mut [u32; SM3_STATE_WORDS], block: &[u8; SM3_BLOCK_SIZE]) {
        let mut w = EphemeralSecret::new([0u32; 68]);
        let mut w1 = EphemeralSecret::new([0u32; 64]);

        for j in 0..16 {
            w[j] = BigEndian::read_u32(&block[j * 4..]);
        }
        for j in 16..68 {
            w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
                ^ w[j - 13].rotate_left(7)
                ^ w[j - 6];
        }
        for j in 0..64 {
            w1[j] = w[j] ^ w[j + 4];
        }

        let mut working_vars = *state;
        let mut guard = ZeroizeGuard::new(&mut working_vars);

        let mut a = guard[0];
        let mut b = guard[1];
        let mut c = guard[2];
        let mut d = guard[3];
        let mut e = guard[4];
        let mut f = guard[5];
        let mut g = guard[6];
        let mut h = guard[7];

        for j in 0..64 {
            let a12 = a.rotate_left(12);
            let ss1 = a12.wrapping_add(e).wrapping_add(t(j)).rotate_left(7);
            let ss2 = ss1 ^ a12;
            let tt1 = ff(a, b, c, j)
                .wrapping_add(d)
                .wrapping_add(ss2)
                .wrapping_add(w1[j]);
            let tt2 = gg(e, f, g, j)
                .wrapping_add(h)
                .wrapping_add(ss1)
                .wrapping_add(w[j]);

            d = c;
            c = b.rotate_left(9);
            b = a;
            a = tt1;
            h = g;
            g = f.rotate_left(19);
            f = e;
            e = p0(tt2);
        }

        guard[0] = a;
        guard[1] = b;
        guard[2] = c;
        guard[3] = d;
        guard[4] = e;
        guard[5] = f;
        guard[6] = g;
        guard[7] = h;

        // Feed-forward is XOR, not addition
        for (s, v) in state.iter_mut().zip(guard.iter()) {
            *s ^= *v;
        }
    }

    fn update_internal(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SM3_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            input = &input[fill..];
            if self.buffer_idx == SM3_BLOCK_SIZE {
                let block = self.buffer;
                Self::compress(&mut self.state, &block);
                self.total_bytes += SM3_BLOCK_SIZE as u64;
                self.buffer_idx = 0;
            }
        }
    }

    fn finalize_internal(&mut self) -> [u8; SM3_OUTPUT_SIZE] {
        self.total_bytes += self.buffer_idx as u64;
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.buffer[self.buffer_idx] = 0x80;
        if self.buffer_idx >= 56 {
            for b in &mut self.buffer[self.buffer_idx + 1..] {
                *b = 0;
            }
            let block = self.buffer;
            Self::compress(&mut self.state, &block);
            self.buffer = [0u8; SM3_BLOCK_SIZE];
        } else {
            for b in &mut self.buffer[self.buffer_idx + 1..56] {
                *b = 0;
            }
        }

        BigEndian::write_u64(&mut self.buffer[56..], bit_len);
        let block = self.buffer;
        Self::compress(&mut self.state, &block);

        let mut out = [0u8; SM3_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);

        // Dropping the old value wipes it
        *self = Self::init();
        out
    }
}

impl HashFunction for Sm3 {
    type Algorithm = Sm3Algorithm;
    type Output = Digest<SM3_OUTPUT_SIZE>;

    fn new() -> Self {
        Sm3::init()
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.update_internal(data);
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        Ok(Digest::new(self.finalize_internal()))
    }
}

/// One-shot SM3 over a byte string
pub fn sm3_hash(data: &[u8]) -> [u8; SM3_OUTPUT_SIZE] {
    let mut hasher = Sm3::init();
    hasher.update_internal(data);
    hasher.finalize_internal()
}

/// SM3 digest of raw bytes as lowercase hex
pub fn sm3_hex(data: &[u8]) -> String {
    hex::encode(sm3_hash(data))
}

/// SM3 digest of the UTF-8 encoding of `text` as lowercase hex
pub fn sm3_text(text: &str) -> String {
    sm3_hex(text.as_bytes())
}
