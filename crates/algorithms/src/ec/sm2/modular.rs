//! Fixed-width 256-bit integers and modular arithmetic
//!
//! Both SM2 moduli (the field prime `p` and the group order `n`) exceed
//! 2²⁵⁵, so a 512-bit product is reduced by repeatedly folding the high
//! half with `c = 2²⁵⁶ − m` and finishing with one conditional subtraction.

use core::cmp::Ordering;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// Number of 32-bit limbs in a [`U256`]
pub(crate) const NLIMBS: usize = 8;

/// Unsigned 256-bit integer stored as eight little-endian 32-bit limbs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Zeroize)]
pub struct U256(pub(crate) [u32; NLIMBS]);

impl U256 {
    /// The value 0
    pub const ZERO: Self = U256([0; NLIMBS]);

    /// The value 1
    pub const ONE: Self = U256([1, 0, 0, 0, 0, 0, 0, 0]);

    /// Build from a small literal
    pub const fn from_u32(n: u32) -> Self {
        U256([n, 0, 0, 0, 0, 0, 0, 0])
    }

    /// Parse a 32-byte big-endian encoding
    pub const fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u32; NLIMBS];
        let mut i = 0;
        while i < NLIMBS {
            let off = (NLIMBS - 1 - i) * 4;
            limbs[i] =
                u32::from_be_bytes([bytes[off], bytes[off + 1], bytes[off + 2], bytes[off + 3]]);
            i += 1;
        }
        U256(limbs)
    }

    /// Parse a big-endian slice of exactly 32 bytes
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        validate::length("U256", bytes.len(), 32)?;
        let mut buf = [0u8; 32];
        buf.copy_from_slice(bytes);
        Ok(Self::from_be_bytes(&buf))
    }

    /// Serialize as 32 big-endian bytes
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (i, limb) in self.0.iter().enumerate() {
            let off = (NLIMBS - 1 - i) * 4;
            out[off..off + 4].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Is this zero?
    pub fn is_zero(&self) -> bool {
        self.0.iter().fold(0u32, |acc, &w| acc | w) == 0
    }

    /// Is the lowest bit set?
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Bit `i`, counting from the least significant bit
    pub fn bit(&self, i: usize) -> bool {
        i < 256 && (self.0[i / 32] >> (i % 32)) & 1 == 1
    }

    /// Position of the highest set bit plus one; zero for zero
    pub fn bits(&self) -> usize {
        for i in (0..NLIMBS).rev() {
            if self.0[i] != 0 {
                return i * 32 + (32 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Addition with carry out
    pub(crate) const fn adc(&self, other: &Self) -> (Self, u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = 0u64;
        let mut i = 0;
        while i < NLIMBS {
            let tmp = self.0[i] as u64 + other.0[i] as u64 + carry;
            r[i] = tmp as u32;
            carry = tmp >> 32;
            i += 1;
        }
        (U256(r), carry as u32)
    }

    /// Subtraction with borrow out
    pub(crate) const fn sbb(&self, other: &Self) -> (Self, u32) {
        let mut r = [0u32; NLIMBS];
        let mut borrow = 0u64;
        let mut i = 0;
        while i < NLIMBS {
            let ai = self.0[i] as u64;
            let bi = other.0[i] as u64 + borrow;
            r[i] = ai.wrapping_sub(bi) as u32;
            borrow = (ai < bi) as u64;
            i += 1;
        }
        (U256(r), borrow as u32)
    }

    /// Shift right by one, moving `top` into bit 255
    pub(crate) fn shr1(&self, top: u32) -> Self {
        let mut r = [0u32; NLIMBS];
        for i in 0..NLIMBS {
            let hi = if i + 1 < NLIMBS { self.0[i + 1] } else { top & 1 };
            r[i] = (self.0[i] >> 1) | (hi << 31);
        }
        U256(r)
    }

    /// Shift left by one, inserting `low` into bit 0; returns the bit shifted out
    pub(crate) fn shl1(&self, low: u32) -> (Self, u32) {
        let mut r = [0u32; NLIMBS];
        let mut carry = low & 1;
        for i in 0..NLIMBS {
            r[i] = (self.0[i] << 1) | carry;
            carry = self.0[i] >> 31;
        }
        (U256(r), carry)
    }

    /// Full 256×256 → 512-bit schoolbook product, little-endian limbs
    pub(crate) fn mul_wide(&self, other: &Self) -> [u32; 2 * NLIMBS] {
        let mut out = [0u32; 2 * NLIMBS];
        for i in 0..NLIMBS {
            let mut carry = 0u64;
            for j in 0..NLIMBS {
                let tmp = self.0[i] as u64 * other.0[j] as u64 + out[i + j] as u64 + carry;
                out[i + j] = tmp as u32;
                carry = tmp >> 32;
            }
            out[i + NLIMBS] = carry as u32;
        }
        out
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..NLIMBS).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A modulus above 2²⁵⁵ with its folding constant `2²⁵⁶ − m`
#[derive(Clone, Copy, Debug)]
pub(crate) struct Modulus {
    pub(crate) m: U256,
    c: U256,
}

impl Modulus {
    pub(crate) const fn new(m: U256) -> Self {
        let (c, _) = U256::ZERO.sbb(&m);
        Modulus { m, c }
    }

    /// Reduce any 256-bit value into `[0, m)`
    pub(crate) fn reduce(&self, a: &U256) -> U256 {
        let (sub, borrow) = a.sbb(&self.m);
        if borrow == 0 {
            sub
        } else {
            *a
        }
    }

    /// Reduce a 512-bit product into `[0, m)`
    pub(crate) fn reduce_wide(&self, wide: &[u32; 2 * NLIMBS]) -> U256 {
        let mut lo = [0u32; NLIMBS];
        let mut hi = [0u32; NLIMBS];
        lo.copy_from_slice(&wide[..NLIMBS]);
        hi.copy_from_slice(&wide[NLIMBS..]);
        let mut lo = U256(lo);
        let mut hi = U256(hi);

        // hi·2²⁵⁶ ≡ hi·c (mod m); each pass shrinks hi by the 2³² gap above c
        while !hi.is_zero() {
            let folded = hi.mul_wide(&self.c);
            let mut next = [0u32; 2 * NLIMBS];
            let mut carry = 0u64;
            for i in 0..2 * NLIMBS {
                let add = if i < NLIMBS { lo.0[i] as u64 } else { 0 };
                let tmp = folded[i] as u64 + add + carry;
                next[i] = tmp as u32;
                carry = tmp >> 32;
            }
            lo.0.copy_from_slice(&next[..NLIMBS]);
            hi.0.copy_from_slice(&next[NLIMBS..]);
        }

        self.reduce(&lo)
    }

    /// (a + b) mod m for a, b < m
    pub(crate) fn add(&self, a: &U256, b: &U256) -> U256 {
        let (sum, carry) = a.adc(b);
        let (reduced, borrow) = sum.sbb(&self.m);
        if carry == 1 || borrow == 0 {
            reduced
        } else {
            sum
        }
    }

    /// (a − b) mod m for a, b < m
    pub(crate) fn sub(&self, a: &U256, b: &U256) -> U256 {
        let (diff, borrow) = a.sbb(b);
        if borrow == 1 {
            diff.adc(&self.m).0
        } else {
            diff
        }
    }

    /// (a · b) mod m for a, b < m
    pub(crate) fn mul(&self, a: &U256, b: &U256) -> U256 {
        self.reduce_wide(&a.mul_wide(b))
    }

    /// (−a) mod m for a < m
    pub(crate) fn neg(&self, a: &U256) -> U256 {
        self.sub(&U256::ZERO, a)
    }
}

/// a mod m by binary long division; m must be non-zero
fn rem(a: &U256, m: &U256) -> U256 {
    let mut r = U256::ZERO;
    for i in (0..256).rev() {
        let (shifted, out) = r.shl1(a.bit(i) as u32);
        // 2r + bit < 2m, so a single subtraction restores r < m
        r = if out == 1 || shifted >= *m {
            shifted.sbb(m).0
        } else {
            shifted
        };
    }
    r
}

/// Multiplicative inverse of `a` modulo an odd `m`
///
/// Runs the binary extended Euclidean algorithm while keeping the Bézout
/// coefficients reduced modulo `m`. Inputs at or above `m` are reduced
/// first.
///
/// # Errors
///
/// [`Error::Parameter`] when `m` is even or below 3, and
/// [`Error::NoInverse`] when `gcd(a, m) ≠ 1`.
pub fn mod_inverse(a: &U256, m: &U256) -> Result<U256> {
    if !m.is_odd() || *m <= U256::ONE {
        return Err(Error::param("modulus", "must be odd and greater than one"));
    }

    let a = rem(a, m);
    if a.is_zero() {
        return Err(Error::NoInverse {
            context: "mod_inverse",
        });
    }

    let half = |x: &U256| -> U256 {
        if x.is_odd() {
            let (sum, carry) = x.adc(m);
            sum.shr1(carry)
        } else {
            x.shr1(0)
        }
    };
    let sub_mod = |x: &U256, y: &U256| -> U256 {
        let (diff, borrow) = x.sbb(y);
        if borrow == 1 {
            diff.adc(m).0
        } else {
            diff
        }
    };

    // x1·a ≡ u and x2·a ≡ v (mod m) throughout
    let mut u = a;
    let mut v = *m;
    let mut x1 = U256::ONE;
    let mut x2 = U256::ZERO;

    while u != U256::ONE && v != U256::ONE {
        while !u.is_odd() {
            u = u.shr1(0);
            x1 = half(&x1);
        }
        while !v.is_odd() {
            v = v.shr1(0);
            x2 = half(&x2);
        }
        if u >= v {
            u = u.sbb(&v).0;
            x1 = sub_mod(&x1, &x2);
        } else {
            v = v.sbb(&u).0;
            x2 = sub_mod(&x2, &x1);
        }
        if u.is_zero() || v.is_zero() {
            return Err(Error::NoInverse {
                context: "mod_inverse",
            });
        }
    }

    Ok(if u == U256::ONE { x1 } else { x2 })
}
