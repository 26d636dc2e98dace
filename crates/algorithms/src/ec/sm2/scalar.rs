//! SM2 scalar arithmetic modulo the group order n

use gmcrypt_common::security::SecretBuffer;
use gmcrypt_params::traditional::sm2::{SM2_CURVE, SM2_SCALAR_SIZE};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::modular::{mod_inverse, Modulus, U256};
use crate::error::{validate, Error, Result};

/// The group order as a reduction context
pub(crate) const N: Modulus = Modulus::new(U256::from_be_bytes(&SM2_CURVE.n));

/// Integer modulo n, held in a zeroizing buffer as 32 big-endian bytes
///
/// Values produced by [`Scalar::new`] lie in `[1, n−1]`; arithmetic results
/// are reduced into `[0, n)` and may be zero.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Scalar(SecretBuffer<SM2_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar in `[1, n−1]` from big-endian bytes
    ///
    /// Zero and values ≥ n are rejected, never reduced.
    pub fn new(data: [u8; SM2_SCALAR_SIZE]) -> Result<Self> {
        let v = U256::from_be_bytes(&data);
        if v.is_zero() {
            return Err(Error::param("SM2 scalar", "scalar is zero"));
        }
        if v >= N.m {
            return Err(Error::param("SM2 scalar", "scalar not below n"));
        }
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Parse from a slice of exactly 32 bytes, range-checked as [`Scalar::new`]
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 scalar", bytes.len(), SM2_SCALAR_SIZE)?;
        let mut tmp = [0u8; SM2_SCALAR_SIZE];
        tmp.copy_from_slice(bytes);
        let out = Self::new(tmp);
        tmp.zeroize();
        out
    }

    /// Reduce any 256-bit value mod n; the result may be zero
    pub fn from_u256_reduced(v: &U256) -> Self {
        Self::from_u256_unchecked(N.reduce(v))
    }

    fn from_u256_unchecked(v: U256) -> Self {
        Scalar(SecretBuffer::new(v.to_be_bytes()))
    }

    /// Reduce 32 big-endian bytes mod n; the result may be zero
    pub fn from_bytes_reduced(bytes: &[u8; SM2_SCALAR_SIZE]) -> Self {
        Self::from_u256_reduced(&U256::from_be_bytes(bytes))
    }

    /// The scalar 0
    pub fn zero() -> Self {
        Self::from_u256_unchecked(U256::ZERO)
    }

    /// The scalar 1
    pub fn one() -> Self {
        Self::from_u256_unchecked(U256::ONE)
    }

    /// Draw a uniform scalar in `[1, n−1]` by rejection sampling
    pub fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let mut bytes = [0u8; SM2_SCALAR_SIZE];
        loop {
            rng.fill_bytes(&mut bytes);
            match Self::new(bytes) {
                Ok(scalar) => {
                    bytes.zeroize();
                    return scalar;
                }
                Err(_) => {
                    tracing::trace!("scalar draw out of range, resampling");
                    continue;
                }
            }
        }
    }

    /// Big-endian bytes
    pub fn serialize(&self) -> [u8; SM2_SCALAR_SIZE] {
        let mut out = [0u8; SM2_SCALAR_SIZE];
        out.copy_from_slice(self.0.as_ref());
        out
    }

    /// The integer value
    pub fn to_u256(&self) -> U256 {
        let mut tmp = self.serialize();
        let v = U256::from_be_bytes(&tmp);
        tmp.zeroize();
        v
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        gmcrypt_internal::constant_time::ct_is_zero(self.0.as_ref())
    }

    /// (self + other) mod n
    pub fn add_mod_n(&self, other: &Self) -> Self {
        Self::from_u256_unchecked(N.add(&self.to_u256(), &other.to_u256()))
    }

    /// (self − other) mod n
    pub fn sub_mod_n(&self, other: &Self) -> Self {
        Self::from_u256_unchecked(N.sub(&self.to_u256(), &other.to_u256()))
    }

    /// (self · other) mod n
    pub fn mul_mod_n(&self, other: &Self) -> Self {
        Self::from_u256_unchecked(N.mul(&self.to_u256(), &other.to_u256()))
    }

    /// self⁻¹ mod n
    pub fn inv_mod_n(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NoInverse {
                context: "SM2 scalar",
            });
        }
        mod_inverse(&self.to_u256(), &N.m).map(Self::from_u256_unchecked)
    }

    /// (−self) mod n
    pub fn negate(&self) -> Self {
        Self::from_u256_unchecked(N.neg(&self.to_u256()))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        gmcrypt_internal::constant_time::ct_eq(self.0.as_ref(), other.0.as_ref())
    }
}

impl Eq for Scalar {}

impl core::fmt::Debug for Scalar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Scalar([REDACTED])")
    }
}
