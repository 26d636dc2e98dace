//! SM2 prime field arithmetic
//!
//! Elements of 𝔽ₚ with
//! p = FFFFFFFE FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFF 00000000 FFFFFFFF FFFFFFFF,
//! kept fully reduced in `[0, p)`.

use gmcrypt_params::traditional::sm2::{SM2_CURVE, SM2_FIELD_ELEMENT_SIZE};
use zeroize::Zeroize;

use super::modular::{mod_inverse, Modulus, U256};
use crate::error::{Error, Result};

/// The field prime as a reduction context
pub(crate) const P: Modulus = Modulus::new(U256::from_be_bytes(&SM2_CURVE.p));

/// SM2 field element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct FieldElement(pub(crate) U256);

impl FieldElement {
    /// The additive identity
    pub const fn zero() -> Self {
        FieldElement(U256::ZERO)
    }

    /// The multiplicative identity
    pub const fn one() -> Self {
        FieldElement(U256::ONE)
    }

    /// Build from a small literal
    pub const fn from_u32(n: u32) -> Self {
        FieldElement(U256::from_u32(n))
    }

    /// Curve coefficient a = p − 3
    pub fn a() -> Self {
        FieldElement(U256::from_be_bytes(&SM2_CURVE.a))
    }

    /// Curve coefficient b
    pub fn b() -> Self {
        FieldElement(U256::from_be_bytes(&SM2_CURVE.b))
    }

    /// Parse big-endian bytes, rejecting values ≥ p
    pub fn from_bytes(bytes: &[u8; SM2_FIELD_ELEMENT_SIZE]) -> Result<Self> {
        let v = U256::from_be_bytes(bytes);
        if v >= P.m {
            return Err(Error::param("SM2 field element", "value not below p"));
        }
        Ok(FieldElement(v))
    }

    /// Reduce an arbitrary 256-bit value mod p
    pub fn from_u256_reduced(v: &U256) -> Self {
        FieldElement(P.reduce(v))
    }

    /// Big-endian encoding
    pub fn to_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.0.to_be_bytes()
    }

    /// The canonical integer value
    pub fn to_u256(&self) -> U256 {
        self.0
    }

    /// Is this zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is the canonical representative odd?
    pub fn is_odd(&self) -> bool {
        self.0.is_odd()
    }

    /// (self + other) mod p
    pub fn add(&self, other: &Self) -> Self {
        FieldElement(P.add(&self.0, &other.0))
    }

    /// (self − other) mod p
    pub fn sub(&self, other: &Self) -> Self {
        FieldElement(P.sub(&self.0, &other.0))
    }

    /// (self · other) mod p
    pub fn mul(&self, other: &Self) -> Self {
        FieldElement(P.mul(&self.0, &other.0))
    }

    /// self² mod p
    #[inline(always)]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// 2·self mod p
    #[inline(always)]
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// (−self) mod p
    pub fn negate(&self) -> Self {
        FieldElement(P.neg(&self.0))
    }

    /// self⁻¹ mod p
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NoInverse {
                context: "SM2 field element",
            });
        }
        mod_inverse(&self.0, &P.m).map(FieldElement)
    }
}
