//! SM2 key pair model
//!
//! Private keys are 32-byte big-endian scalars in [1, n − 1]. Public keys
//! are 64-byte x ‖ y encodings of an affine point that must lie on the
//! curve; every constructor re-validates that.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;
use gmcrypt_params::traditional::sm2::{
    SM2_COMPRESSED_POINT_SIZE, SM2_FIELD_ELEMENT_SIZE, SM2_PUBLIC_KEY_SIZE, SM2_SCALAR_SIZE,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{scalar_mult_base_g, FieldElement, Point, Scalar};
use crate::error::{validate, Error, Result};

/// SM2 private key d
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Sm2PrivateKey(Scalar);

impl Sm2PrivateKey {
    /// Draw a fresh private key
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Sm2PrivateKey(Scalar::random(rng))
    }

    /// Wrap a non-zero scalar
    pub fn from_scalar(scalar: Scalar) -> Result<Self> {
        validate::parameter(!scalar.is_zero(), "SM2 private key", "scalar is zero")?;
        Ok(Sm2PrivateKey(scalar))
    }

    /// Parse exactly 32 big-endian bytes holding a value in [1, n − 1]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 private key", bytes.len(), SM2_SCALAR_SIZE)?;
        Scalar::deserialize(bytes).map(Sm2PrivateKey)
    }

    /// Parse 64 hex digits
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = Zeroizing::new(hex::decode(hex_str)?);
        Self::from_bytes(&bytes)
    }

    /// The private scalar
    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// Big-endian encoding, wiped on drop
    pub fn to_bytes(&self) -> Zeroizing<[u8; SM2_SCALAR_SIZE]> {
        Zeroizing::new(self.0.serialize())
    }

    /// Lowercase hex encoding, wiped on drop
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&*self.to_bytes()))
    }

    /// Derive the public key Q = d·G
    pub fn public_key(&self) -> Sm2PublicKey {
        // d ∈ [1, n − 1] keeps d·G off infinity
        match scalar_mult_base_g(&self.0) {
            Point::Affine { x, y } => Sm2PublicKey { x, y },
            Point::Infinity => unreachable!("d·G is infinity for d in [1, n - 1]"),
        }
    }
}

impl fmt::Debug for Sm2PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sm2PrivateKey([REDACTED])")
    }
}

/// SM2 public key Q, an affine point on the curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sm2PublicKey {
    x: FieldElement,
    y: FieldElement,
}

impl Sm2PublicKey {
    /// Wrap a point, rejecting infinity and off-curve points
    pub fn from_point(point: &Point) -> Result<Self> {
        match point {
            Point::Infinity => Err(Error::param("SM2 public key", "point at infinity")),
            Point::Affine { x, y } => {
                validate::parameter(point.is_on_curve(), "SM2 public key", "point not on curve")?;
                Ok(Sm2PublicKey { x: *x, y: *y })
            }
        }
    }

    /// Parse exactly 64 bytes x ‖ y
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 public key", bytes.len(), SM2_PUBLIC_KEY_SIZE)?;
        Self::from_point(&Point::from_bytes(bytes)?)
    }

    /// Parse 128 hex digits
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    /// The public point
    pub fn point(&self) -> Point {
        Point::Affine {
            x: self.x,
            y: self.y,
        }
    }

    /// Big-endian x-coordinate
    pub fn x_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Big-endian y-coordinate
    pub fn y_bytes(&self) -> [u8; SM2_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Encoding x ‖ y
    pub fn to_bytes(&self) -> [u8; SM2_PUBLIC_KEY_SIZE] {
        let mut out = [0u8; SM2_PUBLIC_KEY_SIZE];
        out[..SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x_bytes());
        out[SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y_bytes());
        out
    }

    /// Lowercase hex of x ‖ y
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Compressed 0x02/0x03 ‖ x form
    pub fn compress(&self) -> [u8; SM2_COMPRESSED_POINT_SIZE] {
        let mut out = [0u8; SM2_COMPRESSED_POINT_SIZE];
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x_bytes());
        out
    }
}

/// A private key and its matching public key
#[derive(Clone)]
pub struct Sm2KeyPair {
    private_key: Sm2PrivateKey,
    public_key: Sm2PublicKey,
}

impl Sm2KeyPair {
    /// Generate a fresh key pair
    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self::from_private_key(Sm2PrivateKey::generate(rng))
    }

    /// Derive the public half from a private key
    pub fn from_private_key(private_key: Sm2PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Sm2KeyPair {
            private_key,
            public_key,
        }
    }

    /// Pair externally supplied halves, checking Q = d·G
    pub fn new(private_key: Sm2PrivateKey, public_key: Sm2PublicKey) -> Result<Self> {
        validate::parameter(
            private_key.public_key() == public_key,
            "SM2 key pair",
            "public key does not match private key",
        )?;
        Ok(Sm2KeyPair {
            private_key,
            public_key,
        })
    }

    /// Parse a pair from its hex encodings
    pub fn from_hex(private_hex: &str, public_hex: &str) -> Result<Self> {
        Self::new(
            Sm2PrivateKey::from_hex(private_hex)?,
            Sm2PublicKey::from_hex(public_hex)?,
        )
    }

    /// The private half
    pub fn private_key(&self) -> &Sm2PrivateKey {
        &self.private_key
    }

    /// The public half
    pub fn public_key(&self) -> &Sm2PublicKey {
        &self.public_key
    }
}

impl fmt::Debug for Sm2KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sm2KeyPair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

/// Does `hex_str` hold 64 hex digits encoding a value in [1, n − 1]?
pub fn validate_private_key_hex(hex_str: &str) -> bool {
    Sm2PrivateKey::from_hex(hex_str).is_ok()
}

/// Does `hex_str` hold 128 hex digits encoding a point on the curve?
pub fn validate_public_key_hex(hex_str: &str) -> bool {
    Sm2PublicKey::from_hex(hex_str).is_ok()
}
