//! SM2 elliptic curve point operations
//!
//! [`Point`] is the affine group element used on every public surface.
//! Scalar multiplication runs internally in Jacobian coordinates and
//! converts back once at the end.

use gmcrypt_params::traditional::sm2::{
    SM2_COMPRESSED_POINT_SIZE, SM2_FIELD_ELEMENT_SIZE, SM2_PUBLIC_KEY_SIZE,
};

use super::field::FieldElement;
use super::modular::U256;
use super::scalar::Scalar;
use crate::error::{validate, Error, Result};

/// Point on the SM2 curve, or the point at infinity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The identity element
    Infinity,
    /// Affine coordinates (x, y)
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

/// Jacobian coordinates (X:Y:Z) with x = X/Z², y = Y/Z³; Z = 0 is infinity
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl Point {
    /// Create an affine point, checking curve membership
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self> {
        let p = Point::Affine { x, y };
        if !p.is_on_curve() {
            return Err(Error::param("SM2 point", "point not on curve"));
        }
        Ok(p)
    }

    /// Create an affine point from big-endian coordinates
    pub fn new_uncompressed(
        x_bytes: &[u8; SM2_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; SM2_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x = FieldElement::from_bytes(x_bytes)?;
        let y = FieldElement::from_bytes(y_bytes)?;
        Self::new(x, y)
    }

    /// The point at infinity
    pub fn identity() -> Self {
        Point::Infinity
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// Affine coordinates, or `None` at infinity
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Check y² ≡ x³ + ax + b (mod p); infinity always passes
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Infinity => true,
            Point::Affine { x, y } => {
                let rhs = x.square().mul(x).add(&FieldElement::a().mul(x)).add(&FieldElement::b());
                y.square() == rhs
            }
        }
    }

    /// The inverse point (x, −y)
    pub fn negate(&self) -> Self {
        match self {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: y.negate(),
            },
        }
    }

    /// Group addition
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (self, other) {
            (Point::Infinity, _) => return *other,
            (_, Point::Infinity) => return *self,
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double();
            }
            return Point::Infinity;
        }

        // s = (y2 − y1) / (x2 − x1)
        let s = match x2.sub(x1).invert() {
            Ok(inv) => y2.sub(y1).mul(&inv),
            Err(_) => return Point::Infinity,
        };
        Self::chord(&s, x1, y1, x2)
    }

    /// Group doubling
    pub fn double(&self) -> Self {
        let (x, y) = match self {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Point::Infinity;
        }

        // s = (3x² + a) / 2y
        let num = x.square().mul(&FieldElement::from_u32(3)).add(&FieldElement::a());
        let s = match y.double().invert() {
            Ok(inv) => num.mul(&inv),
            Err(_) => return Point::Infinity,
        };
        Self::chord(&s, x, y, x)
    }

    /// x3 = s² − x1 − x2, y3 = s·(x1 − x3) − y1
    fn chord(s: &FieldElement, x1: &FieldElement, y1: &FieldElement, x2: &FieldElement) -> Self {
        let x3 = s.square().sub(x1).sub(x2);
        let y3 = s.mul(&x1.sub(&x3)).sub(y1);
        Point::Affine { x: x3, y: y3 }
    }

    /// Multiply by a raw 256-bit integer, scanning bits from the lowest
    ///
    /// The multiplier is not reduced, so `n·G` really computes to infinity.
    pub fn mul(&self, k: &U256) -> Self {
        if self.is_identity() || k.is_zero() {
            return Point::Infinity;
        }
        let mut acc = ProjectivePoint::identity();
        let mut addend = self.to_projective();
        for i in 0..k.bits() {
            if k.bit(i) {
                acc = acc.add(&addend);
            }
            addend = addend.double();
        }
        acc.to_affine()
    }

    /// Multiply by a scalar mod n
    pub fn mul_scalar(&self, k: &Scalar) -> Self {
        self.mul(&k.to_u256())
    }

    /// Multiply by a signed integer given as magnitude and sign
    ///
    /// A negative multiplier negates the point and uses the magnitude.
    pub fn mul_signed(&self, magnitude: &U256, negative: bool) -> Self {
        if negative {
            self.negate().mul(magnitude)
        } else {
            self.mul(magnitude)
        }
    }

    /// Encode as 64 bytes x ‖ y; infinity has no encoding
    pub fn to_bytes(&self) -> Result<[u8; SM2_PUBLIC_KEY_SIZE]> {
        let (x, y) = self
            .coordinates()
            .ok_or_else(|| Error::param("SM2 point", "point at infinity has no encoding"))?;
        let mut out = [0u8; SM2_PUBLIC_KEY_SIZE];
        out[..SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_bytes());
        out[SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_bytes());
        Ok(out)
    }

    /// Decode 64 bytes x ‖ y and check curve membership
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("SM2 point", bytes.len(), SM2_PUBLIC_KEY_SIZE)?;
        let mut xb = [0u8; SM2_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; SM2_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[..SM2_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[SM2_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// Compressed form 0x02/0x03 ‖ x, the prefix carrying the parity of y
    pub fn compress(&self) -> Result<[u8; SM2_COMPRESSED_POINT_SIZE]> {
        let (x, y) = self
            .coordinates()
            .ok_or_else(|| Error::param("SM2 point", "point at infinity has no encoding"))?;
        let mut out = [0u8; SM2_COMPRESSED_POINT_SIZE];
        out[0] = if y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&x.to_bytes());
        Ok(out)
    }

    fn to_projective(self) -> ProjectivePoint {
        match self {
            Point::Infinity => ProjectivePoint::identity(),
            Point::Affine { x, y } => ProjectivePoint {
                x,
                y,
                z: FieldElement::one(),
            },
        }
    }
}

impl ProjectivePoint {
    /// Identity in Jacobian form: (1 : 1 : 0)
    fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::one(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1_sq = self.z.square();
        let z2_sq = other.z.square();
        let z1_cu = z1_sq.mul(&self.z);
        let z2_cu = z2_sq.mul(&other.z);

        let u1 = self.x.mul(&z2_sq); // X₁·Z₂²
        let u2 = other.x.mul(&z1_sq); // X₂·Z₁²
        let s1 = self.y.mul(&z2_cu); // Y₁·Z₂³
        let s2 = other.y.mul(&z1_cu); // Y₂·Z₁³

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            if r.is_zero() {
                return self.double();
            }
            return ProjectivePoint::identity();
        }

        let h2 = h.square();
        let h3 = h2.mul(&h);
        let v = u1.mul(&h2);

        // X₃ = r² − h³ − 2v
        let x3 = r.square().sub(&h3).sub(&v.double());
        // Y₃ = r·(v − X₃) − s1·h³
        let y3 = r.mul(&v.sub(&x3)).sub(&s1.mul(&h3));
        // Z₃ = Z₁·Z₂·h
        let z3 = self.z.mul(&other.z).mul(&h);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Doubling with the a = −3 shortcut, valid since a = p − 3
    fn double(&self) -> Self {
        if self.is_identity() || self.y.is_zero() {
            return ProjectivePoint::identity();
        }

        //   δ = Z², γ = Y², β = X·γ, α = 3·(X − δ)·(X + δ)
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);
        let alpha = self
            .x
            .sub(&delta)
            .mul(&self.x.add(&delta))
            .mul(&FieldElement::from_u32(3));

        let four_beta = beta.double().double();

        // X₃ = α² − 8β
        let x3 = alpha.square().sub(&four_beta.double());
        // Z₃ = (Y + Z)² − γ − δ
        let z3 = self.y.add(&self.z).square().sub(&gamma).sub(&delta);
        // Y₃ = α·(4β − X₃) − 8γ²
        let y3 = alpha
            .mul(&four_beta.sub(&x3))
            .sub(&gamma.square().double().double().double());

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    fn to_affine(self) -> Point {
        if self.is_identity() {
            return Point::Infinity;
        }
        let z_inv = match self.z.invert() {
            Ok(inv) => inv,
            Err(_) => return Point::Infinity,
        };
        let z_inv_sq = z_inv.square();
        Point::Affine {
            x: self.x.mul(&z_inv_sq),
            y: self.y.mul(&z_inv_sq.mul(&z_inv)),
        }
    }
}
