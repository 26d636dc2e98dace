//! SM2 Elliptic Curve Primitives
//!
//! Arithmetic on the recommended SM2 curve y² = x³ + ax + b over 𝔽ₚ with
//! a = p − 3 and the 256-bit group order n.
//!
//! - [`modular`] provides the fixed-width integer type and `mod_inverse`
//! - [`FieldElement`] and [`Scalar`] are the residues mod p and mod n
//! - [`Point`] is the affine group element, multiplied in Jacobian form
//! - [`keypair`] holds the validated private and public key types
//!
//! The domain parameters are checked once per process before first use.

mod field;
pub mod keypair;
pub mod modular;
mod point;
mod scalar;

pub use field::FieldElement;
pub use keypair::{
    validate_private_key_hex, validate_public_key_hex, Sm2KeyPair, Sm2PrivateKey, Sm2PublicKey,
};
pub use modular::{mod_inverse, U256};
pub use point::Point;
pub use scalar::Scalar;

pub use gmcrypt_params::traditional::sm2::{
    SM2_COMPRESSED_POINT_SIZE, SM2_FIELD_ELEMENT_SIZE, SM2_PUBLIC_KEY_SIZE, SM2_SCALAR_SIZE,
};

use gmcrypt_common::security::SecretBuffer;
use gmcrypt_params::traditional::sm2::SM2_CURVE;
use portable_atomic::{AtomicBool, Ordering};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

static DOMAIN_VERIFIED: AtomicBool = AtomicBool::new(false);

/// The group order n as an integer
pub fn order() -> U256 {
    scalar::N.m
}

/// The field prime p as an integer
pub fn field_prime() -> U256 {
    field::P.m
}

fn generator() -> Point {
    Point::Affine {
        x: FieldElement(U256::from_be_bytes(&SM2_CURVE.g_x)),
        y: FieldElement(U256::from_be_bytes(&SM2_CURVE.g_y)),
    }
}

/// Check the configured domain parameters
///
/// G must lie on the curve and have order exactly n: n·G is infinity
/// while (n − 1)·G is not.
pub fn verify_domain_parameters() -> Result<()> {
    let g = generator();
    if !g.is_on_curve() {
        return Err(Error::param("SM2 base point", "base point not on curve"));
    }
    let n = order();
    if !g.mul(&n).is_identity() {
        return Err(Error::param("SM2 base point", "n·G is not infinity"));
    }
    let n_minus_one = n.sbb(&U256::ONE).0;
    if g.mul(&n_minus_one).is_identity() {
        return Err(Error::param("SM2 base point", "(n − 1)·G is infinity"));
    }
    Ok(())
}

/// Run [`verify_domain_parameters`] once per process
///
/// # Panics
///
/// Panics when the compiled-in parameters are inconsistent; no operation
/// can be trusted on a misconfigured curve.
pub fn ensure_domain_parameters() {
    if DOMAIN_VERIFIED.load(Ordering::Acquire) {
        return;
    }
    if let Err(e) = verify_domain_parameters() {
        panic!("SM2 domain parameters are invalid: {}", e);
    }
    DOMAIN_VERIFIED.store(true, Ordering::Release);
    tracing::debug!("SM2 domain parameters verified");
}

/// Get the standard base point G of the SM2 curve
pub fn base_point_g() -> Point {
    ensure_domain_parameters();
    generator()
}

/// Scalar multiplication with the base point: scalar · G
pub fn scalar_mult_base_g(scalar: &Scalar) -> Point {
    base_point_g().mul_scalar(scalar)
}

/// General scalar multiplication: scalar · point
pub fn scalar_mult(scalar: &Scalar, point: &Point) -> Point {
    point.mul_scalar(scalar)
}

/// Generate a private scalar uniformly in [1, n − 1] and its public point
pub fn generate_keypair<R: CryptoRng + RngCore>(rng: &mut R) -> (Scalar, Point) {
    let d = Scalar::random(rng);
    let q = scalar_mult_base_g(&d);
    (d, q)
}

/// Start a simplified key exchange with a peer
///
/// Draws an ephemeral r and returns R = r·G together with the
/// x-coordinate of (d + r)·Q_peer.
pub fn key_exchange_init<R: CryptoRng + RngCore>(
    private_key: &Sm2PrivateKey,
    peer_public: &Sm2PublicKey,
    rng: &mut R,
) -> Result<(Sm2PublicKey, SecretBuffer<SM2_FIELD_ELEMENT_SIZE>)> {
    loop {
        let r = Scalar::random(rng);
        let t = private_key.scalar().add_mod_n(&r);
        if t.is_zero() {
            tracing::trace!("key exchange scalar d + r is zero, resampling");
            continue;
        }
        let ephemeral = Sm2PublicKey::from_point(&scalar_mult_base_g(&r))?;
        match peer_public.point().mul_scalar(&t) {
            Point::Affine { x, .. } => return Ok((ephemeral, SecretBuffer::new(x.to_bytes()))),
            Point::Infinity => {
                tracing::trace!("key exchange shared point is infinity, resampling");
                continue;
            }
        }
    }
}

#[cfg(test)]
mod tests;
