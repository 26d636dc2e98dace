//! SM2 public key encryption
//!
//! Encryption draws an ephemeral k, publishes `C1 = k·G` and derives a
//! keystream from the shared point `(x₂, y₂) = k·Q`:
//!
//! - `t  = KDF(x₂ ‖ y₂, len(M))`
//! - `C2 = M ⊕ t`
//! - `C3 = SM3(x₂ ‖ M ‖ y₂)`
//!
//! The output is `C1 ‖ C3 ‖ C2`. Decryption recomputes the shared point as
//! `d·C1` and refuses to return anything when C3 does not match.

use gmcrypt_algorithms::ec::sm2::{self as ec, Point, Scalar, Sm2PrivateKey, Sm2PublicKey};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_algorithms::kdf::kdf;
use gmcrypt_api::error::{Error as ApiError, Result as ApiResult};
use gmcrypt_api::traits::Pke;
use gmcrypt_common::security::EphemeralSecret;
use gmcrypt_internal::constant_time::{ct_eq, ct_is_zero, ct_xor_into};
use gmcrypt_params::traditional::sm2::SM2_FIELD_ELEMENT_SIZE;
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

mod ciphertext;
mod text;

pub use ciphertext::Sm2Ciphertext;
pub use text::{decrypt_hex, decrypt_text, encrypt_hex, encrypt_text};

/// Shared point `x ‖ y`, wiped on drop
struct SharedPoint(EphemeralSecret<[u8; 2 * SM2_FIELD_ELEMENT_SIZE]>);

impl SharedPoint {
    /// `scalar · point`, or `None` at infinity
    fn derive(scalar: &Scalar, point: &Point) -> Option<Self> {
        match ec::scalar_mult(scalar, point) {
            Point::Affine { x, y } => {
                let mut xy = EphemeralSecret::new([0u8; 2 * SM2_FIELD_ELEMENT_SIZE]);
                xy[..SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_bytes());
                xy[SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_bytes());
                Some(SharedPoint(xy))
            }
            Point::Infinity => None,
        }
    }

    fn xy(&self) -> &[u8] {
        &self.0[..]
    }

    /// SM3(x ‖ message ‖ y)
    fn tag(&self, message: &[u8]) -> Result<[u8; SM3_OUTPUT_SIZE]> {
        let mut hasher = Sm3::new();
        hasher.update(&self.0[..SM2_FIELD_ELEMENT_SIZE])?;
        hasher.update(message)?;
        hasher.update(&self.0[SM2_FIELD_ELEMENT_SIZE..])?;
        let digest = hasher.finalize()?;

        let mut out = [0u8; SM3_OUTPUT_SIZE];
        out.copy_from_slice(digest.as_ref());
        Ok(out)
    }
}

/// Encrypt `plaintext` to `public_key`
///
/// Degenerate draws (shared point at infinity, all-zero keystream for a
/// non-empty message) are retried with a fresh k. The result is
/// `96 + plaintext.len()` bytes long.
///
/// # Errors
///
/// Fails when the public key is not a finite curve point.
pub fn encrypt<R: CryptoRng + RngCore>(
    plaintext: &[u8],
    public_key: &Sm2PublicKey,
    rng: &mut R,
) -> Result<Sm2Ciphertext> {
    let q = public_key.point();
    if q.is_identity() || !q.is_on_curve() {
        return Err(Error::InvalidPublicKey("point not on the SM2 curve"));
    }

    loop {
        // C1 = k·G
        let (k, c1_point) = ec::generate_keypair(rng);
        let c1 = match c1_point.to_bytes() {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };

        // (x₂, y₂) = k·Q
        let shared = match SharedPoint::derive(&k, &q) {
            Some(shared) => shared,
            None => {
                tracing::trace!("SM2 encrypt: shared point is infinity, drawing a new k");
                continue;
            }
        };

        let t = kdf(shared.xy(), plaintext.len())?;
        if !plaintext.is_empty() && ct_is_zero(t.as_slice()) {
            tracing::trace!("SM2 encrypt: keystream is all zero, drawing a new k");
            continue;
        }

        let mut c2 = plaintext.to_vec();
        ct_xor_into(&mut c2, t.as_slice());
        let c3 = shared.tag(plaintext)?;

        return Ok(Sm2Ciphertext::assemble(&c1, &c3, &c2));
    }
}

/// Decrypt an encoded `C1 ‖ C3 ‖ C2` ciphertext with `private_key`
///
/// # Errors
///
/// - [`Error::InvalidCiphertextFormat`] when the input is shorter than
///   96 bytes or C1 is not on the curve
/// - [`Error::DecryptionFailed`] when `d·C1` is the point at infinity
/// - [`Error::IntegrityCheckFailed`] when C3 does not match; no plaintext
///   is returned
pub fn decrypt(ciphertext: &[u8], private_key: &Sm2PrivateKey) -> Result<Vec<u8>> {
    let (c1, c3, c2) = ciphertext::split(ciphertext)?;

    let c1_point = Point::from_bytes(c1)
        .map_err(|_| Error::InvalidCiphertextFormat("C1 is not a point on the SM2 curve"))?;

    let shared = SharedPoint::derive(private_key.scalar(), &c1_point)
        .ok_or(Error::DecryptionFailed("d·C1 is the point at infinity"))?;

    let t = kdf(shared.xy(), c2.len())?;
    let mut message = Zeroizing::new(c2.to_vec());
    ct_xor_into(&mut message, t.as_slice());

    let u = shared.tag(&message)?;
    if !ct_eq(u, c3) {
        tracing::debug!("SM2 decryption rejected: C3 mismatch");
        return Err(Error::IntegrityCheckFailed);
    }

    Ok(core::mem::take(&mut *message))
}

/// SM2 encryption through the [`Pke`] trait
pub struct Sm2Pke;

impl Pke for Sm2Pke {
    type PublicKey = Sm2PublicKey;
    type SecretKey = Sm2PrivateKey;
    type Ciphertext = Sm2Ciphertext;

    fn name() -> &'static str {
        "SM2-PKE"
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let private_key = Sm2PrivateKey::generate(rng);
        Ok((private_key.public_key(), private_key))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        encrypt(plaintext, pk_recipient, rng).map_err(ApiError::from)
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Vec<u8>> {
        decrypt(ciphertext.as_bytes(), sk_recipient).map_err(ApiError::from)
    }
}
