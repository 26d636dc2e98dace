//! SM2 digital signature scheme
//!
//! Signing binds the signer through the Z value
//! `SM3(ENTL ‖ ID ‖ a ‖ b ‖ Gx ‖ Gy ‖ Qx ‖ Qy)`, where ENTL is the bit length
//! of ID as a 16-bit big-endian integer. The message digest is then
//! `e = SM3(Z ‖ M) mod n`.
//!
//! Signatures are the 64-byte concatenation `r ‖ s`.

use gmcrypt_algorithms::ec::sm2::{
    self as ec, Point, Scalar, Sm2KeyPair, Sm2PrivateKey, Sm2PublicKey,
};
use gmcrypt_algorithms::hash::{HashFunction, Sm3};
use gmcrypt_api::{
    error::{Error as ApiError, ResultExt},
    IdentitySignature, Result as ApiResult, Signature as SignatureTrait, SignatureSerialize,
};
use gmcrypt_internal::constant_time::ct_eq;
use gmcrypt_params::traditional::sm2::{
    SM2_CURVE, SM2_DEFAULT_USER_ID, SM2_PUBLIC_KEY_SIZE, SM2_SCALAR_SIZE, SM2_SIGNATURE_SIZE,
};
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::{string::ToString, vec::Vec};

use crate::error::{Error, Result};

mod text;
pub use text::{sign_hex, sign_text, verify_hex, verify_text};

/// Longest identifier whose bit length fits the 16-bit ENTL field
const MAX_ID_LEN: usize = (u16::MAX / 8) as usize;

/// SM2 signature scheme
pub struct Sm2;

/// SM2 signature (r, s) as two 32-byte big-endian integers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sm2Signature {
    r: [u8; SM2_SCALAR_SIZE],
    s: [u8; SM2_SCALAR_SIZE],
}

impl Sm2Signature {
    /// Split a 64-byte `r ‖ s` encoding
    ///
    /// Only the width is checked; range checks happen during verification.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SM2_SIGNATURE_SIZE {
            return Err(Error::InvalidSignatureSize {
                expected: SM2_SIGNATURE_SIZE,
                actual: bytes.len(),
            });
        }
        let mut r = [0u8; SM2_SCALAR_SIZE];
        let mut s = [0u8; SM2_SCALAR_SIZE];
        r.copy_from_slice(&bytes[..SM2_SCALAR_SIZE]);
        s.copy_from_slice(&bytes[SM2_SCALAR_SIZE..]);
        Ok(Sm2Signature { r, s })
    }

    /// The `r ‖ s` encoding
    pub fn to_bytes(&self) -> [u8; SM2_SIGNATURE_SIZE] {
        let mut out = [0u8; SM2_SIGNATURE_SIZE];
        out[..SM2_SCALAR_SIZE].copy_from_slice(&self.r);
        out[SM2_SCALAR_SIZE..].copy_from_slice(&self.s);
        out
    }

    /// Big-endian r
    pub fn r(&self) -> &[u8; SM2_SCALAR_SIZE] {
        &self.r
    }

    /// Big-endian s
    pub fn s(&self) -> &[u8; SM2_SCALAR_SIZE] {
        &self.s
    }
}

/// Compute the identity pre-hash Z for `id` and `public_key`
///
/// # Errors
///
/// Fails when `id` is longer than 8191 bytes, the most ENTL can describe.
pub fn z_value(id: &[u8], public_key: &Sm2PublicKey) -> Result<[u8; SM3_OUTPUT_SIZE]> {
    if id.len() > MAX_ID_LEN {
        return Err(Error::InvalidParameter(
            "user identifier longer than 8191 bytes".to_string(),
        ));
    }
    let entl = ((id.len() * 8) as u16).to_be_bytes();

    let mut hasher = Sm3::new();
    hasher.update(&entl)?;
    hasher.update(id)?;
    hasher.update(&SM2_CURVE.a)?;
    hasher.update(&SM2_CURVE.b)?;
    hasher.update(&SM2_CURVE.g_x)?;
    hasher.update(&SM2_CURVE.g_y)?;
    hasher.update(&public_key.x_bytes())?;
    hasher.update(&public_key.y_bytes())?;
    let digest = hasher.finalize()?;

    let mut out = [0u8; SM3_OUTPUT_SIZE];
    out.copy_from_slice(digest.as_ref());
    Ok(out)
}

/// e = SM3(Z ‖ M) mod n
fn message_scalar(z: &[u8; SM3_OUTPUT_SIZE], message: &[u8]) -> Result<Scalar> {
    let mut hasher = Sm3::new();
    hasher.update(z)?;
    hasher.update(message)?;
    let digest = hasher.finalize()?;

    let mut e_bytes = [0u8; SM2_SCALAR_SIZE];
    e_bytes.copy_from_slice(digest.as_ref());
    Ok(Scalar::from_bytes_reduced(&e_bytes))
}

/// Sign `message` under signer identifier `id`
///
/// Algorithm:
/// 1. Z = Z-value(ID, Q) with Q = d·G
/// 2. e = SM3(Z ‖ M) mod n
/// 3. Draw k ∈ [1, n−1] and compute (x₁, y₁) = k·G
/// 4. r = (e + x₁) mod n; draw again if r = 0 or r + k = n
/// 5. s = (1 + d)⁻¹·(k − r·d) mod n; draw again if s = 0
/// 6. Return (r, s)
///
/// # Errors
///
/// Fails for an over-long identifier, or when 1 + d has no inverse
/// (d = n − 1).
pub fn sign<R: CryptoRng + RngCore>(
    message: &[u8],
    private_key: &Sm2PrivateKey,
    id: &[u8],
    rng: &mut R,
) -> Result<Sm2Signature> {
    // Steps 1-2: Identity pre-hash and message digest
    let public_key = private_key.public_key();
    let z = z_value(id, &public_key)?;
    let e = message_scalar(&z, message)?;

    let d = private_key.scalar();
    let one_plus_d_inv = Scalar::one().add_mod_n(d).inv_mod_n()?;

    loop {
        // Step 3: Ephemeral point
        let k = Scalar::random(rng);
        let x1 = match ec::scalar_mult_base_g(&k) {
            Point::Affine { x, .. } => x,
            Point::Infinity => continue,
        };

        // Step 4: r = (e + x₁) mod n
        let r = e.add_mod_n(&Scalar::from_u256_reduced(&x1.to_u256()));
        if r.is_zero() || r.add_mod_n(&k).is_zero() {
            tracing::trace!("SM2 sign: degenerate r, drawing a new nonce");
            continue;
        }

        // Step 5: s = (1 + d)⁻¹·(k − r·d) mod n
        let s = one_plus_d_inv.mul_mod_n(&k.sub_mod_n(&r.mul_mod_n(d)));
        if s.is_zero() {
            tracing::trace!("SM2 sign: s is zero, drawing a new nonce");
            continue;
        }

        // Step 6: Encode (r, s)
        return Ok(Sm2Signature {
            r: r.serialize(),
            s: s.serialize(),
        });
    }
}

/// Verify a signature made under signer identifier `id`
///
/// Algorithm:
/// 1. Check r, s ∈ [1, n−1]
/// 2. e = SM3(Z ‖ M) mod n
/// 3. t = (r + s) mod n; reject if t = 0
/// 4. (x₁, y₁) = s·G + t·Q; reject at infinity
/// 5. Accept iff (e + x₁) mod n = r
///
/// Every failure answers `false`.
pub fn verify(
    message: &[u8],
    signature: &Sm2Signature,
    public_key: &Sm2PublicKey,
    id: &[u8],
) -> bool {
    match verify_inner(message, signature, public_key, id) {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(reason, "SM2 signature rejected");
            false
        }
    }
}

fn verify_inner(
    message: &[u8],
    signature: &Sm2Signature,
    public_key: &Sm2PublicKey,
    id: &[u8],
) -> core::result::Result<(), &'static str> {
    // Step 1: Range checks
    let r = Scalar::new(signature.r).map_err(|_| "r outside [1, n-1]")?;
    let s = Scalar::new(signature.s).map_err(|_| "s outside [1, n-1]")?;

    let q = public_key.point();
    if !q.is_on_curve() {
        return Err("public key not on curve");
    }

    // Step 2: Message digest
    let z = z_value(id, public_key).map_err(|_| "invalid user identifier")?;
    let e = message_scalar(&z, message).map_err(|_| "hashing failed")?;

    // Step 3: t = (r + s) mod n
    let t = r.add_mod_n(&s);
    if t.is_zero() {
        return Err("r + s is zero mod n");
    }

    // Step 4: s·G + t·Q
    let x1 = match ec::scalar_mult_base_g(&s).add(&q.mul_scalar(&t)) {
        Point::Affine { x, .. } => x,
        Point::Infinity => return Err("s·G + t·Q is infinity"),
    };

    // Step 5: R = (e + x₁) mod n, compared in constant time
    let big_r = e.add_mod_n(&Scalar::from_u256_reduced(&x1.to_u256()));
    if !ct_eq(big_r.serialize(), signature.r) {
        return Err("R does not match r");
    }
    Ok(())
}

/// Verify raw encodings: a 64-byte signature and a 64-byte public key
///
/// Malformed signatures or keys answer `false`.
pub fn verify_bytes(message: &[u8], signature: &[u8], public_key: &[u8], id: &[u8]) -> bool {
    let signature = match Sm2Signature::from_bytes(signature) {
        Ok(sig) => sig,
        Err(_) => {
            tracing::debug!("SM2 signature rejected: wrong signature length");
            return false;
        }
    };
    let public_key = match Sm2PublicKey::from_bytes(public_key) {
        Ok(pk) => pk,
        Err(_) => {
            tracing::debug!("SM2 signature rejected: malformed public key");
            return false;
        }
    };
    verify(message, &signature, &public_key, id)
}

impl SignatureTrait for Sm2 {
    type PublicKey = Sm2PublicKey;
    type SecretKey = Sm2PrivateKey;
    type SignatureData = Sm2Signature;
    type KeyPair = Sm2KeyPair;

    fn name() -> &'static str {
        "SM2"
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        Ok(Sm2KeyPair::generate(rng))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        *keypair.public_key()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.private_key().clone()
    }

    fn sign<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        <Self as IdentitySignature>::sign_with_id(message, secret_key, Self::DEFAULT_ID, rng)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> bool {
        verify(message, signature, public_key, Self::DEFAULT_ID)
    }
}

impl IdentitySignature for Sm2 {
    const DEFAULT_ID: &'static [u8] = SM2_DEFAULT_USER_ID;

    fn sign_with_id<R: CryptoRng + RngCore>(
        message: &[u8],
        secret_key: &Self::SecretKey,
        id: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::SignatureData> {
        sign(message, secret_key, id, rng).map_err(ApiError::from)
    }

    fn verify_with_id(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
        id: &[u8],
    ) -> bool {
        verify(message, signature, public_key, id)
    }
}

impl SignatureSerialize for Sm2 {
    const PUBLIC_KEY_SIZE: usize = SM2_PUBLIC_KEY_SIZE;
    const SECRET_KEY_SIZE: usize = SM2_SCALAR_SIZE;
    const SIGNATURE_SIZE: usize = SM2_SIGNATURE_SIZE;

    fn serialize_public_key(key: &Self::PublicKey) -> Vec<u8> {
        key.to_bytes().to_vec()
    }

    fn deserialize_public_key(bytes: &[u8]) -> ApiResult<Self::PublicKey> {
        Sm2PublicKey::from_bytes(bytes).with_context("SM2 public key")
    }

    fn serialize_secret_key(key: &Self::SecretKey) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(key.to_bytes().to_vec())
    }

    fn deserialize_secret_key(bytes: &[u8]) -> ApiResult<Self::SecretKey> {
        Sm2PrivateKey::from_bytes(bytes).with_context("SM2 private key")
    }

    fn serialize_signature(sig: &Self::SignatureData) -> Vec<u8> {
        sig.to_bytes().to_vec()
    }

    fn deserialize_signature(bytes: &[u8]) -> ApiResult<Self::SignatureData> {
        Sm2Signature::from_bytes(bytes).map_err(ApiError::from)
    }
}
