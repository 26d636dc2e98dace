//! Wire layout of an SM2 ciphertext.

use gmcrypt_params::traditional::sm2::{SM2_CIPHERTEXT_OVERHEAD, SM2_PUBLIC_KEY_SIZE};
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// SM2 ciphertext `C1 (64 bytes, x ‖ y) ‖ C3 (32 bytes) ‖ C2`
///
/// Only the length is checked on construction; C1 is validated against the
/// curve during decryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sm2Ciphertext(Vec<u8>);

impl Sm2Ciphertext {
    /// Wrap an encoded ciphertext of at least 96 bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_vec(bytes.to_vec())
    }

    /// Wrap an owned encoding of at least 96 bytes
    pub fn from_vec(bytes: Vec<u8>) -> Result<Self> {
        split(&bytes)?;
        Ok(Sm2Ciphertext(bytes))
    }

    pub(crate) fn assemble(
        c1: &[u8; SM2_PUBLIC_KEY_SIZE],
        c3: &[u8; SM3_OUTPUT_SIZE],
        c2: &[u8],
    ) -> Self {
        let mut out = Vec::with_capacity(SM2_CIPHERTEXT_OVERHEAD + c2.len());
        out.extend_from_slice(c1);
        out.extend_from_slice(c3);
        out.extend_from_slice(c2);
        Sm2Ciphertext(out)
    }

    /// Ephemeral point `C1 = k·G` as `x ‖ y`
    pub fn c1(&self) -> &[u8] {
        &self.0[..SM2_PUBLIC_KEY_SIZE]
    }

    /// Integrity tag `C3 = SM3(x₂ ‖ M ‖ y₂)`
    pub fn c3(&self) -> &[u8] {
        &self.0[SM2_PUBLIC_KEY_SIZE..SM2_CIPHERTEXT_OVERHEAD]
    }

    /// Masked message `C2 = M ⊕ t`
    pub fn c2(&self) -> &[u8] {
        &self.0[SM2_CIPHERTEXT_OVERHEAD..]
    }

    /// Length of the plaintext this ciphertext carries
    pub fn message_len(&self) -> usize {
        self.0.len() - SM2_CIPHERTEXT_OVERHEAD
    }

    /// The full encoding
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the full encoding
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Borrow `(C1, C3, C2)` out of an encoded ciphertext
pub(crate) fn split(bytes: &[u8]) -> Result<(&[u8], &[u8], &[u8])> {
    if bytes.len() < SM2_CIPHERTEXT_OVERHEAD {
        return Err(Error::InvalidCiphertextFormat(
            "ciphertext shorter than C1 ‖ C3",
        ));
    }
    let (c1, rest) = bytes.split_at(SM2_PUBLIC_KEY_SIZE);
    let (c3, c2) = rest.split_at(SM3_OUTPUT_SIZE);
    Ok((c1, c3, c2))
}

impl AsRef<[u8]> for Sm2Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
