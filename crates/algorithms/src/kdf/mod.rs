//! SM3 counter-mode key derivation
//!
//! Expands a shared secret `Z` into `klen` bytes as
//! `SM3(Z ‖ ct₁) ‖ SM3(Z ‖ ct₂) ‖ …` truncated to `klen`, where the counter
//! `ctᵢ` is a 32-bit big-endian integer starting at 1.

use gmcrypt_common::security::SecretVec;
use gmcrypt_params::utils::hash::SM3_OUTPUT_SIZE;

use crate::error::{Error, Result};
use crate::hash::{HashFunction, Sm3};

/// Number of SM3 blocks needed for `klen` output bytes
#[inline]
fn block_count(klen: usize) -> usize {
    klen.div_ceil(SM3_OUTPUT_SIZE)
}

/// Derive `klen` bytes of keystream from `z`
///
/// A zero `klen` yields an empty buffer. The output is held in a
/// [`SecretVec`] and wiped when dropped.
///
/// # Errors
///
/// Fails when `klen` would need more than `2³² − 1` counter values.
pub fn kdf(z: &[u8], klen: usize) -> Result<SecretVec> {
    if klen == 0 {
        return Ok(SecretVec::default());
    }

    let blocks = block_count(klen);
    if blocks as u64 > u32::MAX as u64 {
        return Err(Error::param("klen", "output length exceeds counter range"));
    }

    let mut out = SecretVec::with_capacity(blocks * SM3_OUTPUT_SIZE);
    let mut hasher = Sm3::new();
    for counter in 1..=blocks as u32 {
        hasher.update(z)?;
        hasher.update(&counter.to_be_bytes())?;
        let block = hasher.finalize()?;
        out.extend_from_slice(block.as_ref());
    }
    out.truncate(klen);
    Ok(out)
}
