//! Cryptographic hash functions
//!
//! SM3 is the only hash in this crate; the trait keeps the incremental
//! interface the KDF and the SM2 protocols build on.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::error::Result;

pub mod sm3;

pub use sm3::{sm3_hash, sm3_hex, sm3_text, Sm3, Sm3Algorithm};

/// Compile-time description of a hash algorithm
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Compression block size in bytes
    const BLOCK_SIZE: usize;

    /// Canonical algorithm name
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: HashAlgorithm;

    /// Digest type returned by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Pads, processes the final block and returns the digest
    ///
    /// The hasher is reset to its initial state afterwards.
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Digest size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Algorithm name
    fn name() -> String {
        String::from(Self::Algorithm::ALGORITHM_ID)
    }
}
