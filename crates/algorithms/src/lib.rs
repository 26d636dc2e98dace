//! SM2/SM3 primitives with constant-structure implementations
//!
//! This crate provides the arithmetic the SM2 protocols are built on:
//!
//! - Fixed-width 256-bit integers and modular inversion
//! - The SM2 prime field, scalars mod n and curve point algebra
//! - The SM3 hash function and the SM3 counter-mode KDF
//! - The SM2 key pair model
//!
//! Secret scalars and derived keystreams live in zeroizing containers.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Hash function implementations
pub mod hash;
pub use hash::{sm3_hash, sm3_hex, sm3_text, HashFunction, Sm3};

// KDF implementation
pub mod kdf;
pub use kdf::kdf;

// Elliptic Curve primitives
pub mod ec;
pub use ec::{sm2, Sm2KeyPair, Sm2Point, Sm2PrivateKey, Sm2PublicKey, Sm2Scalar, U256};

// Type system
pub mod types;
pub use types::Digest;

// Re-export security types from gmcrypt-common
pub use gmcrypt_common::security::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};
