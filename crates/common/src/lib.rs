//! Common implementations and shared functionality for the gmcrypt library
//!
//! Holds the zeroizing containers that carry private scalars, shared
//! points and derived keystreams between the algorithm and protocol crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use security::SecretVec;
