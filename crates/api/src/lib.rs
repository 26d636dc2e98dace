//! Public API traits and types for the gmcrypt library
//!
//! This crate provides the public API surface shared by the gmcrypt
//! crates: the error type every operation reports through, and the traits
//! the SM2 signature and encryption schemes implement.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

pub use traits::{IdentitySignature, Pke, Signature, SignatureSerialize};

// Re-export trait modules for direct access
pub use traits::{pke, signature};
