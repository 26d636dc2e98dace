//! SM2 Digital Signatures
//!
//! Identity-bound signatures over the SM2 curve: the signer's identifier and
//! public key are folded into a Z value that is hashed ahead of the message.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traditional;

pub use error::{Error, Result};

// Re-exports from traditional schemes
pub use traditional::sm2::{
    sign, sign_hex, sign_text, verify, verify_bytes, verify_hex, verify_text, z_value, Sm2,
    Sm2Signature,
};
