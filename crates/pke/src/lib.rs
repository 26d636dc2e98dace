//! Public Key Encryption (PKE) for the gmcrypt library.
//!
//! SM2 encryption produces the three-part ciphertext `C1 ‖ C3 ‖ C2`: the
//! ephemeral point, an SM3 integrity tag and the keystream-masked message.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// Vec and String for no_std builds
#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod sm2;

// Re-export key items
pub use error::{Error, Result};
pub use sm2::{
    decrypt, decrypt_hex, decrypt_text, encrypt, encrypt_hex, encrypt_text, Sm2Ciphertext, Sm2Pke,
};
