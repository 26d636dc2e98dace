//! # gmcrypt
//!
//! A pure Rust implementation of the SM2 public-key cryptosystem and the
//! SM3 hash function.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gmcrypt = "0.3"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): SM3, the SM3 KDF, curve arithmetic and key pairs
//! - `sign` (default): SM2 digital signatures
//! - `pke` (default): SM2 public key encryption
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gmcrypt-algorithms`]: SM3, KDF, field and point arithmetic, key pairs
//! - [`gmcrypt-sign`]: SM2 signatures with the identity pre-hash
//! - [`gmcrypt-pke`]: SM2 encryption with the `C1 ‖ C3 ‖ C2` ciphertext
//!
//! ```no_run
//! use gmcrypt::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let pair = Sm2KeyPair::generate(&mut OsRng);
//! let sig = gmcrypt::sign::sign(b"message", pair.private_key(), Sm2::DEFAULT_ID, &mut OsRng)?;
//! assert!(gmcrypt::sign::verify(b"message", &sig, pair.public_key(), Sm2::DEFAULT_ID));
//!
//! let ct = gmcrypt::pke::encrypt(b"secret", pair.public_key(), &mut OsRng)?;
//! let pt = gmcrypt::pke::decrypt(ct.as_bytes(), pair.private_key())?;
//! assert_eq!(pt, b"secret");
//! # Ok::<(), gmcrypt::api::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use gmcrypt_api as api;
pub use gmcrypt_common as common;
pub use gmcrypt_internal as internal;
pub use gmcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use gmcrypt_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use gmcrypt_sign as sign;

#[cfg(feature = "pke")]
pub use gmcrypt_pke as pke;

// Crates that appear in the public signatures
#[cfg(feature = "algorithms")]
pub use rand;
pub use zeroize;

/// Common imports for gmcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{IdentitySignature, Pke, Signature, SignatureSerialize};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretBuffer, SecretVec, ZeroizeGuard};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        kdf, sm3_hash, sm3_hex, sm3_text, HashFunction, Sm2KeyPair, Sm2PrivateKey, Sm2PublicKey,
        Sm3,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{Sm2, Sm2Signature};

    #[cfg(feature = "pke")]
    pub use crate::pke::{Sm2Ciphertext, Sm2Pke};
}
