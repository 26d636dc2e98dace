//! Trait definitions for the cryptographic schemes

pub mod pke;
pub mod signature;

pub use pke::Pke;
pub use signature::{IdentitySignature, Signature, SignatureSerialize};
