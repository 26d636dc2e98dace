//! Security primitives and memory safety utilities

pub mod secret;

pub use secret::{EphemeralSecret, SecretBuffer, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
