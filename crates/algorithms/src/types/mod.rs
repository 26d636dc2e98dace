//! Shared value types for the primitives

pub mod digest;

pub use digest::Digest;
