//! Constant values for gmcrypt cryptographic operations
//!
//! This crate holds the fixed SM2 curve domain parameters, the SM3 sizes
//! and the wire sizes shared by the signature and encryption crates.

#![no_std]

// Traditional algorithm constants
pub mod traditional;

// Utility constants
pub mod utils;
