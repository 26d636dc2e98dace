//! Traditional signature schemes
//!
//! SM2 is the only scheme this crate carries.

pub mod sm2;

pub use sm2::{Sm2, Sm2Signature};
