//! Internal utilities shared by the gmcrypt crates
//!
//! Nothing here is part of the public API surface; the helpers exist so
//! that comparisons and masking on secret-dependent bytes go through a
//! single constant-time implementation.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
