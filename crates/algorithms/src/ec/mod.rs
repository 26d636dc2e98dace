//! Elliptic Curve Primitives
//!
//! Prime-field arithmetic, point algebra and the key pair model for the
//! SM2 curve.

pub mod sm2;

pub use sm2::{
    FieldElement as Sm2FieldElement, Point as Sm2Point, Scalar as Sm2Scalar, Sm2KeyPair,
    Sm2PrivateKey, Sm2PublicKey, U256,
};
