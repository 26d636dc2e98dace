//! Hex and text forms of the signature operations
//!
//! Messages, keys and signatures travel as lowercase hex strings; input hex
//! may use either case. The text forms sign the UTF-8 bytes of a string.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use gmcrypt_algorithms::ec::sm2::{Sm2PrivateKey, Sm2PublicKey};
use rand::{CryptoRng, RngCore};

use super::{sign, verify, Sm2Signature};
use crate::error::Result;

/// Sign a hex-encoded message with a hex-encoded private key
///
/// Returns the 128-digit hex signature.
pub fn sign_hex<R: CryptoRng + RngCore>(
    message_hex: &str,
    private_key_hex: &str,
    id: &[u8],
    rng: &mut R,
) -> Result<String> {
    let message = hex::decode(message_hex)?;
    let private_key = Sm2PrivateKey::from_hex(private_key_hex)?;
    let signature = sign(&message, &private_key, id, rng)?;
    Ok(hex::encode(signature.to_bytes()))
}

fn parse_hex_inputs(
    message_hex: &str,
    signature_hex: &str,
    public_key_hex: &str,
) -> Result<(Vec<u8>, Sm2Signature, Sm2PublicKey)> {
    let message = hex::decode(message_hex)?;
    let signature = Sm2Signature::from_bytes(&hex::decode(signature_hex)?)?;
    let public_key = Sm2PublicKey::from_hex(public_key_hex)?;
    Ok((message, signature, public_key))
}

/// Verify hex-encoded message, signature and public key
///
/// Malformed hex anywhere answers `false`.
pub fn verify_hex(message_hex: &str, signature_hex: &str, public_key_hex: &str, id: &[u8]) -> bool {
    match parse_hex_inputs(message_hex, signature_hex, public_key_hex) {
        Ok((message, signature, public_key)) => verify(&message, &signature, &public_key, id),
        Err(e) => {
            tracing::debug!(error = %e, "SM2 hex signature rejected");
            false
        }
    }
}

/// Sign the UTF-8 bytes of `text`
pub fn sign_text<R: CryptoRng + RngCore>(
    text: &str,
    private_key_hex: &str,
    id: &[u8],
    rng: &mut R,
) -> Result<String> {
    sign_hex(&hex::encode(text.as_bytes()), private_key_hex, id, rng)
}

/// Verify a signature over the UTF-8 bytes of `text`
pub fn verify_text(text: &str, signature_hex: &str, public_key_hex: &str, id: &[u8]) -> bool {
    verify_hex(&hex::encode(text.as_bytes()), signature_hex, public_key_hex, id)
}
