//! Hex and text forms of SM2 encryption
//!
//! Messages, keys and ciphertexts are exchanged as hex strings. Output is
//! lowercase; input may use either case.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use gmcrypt_algorithms::ec::sm2::{Sm2PrivateKey, Sm2PublicKey};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{decrypt, encrypt};
use crate::error::{Error, Result};

/// Encrypt a hex-encoded message to a hex-encoded public key
pub fn encrypt_hex<R: CryptoRng + RngCore>(
    message_hex: &str,
    public_key_hex: &str,
    rng: &mut R,
) -> Result<String> {
    let message = Zeroizing::new(hex::decode(message_hex)?);
    let public_key = Sm2PublicKey::from_hex(public_key_hex)?;
    let ciphertext = encrypt(&message, &public_key, rng)?;
    Ok(hex::encode(ciphertext))
}

/// Decrypt a hex ciphertext, returning the plaintext as hex
pub fn decrypt_hex(ciphertext_hex: &str, private_key_hex: &str) -> Result<String> {
    let ciphertext = hex::decode(ciphertext_hex)?;
    let private_key = Sm2PrivateKey::from_hex(private_key_hex)?;
    let message = Zeroizing::new(decrypt(&ciphertext, &private_key)?);
    Ok(hex::encode(&*message))
}

/// Encrypt the UTF-8 bytes of `text`
pub fn encrypt_text<R: CryptoRng + RngCore>(
    text: &str,
    public_key_hex: &str,
    rng: &mut R,
) -> Result<String> {
    let public_key = Sm2PublicKey::from_hex(public_key_hex)?;
    let ciphertext = encrypt(text.as_bytes(), &public_key, rng)?;
    Ok(hex::encode(ciphertext))
}

/// Decrypt a hex ciphertext whose plaintext is UTF-8 text
///
/// # Errors
///
/// Besides the [`decrypt`] errors, fails with [`Error::InvalidUtf8`] when
/// the recovered bytes are not valid UTF-8.
pub fn decrypt_text(ciphertext_hex: &str, private_key_hex: &str) -> Result<String> {
    let ciphertext = hex::decode(ciphertext_hex)?;
    let private_key = Sm2PrivateKey::from_hex(private_key_hex)?;
    let message = decrypt(&ciphertext, &private_key)?;
    String::from_utf8(message).map_err(|e| {
        let mut bytes = e.into_bytes();
        zeroize::Zeroize::zeroize(&mut bytes);
        Error::InvalidUtf8
    })
}
