//! Error handling for PKE operations.

use core::fmt;
use gmcrypt_algorithms::error::Error as PrimitiveError;
use gmcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error raised by the primitives layer (key parsing, KDF)
    Primitive(PrimitiveError),
    /// Ciphertext too short or C1 not a curve point
    InvalidCiphertextFormat(&'static str),
    /// Recipient public key unusable
    InvalidPublicKey(&'static str),
    /// Shared point degenerate during decryption
    DecryptionFailed(&'static str),
    /// Recomputed C3 does not match the ciphertext
    IntegrityCheckFailed,
    /// Malformed hex input
    Encoding(&'static str),
    /// Decrypted bytes are not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::InvalidCiphertextFormat(reason) => {
                write!(f, "Invalid SM2 ciphertext format: {}", reason)
            }
            Error::InvalidPublicKey(reason) => write!(f, "Invalid SM2 public key: {}", reason),
            Error::DecryptionFailed(reason) => write!(f, "SM2 decryption failed: {}", reason),
            Error::IntegrityCheckFailed => write!(f, "SM2 decryption failed: C3 mismatch"),
            Error::Encoding(reason) => write!(f, "PKE encoding error: {}", reason),
            Error::InvalidUtf8 => write!(f, "Decrypted plaintext is not valid UTF-8"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { .. } => {
                Error::Encoding("invalid hex character")
            }
            hex::FromHexError::OddLength => Error::Encoding("odd number of hex digits"),
            hex::FromHexError::InvalidStringLength => Error::Encoding("wrong number of hex digits"),
        }
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        #[cfg(feature = "std")]
        let message = err.to_string();
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidCiphertextFormat(_) => CoreError::InvalidCiphertext {
                context: "SM2 ciphertext",
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidPublicKey(_) => CoreError::InvalidKey {
                context: "SM2 public key",
                #[cfg(feature = "std")]
                message,
            },
            Error::DecryptionFailed(_) | Error::IntegrityCheckFailed => {
                CoreError::DecryptionFailed {
                    context: "SM2 decrypt",
                    #[cfg(feature = "std")]
                    message,
                }
            }
            Error::Encoding(_) | Error::InvalidUtf8 => CoreError::SerializationError {
                context: "SM2 encoding",
                #[cfg(feature = "std")]
                message,
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
