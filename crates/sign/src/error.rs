//! Error types for the signature crate

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use gmcrypt_algorithms::error::Error as AlgoError;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid signature size
    InvalidSignatureSize {
        /// Required size in bytes
        expected: usize,
        /// Size received
        actual: usize,
    },

    /// Invalid parameter
    InvalidParameter(String),

    /// Invalid key (wrong width, out of range, off-curve)
    InvalidKey(String),

    /// Encoding error (malformed hex)
    Encoding(String),

    /// Arithmetic error from the primitives layer
    Arithmetic(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::Arithmetic(msg) => write!(f, "Arithmetic error: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Convert from algorithms::error::Error
impl From<AlgoError> for Error {
    fn from(err: AlgoError) -> Self {
        match err {
            // Range and curve checks only run on key material here
            AlgoError::Parameter { name, reason } => {
                Error::InvalidKey(format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::InvalidKey(format!(
                "{}: expected {} bytes, got {}",
                context, expected, actual
            )),
            AlgoError::Encoding { context, details } => {
                Error::Encoding(format!("{}: {}", context, details))
            }
            AlgoError::NoInverse { context } => {
                Error::Arithmetic(format!("no inverse in {}", context))
            }
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::from(AlgoError::from(err))
    }
}

// Convert to api::Error
impl From<Error> for gmcrypt_api::Error {
    fn from(err: Error) -> Self {
        #[cfg(feature = "std")]
        let message = err.to_string();
        match err {
            Error::InvalidSignatureSize { expected, actual } => gmcrypt_api::Error::InvalidLength {
                context: "SM2 signature",
                expected,
                actual,
            },
            Error::InvalidParameter(_) => gmcrypt_api::Error::InvalidParameter {
                context: "SM2 sign",
                #[cfg(feature = "std")]
                message,
            },
            Error::InvalidKey(_) => gmcrypt_api::Error::InvalidKey {
                context: "SM2 key",
                #[cfg(feature = "std")]
                message,
            },
            Error::Encoding(_) => gmcrypt_api::Error::SerializationError {
                context: "SM2 sign",
                #[cfg(feature = "std")]
                message,
            },
            Error::Arithmetic(_) => gmcrypt_api::Error::ArithmeticError {
                context: "SM2 sign",
                #[cfg(feature = "std")]
                message,
            },
        }
    }
}

/// Result type for signature operations
pub type Result<T> = core::result::Result<T, Error>;
