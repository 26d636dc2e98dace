//! Error handling for cryptographic primitives

use core::fmt;

use gmcrypt_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error (out-of-range scalar, off-curve point)
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Modular inverse requested for a non-invertible element
    NoInverse {
        /// Where the inversion was attempted
        context: &'static str,
    },

    /// Malformed textual encoding (hex digits, UTF-8)
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => write!(
                f,
                "Invalid length for {}: expected {}, got {}",
                context, expected, actual
            ),
            Error::NoInverse { context } => {
                write!(f, "No modular inverse exists in {}", context)
            }
            Error::Encoding { context, details } => {
                write!(f, "Invalid encoding of {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        let details = match err {
            hex::FromHexError::InvalidHexCharacter { .. } => "invalid hex character",
            hex::FromHexError::OddLength => "odd number of hex digits",
            hex::FromHexError::InvalidStringLength => "wrong number of hex digits",
        };
        Error::Encoding {
            context: "hex string",
            details,
        }
    }
}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::NoInverse { context } => CoreError::ArithmeticError {
                context,
                #[cfg(feature = "std")]
                message: "element is not invertible".to_string(),
            },
            Error::Encoding { context, details } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

// Re-export core error handling traits for convenience
pub use gmcrypt_api::error::ResultExt;

// Include the validation submodule
pub mod validate;
