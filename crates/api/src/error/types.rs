//! Error type definitions for cryptographic operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error (wrong width, out-of-range scalar, off-curve point)
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Decryption error, including a failed integrity check
    DecryptionFailed {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Serialization error (malformed hex, invalid UTF-8)
    SerializationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Arithmetic impossibility such as a non-invertible element
    ArithmeticError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error
    pub fn with_context(mut self, new_context: &'static str) -> Self {
        match &mut self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::DecryptionFailed { context, .. }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::SerializationError { context, .. }
            | Self::ArithmeticError { context, .. }
            | Self::Other { context, .. } => *context = new_context,
        }
        self
    }

    /// Replace the message of an existing error
    ///
    /// Length errors carry no message and are returned unchanged.
    #[cfg(feature = "std")]
    pub fn with_message(mut self, new_message: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidKey { message, .. }
            | Self::InvalidSignature { message, .. }
            | Self::DecryptionFailed { message, .. }
            | Self::InvalidCiphertext { message, .. }
            | Self::InvalidParameter { message, .. }
            | Self::SerializationError { message, .. }
            | Self::ArithmeticError { message, .. }
            | Self::Other { message, .. } => *message = new_message.into(),
            Self::InvalidLength { .. } => {}
        }
        self
    }

    /// The static context string of this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidSignature { context, .. }
            | Self::DecryptionFailed { context, .. }
            | Self::InvalidCiphertext { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::SerializationError { context, .. }
            | Self::ArithmeticError { context, .. }
            | Self::Other { context, .. } => *context,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "Invalid key",
            Self::InvalidSignature { .. } => "Invalid signature",
            Self::DecryptionFailed { .. } => "Decryption failed",
            Self::InvalidCiphertext { .. } => "Invalid ciphertext",
            Self::InvalidLength { .. } => "Invalid length",
            Self::InvalidParameter { .. } => "Invalid parameter",
            Self::SerializationError { .. } => "Serialization error",
            Self::ArithmeticError { .. } => "Arithmetic error",
            Self::Other { .. } => "Error",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            #[cfg(feature = "std")]
            Self::InvalidKey { context, message }
            | Self::InvalidSignature { context, message }
            | Self::DecryptionFailed { context, message }
            | Self::InvalidCiphertext { context, message }
            | Self::InvalidParameter { context, message }
            | Self::SerializationError { context, message }
            | Self::ArithmeticError { context, message }
            | Self::Other { context, message } => {
                if message.is_empty() {
                    write!(f, "{}: {}", self.label(), context)
                } else {
                    write!(f, "{}: {}: {}", self.label(), context, message)
                }
            }
            #[cfg(not(feature = "std"))]
            _ => write!(f, "{}: {}", self.label(), self.context()),
        }
    }
}
