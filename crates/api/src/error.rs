//! Error type definitions for the pqcrypt ecosystem

use core::fmt;

/// Primary error type for pqcrypt operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid parameter error
    InvalidParameter {
        /// Context in which the parameter was rejected
        context: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key generation failed (bounded retry exhaustion)
    KeyGenerationFailed {
        /// Scheme or sampling loop that gave up
        context: &'static str,
    },

    /// Decryption error (includes padding verification failures)
    DecryptionFailed {
        /// Scheme that failed to decrypt
        context: &'static str,
    },

    /// Invalid ciphertext error
    InvalidCiphertext {
        /// Scheme that rejected the ciphertext
        context: &'static str,
    },

    /// Serialization error
    SerializationError {
        /// Wire format that could not be produced or parsed
        context: &'static str,
    },

    /// Not implemented error
    NotImplemented {
        /// Name of the unimplemented feature
        feature: &'static str,
    },

    /// Other error
    Other {
        /// Free-form context
        context: &'static str,
    },
}

/// Result type for pqcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { context } => {
                write!(f, "Invalid parameter: {}", context)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::KeyGenerationFailed { context } => {
                write!(f, "Key generation failed: {}", context)
            }
            Error::DecryptionFailed { context } => {
                write!(f, "Decryption failed: {}", context)
            }
            Error::InvalidCiphertext { context } => {
                write!(f, "Invalid ciphertext: {}", context)
            }
            Error::SerializationError { context } => {
                write!(f, "Serialization error: {}", context)
            }
            Error::NotImplemented { feature } => {
                write!(f, "Feature not implemented: {}", feature)
            }
            Error::Other { context } => write!(f, "{}", context),
        }
    }
}

// Implement standard Error trait when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}
