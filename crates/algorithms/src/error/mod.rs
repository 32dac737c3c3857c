//! Error handling for the mathematical and encoding primitives

#[cfg(feature = "alloc")]
use alloc::borrow::Cow;
#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::boxed::Box;

use core::fmt;

use pqcrypt_api::Error as CoreError;

/// The error type for primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Matrix operand shape mismatch
    Dimension {
        /// Operation whose operands disagree
        context: &'static str,
        /// Expected (rows, cols)
        expected: (usize, usize),
        /// Actual (rows, cols)
        actual: (usize, usize),
    },

    /// A field or ring element has no inverse under the requested modulus
    NotInvertible {
        /// Structure in which inversion was attempted
        context: &'static str,
    },

    /// OAEP padding verification failure; always fatal, never partially
    /// accepted
    Padding {
        /// Which check failed
        context: &'static str,
    },

    /// MGF1 requested output exceeding 2^32 hash blocks
    MaskTooLong {
        /// Requested mask length in bytes
        requested: usize,
    },

    /// Plaintext too long for the embedding scheme's fixed budget
    Capacity {
        /// Embedding that overflowed
        context: &'static str,
        /// Units required by the input
        needed: usize,
        /// Units the embedding can hold
        available: usize,
    },

    /// A bounded rejection-sampling loop ran out of attempts
    Exhausted {
        /// Sampling loop that gave up
        operation: &'static str,
        /// Number of attempts made
        attempts: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for primitive operations
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
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Dimension {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Dimension mismatch in {}: expected {}x{}, got {}x{}",
                    context, expected.0, expected.1, actual.0, actual.1
                )
            }
            Error::NotInvertible { context } => {
                write!(f, "Element not invertible in {}", context)
            }
            Error::Padding { context } => {
                write!(f, "Padding verification failed: {}", context)
            }
            Error::MaskTooLong { requested } => {
                write!(f, "MGF1 mask too long: {} bytes requested", requested)
            }
            Error::Capacity {
                context,
                needed,
                available,
            } => {
                write!(
                    f,
                    "Capacity exceeded in {}: need {}, have {}",
                    context, needed, available
                )
            }
            Error::Exhausted {
                operation,
                attempts,
            } => {
                write!(f, "{} gave up after {} attempts", operation, attempts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, .. } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(s) => Box::leak(s.into_boxed_str()),
                },
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
            Error::Dimension { context, .. } => CoreError::InvalidParameter { context },
            Error::NotInvertible { context } => CoreError::InvalidParameter { context },
            Error::Padding { .. } => CoreError::DecryptionFailed {
                context: "OAEP decode",
            },
            Error::MaskTooLong { .. } => CoreError::InvalidParameter { context: "MGF1 mask" },
            Error::Capacity { context, .. } => CoreError::InvalidParameter { context },
            Error::Exhausted { operation, .. } => CoreError::KeyGenerationFailed {
                context: operation,
            },
        }
    }
}

#[cfg(test)]
mod tests;
