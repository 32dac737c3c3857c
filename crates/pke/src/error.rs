//! Error handling for PKE operations.

use core::fmt;

use pqcrypt_algorithms::error::Error as PrimitiveError;
use pqcrypt_api::error::Error as CoreError;

/// Error type for PKE operations.
#[derive(Debug)]
pub enum Error {
    /// An underlying mathematical or encoding primitive failed.
    Primitive(PrimitiveError),
    /// Key generation exhausted its attempt budget.
    KeyGenerationFailed(&'static str),
    /// The plaintext cannot be embedded under this scheme.
    EncryptionFailed(&'static str),
    /// The ciphertext did not decrypt to a well-formed plaintext.
    DecryptionFailed(&'static str),
    /// The parameter set cannot be used for the requested operation.
    UnsupportedParameters(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::KeyGenerationFailed(reason) => {
                write!(f, "PKE key generation failed: {}", reason)
            }
            Error::EncryptionFailed(reason) => write!(f, "PKE encryption failed: {}", reason),
            Error::DecryptionFailed(reason) => write!(f, "PKE decryption failed: {}", reason),
            Error::UnsupportedParameters(reason) => {
                write!(f, "PKE unsupported parameters: {}", reason)
            }
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

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::KeyGenerationFailed(reason) => CoreError::KeyGenerationFailed {
                context: reason,
            },
            Error::EncryptionFailed(reason) => CoreError::Other { context: reason },
            Error::DecryptionFailed(reason) => CoreError::DecryptionFailed {
                context: reason,
            },
            Error::UnsupportedParameters(reason) => CoreError::InvalidParameter {
                context: reason,
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
