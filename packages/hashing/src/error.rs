//! Error handling for the hashing facade

use crate::algorithm::HashAlgorithm;
use thiserror::Error;

/// Status reported for configuration problems that never reached a primitive
pub const CONFIGURATION_ERROR_CODE: i32 = -2;

/// Status reported for algorithm names that do not parse
pub const UNSUPPORTED_ALGORITHM_CODE: i32 = -3;

/// Status reported for I/O failures while streaming input
pub const IO_ERROR_CODE: i32 = -4;

/// Hashing-specific errors
#[derive(Debug, Error)]
pub enum HashError {
    /// The hash primitive returned a non-success status
    #[error("{algorithm} digest computation failed with status {code}")]
    PrimitiveFailure {
        /// Variant whose primitive failed
        algorithm: HashAlgorithm,
        /// Status code exactly as reported by the primitive
        code: i32,
    },

    /// An algorithm name did not match any supported variant
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration could not be loaded
    #[error("Invalid hash configuration: {0}")]
    Configuration(String),

    /// Reading streamed input failed
    #[error("Failed to read hash input: {0}")]
    Io(#[from] std::io::Error),
}

impl HashError {
    /// Create a primitive failure error for the given variant and status
    #[must_use]
    pub fn primitive_failure(algorithm: HashAlgorithm, code: i32) -> Self {
        Self::PrimitiveFailure { algorithm, code }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Numeric code for this error
    ///
    /// Primitive failures return the primitive's status unchanged; the other
    /// kinds use the fixed negative codes above. A provider may report one of
    /// those same values, so the code alone does not identify the error kind.
    /// Match on the variant, or read the message of a serialised response.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::PrimitiveFailure { code, .. } => *code,
            Self::UnsupportedAlgorithm(_) => UNSUPPORTED_ALGORITHM_CODE,
            Self::Configuration(_) => CONFIGURATION_ERROR_CODE,
            Self::Io(_) => IO_ERROR_CODE,
        }
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;
