//! Error types for post-quantum cryptographic operations

use std::fmt;
use thiserror::Error;

/// Result type alias for post-quantum cryptographic operations
pub type Result<T> = std::result::Result<T, PqError>;

/// Coarse error classification surfaced to callers.
///
/// Every [`PqError`] variant maps to exactly one kind, so hosts that only care
/// about the contract category (for metrics, FFI error codes, retry decisions)
/// can match on [`PqError::kind`] instead of the full variant set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unknown or disabled algorithm requested
    UnsupportedAlgorithm,
    /// Wrong-length buffer, malformed seed, or otherwise invalid caller input
    InvalidArgument,
    /// Operation requires key material the session does not hold
    InvalidState,
    /// The native cryptographic engine reported an internal failure
    EngineFailure,
}

/// Main error type for all post-quantum cryptographic operations
#[derive(Error, Debug)]
pub enum PqError {
    /// Unknown or disabled algorithm name
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A buffer did not have the length the algorithm requires
    #[error("invalid {what} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// What the buffer was supposed to be (public key, ciphertext, ...)
        what: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length actually provided
        actual: usize,
    },

    /// Caller input was invalid for a reason other than buffer length
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation is not legal in the session's current key state
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// The native engine failed for a reason not attributable to caller input
    #[error("engine failure: {0}")]
    EngineFailure(String),
}

impl PqError {
    /// Classify this error into one of the four contract kinds
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedAlgorithm(_) => ErrorKind::UnsupportedAlgorithm,
            Self::InvalidLength { .. } | Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::EngineFailure(_) => ErrorKind::EngineFailure,
        }
    }

    /// Create an `UnsupportedAlgorithm` error from an algorithm name
    pub fn unsupported_algorithm(name: impl fmt::Display) -> Self {
        Self::UnsupportedAlgorithm(name.to_string())
    }

    /// Create an `InvalidLength` error for the named buffer
    #[must_use]
    pub fn invalid_length(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::InvalidLength {
            what,
            expected,
            actual,
        }
    }

    /// Create an `InvalidArgument` error with a formatted message
    pub fn invalid_argument(msg: impl fmt::Display) -> Self {
        Self::InvalidArgument(msg.to_string())
    }

    /// Create an `EngineFailure` error with a formatted message
    pub fn engine_failure(msg: impl fmt::Display) -> Self {
        Self::EngineFailure(msg.to_string())
    }
}
