//! Error types for scalar wire operations.

use std::fmt;

/// Result type for scalar wire operations.
pub type ScalarResult<T> = Result<T, ScalarError>;

/// Errors that can occur during scalar encoding/decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// Attempted to read or write past the end of the buffer.
    EndOfBuffer {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },
}

impl fmt::Display for ScalarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfBuffer {
                requested,
                available,
            } => {
                write!(
                    f,
                    "requested {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for ScalarError {}
