//! Error types for record encoding/decoding.

use std::fmt;

/// Result type for record operations.
pub type RecordResult<T> = Result<T, RecordError>;

/// Errors that can occur while encoding or decoding a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    /// The underlying scalar operation ran out of buffer.
    Scalar(scalar::ScalarError),
}

impl From<scalar::ScalarError> for RecordError {
    fn from(err: scalar::ScalarError) -> Self {
        Self::Scalar(err)
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(e) => write!(f, "scalar error: {e}"),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scalar(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_wraps_scalar() {
        let err = RecordError::from(scalar::ScalarError::EndOfBuffer {
            requested: 8,
            available: 2,
        });
        let msg = err.to_string();
        assert!(msg.contains("scalar error"));
        assert!(msg.contains("8 bytes"));
    }

    #[test]
    fn error_source_is_scalar() {
        use std::error::Error;
        let err = RecordError::from(scalar::ScalarError::EndOfBuffer {
            requested: 1,
            available: 0,
        });
        assert!(err.source().is_some());
    }
}
