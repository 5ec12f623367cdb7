//! Error types for translation operations.
//!
//! These errors are internal plumbing between the sub-codecs and the
//! facade. They never cross the public boundary: the facade converts each
//! of them into a log record plus an empty result for the affected
//! attribute (see the error handling policy in the crate docs).

use std::fmt;

use schema::AttributeType;

/// Result type for translation operations.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Errors that can occur while translating one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Record-level encode/decode failure.
    Record(records::RecordError),

    /// The destination buffer is smaller than the attribute's fixed length.
    OutputTooSmall { needed: usize, available: usize },

    /// The source buffer is smaller than the attribute's fixed length.
    InputTooShort { needed: usize, available: usize },

    /// Too few parameter slots were supplied for a composite attribute.
    MissingParameters { needed: usize, actual: usize },

    /// The parameter value kind cannot feed this attribute type.
    WrongParameterKind {
        attribute_type: AttributeType,
        found: &'static str,
    },

    /// The attribute type is registered but has no codec.
    UnhandledType { attribute_type: AttributeType },
}

impl From<records::RecordError> for TranslateError {
    fn from(err: records::RecordError) -> Self {
        Self::Record(err)
    }
}

impl From<scalar::ScalarError> for TranslateError {
    fn from(err: scalar::ScalarError) -> Self {
        Self::Record(records::RecordError::from(err))
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(e) => write!(f, "record error: {e}"),
            Self::OutputTooSmall { needed, available } => {
                write!(f, "output too small: need {needed}, have {available}")
            }
            Self::InputTooShort { needed, available } => {
                write!(f, "input too short: need {needed}, have {available}")
            }
            Self::MissingParameters { needed, actual } => {
                write!(f, "not enough parameter slots: need {needed}, have {actual}")
            }
            Self::WrongParameterKind {
                attribute_type,
                found,
            } => {
                write!(
                    f,
                    "parameter of kind {found} cannot feed attribute type {attribute_type}"
                )
            }
            Self::UnhandledType { attribute_type } => {
                write!(f, "unhandled attribute type {attribute_type}")
            }
        }
    }
}

impl std::error::Error for TranslateError {}
