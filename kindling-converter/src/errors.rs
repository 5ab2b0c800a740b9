//! Error types for event conversion
//!
//! Every failure here is scoped to one attribute or one event. None of them
//! is allowed to stop the caller's per-event loop.

use crate::builders::AttributeBuilder;
use crate::value::ValueType;
use thiserror::Error;

/// A parameter's bytes do not fit the layout its type tag declares.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("length mismatch for {value_type}: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        value_type: ValueType,
        expected: usize,
        actual: usize,
    },

    #[error("malformed {value_type}: {reason}")]
    Malformed {
        value_type: ValueType,
        reason: String,
    },
}

impl DecodeError {
    pub(crate) fn malformed(value_type: ValueType, reason: impl Into<String>) -> Self {
        DecodeError::Malformed {
            value_type,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to decode parameter {param}: {source}")]
    Decode { param: String, source: DecodeError },

    #[error("{builder} attributes incomplete: {} failure(s)", .failures.len())]
    Attributes {
        builder: AttributeBuilder,
        failures: Vec<ConvertError>,
    },

    #[error("malformed socket tuple in {param}: {reason}")]
    Tuple { param: String, reason: String },

    #[error("unrecognized event type code: {code}")]
    UnrecognizedEvent { code: u16 },

    #[error("cannot classify event type {code}: {reason}")]
    Classification { code: u16, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Capture error: {message}")]
    CaptureError { message: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
