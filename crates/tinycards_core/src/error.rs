//! Error taxonomy shared by the model and converter layers.
//!
//! # Responsibility
//! - Name the offending wire field whenever a read fails.
//! - Keep caller-input errors distinct from service-payload errors.
//!
//! # Invariants
//! - Converters never return partially built objects; every failure is one
//!   of these variants.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Failure while building model objects or wire payloads.
#[derive(Debug)]
pub enum ConvertError {
    /// A required external key is absent. Carries the wire (camelCase) name.
    MissingField(String),
    /// Caller input has the wrong shape, e.g. a card row with three cells.
    InvalidArgument(String),
    /// Key is present but its value is not in the expected shape.
    StructuralMismatch {
        field: String,
        expected: &'static str,
    },
    /// serde failure while decoding a flat entity or encoding a payload.
    Json(serde_json::Error),
}

impl ConvertError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub(crate) fn mismatch(field: impl Into<String>, expected: &'static str) -> Self {
        Self::StructuralMismatch {
            field: field.into(),
            expected,
        }
    }

    /// Returns the wire field name this error is about, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) => Some(field),
            Self::StructuralMismatch { field, .. } => Some(field),
            Self::InvalidArgument(_) | Self::Json(_) => None,
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::StructuralMismatch { field, expected } => {
                write!(f, "field `{field}` is not {expected}")
            }
            Self::Json(err) => write!(f, "invalid JSON payload: {err}"),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::MissingField(_) | Self::InvalidArgument(_) | Self::StructuralMismatch { .. } => {
                None
            }
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
