//! Error types for decode and encode operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = CodecError> = std::result::Result<T, E>;

/// Errors that can occur while resolving or serializing a node.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// A field required by the current shape is absent.
    #[error("Missing required field '{field}' in {snippet}")]
    MissingRequiredField { field: String, snippet: String },

    /// A field holds a container where a leaf was expected, or vice versa.
    #[error("Field '{field}' must be {expected}: {snippet}")]
    WrongNodeShape {
        field: String,
        expected: &'static str,
        snippet: String,
    },

    /// A discriminator string matches no known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownDiscriminator { kind: &'static str, value: String },

    /// A recognized field holds values outside its closed vocabulary.
    #[error("Invalid {field} for {scope}: {}", .values.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        scope: String,
        values: Vec<String>,
    },

    /// Two behaviors from the same exclusivity group co-occur.
    #[error("Behaviors '{first}' and '{second}' cannot be used together")]
    MutualExclusionViolation { first: String, second: String },

    /// A fixed JSON-LD context holds an unexpected value.
    #[error("Unexpected @context for {resource}: expected '{expected}', found '{found}'")]
    ContextMismatch {
        resource: &'static str,
        expected: &'static str,
        found: String,
    },

    /// A purpose-pinned annotation was built with another motivation.
    #[error("Motivation '{found}' cannot be used for a '{expected}' annotation")]
    MotivationMismatch { expected: String, found: String },

    /// Malformed JSON text.
    #[error("JSON error: {0}")]
    Json(String),
}

impl CodecError {
    /// Create a JSON syntax error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
            snippet: snippet.into(),
        }
    }

    /// Create a wrong node shape error.
    pub fn wrong_shape(
        field: impl Into<String>,
        expected: &'static str,
        snippet: impl Into<String>,
    ) -> Self {
        Self::WrongNodeShape {
            field: field.into(),
            expected,
            snippet: snippet.into(),
        }
    }

    /// Create an unknown discriminator error.
    pub fn unknown(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownDiscriminator {
            kind,
            value: value.into(),
        }
    }

    /// Create an invalid enum value error for a single value.
    pub fn invalid_value(
        field: &'static str,
        scope: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidEnumValue {
            field,
            scope: scope.into(),
            values: vec![value.into()],
        }
    }

    /// Name of the field this error is about, if it has one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequiredField { field, .. } | Self::WrongNodeShape { field, .. } => {
                Some(field)
            }
            Self::InvalidEnumValue { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(format!("Parse error: {err}"))
    }
}
