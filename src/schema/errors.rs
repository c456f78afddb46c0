//! Validation error types

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Why a candidate animal was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The body is not a JSON object
    #[error("expected an object, found {found}")]
    NotAnObject { found: &'static str },

    /// A required field is absent
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// A field is present with the wrong JSON type
    #[error("field '{field}' must be {expected}, found {found}")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ValidationError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    pub fn wrong_type(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        ValidationError::WrongType {
            field: field.into(),
            expected,
            found,
        }
    }

    /// Path of the offending field, `$root` for the body itself
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NotAnObject { .. } => "$root",
            ValidationError::MissingField { field } | ValidationError::WrongType { field, .. } => {
                field
            }
        }
    }
}
