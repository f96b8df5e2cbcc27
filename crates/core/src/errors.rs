//! Core error types for the StockLens application.
//!
//! Taxonomy lookups never fail: unresolvable names degrade to
//! [`Industry::Unknown`](crate::industries::Industry::Unknown). Errors only
//! surface at the edges, when parsing identifiers or validating service input.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and identifier parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Unknown {kind} identifier '{value}'")]
    UnknownIdentifier { kind: &'static str, value: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl ValidationError {
    pub(crate) fn unknown_identifier(kind: &'static str, value: &str) -> Self {
        ValidationError::UnknownIdentifier {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_wraps_into_root_error() {
        let err: Error = ValidationError::MissingField("symbol".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'symbol' is missing"
        );
    }

    #[test]
    fn test_unknown_identifier_message() {
        let err = ValidationError::unknown_identifier("industry", "NOT_AN_INDUSTRY");
        assert_eq!(
            err.to_string(),
            "Unknown industry identifier 'NOT_AN_INDUSTRY'"
        );
    }
}
