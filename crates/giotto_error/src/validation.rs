//! Request validation error types.

use serde::Serialize;

/// A single validation violation on an inbound request field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("{field}: {message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    /// Create a violation for the named field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The offending field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description of the violation.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The full set of violations found on one request.
///
/// Validation never stops at the first failure; every violation is
/// collected before the request is rejected.
///
/// # Examples
///
/// ```
/// use giotto_error::{ValidationError, ValidationFailure};
///
/// let failure = ValidationFailure::new(vec![
///     ValidationError::new("model", "must not be empty"),
///     ValidationError::new("temperature", "must be between 0 and 2"),
/// ]);
/// assert_eq!(failure.violations().len(), 2);
/// assert!(format!("{}", failure).contains("temperature"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    violations: Vec<ValidationError>,
}

impl ValidationFailure {
    /// Wrap the collected violations.
    pub fn new(violations: Vec<ValidationError>) -> Self {
        Self { violations }
    }

    /// The individual violations.
    pub fn violations(&self) -> &[ValidationError] {
        &self.violations
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Validation failed: {}", joined)
    }
}

impl std::error::Error for ValidationFailure {}
