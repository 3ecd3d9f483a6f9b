//! Wire response types returned to gateway clients.

use derive_builder::Builder;
use derive_getters::Getters;
use giotto_error::{ValidationError, ValidationFailure};
use serde::Serialize;

/// Successful inference response.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct InferenceResponse {
    /// Normalized model output
    output: String,
    /// Logical model identifier the request ran against
    model: String,
    /// Wall-clock time for the submission, in seconds
    time_taken_seconds: f64,
}

impl InferenceResponse {
    /// Creates a new builder for `InferenceResponse`.
    pub fn builder() -> InferenceResponseBuilder {
        InferenceResponseBuilder::default()
    }
}

/// Failure response carrying a classified, user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct ErrorResponse {
    /// Human-readable failure message
    error: String,
    /// Per-field violations, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationError>>,
}

impl ErrorResponse {
    /// A failure response with a message alone.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

impl From<&ValidationFailure> for ErrorResponse {
    fn from(failure: &ValidationFailure) -> Self {
        Self {
            error: failure.to_string(),
            details: Some(failure.violations().to_vec()),
        }
    }
}
