//! Failure classification categories.

use serde::{Deserialize, Serialize};

/// Closed set of upstream failure categories.
///
/// Every dispatch failure is classified into exactly one of these; the
/// snake_case string form is used both on the wire and in the ledger.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    /// Quota or credit exhaustion on the upstream account
    RateLimit,
    /// Missing or rejected upstream credential
    Authentication,
    /// The model is still being loaded into memory upstream
    ModelLoading,
    /// The requested model does not exist upstream
    ModelNotFound,
    /// The upstream rejected the forwarded input
    InvalidInput,
    /// The upstream reported an internal fault
    ServerError,
    /// The upstream could not be reached
    NetworkError,
    /// Anything that matched no known failure phrasing
    Unknown,
}

impl ErrorCategory {
    /// Whether a failure of this category warrants an automatic retry.
    ///
    /// Only a model that is still loading is worth waiting for; every other
    /// category is final on first occurrence.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::ModelLoading)
    }
}
