//! Error types for the Giotto inference gateway.
//!
//! Each concern gets its own kind enum plus a located error struct; the
//! `GiottoError` sum type unifies them at crate boundaries.

mod config;
mod database;
mod http;
mod validation;

pub use config::{ConfigError, ConfigErrorKind};
pub use database::{DatabaseError, DatabaseErrorKind};
pub use http::HttpError;
pub use validation::{ValidationError, ValidationFailure};

/// Unified error type for gateway operations.
#[derive(Debug, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum GiottoError {
    /// Configuration error.
    Config(ConfigError),
    /// Database error.
    Database(DatabaseError),
    /// HTTP error.
    Http(HttpError),
    /// Request validation failure.
    Validation(ValidationFailure),
}

/// Result alias for gateway operations.
pub type GiottoResult<T> = Result<T, GiottoError>;
