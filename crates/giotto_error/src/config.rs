//! Configuration error types.

/// Configuration error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// Required environment variable not set
    #[display("{_0} environment variable not set")]
    MissingVar(String),
    /// Environment variable set to an unusable value
    #[display("Invalid value for {var}: {message}")]
    InvalidVar {
        /// Variable name
        var: String,
        /// What was wrong with the value
        message: String,
    },
}

/// Configuration error with source location tracking.
///
/// # Examples
///
/// ```
/// use giotto_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingVar("DATABASE_URL".into()));
/// assert!(format!("{}", err).contains("DATABASE_URL"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}
