//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by queueing and staffing operations.
///
/// An unstable queue (ρ ≥ 1) is not an error; it is reported through
/// [`crate::models::Stability`] on the result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueueError {
    /// One or more inputs failed validation.
    #[error("invalid parameters: {}", join_messages(.0))]
    InvalidParameters(Vec<ValidationError>),
    /// A scenario configuration could not be parsed or is inconsistent.
    #[error("config error: {0}")]
    Config(String),
}

impl QueueError {
    /// Validation errors carried by this error (empty for config errors).
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidParameters(errors) => errors,
            Self::Config(_) => &[],
        }
    }
}

impl From<Vec<ValidationError>> for QueueError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidParameters(errors)
    }
}

impl From<toml::de::Error> for QueueError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QueueError>;
