//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid birth moment: {0}")]
    InvalidBirthMoment(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Chart provider error: {0}")]
    Provider(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
