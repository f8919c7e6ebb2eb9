//! Error types for rota construction.

use thiserror::Error;

use crate::models::{Shift, Weekday};
use crate::validation::ValidationError;

/// Main error type for u-rota operations.
#[derive(Debug, Error)]
pub enum RotaError {
    /// The roster failed validation; every detected problem is listed.
    #[error("invalid roster: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// An already assigned cell was assigned again.
    #[error("{day} {shift} shift is already assigned")]
    CellTaken { day: Weekday, shift: Shift },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration values that parse but make no sense.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for u-rota operations.
pub type Result<T> = std::result::Result<T, RotaError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
