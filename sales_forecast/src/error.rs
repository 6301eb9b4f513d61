//! Error types for the sales_forecast crate

use crate::validation::ValidationResult;
use thiserror::Error;

/// Custom error types for the sales_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Input rejected by the validator; carries every collected problem
    #[error("Validation error: {}", .0.message)]
    Validation(ValidationResult),

    /// A required field was absent when converting an input row
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from reading CSV input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from reading or writing JSON documents
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl ForecastError {
    /// The validation result behind a `Validation` error, if that is what this is
    pub fn validation(&self) -> Option<&ValidationResult> {
        match self {
            ForecastError::Validation(result) => Some(result),
            _ => None,
        }
    }
}
