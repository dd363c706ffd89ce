//! Error types for the Ames Housing explorer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, AmesError>;

/// Main error type for dataset loading, analysis and estimation
#[derive(Error, Debug)]
pub enum AmesError {
    #[error("Data error: {0}")]
    DataError(String),

    #[error("Dataset not found; searched: {}", format_candidates(.searched))]
    DatasetNotFound { searched: Vec<PathBuf> },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: String, value: String },

    #[error("Training error: {0}")]
    TrainingError(String),

    #[error("Model not fitted")]
    ModelNotFitted,

    #[error("Invalid shape: expected {expected}, got {actual}")]
    ShapeError { expected: String, actual: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn format_candidates(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl AmesError {
    /// Shorthand for an unparsable user-supplied field
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>) -> Self {
        AmesError::InvalidInput {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Whether the caller can recover by re-prompting the user
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AmesError::InvalidInput { .. })
    }
}

impl From<polars::error::PolarsError> for AmesError {
    fn from(err: polars::error::PolarsError) -> Self {
        AmesError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for AmesError {
    fn from(err: serde_json::Error) -> Self {
        AmesError::SerializationError(err.to_string())
    }
}

impl From<ndarray::ShapeError> for AmesError {
    fn from(err: ndarray::ShapeError) -> Self {
        AmesError::ShapeError {
            expected: "valid shape".to_string(),
            actual: err.to_string(),
        }
    }
}
