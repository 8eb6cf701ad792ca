//! Error types for the retail_forecast crate

use polars::prelude::PolarsError;
use thiserror::Error;

/// Custom error types for the retail_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error loading or validating a fitted artifact (scaler, model, lookup file)
    #[error("Artifact error: {0}")]
    ArtifactError(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// A category name not present in the lookup tables
    #[error("Unknown {kind}: {name:?}")]
    LookupMiss { kind: &'static str, name: String },

    /// A feature record that does not match the schema the scaler was fitted on
    #[error("Shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: String, got: String },

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error deserializing an artifact payload
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error from Polars operations
    #[error("Polars error: {0}")]
    PolarsError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<PolarsError> for ForecastError {
    fn from(err: PolarsError) -> Self {
        ForecastError::PolarsError(err.to_string())
    }
}
