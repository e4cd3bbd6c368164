//! Error types for the prediction pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PredictorError>;

/// Top-level error type
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Could not extract a video id from URL: {0}")]
    InvalidUrl(String),

    #[error("No video found for id: {0}")]
    VideoNotFound(String),

    #[error("Feature column '{column}' required by the trained model is missing")]
    SchemaMismatch { column: String },

    #[error("Trained model artifact not found at {0}")]
    ArtifactNotFound(String),

    #[error("Trained model artifact at {path} is unreadable: {cause}")]
    ArtifactCorrupt { path: String, cause: String },

    #[error("No model has been trained yet")]
    NoModelTrained,

    #[error("Unexpected API response: {0}")]
    ApiResponse(String),

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),
}
