//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
///
/// Every variant is a load-time failure: once a `Dataset` exists, no query
/// can fail.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// IO error with path context
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension not recognised
    #[error("Unsupported dataset format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// Data parsed but breaks a load-time precondition
    #[error("Invalid dataset: {0}")]
    Invalid(String),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
