//! Error types for the emissions subsystem

use thiserror::Error;

/// Errors that can occur when looking up measurements or validating inputs
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmissionError {
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Unknown index {index} for dataset {dataset}")]
    UnknownIndex { dataset: String, index: String },

    #[error("Unknown cache level: {0}")]
    UnknownCacheLevel(String),

    #[error("Invalid input {field}: {value} (must be finite and non-negative)")]
    InvalidInput { field: &'static str, value: f64 },
}
