//! Error types for the benchmark CLI

use ee_01_sorting::SortStrategy;
use ee_02_references::ReferenceError;
use ee_03_emissions::EmissionError;
use thiserror::Error;

/// Errors that can occur while configuring or running a benchmark
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Sorted output of {strategy} failed verification in iteration {iteration}")]
    VerificationFailed {
        strategy: SortStrategy,
        iteration: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("References error: {0}")]
    References(#[from] ReferenceError),

    #[error("Emissions error: {0}")]
    Emissions(#[from] EmissionError),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}
