//! Error types for the references subsystem

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a bibliography or citing from it
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// A page cited a key that is missing from the bibliography.
    #[error("Unknown citation key: {key}")]
    UnknownCitationKey { key: String },

    #[error("Duplicate citation key in bibliography: {key}")]
    DuplicateKey { key: String },

    #[error("Failed to parse bibliography: {0}")]
    Parse(String),

    #[error("Failed to read bibliography {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
