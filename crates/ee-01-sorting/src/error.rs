//! Error types for the sorting subsystem

use thiserror::Error;

/// Errors that can occur when selecting a sort strategy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortError {
    #[error("Unknown sort strategy: {0} (expected builtin, unstable, insertion or selection)")]
    UnknownStrategy(String),
}
