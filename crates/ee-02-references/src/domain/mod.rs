//! Domain Layer
//!
//! This layer contains:
//! - Bibliography records and their display formatting
//! - The bibliography lookup table
//! - The per-render citation/figure registry

pub mod bibliography;
pub mod entry;
pub mod registry;

pub use bibliography::Bibliography;
pub use entry::{BibEntry, EntryKind};
pub use registry::{ReferenceRegistry, REFERENCES_HEADER};
