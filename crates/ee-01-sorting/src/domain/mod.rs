//! Domain Layer - Pure sorting algorithms
//!
//! RULES:
//! - No I/O operations
//! - No allocation of a second buffer for the input
//! - Results are written back into the caller's slice

pub mod insertion;
pub mod invariants;
pub mod selection;
pub mod strategy;

pub use insertion::insertion_sort;
pub use invariants::{is_permutation_of, is_sorted_ascending};
pub use selection::selection_sort;
pub use strategy::SortStrategy;
