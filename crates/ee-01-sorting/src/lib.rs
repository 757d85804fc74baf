//! # EE-01 Sorting
//!
//! Textbook in-place comparison sorts used as workloads by the energy
//! measurement benchmarks.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure algorithms, no I/O
//!   - `insertion_sort`: Stable O(n²) sort, O(n) on sorted input
//!   - `selection_sort`: Unstable O(n²) sort with O(n) swaps
//!   - `SortStrategy`: Selects one of the sorts (or a std sort) at runtime
//!   - `invariants`: Ordering and permutation checks
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: After sorting, the slice is non-decreasing
//! - **INVARIANT-2**: After sorting, the slice is a permutation of its input
//! - **INVARIANT-3**: `insertion_sort` preserves the order of equal elements
//!
//! Both sorts mutate the caller's slice and never allocate a second buffer.
//!
//! ## Usage Example
//!
//! ```
//! use ee_01_sorting::{insertion_sort, selection_sort};
//!
//! let mut a = [8, 5, 7, 1, 9, 3];
//! insertion_sort(&mut a);
//! assert_eq!(a, [1, 3, 5, 7, 8, 9]);
//!
//! let mut b = [8, 5, 7, 1, 9, 3];
//! selection_sort(&mut b);
//! assert_eq!(b, [1, 3, 5, 7, 8, 9]);
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    insertion_sort, is_permutation_of, is_sorted_ascending, selection_sort, SortStrategy,
};
pub use error::SortError;
