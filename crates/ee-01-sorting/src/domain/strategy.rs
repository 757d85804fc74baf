//! Runtime selection of a sorting algorithm
//!
//! The benchmark CLI picks exactly one strategy per run and applies it to a
//! fresh copy of the generated input on every iteration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::insertion::insertion_sort;
use super::selection::selection_sort;
use crate::error::SortError;

/// Sorting algorithm applied by a benchmark run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Standard library stable sort (`slice::sort`)
    Builtin,
    /// Standard library unstable sort (`slice::sort_unstable`)
    Unstable,
    /// [`insertion_sort`]
    Insertion,
    /// [`selection_sort`]
    Selection,
}

impl SortStrategy {
    /// All strategies, in CLI listing order
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::Builtin,
        SortStrategy::Unstable,
        SortStrategy::Insertion,
        SortStrategy::Selection,
    ];

    /// Sort `a` ascending in place with this strategy
    pub fn apply<T: Ord>(self, a: &mut [T]) {
        match self {
            SortStrategy::Builtin => a.sort(),
            SortStrategy::Unstable => a.sort_unstable(),
            SortStrategy::Insertion => insertion_sort(a),
            SortStrategy::Selection => selection_sort(a),
        }
    }

    /// Short name used on the command line and in reports
    pub fn name(self) -> &'static str {
        match self {
            SortStrategy::Builtin => "builtin",
            SortStrategy::Unstable => "unstable",
            SortStrategy::Insertion => "insertion",
            SortStrategy::Selection => "selection",
        }
    }

    /// Whether equal elements keep their relative order
    pub fn is_stable(self) -> bool {
        matches!(self, SortStrategy::Builtin | SortStrategy::Insertion)
    }

    /// Whether the strategy is one of the quadratic textbook sorts
    pub fn is_quadratic(self) -> bool {
        matches!(self, SortStrategy::Insertion | SortStrategy::Selection)
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(SortStrategy::Builtin),
            "unstable" | "numpy" => Ok(SortStrategy::Unstable),
            "insertion" | "insertion_sort" => Ok(SortStrategy::Insertion),
            "selection" | "selection_sort" => Ok(SortStrategy::Selection),
            other => Err(SortError::UnknownStrategy(other.to_string())),
        }
    }
}
