//! # EE-02 References
//!
//! Citation and figure numbering for the narrative pages.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O except bibliography loading
//!   - `BibEntry`: One bibliography record and its display formatting
//!   - `Bibliography`: Citation key → pre-formatted display string
//!   - `ReferenceRegistry`: First-use numbering of citations and figures
//!
//! ## Lifecycle
//!
//! A `Bibliography` is loaded once. A fresh `ReferenceRegistry` borrows it for
//! each page render and is dropped when the render ends, so numbering always
//! restarts at 1 and follows the order in which the page traverses its
//! citations and figures.
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: A key or label keeps the number it got on first use
//! - **INVARIANT-2**: Numbers are handed out 1, 2, 3, ... with no gaps
//! - **INVARIANT-3**: Citation and figure numbering are independent
//! - **INVARIANT-4**: Only keys present in the bibliography can be cited
//!
//! ## Usage Example
//!
//! ```
//! use ee_02_references::{BibEntry, Bibliography, EntryKind, ReferenceRegistry};
//!
//! let bibliography = Bibliography::from_entries(vec![
//!     BibEntry::new("a", EntryKind::Misc).with_title("First"),
//!     BibEntry::new("b", EntryKind::Misc).with_title("Second"),
//! ])?;
//!
//! let mut refs = ReferenceRegistry::new(&bibliography);
//! assert_eq!(refs.cite(&["b"])?, "[1]");
//! assert_eq!(refs.cite(&["a", "b"])?, "[1, 2]");
//! assert_eq!(refs.ref_figure("overview"), 1);
//! # Ok::<(), ee_02_references::ReferenceError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{BibEntry, Bibliography, EntryKind, ReferenceRegistry, REFERENCES_HEADER};
pub use error::ReferenceError;
