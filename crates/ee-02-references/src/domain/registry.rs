//! Per-render citation and figure numbering
//!
//! INVARIANTS:
//! - INVARIANT-1: A key or label keeps the number it got on first use
//! - INVARIANT-2: Numbers are handed out 1, 2, 3, ... with no gaps
//! - INVARIANT-3: Citation and figure numbering are independent
//! - INVARIANT-4: Only keys present in the bibliography can be cited

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::bibliography::Bibliography;
use crate::error::ReferenceError;

/// Header line of the rendered references section
pub const REFERENCES_HEADER: &str = "## References";

/// Assigns citation and figure numbers in order of first use
///
/// Create one registry per page render and pass it to everything that cites
/// or references figures during that render.
#[derive(Debug)]
pub struct ReferenceRegistry<'b> {
    bibliography: &'b Bibliography,
    /// Citation key → assigned number
    citations: BTreeMap<String, u32>,
    /// Figure label → assigned number
    figures: BTreeMap<String, u32>,
    next_citation: u32,
    next_figure: u32,
}

impl<'b> ReferenceRegistry<'b> {
    pub fn new(bibliography: &'b Bibliography) -> Self {
        Self {
            bibliography,
            citations: BTreeMap::new(),
            figures: BTreeMap::new(),
            next_citation: 1,
            next_figure: 1,
        }
    }

    /// Cite one or more keys and render the marker, e.g. `[1, 3]`
    ///
    /// Unseen keys are numbered in argument order. The marker lists the
    /// numbers ascending regardless of argument order. If any key is missing
    /// from the bibliography nothing is assigned and
    /// [`ReferenceError::UnknownCitationKey`] is returned.
    pub fn cite<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<String, ReferenceError> {
        if let Some(missing) = keys
            .iter()
            .map(AsRef::<str>::as_ref)
            .find(|key| !self.bibliography.contains(key))
        {
            warn!(key = %missing, "Citation of unknown bibliography key");
            return Err(ReferenceError::UnknownCitationKey {
                key: missing.to_string(),
            });
        }

        let mut numbers: Vec<u32> = keys
            .iter()
            .map(|key| self.assign_citation(key.as_ref()))
            .collect();
        numbers.sort_unstable();

        let rendered: Vec<String> = numbers.iter().map(u32::to_string).collect();
        Ok(format!("[{}]", rendered.join(", ")))
    }

    /// Number of the figure `label`, assigning the next one on first use
    pub fn ref_figure(&mut self, label: &str) -> u32 {
        if let Some(&number) = self.figures.get(label) {
            return number;
        }
        let number = self.next_figure;
        self.next_figure += 1;
        self.figures.insert(label.to_string(), number);
        debug!(label = %label, number, "Figure numbered");
        number
    }

    /// Render the references section for every key cited so far
    ///
    /// Lines are ordered by citation number; uncited bibliography entries
    /// are left out.
    pub fn make_references_section(&self) -> String {
        let mut cited: Vec<(u32, &str)> = self
            .citations
            .iter()
            .map(|(key, &number)| (number, key.as_str()))
            .collect();
        cited.sort_unstable();

        let mut section = String::from(REFERENCES_HEADER);
        for (number, key) in cited {
            let display = self.bibliography.get(key).unwrap_or_default();
            section.push_str(&format!("\n\n[{}] {}", number, display));
        }
        section
    }

    /// Number assigned to `key`, if it has been cited
    pub fn citation_number(&self, key: &str) -> Option<u32> {
        self.citations.get(key).copied()
    }

    /// Number assigned to `label`, if it has been referenced
    pub fn figure_number(&self, label: &str) -> Option<u32> {
        self.figures.get(label).copied()
    }

    pub fn cited_count(&self) -> usize {
        self.citations.len()
    }

    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    fn assign_citation(&mut self, key: &str) -> u32 {
        if let Some(&number) = self.citations.get(key) {
            return number;
        }
        let number = self.next_citation;
        self.next_citation += 1;
        self.citations.insert(key.to_string(), number);
        debug!(key = %key, number, "Citation numbered");
        number
    }
}
