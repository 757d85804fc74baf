//! Bibliography records and their display strings
//!
//! Records arrive already split into fields (key, kind, authors, ...). Turning
//! a `.bib` file into these records happens upstream; this module only
//! normalizes the fields and renders one display line per record.

use serde::{Deserialize, Serialize};

/// Kind of bibliography record, which decides the display layout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Paper in conference proceedings
    InProceedings,
    /// Journal article
    Article,
    /// Anything else (reports, web pages, theses, ...)
    #[serde(other)]
    Misc,
}

/// One bibliography record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    /// Citation key used by `cite`
    #[serde(alias = "id", alias = "ID")]
    pub key: String,
    #[serde(alias = "ENTRYTYPE", alias = "type")]
    pub kind: EntryKind,
    /// Authors joined with " and ", as written in BibTeX
    #[serde(default, alias = "author")]
    pub authors: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub pages: String,
    #[serde(default)]
    pub booktitle: String,
    #[serde(default)]
    pub journal: String,
    #[serde(default)]
    pub volume: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub note: String,
}

impl BibEntry {
    /// Create an empty record of the given kind
    pub fn new(key: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            key: key.into(),
            kind,
            authors: String::new(),
            title: String::new(),
            year: String::new(),
            pages: String::new(),
            booktitle: String::new(),
            journal: String::new(),
            volume: String::new(),
            number: String::new(),
            url: String::new(),
            note: String::new(),
        }
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    pub fn with_pages(mut self, pages: impl Into<String>) -> Self {
        self.pages = pages.into();
        self
    }

    pub fn with_booktitle(mut self, booktitle: impl Into<String>) -> Self {
        self.booktitle = booktitle.into();
        self
    }

    pub fn with_journal(
        mut self,
        journal: impl Into<String>,
        volume: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        self.journal = journal.into();
        self.volume = volume.into();
        self.number = number.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Render the display line shown after `[n]` in the references section
    ///
    /// Layouts:
    /// - in proceedings: `Authors. Title. In: Book, pp. 1-10 (2024). [url](url)`
    /// - article: `Authors. Title. Journal, vol. 3, no. 2, pp. 1-10 (2024). [url](url)`
    /// - misc: `Authors. Title. Note (2024).` followed by the link if present;
    ///   empty fields are left out
    pub fn format(&self) -> String {
        let authors = normalize_authors(&self.authors);
        let pages = self.pages.replace("--", "-");
        let link = format!("[{0}]({0})", self.url);

        match self.kind {
            EntryKind::InProceedings => format!(
                "{}. {}. In: {}, pp. {} ({}). {}",
                authors,
                self.title,
                collapse_whitespace(&self.booktitle),
                pages,
                self.year,
                link
            ),
            EntryKind::Article => format!(
                "{}. {}. {}, vol. {}, no. {}, pp. {} ({}). {}",
                authors, self.title, self.journal, self.volume, self.number, pages, self.year, link
            ),
            EntryKind::Misc => {
                let mut line = if authors.is_empty() {
                    format!("{}.", self.title)
                } else {
                    format!("{}. {}.", authors, self.title)
                };
                if !self.note.is_empty() {
                    line.push(' ');
                    line.push_str(&collapse_whitespace(&self.note));
                }
                if !self.year.is_empty() {
                    line.push_str(&format!(" ({})", self.year));
                }
                if !self.note.is_empty() || !self.year.is_empty() {
                    line.push('.');
                }
                if !self.url.is_empty() {
                    line.push(' ');
                    line.push_str(&link);
                }
                line
            }
        }
    }
}

/// BibTeX `A and B and C` becomes `A, B, C`; line breaks are dropped.
fn normalize_authors(authors: &str) -> String {
    collapse_whitespace(authors).replace(" and ", ", ")
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
