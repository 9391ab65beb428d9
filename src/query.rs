use crate::error::{DocsiftError, Result};
use std::fmt;

/// A validated search word.
///
/// Matching is a plain case-insensitive substring test against one
/// paragraph at a time. Text split across two paragraphs never matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Result<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(DocsiftError::InvalidQuery);
        }
        Ok(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    /// The trimmed word as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn matches_paragraph(&self, paragraph: &str) -> bool {
        paragraph.to_lowercase().contains(&self.needle)
    }

    pub fn matches<S: AsRef<str>>(&self, paragraphs: &[S]) -> bool {
        paragraphs
            .iter()
            .any(|p| self.matches_paragraph(p.as_ref()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
