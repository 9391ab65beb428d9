//! Two-stage filtered search over a folder of documents.
//!
//! [`Searcher::search`] scans every candidate in a folder, [`Searcher::refine`]
//! rescans only a previous result, and [`Searcher::mark`] reports a verdict per
//! file without narrowing. The searcher keeps no results between calls.

use crate::error::Result;
use crate::extractor::{DocxExtractor, TextExtractor};
use crate::progress::Progress;
use crate::query::Query;
use crate::walker::{self, DEFAULT_EXTENSION};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::Path;

/// File names that passed a query, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<String>);

impl MatchSet {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.0.iter().any(|name| name == file_name)
    }

}

impl From<Vec<String>> for MatchSet {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

type ProgressHook<'a> = Box<dyn FnMut(Progress) + 'a>;

pub struct Searcher<'a, E: TextExtractor> {
    extractor: E,
    extension: String,
    on_progress: Option<ProgressHook<'a>>,
}

impl<'a> Searcher<'a, DocxExtractor> {
    pub fn docx() -> Self {
        Self::new(DocxExtractor::new())
    }
}

impl<'a, E: TextExtractor> Searcher<'a, E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            extension: DEFAULT_EXTENSION.to_string(),
            on_progress: None,
        }
    }

    /// Candidate extension, without the leading dot.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Called once per document after it has been tested.
    pub fn on_progress(mut self, hook: impl FnMut(Progress) + 'a) -> Self {
        self.on_progress = Some(Box::new(hook));
        self
    }

    /// Every candidate in `folder` whose text contains `word`.
    pub fn search(&mut self, folder: &Path, word: &str) -> Result<MatchSet> {
        let query = Query::new(word)?;
        let candidates = walker::candidate_files(folder, &self.extension)?;
        info!(
            "Searching {} documents in {} for '{}'",
            candidates.len(),
            folder.display(),
            query
        );

        let matches = self.collect_matches(folder, &candidates, &query);
        info!("'{}' found in {} documents", query, matches.len());
        Ok(matches)
    }

    /// The members of `previous_matches` whose text contains `word`.
    pub fn refine(
        &mut self,
        folder: &Path,
        previous_matches: &[String],
        word: &str,
    ) -> Result<MatchSet> {
        let query = Query::new(word)?;
        walker::ensure_folder(folder)?;
        info!(
            "Refining {} documents in {} with '{}'",
            previous_matches.len(),
            folder.display(),
            query
        );

        let matches = self.collect_matches(folder, previous_matches, &query);
        info!("'{}' kept {} documents", query, matches.len());
        Ok(matches)
    }

    /// A found/not-found verdict for every file in `matches`, in the same order.
    pub fn mark(
        &mut self,
        folder: &Path,
        matches: &[String],
        word: &str,
    ) -> Result<Vec<(String, bool)>> {
        let query = Query::new(word)?;
        walker::ensure_folder(folder)?;
        info!(
            "Marking {} documents in {} with '{}'",
            matches.len(),
            folder.display(),
            query
        );

        Ok(self.scan(folder, matches, &query))
    }

    fn collect_matches(&mut self, folder: &Path, names: &[String], query: &Query) -> MatchSet {
        self.scan(folder, names, query)
            .into_iter()
            .filter_map(|(name, found)| found.then_some(name))
            .collect::<Vec<_>>()
            .into()
    }

    fn scan(&mut self, folder: &Path, names: &[String], query: &Query) -> Vec<(String, bool)> {
        let total = names.len();
        let mut verdicts = Vec::with_capacity(total);

        for (index, name) in names.iter().enumerate() {
            let found = self.contains(&folder.join(name), query);
            debug!("{name}: {}", if found { "match" } else { "no match" });
            verdicts.push((name.clone(), found));

            if let Some(hook) = self.on_progress.as_mut() {
                hook(Progress {
                    processed: index + 1,
                    total,
                });
            }
        }

        verdicts
    }

    fn contains(&self, path: &Path, query: &Query) -> bool {
        match self.extractor.extract(path) {
            Ok(paragraphs) => query.matches(&paragraphs),
            Err(e) => {
                warn!("Skipping document: {e}");
                false
            }
        }
    }
}

/// [`Searcher::search`] with the `.docx` extractor and no progress hook.
pub fn search(folder: &Path, word: &str) -> Result<MatchSet> {
    Searcher::docx().search(folder, word)
}

/// [`Searcher::refine`] with the `.docx` extractor and no progress hook.
pub fn refine(folder: &Path, previous_matches: &[String], word: &str) -> Result<MatchSet> {
    Searcher::docx().refine(folder, previous_matches, word)
}
