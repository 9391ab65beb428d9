//! Prompt-driven search: one word over the folder, then optional rounds
//! that narrow the previous matches, then optionally a fresh search.

use crate::error::{DocsiftError, Result};
use crate::extractor::TextExtractor;
use crate::search::{MatchSet, Searcher};
use colored::*;
use dialoguer::{Confirm, Input};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

pub trait Prompter {
    fn word(&mut self, prompt: &str) -> Result<String>;
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Reads answers from the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn word(&mut self, prompt: &str) -> Result<String> {
        Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }
}

pub struct InteractiveSession<'a, E: TextExtractor, P: Prompter, W: Write> {
    folder: PathBuf,
    searcher: Searcher<'a, E>,
    prompter: P,
    out: W,
}

impl<'a, E: TextExtractor, P: Prompter, W: Write> InteractiveSession<'a, E, P, W> {
    pub fn new(folder: &Path, searcher: Searcher<'a, E>, prompter: P, out: W) -> Self {
        Self {
            folder: folder.to_path_buf(),
            searcher,
            prompter,
            out,
        }
    }

    /// Runs until the user declines a new search. Returns the last match set shown.
    pub fn run(&mut self) -> Result<MatchSet> {
        info!("Starting interactive session in {}", self.folder.display());
        loop {
            let mut matches = self.first_round()?;

            while !matches.is_empty() {
                let again = self.prompter.confirm(&format!(
                    "Search again within these {} documents?",
                    matches.len()
                ))?;
                if !again {
                    break;
                }
                let word = self.prompter.word("Next word")?;
                match self.searcher.refine(&self.folder, matches.as_slice(), &word) {
                    Ok(refined) => {
                        self.show(&word, &refined)?;
                        matches = refined;
                    }
                    Err(DocsiftError::InvalidQuery) => self.warn_blank()?,
                    Err(e) => return Err(e),
                }
            }

            if !self.prompter.confirm("Start a new search?")? {
                writeln!(self.out, "Search finished.")?;
                return Ok(matches);
            }
            writeln!(self.out, "Ready for a new search!")?;
        }
    }

    fn first_round(&mut self) -> Result<MatchSet> {
        loop {
            let word = self.prompter.word("Word to search for")?;
            match self.searcher.search(&self.folder, &word) {
                Ok(matches) => {
                    self.show(&word, &matches)?;
                    return Ok(matches);
                }
                Err(DocsiftError::InvalidQuery) => self.warn_blank()?,
                Err(e) => return Err(e),
            }
        }
    }

    fn show(&mut self, word: &str, matches: &MatchSet) -> Result<()> {
        let word = word.trim();
        if matches.is_empty() {
            writeln!(self.out, "{} '{word}'.", "No document contains".yellow())?;
            return Ok(());
        }
        writeln!(
            self.out,
            "{} '{word}' {}",
            "The word".green(),
            "was found in these documents:".green()
        )?;
        for name in matches {
            writeln!(self.out, "  {name}")?;
        }
        Ok(())
    }

    fn warn_blank(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "Please type a word to search for.".yellow())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};
    use std::fs;
    use tempfile::TempDir;

    struct Scripted {
        words: VecDeque<&'static str>,
        answers: VecDeque<bool>,
    }

    impl Prompter for Scripted {
        fn word(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.words.pop_front().expect("script ran out of words").to_string())
        }

        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(self.answers.pop_front().expect("script ran out of answers"))
        }
    }

    struct MapExtractor(HashMap<&'static str, &'static str>);

    impl TextExtractor for MapExtractor {
        fn extract(&self, path: &Path) -> Result<Vec<String>> {
            let name = path.file_name().unwrap().to_str().unwrap();
            Ok(vec![self.0.get(name).copied().unwrap_or_default().to_string()])
        }
    }

    fn session_output(words: &[&'static str], answers: &[bool]) -> (MatchSet, String) {
        let dir = TempDir::new().unwrap();
        let docs = [
            ("A - Acme - Aprovado.docx", "aprovado"),
            ("B - Beta - Pendente.docx", "em análise"),
            ("C - Gamma - Aprovado.docx", "aprovado urgente"),
        ];
        for (name, _) in docs {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        let extractor = MapExtractor(docs.into_iter().collect());
        let prompter = Scripted {
            words: words.iter().copied().collect(),
            answers: answers.iter().copied().collect(),
        };

        let mut out = Vec::new();
        let matches = InteractiveSession::new(dir.path(), Searcher::new(extractor), prompter, &mut out)
            .run()
            .unwrap();
        (matches, String::from_utf8(out).unwrap())
    }

    #[test]
    fn narrows_then_stops() {
        let (matches, out) = session_output(&["aprovado", "urgente"], &[true, false, false]);
        assert_eq!(matches.as_slice(), ["C - Gamma - Aprovado.docx"]);
        assert!(out.contains("A - Acme - Aprovado.docx"));
        assert!(out.contains("Search finished."));
    }

    #[test]
    fn blank_word_is_asked_again() {
        let (matches, out) = session_output(&["  ", "análise"], &[false, false]);
        assert_eq!(matches.as_slice(), ["B - Beta - Pendente.docx"]);
        assert!(out.contains("Please type a word"));
    }

    #[test]
    fn new_search_starts_from_the_whole_folder() {
        let (matches, out) = session_output(&["urgente", "análise"], &[false, true, false, false]);
        assert_eq!(matches.as_slice(), ["B - Beta - Pendente.docx"]);
        assert!(out.contains("Ready for a new search!"));
    }

    #[test]
    fn no_refinement_offered_without_matches() {
        let (matches, out) = session_output(&["inexistente"], &[false]);
        assert!(matches.is_empty());
        assert!(out.contains("'inexistente'"));
    }
}
