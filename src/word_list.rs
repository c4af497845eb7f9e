//! `word_list` — load and normalize the candidate words for a fill.
//!
//! This module reads a word list either from a file or from an in-memory string.
//!
//! The parsing logic:
//! - One word per line.
//! - Surrounding whitespace is trimmed and blank lines are skipped.
//! - Words are normalized to uppercase, matching how grids are usually printed.
//! - The final list is deduplicated and sorted by length first, then alphabetically.
//!
//! Words are stored as `Rc<str>` because the solver places the whole list into the
//! domain of every slot; sharing the allocation keeps that cheap.

use crate::errors::LoadError;
use std::rc::Rc;

/// A candidate word. Cloning only bumps a reference count.
pub type Word = Rc<str>;

/// A processed, ready-to-use word list.
///
/// The `words` vector contains all valid words (normalized, deduplicated),
/// already sorted by (length, alphabetical).
#[derive(Debug, Clone)]
pub struct WordList {
    /// List of uppercase words.
    /// Example: `["AGO", "CAT", "DOG", "ABLE", ...]`
    pub words: Vec<Word>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::EmptyWordList`] if no words remain after skipping blank lines.
    pub fn parse_from_str(contents: &str) -> Result<WordList, LoadError> {
        let mut words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_uppercase)
            .collect();

        if words.is_empty() {
            return Err(LoadError::EmptyWordList);
        }

        // `dedup()` only removes adjacent duplicates, so sort alphabetically first.
        words.sort();
        words.dedup();

        words.sort_by(|a, b| {
            match a.chars().count().cmp(&b.chars().count()) {
                std::cmp::Ordering::Equal => a.cmp(b),
                other => other,
            }
        });

        Ok(WordList { words: words.into_iter().map(Word::from).collect() })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Example:
    /// `let word_list = WordList::load_from_path("data/words0.txt")?;`
    /// `println!("Loaded {} words", word_list.len());`
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if unable to read a file at `path`, or
    /// [`LoadError::EmptyWordList`] if it holds no words.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, LoadError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|e| LoadError::io(path_ref, e))?;
        Self::parse_from_str(&data)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
