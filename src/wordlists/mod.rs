//! Word sources
//!
//! A round draws its solution from a list supplied by a [`WordSource`]. The
//! embedded list is compiled into the binary; a file-backed source lets players
//! bring their own.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use std::io;
use std::path::PathBuf;

/// Supplier of candidate solution words
///
/// Fetched once per session; the returned strings are validated by the caller.
pub trait WordSource {
    /// Fetch the raw word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the list cannot be obtained.
    fn fetch_words(&self) -> io::Result<Vec<String>>;

    /// Human-readable origin, used in logs and error screens
    fn describe(&self) -> String;
}

/// The list compiled in from `data/words.txt`
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn fetch_words(&self) -> io::Result<Vec<String>> {
        Ok(WORDS.iter().map(ToString::to_string).collect())
    }

    fn describe(&self) -> String {
        format!("embedded list ({WORDS_COUNT} words)")
    }
}

/// An in-memory list
#[derive(Debug, Clone, Default)]
pub struct ListWords(Vec<String>);

impl ListWords {
    #[must_use]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }
}

impl WordSource for ListWords {
    fn fetch_words(&self) -> io::Result<Vec<String>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory list ({} words)", self.0.len())
    }
}

/// A plain text file, one word per line
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWords {
    fn fetch_words(&self) -> io::Result<Vec<String>> {
        loader::read_lines(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), WORD_LENGTH, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_source_returns_whole_list() {
        let words = EmbeddedWords.fetch_words().unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
        assert!(words.iter().any(|w| w == "crane"));
    }

    #[test]
    fn file_source_reports_missing_file() {
        let source = FileWords::new("/definitely/not/here/words.txt");
        assert!(source.fetch_words().is_err());
        assert_eq!(source.describe(), "/definitely/not/here/words.txt");
    }
}
