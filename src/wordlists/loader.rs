//! Word list loading utilities
//!
//! Turns raw word lists into validated `Word`s, dropping anything that is not
//! a five-letter word.

use crate::core::Word;
use log::warn;
use std::fs;
use std::io;
use std::path::Path;

/// Read non-blank, trimmed lines from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Validate raw strings into `Word`s, logging the ones that are dropped
#[must_use]
pub fn parse_words<S: AsRef<str>>(raw: &[S]) -> Vec<Word> {
    let words: Vec<Word> = raw
        .iter()
        .filter_map(|s| match Word::new(s.as_ref()) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!("Skipping word list entry {:?}: {err}", s.as_ref());
                None
            }
        })
        .collect();

    if words.len() < raw.len() {
        warn!("Dropped {} invalid word list entries", raw.len() - words.len());
    }
    words
}
