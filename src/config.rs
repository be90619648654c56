//! Game configuration
//!
//! Command-line options are folded into a `GameConfig`, which knows how to
//! build the word source and a fresh session.

use crate::core::GameSession;
use crate::wordlists::{EmbeddedWords, FileWords, WordSource};
use std::path::PathBuf;

/// Where solution words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListChoice {
    Embedded,
    File(PathBuf),
}

impl WordListChoice {
    /// Parse the `--wordlist` argument: `embedded` or a file path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Settings for a play session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_list: WordListChoice,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_list: WordListChoice::Embedded,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(word_list: WordListChoice, seed: Option<u64>) -> Self {
        Self { word_list, seed }
    }

    /// Build the configured word source
    #[must_use]
    pub fn word_source(&self) -> Box<dyn WordSource> {
        match &self.word_list {
            WordListChoice::Embedded => Box::new(EmbeddedWords),
            WordListChoice::File(path) => Box::new(FileWords::new(path.clone())),
        }
    }

    /// A session with no round started yet
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        GameSession::new(self.seed)
    }
}
