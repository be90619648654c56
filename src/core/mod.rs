//! Core domain types for Wordle
//!
//! Words, feedback classification, and the game session state machine.

mod pattern;
pub mod session;
mod word;

pub use pattern::{Feedback, Pattern};
pub use session::{GameSession, GuessError, Outcome, RoundState, SessionError, Submission};
pub use word::{Word, WordError};

/// Letters per guess and per solution
pub const WORD_LENGTH: usize = 5;

/// Guess slots per round
pub const MAX_GUESSES: usize = 6;
