//! Wordle Game
//!
//! Guess the hidden five-letter word in six tries, in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{GameSession, RoundState, Submission, Word};
//!
//! let mut session = GameSession::new(Some(1));
//! session.start_round(&[Word::new("crane").unwrap()]).unwrap();
//!
//! for ch in "crane".chars() {
//!     session.append_letter(ch);
//! }
//! assert_eq!(session.submit_guess(), Ok(Submission::Won { guesses: 1 }));
//! assert_eq!(session.state(), RoundState::Won);
//! ```

// Core domain types
pub mod core;

// Command-line configuration
pub mod config;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
