//! Per-letter feedback classification
//!
//! Each position of a guess is classified independently against the solution:
//! - `Correct` when the letters match at that position
//! - `Present` when the solution contains the letter somewhere else
//! - `Absent` otherwise
//!
//! There is no duplicate-letter budget: a guessed letter is `Present` as long as
//! the solution contains it at all, however many times it was guessed.

use super::{WORD_LENGTH, Word};

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Correct,
    Present,
    Absent,
}

impl Feedback {
    /// Emoji square for this tile
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Feedback; WORD_LENGTH]);

impl Pattern {
    /// All tiles correct
    pub const PERFECT: Self = Self([Feedback::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(feedback: [Feedback; WORD_LENGTH]) -> Self {
        Self(feedback)
    }

    /// Classify `guess` against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback::*, Pattern, Word};
    ///
    /// let guess = Word::new("train").unwrap();
    /// let solution = Word::new("crane").unwrap();
    /// let pattern = Pattern::calculate(&guess, &solution);
    ///
    /// assert_eq!(pattern.feedback(), &[Absent, Correct, Correct, Absent, Present]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut result = [Feedback::Absent; WORD_LENGTH];

        for (slot, (&g, &s)) in result
            .iter_mut()
            .zip(guess.chars().iter().zip(solution.chars()))
        {
            *slot = if g == s {
                Feedback::Correct
            } else if solution.has_letter(g) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every tile is correct
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Pattern, Word};
    ///
    /// let guess = Word::new("train").unwrap();
    /// let solution = Word::new("crane").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &solution).to_emoji(), "⬜🟩🟩⬜🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
