//! "How to play" content shared by the TUI overlay and simple mode

use crate::core::Feedback;

pub const TITLE: &str = "How To Play";

pub const INTRO: &str = "Challenge yourself to find the hidden word in 6 attempts!";

pub const RULES: &[&str] = &[
    "Type any 5-letter word to begin.",
    "Tile colors reveal clues about the target word.",
];

pub const CREDIT: &str = "Inspired by NYT Wordle.";

/// A sample row with one highlighted tile
#[derive(Debug, Clone, Copy)]
pub struct HelpExample {
    pub word: &'static str,
    pub highlight: usize,
    pub feedback: Feedback,
    pub caption: &'static str,
}

pub const EXAMPLES: &[HelpExample] = &[
    HelpExample {
        word: "event",
        highlight: 0,
        feedback: Feedback::Correct,
        caption: "E is in the correct position! Perfect match.",
    },
    HelpExample {
        word: "pride",
        highlight: 1,
        feedback: Feedback::Present,
        caption: "R is in the word but needs to be moved elsewhere.",
    },
    HelpExample {
        word: "feast",
        highlight: 3,
        feedback: Feedback::Absent,
        caption: "S is not in the target word at all.",
    },
];

impl HelpExample {
    /// Feedback for each tile: the highlighted one, `None` elsewhere
    pub fn tiles(&self) -> impl Iterator<Item = (char, Option<Feedback>)> + '_ {
        self.word.chars().enumerate().map(|(i, ch)| {
            let feedback = (i == self.highlight).then_some(self.feedback);
            (ch.to_ascii_uppercase(), feedback)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WORD_LENGTH;

    #[test]
    fn examples_are_well_formed() {
        for example in EXAMPLES {
            assert_eq!(example.word.len(), WORD_LENGTH);
            assert!(example.highlight < WORD_LENGTH);
        }
    }

    #[test]
    fn example_tiles_highlight_one_letter() {
        let tiles: Vec<_> = EXAMPLES[1].tiles().collect();
        assert_eq!(tiles.len(), WORD_LENGTH);
        assert_eq!(tiles[1], ('R', Some(Feedback::Present)));
        assert_eq!(tiles.iter().filter(|(_, f)| f.is_some()).count(), 1);
    }
}
