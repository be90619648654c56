//! Formatting utilities for terminal output

use crate::core::session::{RowKind, RowView};
use crate::core::{Feedback, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// Format one tile as a colored ` X ` block
#[must_use]
pub fn colored_tile(letter: char, feedback: Option<Feedback>) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match feedback {
        Some(Feedback::Correct) => tile.black().on_green().bold(),
        Some(Feedback::Present) => tile.black().on_yellow().bold(),
        Some(Feedback::Absent) => tile.white().on_bright_black(),
        None => tile.bold(),
    }
}

/// Format a board row; blank positions show as underscores
#[must_use]
pub fn format_row(row: &RowView<'_>) -> String {
    let feedback = match row.kind {
        RowKind::Submitted(pattern) => Some(*pattern.feedback()),
        RowKind::Current | RowKind::Empty => None,
    };

    (0..WORD_LENGTH)
        .map(|i| {
            let letter = row.text.chars().nth(i).unwrap_or('_');
            colored_tile(letter, feedback.map(|f| f[i])).to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji grid of submitted rows, one line per guess
#[must_use]
pub fn emoji_grid(rows: &[RowView<'_>]) -> String {
    rows.iter()
        .filter_map(|row| match row.kind {
            RowKind::Submitted(pattern) => Some(pattern.to_emoji()),
            RowKind::Current | RowKind::Empty => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}
