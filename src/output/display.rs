//! Display functions for simple mode

use super::formatters::{colored_tile, emoji_grid, format_row};
use super::help;
use crate::core::{GameSession, Outcome};
use colored::Colorize;

/// Print the how-to-play panel
pub fn print_how_to_play() {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", help::TITLE.to_uppercase().bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", help::INTRO);
    for rule in help::RULES {
        println!("  • {rule}");
    }

    println!("\n{}", "Examples".bright_cyan().bold());
    for example in help::EXAMPLES {
        let tiles: Vec<String> = example
            .tiles()
            .map(|(ch, feedback)| colored_tile(ch, feedback).to_string())
            .collect();
        println!("\n  {}", tiles.join(" "));
        println!("  {}", example.caption);
    }

    println!("\n{}\n", help::CREDIT.bright_black());
}

/// Print all six rows of the board
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.rows() {
        println!("  {}", format_row(&row));
    }
    println!();

    if let Some(notice) = session.notice() {
        println!("  {}\n", notice.text.red().bold());
    }
}

/// Print the end-of-round banner with the emoji grid
pub fn print_round_result(session: &GameSession, outcome: Outcome) {
    let solution = session
        .solution()
        .map(|w| w.text().to_uppercase())
        .unwrap_or_default();

    println!("{}", "═".repeat(60).bright_cyan());
    match outcome {
        Outcome::Won => {
            let guesses = session.guesses_used();
            println!(
                "  {} Solved in {} {}",
                "🎉".bold(),
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        Outcome::Lost => {
            println!(
                "  {} The word was {}",
                "Out of guesses!".red().bold(),
                solution.bright_yellow().bold()
            );
        }
    }
    println!("\n{}", emoji_grid(&session.rows()));
    println!("{}", "═".repeat(60).bright_cyan());
}
