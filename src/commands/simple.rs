//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is a whole guess.

use crate::core::{GameSession, GuessError, Submission, WORD_LENGTH};
use crate::output::{print_board, print_how_to_play, print_round_result};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    NewRound,
    Help,
    Quit,
}

impl Command {
    /// Interpret one input line; anything that is not a `:` command is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" => Self::NewRound,
            ":help" | ":h" | "?" => Self::Help,
            guess => Self::Guess(guess.to_lowercase()),
        }
    }
}

/// Feed a whole word through the session as individual key presses
///
/// Characters the session does not accept are dropped, exactly as they would
/// be when typed.
pub fn play_line(session: &mut GameSession, guess: &str) -> Result<Submission, GuessError> {
    erase_buffer(session);
    for ch in guess.chars() {
        session.append_letter(ch);
    }
    let result = session.submit_guess();
    if !matches!(result, Ok(Submission::Ignored)) {
        return result;
    }

    // Leave no half-typed guess behind for the next line
    erase_buffer(session);
    result
}

fn erase_buffer(session: &mut GameSession) {
    for _ in 0..WORD_LENGTH {
        session.backspace();
    }
}

/// Run the simple interactive CLI mode over stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple(session: &mut GameSession) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run simple mode against any line source
///
/// # Errors
///
/// Returns an error if reading input or flushing output fails.
pub fn run_simple_with<R: BufRead>(session: &mut GameSession, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    print_how_to_play();
    println!("Commands: ':new' for a new round, ':help' for help, ':quit' to exit\n");

    print_board(session);

    loop {
        let Some(line) = read_line(input, "Guess")? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::Help => print_how_to_play(),
            Command::NewRound => {
                session.new_round()?;
                println!("\n🔄 New round started!");
                print_board(session);
            }
            Command::Guess(guess) => {
                if session.outcome().is_some() {
                    println!("Round is over. Type ':new' to play again.");
                    continue;
                }

                match play_line(session, &guess) {
                    Ok(Submission::Ignored) => {
                        println!("{}", "Guesses must be 5 letters (a-z).".yellow());
                    }
                    Ok(_) | Err(_) => print_board(session),
                }

                if let Some(outcome) = session.outcome() {
                    print_round_result(session, outcome);
                    println!("Type ':new' to play again or ':quit' to exit.\n");
                }
            }
        }
    }
}

/// Prompt and read one line; `None` at end of input
fn read_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
