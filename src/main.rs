//! Wordle - CLI
//!
//! Terminal Wordle with TUI and plain line-based modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_game::{
    commands::run_simple,
    config::{GameConfig, WordListChoice},
    interactive::{App, run_tui},
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for reproducible solution selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write a log to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level (includes the solution word)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without TUI
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        setup_logging(path, cli.verbose)?;
    }

    let config = GameConfig::new(WordListChoice::from_arg(&cli.wordlist), cli.seed);
    info!("Starting with {config:?}");

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
    }
}

fn setup_logging(path: &Path, verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    WriteLogger::init(
        level,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("installing logger")
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let app = App::new(config.new_session());
    let source = config.word_source();
    run_tui(app, &*source)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut session = config.new_session();
    let source = config.word_source();
    session
        .load_words(&*source)
        .with_context(|| format!("Unable to start round from {}", source.describe()))?;
    run_simple(&mut session)
}
