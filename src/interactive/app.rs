//! TUI application state and logic

use crate::core::{GameSession, Outcome, Submission};
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input when no notice is pending
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_help: bool,
    pub load_error: Option<String>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    pub fn record(&mut self, outcome: Outcome, guesses: usize) {
        self.rounds_played += 1;
        if outcome == Outcome::Won {
            self.rounds_won += 1;
            if let Some(bucket) = self.guess_distribution.get_mut(guesses) {
                *bucket += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

impl App {
    /// Wrap a session; the help overlay starts open
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            messages: Vec::new(),
            stats: Statistics::default(),
            show_help: true,
            load_error: None,
            should_quit: false,
        }
    }

    /// Fetch words and start the first round, remembering any failure
    pub fn load_words(&mut self, source: &dyn WordSource) {
        match self.session.load_words(source) {
            Ok(true) => self.add_message("Guess the hidden word!", MessageStyle::Info),
            Ok(false) => {}
            Err(err) => {
                error!("Unable to start round: {err}");
                self.show_help = false;
                self.load_error = Some(format!("{err} (source: {})", source.describe()));
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('?')
            ) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => self.new_round(),
            KeyCode::Char('?') | KeyCode::F(1) => self.show_help = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.session.backspace(),
            KeyCode::Char(c) if !ctrl => self.session.append_letter(c.to_ascii_lowercase()),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Ok(Submission::Won { guesses }) => {
                self.stats.record(Outcome::Won, guesses);

                let celebration = match guesses {
                    1 => "HOLE IN ONE! Extraordinary!",
                    2 => "MAGNIFICENT! Two guesses!",
                    3 => "SPLENDID! Three guesses!",
                    4 => "GREAT JOB! Four guesses!",
                    5 => "NICE WORK! Five guesses!",
                    _ => "PHEW! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Ctrl+N for a new round.", MessageStyle::Info);
            }
            Ok(Submission::Lost) => {
                let guesses = self.session.guesses_used();
                self.stats.record(Outcome::Lost, guesses);

                let solution = self
                    .session
                    .solution()
                    .map(|w| w.text().to_uppercase())
                    .unwrap_or_default();
                self.add_message(
                    &format!("Out of guesses! The word was {solution}."),
                    MessageStyle::Error,
                );
                self.add_message("Press Ctrl+N for a new round.", MessageStyle::Info);
            }
            // The session carries the notice for rejected guesses
            Ok(Submission::Accepted { .. } | Submission::Ignored) | Err(_) => {}
        }
    }

    pub fn new_round(&mut self) {
        match self.session.new_round() {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New round started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Housekeeping between events
    pub fn tick(&mut self, now: Instant) {
        self.session.expire_notice(now);
    }

    /// How long to wait for input before the next tick
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .notice()
            .map_or(IDLE_POLL, |notice| {
                notice.deadline().saturating_duration_since(now).min(IDLE_POLL)
            })
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(mut app: App, source: &dyn WordSource) -> Result<()> {
    app.load_words(source);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI exited with error: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }
        app.tick(Instant::now());

        if app.should_quit {
            info!(
                "Quitting after {} rounds ({} won)",
                app.stats.rounds_played, app.stats.rounds_won
            );
            break;
        }
    }

    Ok(())
}
