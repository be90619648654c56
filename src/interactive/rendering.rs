//! TUI rendering with ratatui
//!
//! Board, notice line, messages, guess distribution, status bar and the
//! how-to-play overlay.

use super::app::{App, MessageStyle, Statistics};
use crate::core::session::{RowKind, RowView};
use crate::core::{Feedback, MAX_GUESSES, Outcome, WORD_LENGTH};
use crate::output::help;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    if let Some(ref err) = app.load_error {
        render_fatal(f, err);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board + side panel
            Constraint::Length(3), // Notice
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),                         // Messages
            Constraint::Length(MAX_GUESSES as u16 + 2), // Distribution
        ])
        .split(main_chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, side_chunks[0]);
    render_distribution(f, &app.stats, side_chunks[1]);
    render_notice(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_help {
        let area = f.area();
        render_help_overlay(f, area);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for a tile with the given feedback; `None` is an unclassified tile
#[must_use]
pub fn tile_style(feedback: Option<Feedback>) -> Style {
    match feedback {
        Some(Feedback::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Some(Feedback::Absent) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn tile_spans<'a>(tiles: impl Iterator<Item = (char, Option<Feedback>)>) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (i, (letter, feedback)) in tiles.enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {letter} "),
            tile_style(feedback),
        ));
    }
    spans
}

fn row_line(row: &RowView<'_>) -> Line<'static> {
    let feedback = match row.kind {
        RowKind::Submitted(pattern) => Some(*pattern.feedback()),
        RowKind::Current | RowKind::Empty => None,
    };

    let tiles = (0..WORD_LENGTH).map(|i| {
        let letter = row
            .text
            .chars()
            .nth(i)
            .map_or('·', |c| c.to_ascii_uppercase());
        (letter, feedback.map(|f| f[i]))
    });

    let mut spans = tile_spans(tiles);
    if row.kind == RowKind::Current {
        spans.push(Span::styled("  ◀", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);
    for row in app.session.rows() {
        lines.push(row_line(&row));
        lines.push(Line::from(""));
    }

    let title = match app.session.outcome() {
        Some(Outcome::Won) => " Solved! ",
        Some(Outcome::Lost) => " Out of guesses ",
        None => " Board ",
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

/// Widest distribution bar, in cells
const BAR_WIDTH: usize = 20;

/// One line per guess count, bars scaled to the most common count
fn distribution_lines(stats: &Statistics) -> Vec<Line<'static>> {
    let max = stats.guess_distribution[1..]
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);

    (1..=MAX_GUESSES)
        .map(|guesses| {
            let count = stats.guess_distribution[guesses];
            let bar = "█".repeat(count * BAR_WIDTH / max);
            Line::from(vec![
                Span::raw(format!("{guesses} ")),
                Span::styled(bar, Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect()
}

fn render_distribution(f: &mut Frame, stats: &Statistics, area: Rect) {
    let distribution = Paragraph::new(distribution_lines(stats))
        .block(Block::default().title(" Guess Distribution ").borders(Borders::ALL));
    f.render_widget(distribution, area);
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if let Some(notice) = app.session.notice() {
        (
            notice.text.as_str(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else if app.session.outcome().is_some() {
        (
            "Ctrl+N: new round",
            Style::default().fg(Color::Green),
        )
    } else {
        (
            "Type letters, Enter to submit, Backspace to erase",
            Style::default().fg(Color::DarkGray),
        )
    };

    let notice = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(notice, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let round_text = format!("Guess: {}/{MAX_GUESSES}", app.session.guesses_used());
    let round = Paragraph::new(round_text).alignment(Alignment::Center);
    f.render_widget(round, chunks[0]);

    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("?: Help | Ctrl+N: New | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", help::TITLE))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(block, popup_area);

    let mut lines = vec![Line::from(help::INTRO), Line::from("")];
    for rule in help::RULES {
        lines.push(Line::from(format!("• {rule}")));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Examples",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    for example in help::EXAMPLES {
        lines.push(Line::from(""));
        lines.push(Line::from(tile_spans(example.tiles())));
        lines.push(Line::from(example.caption));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        help::CREDIT,
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "Press Esc or Enter to start guessing",
        Style::default().fg(Color::Cyan),
    )));

    let content = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(content, popup_area.inner(Margin::new(2, 1)));
}

fn render_fatal(f: &mut Frame, err: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Unable to start round",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(err.to_string()),
        Line::from(""),
        Line::from("Press Esc to quit"),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    let area = f.area();
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
