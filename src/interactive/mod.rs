//! Interactive TUI interface
//!
//! Keyboard-driven board built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{tile_style, ui};
