//! Command implementations

pub mod simple;

pub use simple::{Command, play_line, run_simple, run_simple_with};
