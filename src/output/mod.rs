//! Terminal output formatting
//!
//! Board rendering and help text for simple mode.

pub mod display;
pub mod formatters;
pub mod help;

pub use display::{print_board, print_how_to_play, print_round_result};
