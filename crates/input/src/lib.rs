//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. The game is
//! turn-based, so there is no repeat handling: one key press is one command.

pub mod map;

pub use tui_minesweeper_types as types;

pub use map::{command_for_key, should_quit};
