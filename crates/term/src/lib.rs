//! Terminal "text surface" renderer.
//!
//! The host hands games a fixed-width text surface. This crate lays that
//! surface out in a framebuffer, tagging each glyph with what it means on
//! the board, and puts it on the terminal with crossterm, rewriting only
//! the rows that changed since the last key press.

pub mod fb;
pub mod renderer;
pub mod screen_view;

pub use tui_minesweeper_types as types;

pub use fb::{FrameBuffer, Glyph, Tone};
pub use renderer::{encode_rows_into, TerminalRenderer};
pub use screen_view::{ScreenView, Viewport};
