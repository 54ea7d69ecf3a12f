//! Host module - the "terminal games" plugin framework
//!
//! A host shell owns the display and the keyboard. Games plug into it by
//! registering a [`GameInfo`] and a factory with the [`GameRegistry`]; the
//! shell then drives the launched [`TerminalGame`] through three calls:
//!
//! 1. [`TerminalGame::start`] when the game is selected
//! 2. [`TerminalGame::render`] to refresh the text surface
//! 3. [`TerminalGame::handle_key`] once per key press
//!
//! The shell delivers one key at a time and re-renders after each, so games
//! never see concurrent calls.
//!
//! # Environment Variables
//!
//! - `MINESWEEPER_SEED`: seed for board generation (default: derived from the clock)
//! - `MINESWEEPER_GAME`: registered game to launch (default: "Minesweeper")
//! - `MINESWEEPER_LOG_PATH`: write logs to this file (default: no logging)
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_host::{plugin, GameRegistry};
//!
//! let mut registry = GameRegistry::new();
//! plugin::register(&mut registry);
//!
//! let mut game = registry.launch("minesweeper", 1).unwrap();
//! game.start();
//!
//! let mut screen = String::new();
//! game.render(&mut |text: &str| screen = text.to_string());
//! assert!(screen.starts_with("Total Mines: 25"));
//! ```

pub mod config;
pub mod game;
pub mod plugin;
pub mod registry;

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_types as types;

pub use config::ShellConfig;
pub use game::{GameInfo, TerminalGame};
pub use plugin::MinesweeperGame;
pub use registry::{GameFactory, GameRegistry, RegisteredGame};
