//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Minesweeper rules and state. It has **no
//! dependencies** on terminal I/O or the host shell, which makes it:
//!
//! - **Deterministic**: the same seed produces the same sequence of boards
//! - **Testable**: boards with fixed mine layouts can be built directly
//! - **Portable**: the text surface is a plain `String`
//!
//! # Module Structure
//!
//! - [`board`]: the minefield grid, neighbour counts, flags and flood reveal
//! - [`config`]: board dimensions, mine count and their validation
//! - [`game`]: the [`Minesweeper`] engine (cursor, status, input, rendering)
//! - [`rng`]: seedable LCG used for mine placement
//! - [`snapshot`]: serializable read-only view of a game
//!
//! # Game Rules
//!
//! - **Placement**: exactly M mines on distinct cells, drawn uniformly
//! - **Reveal**: opening a zero-count cell floods through its 8 neighbours;
//!   numbered cells are revealed but stop the flood
//! - **Loss**: opening a mine ends the game and shows every mine
//! - **Win**: every non-mine cell revealed
//! - **Restart**: only after a win or a loss
//!
//! # Example
//!
//! ```
//! use tui_minesweeper_core::{BoardConfig, Minesweeper};
//! use tui_minesweeper_types::{Command, GameStatus};
//!
//! let mut game = Minesweeper::new(BoardConfig::default(), 12345).unwrap();
//! game.start_game();
//!
//! game.handle_input(Command::MoveRight);
//! game.handle_input(Command::ToggleFlag);
//!
//! let screen = game.render();
//! assert!(screen.starts_with("Total Mines: 25\nFlags Remaining: 24\n"));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tui_minesweeper_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellKind};
pub use config::{BoardConfig, ConfigError};
pub use game::Minesweeper;
pub use rng::SimpleRng;
pub use snapshot::{CellView, GameSnapshot};
