//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! Everything here is plain data with no I/O, so it can be shared by the
//! engine, the key mapping, the terminal view and the host registry alike.
//!
//! # Board Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_WIDTH` | 15 | Columns (x in 0..15) |
//! | `DEFAULT_HEIGHT` | 15 | Rows (y in 0..15) |
//! | `DEFAULT_MINES` | 25 | Mines placed per game |
//!
//! # Examples
//!
//! ```
//! use tui_minesweeper_types::{Command, GameStatus, Position, DEFAULT_MINES};
//!
//! let cmd = Command::from_str("toggleFlag").unwrap();
//! assert_eq!(cmd, Command::ToggleFlag);
//! assert_eq!(cmd.as_str(), "toggleFlag");
//!
//! assert!(GameStatus::Lost.is_finished());
//! assert_eq!(Position::new(3, 4), Position { x: 3, y: 4 });
//! assert_eq!(DEFAULT_MINES, 25);
//! ```

use serde::{Deserialize, Serialize};

/// Board width in cells (15 columns)
pub const DEFAULT_WIDTH: u8 = 15;

/// Board height in cells (15 rows)
pub const DEFAULT_HEIGHT: u8 = 15;

/// Mines placed on a default board
pub const DEFAULT_MINES: u16 = 25;

/// Help line printed under the counters.
pub const HELP_LINE: &str = "WASD to Select | Space to select | F to flag";

/// Banner appended after the grid when a mine was activated.
pub const LOST_BANNER: &str = "\nGame Over! Press R to Restart.";

/// Banner appended after the grid when every safe cell is revealed.
pub const WON_BANNER: &str = "\nYou Win! Press R to Restart.";

/// A cell coordinate. `x` is the column, `y` the row, both from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)` and keep the result only if it lies inside a
    /// `width` x `height` grid.
    pub fn offset(self, dx: i8, dy: i8, width: u8, height: u8) -> Option<Self> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if x < 0 || y < 0 || x >= width as i16 || y >= height as i16 {
            return None;
        }
        Some(Self::new(x as u8, y as u8))
    }
}

/// Commands the engine understands
///
/// Produced by key mapping (see the input crate) or by scripted runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move the cursor one row up
    MoveUp,
    /// Move the cursor one row down
    MoveDown,
    /// Move the cursor one column left
    MoveLeft,
    /// Move the cursor one column right
    MoveRight,
    /// Flag or unflag the cell under the cursor
    ToggleFlag,
    /// Open the cell under the cursor
    Activate,
    /// Start a new game (only after a win or a loss)
    Restart,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_minesweeper_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveUp"), Some(Command::MoveUp));
    /// assert_eq!(Command::from_str("ACTIVATE"), Some(Command::Activate));
    /// assert_eq!(Command::from_str("dig"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(Command::MoveUp),
            "movedown" => Some(Command::MoveDown),
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "toggleflag" => Some(Command::ToggleFlag),
            "activate" => Some(Command::Activate),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveUp => "moveUp",
            Command::MoveDown => "moveDown",
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::ToggleFlag => "toggleFlag",
            Command::Activate => "activate",
            Command::Restart => "restart",
        }
    }

    /// Cursor delta for movement commands.
    pub fn direction(&self) -> Option<(i8, i8)> {
        match self {
            Command::MoveUp => Some((0, -1)),
            Command::MoveDown => Some((0, 1)),
            Command::MoveLeft => Some((-1, 0)),
            Command::MoveRight => Some((1, 0)),
            _ => None,
        }
    }
}

/// Outcome of the current game
///
/// `Lost` and `Won` are terminal: only [`Command::Restart`] is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameStatus {
    #[default]
    InProgress,
    Lost,
    Won,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Banner appended to the rendered screen, if any.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Lost => Some(LOST_BANNER),
            GameStatus::Won => Some(WON_BANNER),
        }
    }
}
