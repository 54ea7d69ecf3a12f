//! Board configuration and its validation.

use thiserror::Error;

use crate::types::{DEFAULT_HEIGHT, DEFAULT_MINES, DEFAULT_WIDTH};

/// Errors raised while building a board.
///
/// These are configuration mistakes, caught before any game starts. Gameplay
/// itself never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },

    #[error("{mines} mines do not fit on a {width}x{height} board (at most {max})")]
    TooManyMines {
        mines: u16,
        width: u8,
        height: u8,
        max: usize,
    },

    #[error("mine at ({x}, {y}) is outside the {width}x{height} board")]
    MineOutOfBounds { x: u8, y: u8, width: u8, height: u8 },

    #[error("mine at ({x}, {y}) is listed more than once")]
    DuplicateMine { x: u8, y: u8 },
}

/// Board dimensions and mine count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    pub mines: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mines: DEFAULT_MINES,
        }
    }
}

impl BoardConfig {
    pub fn new(width: u8, height: u8, mines: u16) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check that mine placement can terminate.
    ///
    /// Placement uses rejection sampling, so at least one cell must stay
    /// mine-free or generation would never finish.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        let max = self.cell_count() - 1;
        if self.mines as usize > max {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                width: self.width,
                height: self.height,
                max,
            });
        }
        Ok(())
    }
}
