//! Snapshot module - what a player can see of a game
//!
//! [`CellView`] is the visible state of one cell and decides its glyph on the
//! text surface. [`GameSnapshot`] collects those views with the header
//! numbers so observers and scripted runs can inspect a game without
//! touching the engine.

use serde::Serialize;

use crate::board::{Board, CellKind};
use crate::types::{GameStatus, Position};

/// What a player can see of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed { adjacent: u8 },
    /// A mine shown after a loss. `near` counts the mines in its 3x3 block,
    /// the mine itself included, so it is always at least 1.
    Mine { near: u8 },
}

impl CellView {
    /// Visible state of the cell at `pos`. Reveal wins over flag.
    pub fn at(board: &Board, pos: Position) -> Option<Self> {
        let cell = board.get(pos)?;
        let view = if cell.revealed {
            match cell.kind {
                CellKind::Mine => CellView::Mine {
                    near: board.adjacent_mines(pos) + 1,
                },
                kind => CellView::Revealed {
                    adjacent: kind.adjacent(),
                },
            }
        } else if cell.flagged {
            CellView::Flagged
        } else {
            CellView::Hidden
        };
        Some(view)
    }

    /// Glyph on the text surface.
    pub fn glyph(&self) -> char {
        match *self {
            CellView::Hidden => '-',
            CellView::Flagged => 'F',
            CellView::Revealed { adjacent: 0 } => ' ',
            CellView::Revealed { adjacent: n } | CellView::Mine { near: n } => {
                char::from(b'0' + n)
            }
        }
    }
}

/// Read-only view of a game, for observers and scripted runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    pub mines: u16,
    pub flags_placed: usize,
    pub cursor: Position,
    pub status: GameStatus,
    /// Rows top to bottom, each left to right.
    pub cells: Vec<Vec<CellView>>,
}

impl GameSnapshot {
    pub fn cell(&self, pos: Position) -> Option<CellView> {
        self.cells
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    pub fn flags_remaining(&self) -> i64 {
        self.mines as i64 - self.flags_placed as i64
    }
}
