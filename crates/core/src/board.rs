//! Board module - manages the minefield grid
//!
//! The board is a `width` x `height` grid stored as a flat row-major vector
//! (`y * width + x`). Each cell carries its content (empty, mine, or the
//! number of neighbouring mines) and its reveal/flag state.
//! Coordinates: (x, y) with x growing left to right and y top to bottom.

use arrayvec::ArrayVec;

use crate::config::{BoardConfig, ConfigError};
use crate::rng::SimpleRng;
use crate::types::Position;

/// Offsets of the Moore neighbourhood.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// What a cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// No mine and no mine next to it
    #[default]
    Empty,
    Mine,
    /// No mine, with 1..=8 mines in the neighbourhood
    Numbered(u8),
}

impl CellKind {
    pub fn is_mine(&self) -> bool {
        matches!(self, CellKind::Mine)
    }

    /// Neighbouring mine count; zero for empty cells and mines.
    pub fn adjacent(&self) -> u8 {
        match self {
            CellKind::Numbered(n) => *n,
            _ => 0,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub kind: CellKind,
    pub revealed: bool,
    pub flagged: bool,
}

/// The minefield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    mines: u16,
    cells: Vec<Cell>,
}

impl Board {
    /// Board with no mines placed yet. Callers validate `config` first.
    pub(crate) fn empty(config: BoardConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            mines: config.mines,
            cells: vec![Cell::default(); config.cell_count()],
        }
    }

    /// Generate a fresh board with `config.mines` mines at random cells.
    ///
    /// Positions are drawn uniformly and redrawn on collision.
    pub fn generate(config: BoardConfig, rng: &mut SimpleRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::scatter(config, rng))
    }

    /// Place mines for a config that already passed validation, so the
    /// rejection loop always has a free cell to land on.
    pub(crate) fn scatter(config: BoardConfig, rng: &mut SimpleRng) -> Self {
        let mut board = Self::empty(config);
        let mut placed = 0u16;
        while placed < config.mines {
            let pos = rng.next_position(config.width, config.height);
            let i = board.idx(pos);
            if !board.cells[i].kind.is_mine() {
                board.cells[i].kind = CellKind::Mine;
                placed += 1;
            }
        }
        board.compute_counts();
        board
    }

    /// Build a board with mines at fixed positions.
    pub fn with_mines(width: u8, height: u8, mines: &[Position]) -> Result<Self, ConfigError> {
        let config = BoardConfig::new(width, height, mines.len() as u16);
        config.validate()?;

        let mut board = Self::empty(config);
        for &pos in mines {
            let i = board.index(pos).ok_or(ConfigError::MineOutOfBounds {
                x: pos.x,
                y: pos.y,
                width,
                height,
            })?;
            if board.cells[i].kind.is_mine() {
                return Err(ConfigError::DuplicateMine { x: pos.x, y: pos.y });
            }
            board.cells[i].kind = CellKind::Mine;
        }
        board.compute_counts();
        Ok(board)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some(pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Index of a position already known to be in bounds.
    #[inline(always)]
    fn idx(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of mines this board was built with.
    pub fn mine_count(&self) -> u16 {
        self.mines
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.width, self.height, self.mines)
    }

    /// Get cell at a position, `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// In-bounds Moore neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 8> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| pos.offset(dx, dy, self.width, self.height))
            .collect()
    }

    /// Count mines around `pos` by scanning the neighbourhood.
    pub fn adjacent_mines(&self, pos: Position) -> u8 {
        self.neighbors(pos)
            .iter()
            .filter(|&&n| self.cells[self.idx(n)].kind.is_mine())
            .count() as u8
    }

    fn compute_counts(&mut self) {
        for pos in self.positions().collect::<Vec<_>>() {
            let i = self.idx(pos);
            if self.cells[i].kind.is_mine() {
                continue;
            }
            let kind = match self.adjacent_mines(pos) {
                0 => CellKind::Empty,
                n => CellKind::Numbered(n),
            };
            self.cells[i].kind = kind;
        }
    }

    /// Flip the flag on a hidden cell.
    ///
    /// Revealed cells ignore flags. Placing a new flag additionally requires
    /// `allow_new`; removing one always succeeds. Returns whether the flag
    /// state changed.
    pub fn toggle_flag(&mut self, pos: Position, allow_new: bool) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.revealed {
            return false;
        }
        if !cell.flagged && !allow_new {
            return false;
        }
        cell.flagged = !cell.flagged;
        true
    }

    /// Reveal a single cell without flooding. Flagged cells stay hidden.
    pub fn reveal_cell(&mut self, pos: Position) -> bool {
        let Some(i) = self.index(pos) else {
            return false;
        };
        let cell = &mut self.cells[i];
        if cell.revealed || cell.flagged {
            return false;
        }
        cell.revealed = true;
        true
    }

    /// Reveal `start` and flood outward through zero-count cells.
    ///
    /// Numbered cells are revealed but do not expand. Revealed and flagged
    /// cells are skipped. Returns the number of newly revealed cells.
    pub fn flood_reveal(&mut self, start: Position) -> usize {
        let mut revealed = 0;
        let mut stack = vec![start];

        while let Some(pos) = stack.pop() {
            let Some(i) = self.index(pos) else {
                continue;
            };
            let cell = &mut self.cells[i];
            if cell.revealed || cell.flagged {
                continue;
            }
            cell.revealed = true;
            revealed += 1;

            if cell.kind == CellKind::Empty {
                stack.extend(
                    self.neighbors(pos)
                        .into_iter()
                        .filter(|&n| !self.cells[self.idx(n)].revealed),
                );
            }
        }

        revealed
    }

    /// Reveal every mine, leaving flags as they are.
    pub fn reveal_mines(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.kind.is_mine()) {
            cell.revealed = true;
        }
    }

    pub fn flag_count(&self) -> usize {
        self.cells.iter().filter(|c| c.flagged).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.revealed).count()
    }

    /// True when every non-mine cell is revealed.
    pub fn is_cleared(&self) -> bool {
        self.cells
            .iter()
            .all(|c| c.kind.is_mine() || c.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn generate_places_exact_mine_count() {
        let mut rng = SimpleRng::new(42);
        let board = Board::generate(BoardConfig::default(), &mut rng).unwrap();
        let mines = board
            .positions()
            .filter(|&p| board.get(p).unwrap().kind.is_mine())
            .count();
        assert_eq!(mines, 25);
    }

    #[test]
    fn generate_fills_all_but_one_cell() {
        let mut rng = SimpleRng::new(5);
        let board = Board::generate(BoardConfig::new(3, 3, 8), &mut rng).unwrap();
        let safe: Vec<_> = board
            .positions()
            .filter(|&p| !board.get(p).unwrap().kind.is_mine())
            .collect();
        assert_eq!(safe.len(), 1);
        let expected = CellKind::Numbered(board.adjacent_mines(safe[0]));
        assert_eq!(board.get(safe[0]).unwrap().kind, expected);
    }

    #[test]
    fn generate_rejects_overfull_config() {
        let mut rng = SimpleRng::new(1);
        assert!(Board::generate(BoardConfig::new(2, 2, 4), &mut rng).is_err());
    }

    #[test]
    fn neighbors_are_clamped_at_edges() {
        let board = Board::empty(BoardConfig::new(3, 3, 0));
        assert_eq!(board.neighbors(pos(0, 0)).len(), 3);
        assert_eq!(board.neighbors(pos(1, 0)).len(), 5);
        assert_eq!(board.neighbors(pos(1, 1)).len(), 8);
    }

    #[test]
    fn counts_match_neighbourhood() {
        let board = Board::with_mines(3, 3, &[pos(0, 0), pos(2, 2)]).unwrap();
        assert_eq!(board.get(pos(1, 1)).unwrap().kind, CellKind::Numbered(2));
        assert_eq!(board.get(pos(1, 0)).unwrap().kind, CellKind::Numbered(1));
        assert_eq!(board.get(pos(2, 0)).unwrap().kind, CellKind::Empty);
        assert_eq!(board.get(pos(0, 0)).unwrap().kind, CellKind::Mine);
    }

    #[test]
    fn with_mines_rejects_bad_layouts() {
        assert_eq!(
            Board::with_mines(2, 2, &[pos(1, 1), pos(1, 1)]),
            Err(ConfigError::DuplicateMine { x: 1, y: 1 })
        );
        assert!(matches!(
            Board::with_mines(2, 2, &[pos(2, 0)]),
            Err(ConfigError::MineOutOfBounds { x: 2, y: 0, .. })
        ));
    }

    #[test]
    fn flood_stops_at_numbered_fringe() {
        // Mine in the right column; the left two columns are empty or numbered.
        let mut board = Board::with_mines(4, 3, &[pos(3, 1)]).unwrap();
        let opened = board.flood_reveal(pos(0, 0));

        // Columns 0-1 are empty, column 2 is numbered, column 3 stays hidden.
        assert_eq!(opened, 9);
        for y in 0..3 {
            assert!(board.get(pos(2, y)).unwrap().revealed);
            assert!(!board.get(pos(3, y)).unwrap().revealed);
        }
        assert!(!board.get(pos(3, 1)).unwrap().revealed);
    }

    #[test]
    fn flood_from_numbered_cell_reveals_only_it() {
        let mut board = Board::with_mines(3, 3, &[pos(2, 2)]).unwrap();
        assert_eq!(board.flood_reveal(pos(1, 1)), 1);
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn flood_skips_flagged_cells() {
        let mut board = Board::with_mines(3, 1, &[pos(2, 0)]).unwrap();
        board.toggle_flag(pos(1, 0), true);
        assert_eq!(board.flood_reveal(pos(0, 0)), 1);
        assert!(!board.get(pos(1, 0)).unwrap().revealed);
    }

    #[test]
    fn flag_toggle_rules() {
        let mut board = Board::with_mines(2, 1, &[pos(1, 0)]).unwrap();
        assert!(!board.toggle_flag(pos(1, 0), false));
        assert!(board.toggle_flag(pos(1, 0), true));
        assert_eq!(board.flag_count(), 1);
        // Removing is allowed even when new flags are not.
        assert!(board.toggle_flag(pos(1, 0), false));
        assert_eq!(board.flag_count(), 0);

        board.reveal_cell(pos(0, 0));
        assert!(!board.toggle_flag(pos(0, 0), true));
    }

    #[test]
    fn reveal_mines_keeps_flags_and_safe_cells() {
        let mut board = Board::with_mines(3, 1, &[pos(0, 0), pos(2, 0)]).unwrap();
        board.toggle_flag(pos(2, 0), true);
        board.reveal_mines();
        assert!(board.get(pos(0, 0)).unwrap().revealed);
        let flagged = board.get(pos(2, 0)).unwrap();
        assert!(flagged.revealed && flagged.flagged);
        assert!(!board.get(pos(1, 0)).unwrap().revealed);
    }

    #[test]
    fn cleared_ignores_mines() {
        let mut board = Board::with_mines(2, 1, &[pos(1, 0)]).unwrap();
        assert!(!board.is_cleared());
        board.reveal_cell(pos(0, 0));
        assert!(board.is_cleared());
    }
}
