//! Game state - the Minesweeper engine driven by discrete commands
//!
//! [`Minesweeper`] owns the board, the cursor and the game status. The host
//! calls [`Minesweeper::start_game`] once, then alternates
//! [`Minesweeper::handle_input`] and [`Minesweeper::render`].
//!
//! The flag limit is checked against the flag count seen by the most recent
//! render, not the live count. Between two renders the player can therefore
//! place one flag past the mine count, after which "Flags Remaining" goes
//! negative and only removals are accepted.

use std::fmt::Write;

use tracing::{debug, info};

use crate::board::Board;
use crate::config::{BoardConfig, ConfigError};
use crate::rng::SimpleRng;
use crate::snapshot::{CellView, GameSnapshot};
use crate::types::{Command, GameStatus, Position, HELP_LINE};

/// One Minesweeper session.
#[derive(Debug, Clone)]
pub struct Minesweeper {
    config: BoardConfig,
    board: Board,
    cursor: Position,
    lost: bool,
    rng: SimpleRng,
    /// Flag count observed by the last render.
    flags_seen: usize,
    games_started: u32,
}

impl Minesweeper {
    /// Create an engine for `config`. No mines are placed until
    /// [`start_game`](Self::start_game).
    pub fn new(config: BoardConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: Board::empty(config),
            cursor: Position::default(),
            lost: false,
            rng: SimpleRng::new(seed),
            flags_seen: 0,
            games_started: 0,
        })
    }

    /// Engine around a prepared board. The first game is already running;
    /// restarts generate random boards of the same shape, so the board's
    /// shape must pass the same checks as [`new`](Self::new).
    pub fn with_board(board: Board, seed: u32) -> Result<Self, ConfigError> {
        board.config().validate()?;
        Ok(Self {
            config: board.config(),
            flags_seen: board.flag_count(),
            board,
            cursor: Position::default(),
            lost: false,
            rng: SimpleRng::new(seed),
            games_started: 1,
        })
    }

    /// Reset reveal and flag state and lay out a fresh minefield.
    pub fn start_game(&mut self) {
        let seed = self.rng.state();
        self.board = Board::scatter(self.config, &mut self.rng);
        self.cursor = Position::default();
        self.lost = false;
        self.flags_seen = 0;
        self.games_started += 1;

        debug!(
            seed,
            width = self.config.width,
            height = self.config.height,
            mines = self.config.mines,
            game = self.games_started,
            "minefield generated"
        );
    }

    /// Apply one command. Anything not applicable in the current state is a
    /// silent no-op.
    pub fn handle_input(&mut self, command: Command) {
        if self.status().is_finished() {
            if command == Command::Restart {
                info!(game = self.games_started, "restarting");
                self.start_game();
            }
            return;
        }

        match command {
            Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                if let Some((dx, dy)) = command.direction() {
                    self.move_cursor(dx, dy);
                }
            }
            Command::ToggleFlag => {
                let allow_new = self.flags_seen <= self.config.mines as usize;
                self.board.toggle_flag(self.cursor, allow_new);
            }
            Command::Activate => self.activate(),
            Command::Restart => {}
        }
    }

    fn move_cursor(&mut self, dx: i8, dy: i8) {
        if let Some(next) = self
            .cursor
            .offset(dx, dy, self.config.width, self.config.height)
        {
            self.cursor = next;
        }
    }

    fn activate(&mut self) {
        let Some(cell) = self.board.get(self.cursor) else {
            return;
        };
        if cell.flagged {
            return;
        }

        if cell.kind.is_mine() {
            self.lost = true;
            self.board.reveal_mines();
            info!(x = self.cursor.x, y = self.cursor.y, "mine hit, game lost");
            return;
        }

        let opened = self.board.flood_reveal(self.cursor);
        debug!(x = self.cursor.x, y = self.cursor.y, opened, "revealed");
        if self.board.is_cleared() {
            info!(game = self.games_started, "board cleared, game won");
        }
    }

    /// Current status. A win is derived from the board on every call.
    pub fn status(&self) -> GameStatus {
        if self.lost {
            GameStatus::Lost
        } else if self.board.is_cleared() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Games started so far, counting restarts.
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Render the text surface into `out` (appending).
    ///
    /// This also refreshes the flag count used by the flag limit.
    pub fn render_into(&mut self, out: &mut String) {
        self.flags_seen = self.board.flag_count();
        let mines = self.config.mines as i64;

        let _ = writeln!(out, "Total Mines: {}", mines);
        let _ = writeln!(out, "Flags Remaining: {}", mines - self.flags_seen as i64);
        out.push_str(HELP_LINE);
        out.push('\n');

        for y in 0..self.config.height {
            for x in 0..self.config.width {
                let pos = Position::new(x, y);
                let glyph = if pos == self.cursor {
                    '>'
                } else {
                    CellView::at(&self.board, pos)
                        .map(|view| view.glyph())
                        .unwrap_or('-')
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }

        if let Some(banner) = self.status().banner() {
            out.push_str(banner);
        }
    }

    /// Convenience helper that allocates a new string.
    pub fn render(&mut self) -> String {
        let cells = self.config.cell_count();
        let mut out = String::with_capacity(96 + cells * 2 + self.config.height as usize);
        self.render_into(&mut out);
        out
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let cells = (0..self.config.height)
            .map(|y| {
                (0..self.config.width)
                    .filter_map(|x| CellView::at(&self.board, Position::new(x, y)))
                    .collect()
            })
            .collect();

        GameSnapshot {
            width: self.config.width,
            height: self.config.height,
            mines: self.config.mines,
            flags_placed: self.board.flag_count(),
            cursor: self.cursor,
            status: self.status(),
            cells,
        }
    }
}
