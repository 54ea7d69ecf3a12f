//! Minesweeper plugin: registers the game with the host's registry.

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::info;

use crate::core::{BoardConfig, Minesweeper};
use crate::game::{GameInfo, TerminalGame};
use crate::registry::GameRegistry;
use tui_minesweeper_input::command_for_key;

pub const PLUGIN_GUID: &str = "tui-minesweeper";
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const GAME_NAME: &str = "Minesweeper";
pub const GAME_DESCRIPTION: &str = "Classic Minesweeper game";
pub const GAME_VERSION: f32 = 0.1;

/// Adapter between the host's key/surface calls and the engine.
#[derive(Debug, Clone)]
pub struct MinesweeperGame {
    engine: Minesweeper,
}

impl MinesweeperGame {
    pub fn new(seed: u32) -> Result<Self> {
        Ok(Self {
            engine: Minesweeper::new(BoardConfig::default(), seed)?,
        })
    }

    pub fn engine(&self) -> &Minesweeper {
        &self.engine
    }
}

impl TerminalGame for MinesweeperGame {
    fn start(&mut self) {
        self.engine.start_game();
    }

    fn render(&mut self, set_screen: &mut dyn FnMut(&str)) {
        let screen = self.engine.render();
        set_screen(&screen);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(command) = command_for_key(key) {
            self.engine.handle_input(command);
        }
    }
}

fn create(seed: u32) -> Result<Box<dyn TerminalGame>> {
    Ok(Box::new(MinesweeperGame::new(seed)?))
}

/// Plugin entry point: add Minesweeper to the host's game list.
pub fn register(registry: &mut GameRegistry) {
    registry.register(
        GameInfo::new(GAME_NAME, GAME_DESCRIPTION, GAME_VERSION),
        create,
    );
    info!("Plugin {} {} is loaded!", PLUGIN_GUID, PLUGIN_VERSION);
}
