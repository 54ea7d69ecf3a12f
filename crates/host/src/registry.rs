//! Game registry: the catalog the host shell launches games from.

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::game::{GameInfo, TerminalGame};

/// Builds a fresh game instance from a seed.
pub type GameFactory = fn(seed: u32) -> Result<Box<dyn TerminalGame>>;

pub struct RegisteredGame {
    pub info: GameInfo,
    factory: GameFactory,
}

impl RegisteredGame {
    pub fn create(&self, seed: u32) -> Result<Box<dyn TerminalGame>> {
        (self.factory)(seed)
    }
}

/// Registered games, in registration order.
#[derive(Default)]
pub struct GameRegistry {
    games: Vec<RegisteredGame>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a game. Names are unique (case-insensitive); a second
    /// registration under the same name is refused and returns `false`.
    pub fn register(&mut self, info: GameInfo, factory: GameFactory) -> bool {
        if self.find(&info.name).is_some() {
            debug!(name = %info.name, "game already registered");
            return false;
        }
        debug!(name = %info.name, version = info.version, "game registered");
        self.games.push(RegisteredGame { info, factory });
        true
    }

    pub fn games(&self) -> impl Iterator<Item = &GameInfo> {
        self.games.iter().map(|g| &g.info)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Look a game up by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&RegisteredGame> {
        self.games
            .iter()
            .find(|g| g.info.name.eq_ignore_ascii_case(name))
    }

    /// Create a new instance of the named game.
    pub fn launch(&self, name: &str, seed: u32) -> Result<Box<dyn TerminalGame>> {
        self.find(name)
            .ok_or_else(|| anyhow!("unknown game: {}", name))?
            .create(seed)
    }

    /// The catalog as pretty-printed JSON.
    pub fn catalog_json(&self) -> serde_json::Result<String> {
        let infos: Vec<&GameInfo> = self.games().collect();
        serde_json::to_string_pretty(&infos)
    }
}
