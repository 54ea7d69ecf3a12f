//! Shell configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::plugin::GAME_NAME;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub seed: u32,
    pub game: String,
    pub log_path: Option<PathBuf>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            game: GAME_NAME.to_string(),
            log_path: None,
        }
    }
}

impl ShellConfig {
    /// Create from environment variables.
    ///
    /// Unset, empty or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("MINESWEEPER_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);
        let game = non_empty("MINESWEEPER_GAME").unwrap_or_else(|| GAME_NAME.to_string());
        let log_path = non_empty("MINESWEEPER_LOG_PATH").map(PathBuf::from);

        Self {
            seed,
            game,
            log_path,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
