use crossterm::event::KeyEvent;
use serde::Serialize;

/// Catalog entry shown by the host's game menu.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameInfo {
    pub name: String,
    pub description: String,
    pub version: f32,
}

impl GameInfo {
    pub fn new(name: impl Into<String>, description: impl Into<String>, version: f32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version,
        }
    }
}

/// A game the host shell can drive.
pub trait TerminalGame {
    /// Reset to a fresh game. Called when the game is selected.
    fn start(&mut self);

    /// Produce the current text surface and hand it to `set_screen`.
    fn render(&mut self, set_screen: &mut dyn FnMut(&str));

    /// React to one key press.
    fn handle_key(&mut self, key: KeyEvent);
}
