//! Terminal Minesweeper (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `tui_minesweeper::{core,host,input,term,types}`.

pub use tui_minesweeper_core as core;
pub use tui_minesweeper_host as host;
pub use tui_minesweeper_input as input;
pub use tui_minesweeper_term as term;
pub use tui_minesweeper_types as types;
