//! Command-line parsing for the runner binary.

use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent};

use tui_minesweeper::input::command_for_key;
use tui_minesweeper::types::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Interactive terminal session (default).
    Play { game: Option<String> },
    /// Print the registered games as JSON.
    List,
    /// Apply a key sequence headlessly and print the result.
    Script(ScriptArgs),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptArgs {
    pub keys: String,
    pub seed: Option<u32>,
    pub json: bool,
}

pub const USAGE: &str = "usage: tui-minesweeper [play [NAME] | list | script <KEYS> [--seed N] [--json]]";

pub fn parse_args(args: &[String]) -> Result<CliCommand> {
    let Some(first) = args.first() else {
        return Ok(CliCommand::Play { game: None });
    };

    match first.as_str() {
        "play" => match args.len() {
            1 => Ok(CliCommand::Play { game: None }),
            2 => Ok(CliCommand::Play {
                game: Some(args[1].clone()),
            }),
            _ => Err(anyhow!("play: unexpected argument: {}", args[2])),
        },
        "list" => match args.get(1) {
            None => Ok(CliCommand::List),
            Some(other) => Err(anyhow!("list: unexpected argument: {}", other)),
        },
        "script" => parse_script_args(&args[1..]).map(CliCommand::Script),
        "-h" | "--help" | "help" => Err(anyhow!(USAGE)),
        other => Err(anyhow!("unknown command: {}\n{}", other, USAGE)),
    }
}

fn parse_script_args(args: &[String]) -> Result<ScriptArgs> {
    let mut keys: Option<String> = None;
    let mut seed = None;
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("script: missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("script: invalid --seed value: {}", v))?,
                );
            }
            "--json" => json = true,
            other if keys.is_none() => keys = Some(other.to_string()),
            other => return Err(anyhow!("script: unexpected argument: {}", other)),
        }
        i += 1;
    }

    Ok(ScriptArgs {
        keys: keys.ok_or_else(|| anyhow!("script: missing key sequence"))?,
        seed,
        json,
    })
}

/// Translate a script's key letters into commands.
///
/// Letters are the same keys a player presses; `e` stands in for Enter.
pub fn script_commands(keys: &str) -> Result<Vec<Command>> {
    keys.chars()
        .map(|c| {
            let code = match c {
                'e' | 'E' => KeyCode::Enter,
                c => KeyCode::Char(c),
            };
            command_for_key(KeyEvent::from(code))
                .ok_or_else(|| anyhow!("script: no command for key {:?}", c))
        })
        .collect()
}
