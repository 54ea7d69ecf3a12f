//! Terminal Minesweeper runner (default binary).
//!
//! Plays the part of the host shell: registers the Minesweeper plugin,
//! launches it, and then loops forwarding key presses and redrawing the
//! game's text surface with a framebuffer-based renderer.

mod cli;
mod logging;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_minesweeper::core::{BoardConfig, Minesweeper};
use tui_minesweeper::host::{plugin, GameRegistry, ShellConfig, TerminalGame};
use tui_minesweeper::input::should_quit;
use tui_minesweeper::term::{FrameBuffer, ScreenView, TerminalRenderer, Viewport};

use cli::{CliCommand, ScriptArgs};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = cli::parse_args(&args)?;

    let config = ShellConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let mut registry = GameRegistry::new();
    plugin::register(&mut registry);

    match command {
        CliCommand::List => {
            println!("{}", registry.catalog_json()?);
            Ok(())
        }
        CliCommand::Script(script) => run_script(&script, config.seed),
        CliCommand::Play { game } => {
            let name = game.unwrap_or(config.game);
            let mut game = registry.launch(&name, config.seed)?;
            tracing::info!(game = %name, seed = config.seed, "launching");
            play(game.as_mut())
        }
    }
}

fn play(game: &mut dyn TerminalGame) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut dyn TerminalGame) -> Result<()> {
    game.start();

    let view = ScreenView::new().with_footer("Q / Esc to quit");
    let mut fb = FrameBuffer::new(0, 0);
    let mut screen = String::new();

    loop {
        game.render(&mut |text: &str| {
            screen.clear();
            screen.push_str(text);
        });

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&screen, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Turn-based: block until the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                game.handle_key(key);
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

fn run_script(script: &ScriptArgs, default_seed: u32) -> Result<()> {
    let commands = cli::script_commands(&script.keys)?;

    let mut game = Minesweeper::new(BoardConfig::default(), script.seed.unwrap_or(default_seed))?;
    game.start_game();

    // Render between commands the way the interactive shell does, so the
    // flag limit sees the same counts.
    let mut scratch = String::new();
    for command in commands {
        scratch.clear();
        game.render_into(&mut scratch);
        game.handle_input(command);
    }

    if script.json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        println!("{}", game.render());
    }
    Ok(())
}
