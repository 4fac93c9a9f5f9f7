//! Terminal chase runner (default binary).
//!
//! Shows the welcome screen, waits for one acknowledgment, then runs a fixed
//! 20x10 session until the player quits, input runs out, or the enemy
//! catches the player. Every one of those endings exits with status 0.
//!
//! Interactive terminals get raw-mode single-key input; piped stdin is read
//! line by line, one command per non-whitespace character.

use std::io;

use anyhow::Result;
use crossterm::tty::IsTty;
use env_logger::{Builder, Env};
use log::info;

use tui_chase::core::{GameConfig, GameState};
use tui_chase::engine::{GameLoop, InputSource};
use tui_chase::input::{KeyInput, StreamInput};
use tui_chase::term::{render_intro, Palette, TerminalRenderer};

fn main() -> Result<()> {
    init_logging();

    // Reject a bad map before touching the terminal.
    let state = GameState::new(GameConfig::default())?;

    let mut term = TerminalRenderer::new(Palette::default());
    let result = if io::stdin().is_tty() {
        KeyInput::enable()
            .map_err(anyhow::Error::from)
            .and_then(|keys| run(&mut term, state, keys, "Press any key to start playing..."))
    } else {
        run(
            &mut term,
            state,
            StreamInput::stdin(),
            "Press Enter to start playing...",
        )
    };

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let env = Env::default().default_filter_or("warn");
    // `try_init` only fails if a logger is already installed.
    let _ = Builder::from_env(env).try_init();
}

fn run<I: InputSource>(
    term: &mut TerminalRenderer,
    state: GameState,
    mut input: I,
    ack_prompt: &str,
) -> Result<()> {
    render_intro(term, ack_prompt)?;
    if !input.wait_for_ack() {
        info!("input closed on the welcome screen");
        return Ok(());
    }

    let mut game = GameLoop::new(state, term, input);
    let reason = game.run()?;
    info!("session over: {:?} after {} frames", reason, game.frames());
    Ok(())
}
