//! GameLoop: drives render -> input -> update at a fixed frame rate.
//!
//! The loop owns the game state and its three collaborators. Each frame it
//! draws the world, blocks for one command, applies it, steps the enemy, and
//! then sleeps out whatever is left of the frame budget.

use std::time::Duration;

use anyhow::{anyhow, Result};
use log::{debug, info, trace};

use crate::collab::{Clock, InputSource, Renderer, SystemClock};
use crate::core::{EndReason, GameState, InputOutcome};
use crate::pacing::FramePacer;
use crate::types::{Tone, FRAME_MS};

pub const CONTROLS_HINT: &str = "Controls: W/A/S/D to move, Q to quit.";
pub const AVOID_HINT: &str = "Avoid the E. If it reaches you, the game ends.";
pub const INPUT_PROMPT: &str = "Input: ";
pub const GAME_OVER: &str = "The enemy caught you! Game over.";

pub struct GameLoop<R, I, C = SystemClock> {
    state: GameState,
    renderer: R,
    input: I,
    pacer: FramePacer<C>,
    frames: u64,
}

impl<R: Renderer, I: InputSource> GameLoop<R, I, SystemClock> {
    /// A loop on the real clock with the standard frame budget.
    pub fn new(state: GameState, renderer: R, input: I) -> Self {
        Self::with_clock(state, renderer, input, SystemClock)
    }
}

impl<R: Renderer, I: InputSource, C: Clock> GameLoop<R, I, C> {
    pub fn with_clock(state: GameState, renderer: R, input: I, clock: C) -> Self {
        Self {
            state,
            renderer,
            input,
            pacer: FramePacer::new(clock, Duration::from_millis(FRAME_MS)),
            frames: 0,
        }
    }

    /// Override the frame budget.
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.pacer.set_budget(budget);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn clock(&self) -> &C {
        self.pacer.clock()
    }

    /// Number of frames executed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run until the game terminates.
    ///
    /// A catch gets one final game-over screen; quitting and running out of
    /// input end without another draw.
    pub fn run(&mut self) -> Result<EndReason> {
        info!(
            "game started: player at {:?}, enemy at {:?}",
            self.state.player().pos,
            self.state.enemy().pos
        );

        while self.state.is_running() {
            self.pacer.begin_frame();
            self.step_frame()?;
            if !self.state.is_running() {
                break;
            }
            let slept = self.pacer.end_frame();
            trace!("frame {} slept {:?}", self.frames, slept);
        }

        let reason = self
            .state
            .end_reason()
            .ok_or_else(|| anyhow!("loop exited while still running"))?;
        if reason == EndReason::Caught {
            self.render_game_over()?;
        }
        info!("game ended after {} frames: {:?}", self.frames, reason);
        Ok(reason)
    }

    /// One frame of work without pacing: render, read and apply one
    /// command, then step the enemy.
    ///
    /// Does nothing once the game has terminated.
    pub fn step_frame(&mut self) -> Result<()> {
        if !self.state.is_running() {
            return Ok(());
        }
        self.render()?;

        let cmd = self.input.read_command();
        let outcome = self.state.apply_input(cmd);
        debug!("frame {}: {:?} -> {:?}", self.frames, cmd, outcome);

        if !matches!(outcome, InputOutcome::Ended(_)) && self.state.update() {
            debug!("enemy reached the player at {:?}", self.state.player().pos);
        }
        self.frames += 1;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.renderer.clear()?;
        for (x, y, cell) in self.state.frame().iter() {
            self.renderer.draw_cell(x, y, cell.glyph, cell.role)?;
        }

        self.renderer.write_line("", Tone::Hint)?;
        if let Some(notice) = self.state.notice() {
            self.renderer.write_line(notice.message(), Tone::Warning)?;
        }
        self.renderer.write_line(CONTROLS_HINT, Tone::Hint)?;
        self.renderer.write_line(AVOID_HINT, Tone::Hint)?;
        self.renderer.write_prompt(INPUT_PROMPT)?;
        self.renderer.present()
    }

    fn render_game_over(&mut self) -> Result<()> {
        self.renderer.clear()?;
        self.renderer.write_line(GAME_OVER, Tone::Alert)?;
        self.renderer.present()
    }
}
