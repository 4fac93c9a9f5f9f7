//! Collaborator seams: the output surface, the command source and the clock.
//!
//! The loop only talks to these traits, so the terminal, stdin and the
//! wall clock can all be swapped for scripted doubles in tests.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::types::{Command, Role, Tone};

/// Output surface the loop draws each frame onto.
///
/// Calls arrive in a fixed order per frame: one `clear`, every cell row-major
/// through `draw_cell`, any `write_line`s, an optional `write_prompt`, then
/// `present`.
pub trait Renderer {
    /// Blank the visible output.
    fn clear(&mut self) -> Result<()>;

    /// Draw one map cell. `role` selects the presentation style.
    fn draw_cell(&mut self, x: u16, y: u16, glyph: char, role: Role) -> Result<()>;

    /// Write a full line of status or help text below the map.
    fn write_line(&mut self, text: &str, tone: Tone) -> Result<()>;

    /// Write text without ending the line, e.g. an input prompt.
    fn write_prompt(&mut self, text: &str) -> Result<()>;

    /// Make everything written since `clear` visible.
    fn present(&mut self) -> Result<()>;
}

/// Blocking source of one command per frame.
pub trait InputSource {
    /// Block until the next command. `None` means input is exhausted.
    fn read_command(&mut self) -> Option<Command>;

    /// Block until the player acknowledges the intro screen.
    ///
    /// Returns false if input ran out before an acknowledgment arrived.
    fn wait_for_ack(&mut self) -> bool;
}

/// Monotonic time plus a blocking sleep.
pub trait Clock {
    fn now(&self) -> Instant;
    fn sleep(&mut self, duration: Duration);
}

/// The real clock: `Instant::now` and `thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn draw_cell(&mut self, x: u16, y: u16, glyph: char, role: Role) -> Result<()> {
        (**self).draw_cell(x, y, glyph, role)
    }

    fn write_line(&mut self, text: &str, tone: Tone) -> Result<()> {
        (**self).write_line(text, tone)
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        (**self).write_prompt(text)
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }
}

impl<I: InputSource + ?Sized> InputSource for &mut I {
    fn read_command(&mut self) -> Option<Command> {
        (**self).read_command()
    }

    fn wait_for_ack(&mut self) -> bool {
        (**self).wait_for_ack()
    }
}
