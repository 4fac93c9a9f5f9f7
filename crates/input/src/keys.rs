//! Raw-mode key reader for interactive terminals.
//!
//! Each frame blocks on crossterm's event queue until a key press maps to a
//! command. Raw mode is enabled for the reader's lifetime and restored on drop.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::warn;

use crate::engine::InputSource;
use crate::map::{handle_key_event, is_end_of_input};
use crate::types::Command;

pub struct KeyInput {
    _private: (),
}

impl KeyInput {
    /// Switch the terminal into raw mode and start reading keys.
    pub fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self { _private: () })
    }

    /// Block until the next key press. `None` when the event stream fails.
    fn next_press(&mut self) -> Option<event::KeyEvent> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return Some(key),
                // Repeats, releases, resizes, mouse and focus events.
                Ok(_) => continue,
                Err(err) => {
                    warn!("terminal event read failed, treating as end of input: {err}");
                    return None;
                }
            }
        }
    }
}

impl InputSource for KeyInput {
    fn read_command(&mut self) -> Option<Command> {
        loop {
            let key = self.next_press()?;
            if is_end_of_input(key) {
                return None;
            }
            if let Some(cmd) = handle_key_event(key) {
                return Some(cmd);
            }
        }
    }

    fn wait_for_ack(&mut self) -> bool {
        match self.next_press() {
            Some(key) => !is_end_of_input(key),
            None => false,
        }
    }
}

impl Drop for KeyInput {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = terminal::disable_raw_mode();
    }
}
