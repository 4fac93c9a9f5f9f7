//! Line-buffered command reader.
//!
//! Reads whole lines from any `BufRead` and hands out their non-whitespace
//! characters one per call, so `dd` followed by Enter is two commands over
//! two frames. Used when stdin is not a terminal, and in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use log::warn;

use crate::engine::InputSource;
use crate::types::Command;

pub struct StreamInput<R> {
    reader: R,
    pending: VecDeque<char>,
    line: String,
}

impl StreamInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StreamInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line: String::new(),
        }
    }

    /// Read the next line into `self.line`. Returns false at end of input.
    ///
    /// Read errors are logged and treated as end of input.
    fn next_line(&mut self) -> bool {
        self.line.clear();
        match self.reader.read_line(&mut self.line) {
            Ok(0) => false,
            Ok(_) => true,
            Err(err) => {
                warn!("input read failed, treating as end of input: {err}");
                false
            }
        }
    }
}

impl<R: BufRead> InputSource for StreamInput<R> {
    fn read_command(&mut self) -> Option<Command> {
        loop {
            if let Some(c) = self.pending.pop_front() {
                return Some(Command::from_char(c));
            }
            if !self.next_line() {
                return None;
            }
            self.pending
                .extend(self.line.chars().filter(|c| !c.is_whitespace()));
        }
    }

    fn wait_for_ack(&mut self) -> bool {
        self.pending.clear();
        self.next_line()
    }
}
