//! Fixed frame budget.
//!
//! Each frame's work is timed from the top of the loop. If it finished early
//! the pacer sleeps out the rest of the budget; if it overran, the next frame
//! starts immediately. Overruns are never paid back by shortening later frames.

use std::time::{Duration, Instant};

use crate::collab::Clock;

/// Time left in `budget` after `elapsed` of work, or `None` when nothing is left.
pub fn remaining(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|d| !d.is_zero())
}

#[derive(Debug, Clone)]
pub struct FramePacer<C> {
    clock: C,
    budget: Duration,
    frame_start: Option<Instant>,
}

impl<C: Clock> FramePacer<C> {
    pub fn new(clock: C, budget: Duration) -> Self {
        Self {
            clock,
            budget,
            frame_start: None,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn set_budget(&mut self, budget: Duration) {
        self.budget = budget;
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mark the start of a frame's work.
    pub fn begin_frame(&mut self) {
        self.frame_start = Some(self.clock.now());
    }

    /// Sleep out the rest of the budget, if any. Returns how long it slept.
    ///
    /// Without a matching `begin_frame` this does nothing.
    pub fn end_frame(&mut self) -> Duration {
        let Some(start) = self.frame_start.take() else {
            return Duration::ZERO;
        };
        let elapsed = self.clock.now().saturating_duration_since(start);
        match remaining(self.budget, elapsed) {
            Some(rest) => {
                self.clock.sleep(rest);
                rest
            }
            None => Duration::ZERO,
        }
    }
}
