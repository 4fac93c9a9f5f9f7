//! Loop driver module - fixed-rate scheduling around the pure core.
//!
//! [`GameLoop`] owns a [`GameState`](crate::core::GameState) and drives it
//! through three collaborator traits:
//!
//! - [`Renderer`]: clear, draw cells by role, write text lines, present
//! - [`InputSource`]: blocking read of one command per frame
//! - [`Clock`]: monotonic time and a blocking sleep for frame pacing
//!
//! Concrete terminal implementations live in `tui-chase-term` and
//! `tui-chase-input`; tests substitute scripted doubles.
//!
//! # Timing
//!
//! Frames are paced to a 100ms budget measured from the top of each frame
//! (see [`pacing`]). The blocking input read counts against that budget, so
//! interactive frames usually overrun it and start the next frame at once.

pub mod collab;
pub mod game_loop;
pub mod pacing;

pub use tui_chase_core as core;
pub use tui_chase_types as types;

pub use collab::{Clock, InputSource, Renderer, SystemClock};
pub use game_loop::{GameLoop, AVOID_HINT, CONTROLS_HINT, GAME_OVER, INPUT_PROMPT};
pub use pacing::{remaining, FramePacer};
