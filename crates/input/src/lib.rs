//! Terminal input module (engine-facing).
//!
//! Turns keyboard input into [`Command`](crate::types::Command)s behind the
//! engine's [`InputSource`](crate::engine::InputSource) trait:
//!
//! - [`KeyInput`]: raw-mode key presses via `crossterm`, for interactive terminals
//! - [`StreamInput`]: line-buffered characters from any reader, for pipes and tests

pub mod keys;
pub mod map;
pub mod stream;

pub use tui_chase_engine as engine;
pub use tui_chase_types as types;

pub use keys::KeyInput;
pub use map::{handle_key_event, is_end_of_input};
pub use stream::StreamInput;
