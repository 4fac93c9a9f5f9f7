//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the map, the two entities, the enemy's pursuit
//! policy and the running/terminated state machine. It has **no** dependency
//! on terminals, clocks or I/O, so the same rules run under the real loop,
//! in tests, and in benchmarks.
//!
//! # Module Structure
//!
//! - [`grid`]: walled rectangular map with passability queries
//! - [`entity`]: glyph + position value object
//! - [`pursuit`]: the enemy's per-axis greedy chase step
//! - [`game_state`]: player commands, enemy update, termination
//! - [`frame`]: grid with entities overlaid, ready to draw
//! - [`config`]: session geometry
//!
//! # Rules
//!
//! - The player moves one cell per command; walls reject the move.
//! - The enemy closes one cell per axis per frame, diagonally when it can.
//! - The game ends on quit, on exhausted input, or when the enemy lands on
//!   the player after its step.
//!
//! # Example
//!
//! ```
//! use tui_chase_core::{GameConfig, GameState, InputOutcome};
//! use tui_chase_types::{Command, Position};
//!
//! let mut game = GameState::new(GameConfig::default()).unwrap();
//! assert_eq!(
//!     game.apply_input(Some(Command::Right)),
//!     InputOutcome::Moved(Position::new(3, 2))
//! );
//! game.update();
//! assert_eq!(game.enemy().pos, Position::new(16, 6));
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod frame;
pub mod game_state;
pub mod grid;
pub mod pursuit;

pub use tui_chase_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use entity::Entity;
pub use error::SetupError;
pub use frame::{Frame, FrameCell};
pub use game_state::{EndReason, GameState, InputOutcome, Notice, Status};
pub use grid::{CellKind, Grid};
