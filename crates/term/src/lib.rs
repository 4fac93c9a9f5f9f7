//! Terminal presentation module.
//!
//! Implements the engine's [`Renderer`](crate::engine::Renderer) on top of
//! `crossterm`. Colors come from an injected [`Palette`]; screen clearing and
//! color escapes are left to crossterm, which also handles enabling ANSI
//! processing on Windows consoles.

pub mod intro;
pub mod palette;
pub mod renderer;

pub use tui_chase_engine as engine;
pub use tui_chase_types as types;

pub use intro::{render_intro, TITLE};
pub use palette::{CellStyle, Palette};
pub use renderer::TerminalRenderer;
