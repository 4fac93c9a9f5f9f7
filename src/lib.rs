//! TUI Chase (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `tui_chase::{core,engine,input,term,types}`.

pub use tui_chase_core as core;
pub use tui_chase_engine as engine;
pub use tui_chase_input as input;
pub use tui_chase_term as term;
pub use tui_chase_types as types;
