//! Session geometry.

use crate::types::{Position, DEFAULT_HEIGHT, DEFAULT_WIDTH, ENEMY_START_INSET, PLAYER_START};

/// Map size and starting coordinates for one game session.
///
/// The shipped game always uses [`GameConfig::default`]; other geometries
/// exist for tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub player_start: Position,
    pub enemy_start: Position,
}

impl GameConfig {
    /// A map of the given size with the standard start positions: player
    /// near the top-left corner, enemy inset from the bottom-right.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            player_start: PLAYER_START,
            enemy_start: Position::new(
                width as i32 - ENEMY_START_INSET,
                height as i32 - ENEMY_START_INSET,
            ),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
