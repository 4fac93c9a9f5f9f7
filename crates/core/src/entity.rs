//! Entity - a glyph at a grid position.

use crate::types::{Position, ENEMY_GLYPH, PLAYER_GLYPH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity {
    pub glyph: char,
    pub pos: Position,
}

impl Entity {
    pub fn new(glyph: char, pos: Position) -> Self {
        Self { glyph, pos }
    }

    pub fn player(pos: Position) -> Self {
        Self::new(PLAYER_GLYPH, pos)
    }

    pub fn enemy(pos: Position) -> Self {
        Self::new(ENEMY_GLYPH, pos)
    }
}
