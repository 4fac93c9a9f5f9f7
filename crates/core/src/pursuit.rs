//! Pursuit policy - the enemy's greedy chase step.
//!
//! Each axis is closed independently by one unit, so the enemy moves
//! diagonally while both axes differ and straight once one axis matches.
//! The grid is not consulted: an enemy that starts inside the border and
//! chases a target inside the border never leaves the interior, because
//! every coordinate moves monotonically toward an interior coordinate.

use crate::types::Position;

/// Compute the enemy's next position. Pure; never overshoots.
pub fn step(enemy: Position, player: Position) -> Position {
    Position::new(
        enemy.x + (player.x - enemy.x).signum(),
        enemy.y + (player.y - enemy.y).signum(),
    )
}
