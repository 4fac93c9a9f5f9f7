//! Frame composition: the grid with both entity glyphs stamped on top.
//!
//! Pure, no I/O. The loop driver walks a [`Frame`] row-major and hands each
//! cell to the renderer.

use crate::entity::Entity;
use crate::grid::{CellKind, Grid};
use crate::types::{Role, FLOOR_GLYPH, WALL_GLYPH};

/// One composed cell: what to draw and how to style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: char,
    pub role: Role,
}

impl From<CellKind> for FrameCell {
    fn from(kind: CellKind) -> Self {
        match kind {
            CellKind::Wall => FrameCell {
                glyph: WALL_GLYPH,
                role: Role::Wall,
            },
            CellKind::Floor => FrameCell {
                glyph: FLOOR_GLYPH,
                role: Role::Floor,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<FrameCell>,
}

impl Frame {
    /// Copy the grid and overlay the player, then the enemy.
    ///
    /// The enemy is stamped last so it wins when both share a cell.
    pub fn compose(grid: &Grid, player: &Entity, enemy: &Entity) -> Self {
        let mut frame = Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.cells().iter().map(|&k| FrameCell::from(k)).collect(),
        };
        frame.stamp(player, Role::Player);
        frame.stamp(enemy, Role::Enemy);
        frame
    }

    fn stamp(&mut self, entity: &Entity, role: Role) {
        let (x, y) = (entity.pos.x, entity.pos.y);
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.cells[idx] = FrameCell {
            glyph: entity.glyph,
            role,
        };
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<FrameCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Cells in row-major order with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, FrameCell)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i % w) as u16, (i / w) as u16, cell))
    }

    /// Plain-text rows, handy for logs and assertions.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect()
    }
}
