//! Grid module - the static walled map
//!
//! The grid is a `width x height` rectangle whose outer ring is wall and whose
//! interior is floor. Uses a flat array in row-major order (y * width + x).
//! Coordinates: (x, y) where x grows to the right and y grows downwards.
//! The grid never changes after construction.

use crate::types::{Position, MIN_DIMENSION};
use crate::SetupError;

/// Kind of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Floor,
}

/// The map - closed border of walls around a floor interior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<CellKind>,
}

impl Grid {
    /// Build a walled grid.
    ///
    /// Fails with [`SetupError::InvalidDimensions`] when either side is below
    /// three cells, since such a map has no interior to stand on.
    pub fn new(width: u16, height: u16) -> Result<Self, SetupError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(SetupError::InvalidDimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                cells.push(if border {
                    CellKind::Wall
                } else {
                    CellKind::Floor
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Whether (x, y) lies on the map at all.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether (x, y) blocks movement. Anything off the map counts as wall.
    pub fn is_wall(&self, x: i32, y: i32) -> bool {
        !matches!(self.get(x, y), Some(CellKind::Floor))
    }

    /// Whether `pos` is a floor cell (strictly inside the border).
    pub fn is_interior(&self, pos: Position) -> bool {
        !self.is_wall(pos.x, pos.y)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(20, 10).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(19, 0), Some(19));
        assert_eq!(grid.index(0, 1), Some(20));
        assert_eq!(grid.index(19, 9), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(20, 0), None);
        assert_eq!(grid.index(0, 10), None);
    }

    #[test]
    fn test_smallest_grid_has_single_floor_cell() {
        let grid = Grid::new(3, 3).unwrap();
        let floors = grid
            .cells()
            .iter()
            .filter(|c| **c == CellKind::Floor)
            .count();
        assert_eq!(floors, 1);
        assert_eq!(grid.get(1, 1), Some(CellKind::Floor));
    }

    #[test]
    fn test_degenerate_dimensions_rejected() {
        assert_eq!(
            Grid::new(2, 10),
            Err(SetupError::InvalidDimensions {
                width: 2,
                height: 10
            })
        );
        assert!(Grid::new(10, 2).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = Grid::new(5, 5).unwrap();
        assert!(grid.is_wall(-1, 2));
        assert!(grid.is_wall(2, -1));
        assert!(grid.is_wall(5, 2));
        assert!(grid.is_wall(2, 5));
        assert!(!grid.in_bounds(5, 2));
    }
}
