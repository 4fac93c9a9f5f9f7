//! Grid tests - border/interior layout and passability

use tui_chase::core::{CellKind, Grid, SetupError};
use tui_chase::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[test]
fn test_border_is_wall_interior_is_floor() {
    for width in 3..=24u16 {
        for height in 3..=12u16 {
            let grid = Grid::new(width, height).unwrap();
            for y in 0..height as i32 {
                for x in 0..width as i32 {
                    let border =
                        x == 0 || y == 0 || x == width as i32 - 1 || y == height as i32 - 1;
                    let expected = if border {
                        CellKind::Wall
                    } else {
                        CellKind::Floor
                    };
                    assert_eq!(
                        grid.get(x, y),
                        Some(expected),
                        "cell ({}, {}) on {}x{}",
                        x,
                        y,
                        width,
                        height
                    );
                    assert_eq!(grid.is_wall(x, y), border);
                }
            }
        }
    }
}

#[test]
fn test_default_grid_dimensions() {
    let grid = Grid::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();
    assert_eq!(grid.width(), 20);
    assert_eq!(grid.height(), 10);
    assert_eq!(grid.cells().len(), 200);
}

#[test]
fn test_in_bounds() {
    let grid = Grid::new(20, 10).unwrap();
    assert!(grid.in_bounds(0, 0));
    assert!(grid.in_bounds(19, 9));
    assert!(!grid.in_bounds(-1, 0));
    assert!(!grid.in_bounds(0, -1));
    assert!(!grid.in_bounds(20, 0));
    assert!(!grid.in_bounds(0, 10));
}

#[test]
fn test_degenerate_grid_rejected() {
    for (w, h) in [(0, 5), (1, 5), (2, 5), (5, 2), (2, 2)] {
        assert_eq!(
            Grid::new(w, h),
            Err(SetupError::InvalidDimensions {
                width: w,
                height: h
            })
        );
    }
}

#[test]
fn test_setup_error_message() {
    let err = Grid::new(2, 9).unwrap_err();
    assert_eq!(
        err.to_string(),
        "grid 2x9 has no interior (both sides must be at least 3)"
    );
}
