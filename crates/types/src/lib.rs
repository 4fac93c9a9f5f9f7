//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, usable from
//! the game core, the loop driver, input mapping and the terminal renderer.
//!
//! # Map Dimensions
//!
//! The shipped session is a fixed 20x10 map:
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 10 rows (indexed 0-9)
//! - **Player start**: (2, 2)
//! - **Enemy start**: (17, 7), i.e. `(width - 3, height - 3)`
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 10 | Nominal frame rate |
//! | `FRAME_MS` | 100 | Wall-clock budget per frame |
//!
//! # Examples
//!
//! ```
//! use tui_chase_types::{Command, Direction, Position};
//!
//! let cmd = Command::from_char('W');
//! assert_eq!(cmd, Command::Up);
//! assert_eq!(cmd.direction(), Some(Direction::Up));
//!
//! let moved = Position::new(2, 2).offset(Direction::Up);
//! assert_eq!(moved, Position::new(2, 1));
//! ```

/// Default map width in cells (20 columns)
pub const DEFAULT_WIDTH: u16 = 20;

/// Default map height in cells (10 rows)
pub const DEFAULT_HEIGHT: u16 = 10;

/// Smallest width/height that still leaves an interior cell.
pub const MIN_DIMENSION: u16 = 3;

/// Player start position on every map.
pub const PLAYER_START: Position = Position::new(2, 2);

/// Enemy start inset from the bottom-right corner.
pub const ENEMY_START_INSET: i32 = 3;

/// Nominal frame rate.
pub const TARGET_FPS: u32 = 10;

/// Frame budget in milliseconds (1000 / TARGET_FPS).
pub const FRAME_MS: u64 = 1000 / TARGET_FPS as u64;

pub const PLAYER_GLYPH: char = 'P';
pub const ENEMY_GLYPH: char = 'E';
pub const WALL_GLYPH: char = '#';
pub const FLOOR_GLYPH: char = '.';


/// A grid coordinate. `x` grows to the right, `y` grows downwards.
///
/// Signed so that a candidate one step past the border is still
/// representable and can be rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring position one unit in `dir`.
    pub fn offset(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Chebyshev distance (max of the per-axis distances).
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

/// The four movement directions. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A single command read from the player once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Quit,
    /// Any character outside the control set.
    Unknown,
}

impl Command {
    /// Map a typed character to a command (case-insensitive w/a/s/d/q).
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'w' => Command::Up,
            's' => Command::Down,
            'a' => Command::Left,
            'd' => Command::Right,
            'q' => Command::Quit,
            _ => Command::Unknown,
        }
    }

    /// The movement direction carried by this command, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            Command::Quit | Command::Unknown => None,
        }
    }
}

/// Presentation role of a drawn cell.
///
/// The core only ever speaks in roles; mapping a role to colors is up to the
/// renderer's palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Player,
    Enemy,
    Wall,
    Floor,
}

/// Presentation tone of a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Controls and general help text.
    Hint,
    /// Advisory feedback such as a wall bump.
    Warning,
    /// Game-ending message.
    Alert,
}
