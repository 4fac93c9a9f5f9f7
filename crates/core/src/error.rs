use thiserror::Error;

/// Reasons a session cannot be set up. Raised before any frame runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("grid {width}x{height} has no interior (both sides must be at least 3)")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("start position ({x}, {y}) is not an interior floor cell")]
    StartOutsideInterior { x: i32, y: i32 },
}
