use thiserror::Error;

/// Configuration that cannot produce a renderable grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid grid dimensions {width}x{height}: each side must be between 1 and 65535 tiles")]
    InvalidGridDimensions { width: u32, height: u32 },
    #[error("invalid cell size {0}: must be between 1 and 1024 pixels")]
    InvalidCellSize(u32),
    #[error("invalid size {size} for '{name}': out of range")]
    InvalidStructureSize { name: &'static str, size: u32 },
    #[error("invalid corner offset ({x}, {y}): each axis must be within 65535 tiles of the origin")]
    InvalidCornerOffset { x: i32, y: i32 },
}

/// A layout selector that names no known layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown layout '{0}', expected 'corner' or 'ring'")]
pub struct ParseLayoutKindError(pub String);
