//! Generator configuration errors.

/// Reasons a `GeneratorConfig` cannot drive generation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    #[error("Cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),

    #[error("Room {axis} bounds must be at least 1, got min {min}")]
    ZeroRoomDimension { axis: &'static str, min: u32 },

    #[error("Room {axis} bounds are inverted: min {min} > max {max}")]
    InvertedRoomBounds {
        axis: &'static str,
        min: u32,
        max: u32,
    },

    #[error("Step must be 1 or 2 cells, got {0}")]
    InvalidStep(u32),

    #[error("Retry budget must be at least 1")]
    ZeroRetries,

    #[error("{field} of {value} does not fit a grid coordinate")]
    ExtentTooLarge { field: &'static str, value: u32 },
}
