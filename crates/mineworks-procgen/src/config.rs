//! Generator configuration: the tunable fields of a mine.

use serde::{Deserialize, Serialize};

use mineworks_core::constants::*;
use mineworks_core::enums::FrontierStrategy;

use crate::error::ConfigError;

/// Inputs to the mine generator. Every field has a default, so partial
/// JSON documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    /// World size of one cell (meters).
    pub cell_size: f32,
    pub min_room_width: u32,
    pub max_room_width: u32,
    pub min_room_length: u32,
    pub max_room_length: u32,
    /// Generation stops once this many rooms exist.
    pub min_room_count: u32,
    /// Random-size attempts per candidate neighbour.
    pub max_retries: u32,
    /// Dead-end frontier removals before generation gives up.
    pub max_backtracks: u32,
    /// Distance (cells) from a frontier cell to the next room anchor.
    pub step: u32,
    pub frontier: FrontierStrategy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            min_room_width: DEFAULT_MIN_ROOM_WIDTH,
            max_room_width: DEFAULT_MAX_ROOM_WIDTH,
            min_room_length: DEFAULT_MIN_ROOM_LENGTH,
            max_room_length: DEFAULT_MAX_ROOM_LENGTH,
            min_room_count: DEFAULT_MIN_ROOM_COUNT,
            max_retries: DEFAULT_MAX_RETRIES,
            max_backtracks: DEFAULT_MAX_BACKTRACKS,
            step: DEFAULT_STEP,
            frontier: FrontierStrategy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Check the configuration for values the generator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        check_extent("grid_width", self.grid_width)?;
        check_extent("grid_height", self.grid_height)?;
        check_bounds("width", self.min_room_width, self.max_room_width)?;
        check_bounds("length", self.min_room_length, self.max_room_length)?;
        check_extent("max_room_width", self.max_room_width)?;
        check_extent("max_room_length", self.max_room_length)?;
        if !(1..=2).contains(&self.step) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if self.max_retries == 0 {
            return Err(ConfigError::ZeroRetries);
        }
        Ok(())
    }
}

fn check_bounds(axis: &'static str, min: u32, max: u32) -> Result<(), ConfigError> {
    if min == 0 {
        return Err(ConfigError::ZeroRoomDimension { axis, min });
    }
    if min > max {
        return Err(ConfigError::InvertedRoomBounds { axis, min, max });
    }
    Ok(())
}

/// Grid coordinates are `i32`; every extent must fit one.
fn check_extent(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if i32::try_from(value).is_err() {
        return Err(ConfigError::ExtentTooLarge { field, value });
    }
    Ok(())
}
