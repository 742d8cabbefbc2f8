//! Procedural mine generation for MINEWORKS.
//!
//! Occupancy grid, room layouts, generator configuration,
//! and the frontier-driven room carving walk.

pub use mineworks_core as core;

pub mod config;
pub mod error;
pub mod generator;
pub mod grid;
pub mod room;

// Re-export key types for convenience.
pub use config::GeneratorConfig;
pub use error::ConfigError;
pub use generator::{GenerationOutcome, MineGenerator, MineLayout};
pub use grid::OccupancyGrid;
pub use room::RoomLayout;

#[cfg(test)]
mod tests;
