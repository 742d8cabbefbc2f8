//! ECS systems that operate on the scene world.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for
//! read-only). They do not own state; all state lives in components.

pub mod integration;
pub mod mine_spawner;
pub mod player_movement;
pub mod regeneration;
pub mod snapshot;
