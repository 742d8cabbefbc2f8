//! Entity spawn factories for setting up the scene world.

use glam::Vec3;
use hecs::{Entity, World};

use mineworks_core::components::*;
use mineworks_core::types::GridPos;
use mineworks_procgen::GeneratorConfig;

use crate::config::PlayerConfig;

/// World position of the center of a grid cell. Tiles are cubes
/// centered here, so this is also the tile position for `cell`.
pub fn cell_center(cell: GridPos, cell_size: f32) -> Vec3 {
    Vec3::new(cell.x as f32 * cell_size, 0.0, cell.y as f32 * cell_size)
}

/// Spawn the player above the grid's center cell, at rest, with
/// controls enabled and the camera looking down +z.
pub fn spawn_player(world: &mut World, player: &PlayerConfig, grid: &GeneratorConfig) -> Entity {
    let center = GridPos::new((grid.grid_width / 2) as i32, (grid.grid_height / 2) as i32);
    let position = cell_center(center, grid.cell_size) + Vec3::Y * player.spawn_height;

    world.spawn((
        Player {
            speed: player.speed,
            align_to_camera: player.align_to_camera,
        },
        Transform::from_translation(position),
        RigidBody::default(),
        MovementInput::default(),
        Controls::default(),
        CameraRig::default(),
    ))
}
