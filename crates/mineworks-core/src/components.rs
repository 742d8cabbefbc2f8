//! ECS components for hecs entities.
//!
//! Components are plain data structs with at most small geometric helpers.
//! Scene logic lives in systems, not components.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PLAYER_SPEED, TILE_HEIGHT};
use crate::types::GridPos;

/// World-space placement of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Rotate a local-space direction into world space.
    /// Unaffected by translation and scale.
    pub fn transform_direction(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Rotation about the vertical axis from a yaw angle in degrees.
    pub fn yaw_rotation(degrees: f32) -> Quat {
        Quat::from_rotation_y(degrees.to_radians())
    }
}

/// Physics body velocity (m/s). Integrated into `Transform` each step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    pub velocity: Vec3,
}

/// Marks the player-controlled entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Speed at full input deflection (m/s).
    pub speed: f32,
    /// Whether heading follows the camera's horizontal axis.
    pub align_to_camera: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PLAYER_SPEED,
            align_to_camera: true,
        }
    }
}

/// Latest 2D movement sample from the input binding.
/// x = strafe, y = forward. Consumed once per physics step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementInput {
    pub value: Vec2,
}

/// Input binding state. Disabled controls drop movement events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub enabled: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Virtual camera following the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraRig {
    /// Horizontal look axis (degrees, 0 = +z).
    pub yaw_degrees: f32,
}

/// Handle into the scene's material library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// A rendered material. Each room owns its own instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: crate::types::Color,
}

/// Room root entity: groups the tiles of one carved room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: u32,
    pub anchor: GridPos,
    pub width: u32,
    pub length: u32,
}

/// One floor tile (one occupied grid cell) of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub room_id: u32,
    pub cell: GridPos,
}

impl Tile {
    /// Local scale of a tile cube for the given cell size.
    pub fn scale(cell_size: f32) -> Vec3 {
        Vec3::new(cell_size, TILE_HEIGHT, cell_size)
    }
}

/// Marks an entity spawned by the mine generator.
/// Regeneration despawns everything carrying this marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineMember;
