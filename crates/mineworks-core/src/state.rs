//! Scene snapshot — the complete visible state produced after each step.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::events::SceneEvent;
use crate::types::{Color, GridPos, SimTime};

/// Complete scene state after a physics step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub player: Option<PlayerView>,
    pub mine: MineView,
    pub events: Vec<SceneEvent>,
}

/// Player kinematics for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Heading about the vertical axis (degrees).
    pub yaw_degrees: f32,
    pub movement_input: Vec2,
    pub controls_enabled: bool,
}

/// Generated mine summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MineView {
    pub grid_width: u32,
    pub grid_height: u32,
    pub occupied_cells: u32,
    pub rooms: Vec<RoomView>,
}

/// One instantiated room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomView {
    pub room_id: u32,
    pub anchor: GridPos,
    pub width: u32,
    pub length: u32,
    pub color: Color,
    /// World position of the room root.
    pub origin: Vec3,
    pub tile_count: u32,
}
