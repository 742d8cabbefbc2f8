//! Snapshot builder: reads the ECS world into a `SceneSnapshot`.

use std::collections::HashMap;

use glam::EulerRot;
use hecs::World;

use mineworks_core::components::{
    Controls, MaterialId, MovementInput, Player, RigidBody, Room, Tile, Transform,
};
use mineworks_core::events::SceneEvent;
use mineworks_core::state::{MineView, PlayerView, RoomView, SceneSnapshot};
use mineworks_core::types::{wrap_degrees, Color, SimTime};
use mineworks_procgen::MineLayout;

use crate::materials::MaterialLibrary;

/// Build a complete snapshot from current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    layout: Option<&MineLayout>,
    materials: &MaterialLibrary,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        player: build_player_view(world),
        mine: build_mine_view(world, layout, materials),
        events,
    }
}

fn build_player_view(world: &World) -> Option<PlayerView> {
    let mut query = world.query::<(
        &Player,
        &Transform,
        &RigidBody,
        &MovementInput,
        Option<&Controls>,
    )>();
    query
        .iter()
        .next()
        .map(|(_entity, (_player, transform, body, input, controls))| {
            let (yaw, _, _) = transform.rotation.to_euler(EulerRot::YXZ);
            PlayerView {
                position: transform.translation,
                velocity: body.velocity,
                yaw_degrees: wrap_degrees(yaw.to_degrees()),
                movement_input: input.value,
                controls_enabled: controls.map_or(true, |c| c.enabled),
            }
        })
}

fn build_mine_view(
    world: &World,
    layout: Option<&MineLayout>,
    materials: &MaterialLibrary,
) -> MineView {
    let Some(layout) = layout else {
        return MineView::default();
    };

    let mut tile_counts: HashMap<u32, u32> = HashMap::new();
    for (_entity, tile) in world.query::<&Tile>().iter() {
        *tile_counts.entry(tile.room_id).or_default() += 1;
    }

    let mut rooms: Vec<RoomView> = world
        .query::<(&Room, &Transform, &MaterialId)>()
        .iter()
        .map(|(_entity, (room, transform, material))| RoomView {
            room_id: room.room_id,
            anchor: room.anchor,
            width: room.width,
            length: room.length,
            color: materials
                .get(*material)
                .map_or(Color::WHITE, |m| m.color),
            origin: transform.translation,
            tile_count: tile_counts.get(&room.room_id).copied().unwrap_or(0),
        })
        .collect();
    rooms.sort_by_key(|r| r.room_id);

    MineView {
        grid_width: layout.grid.width(),
        grid_height: layout.grid.height(),
        occupied_cells: layout.grid.occupied_count(),
        rooms,
    }
}
