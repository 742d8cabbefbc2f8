//! Instantiates a generated layout: one root entity per room and one
//! cube tile per occupied cell, parented to its room.

use hecs::{Entity, World};

use mineworks_core::components::{MineMember, Room, Tile, Transform};
use mineworks_core::enums::MeshPrimitive;
use mineworks_procgen::MineLayout;

use crate::hierarchy::Parent;
use crate::materials::MaterialLibrary;

/// Spawn every room of `layout`. Returns the room root entities in
/// placement order. Each room receives a fresh material shared only by
/// its own tiles.
pub fn spawn_layout(
    world: &mut World,
    materials: &mut MaterialLibrary,
    layout: &MineLayout,
) -> Vec<Entity> {
    let cell_size = layout.cell_size;
    let mut roots = Vec::with_capacity(layout.rooms.len());

    for room in &layout.rooms {
        let material = materials.create(room.color);
        let root = world.spawn((
            Room {
                room_id: room.id,
                anchor: room.anchor,
                width: room.width,
                length: room.length,
            },
            Transform::from_translation(room.origin(cell_size)),
            material,
            MineMember,
        ));

        for (cell, position) in room.tile_positions(cell_size) {
            world.spawn((
                Tile {
                    room_id: room.id,
                    cell,
                },
                Transform::from_translation(position).with_scale(Tile::scale(cell_size)),
                MeshPrimitive::Cube,
                material,
                Parent(root),
                MineMember,
            ));
        }

        roots.push(root);
    }

    tracing::debug!(rooms = roots.len(), materials = materials.len(), "mine instantiated");
    roots
}
