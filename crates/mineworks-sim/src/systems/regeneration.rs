//! Regeneration cleanup: removes everything a previous generation spawned.

use std::collections::BTreeSet;

use hecs::{Entity, World};

use mineworks_core::components::{MaterialId, MineMember};

use crate::materials::MaterialLibrary;

/// Despawn every `MineMember` entity and release the materials they used.
/// Uses a caller-owned buffer to avoid per-call allocation.
/// Returns the number of entities removed.
pub fn clear(
    world: &mut World,
    materials: &mut MaterialLibrary,
    despawn_buffer: &mut Vec<Entity>,
) -> usize {
    despawn_buffer.clear();

    let mut released = BTreeSet::new();
    for (entity, (_member, material)) in world.query_mut::<(&MineMember, Option<&MaterialId>)>() {
        despawn_buffer.push(entity);
        if let Some(id) = material {
            released.insert(*id);
        }
    }

    for id in released {
        materials.release(id);
    }

    let count = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    count
}
