//! Parent links between spawned entities.

use hecs::{Entity, World};

/// Links a child entity (a tile) to its parent (a room root).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub Entity);

/// Entities whose `Parent` is `parent`.
pub fn children_of(world: &World, parent: Entity) -> Vec<Entity> {
    let mut query = world.query::<&Parent>();
    query
        .iter()
        .filter(|(_, p)| p.0 == parent)
        .map(|(entity, _)| entity)
        .collect()
}
