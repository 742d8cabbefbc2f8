//! Enumeration types used throughout the scene.

use serde::{Deserialize, Serialize};

/// How the generator picks the next frontier cell to grow from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrontierStrategy {
    /// Most recently added cell (stack, recursive backtracker).
    #[default]
    Newest,
    /// Uniformly random cell.
    Random,
    /// Least recently added cell (breadth-first growth).
    Oldest,
}

/// Primitive mesh attached to a spawned entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeshPrimitive {
    #[default]
    Cube,
}
