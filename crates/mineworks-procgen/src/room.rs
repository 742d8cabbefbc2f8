//! Room layouts: rectangles carved into the grid.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use mineworks_core::types::{Color, GridPos};

use crate::grid::rect_cells;

/// A placed room, before instantiation into a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomLayout {
    /// Placement order, starting at 0.
    pub id: u32,
    /// Lowest-x, lowest-y cell of the room.
    pub anchor: GridPos,
    /// Extent along x (cells).
    pub width: u32,
    /// Extent along y (cells).
    pub length: u32,
    /// Uniform tile color for this room.
    pub color: Color,
}

impl RoomLayout {
    /// All cells covered by the room.
    pub fn cells(&self) -> impl Iterator<Item = GridPos> {
        rect_cells(self.anchor, self.width, self.length)
    }

    pub fn area(&self) -> u32 {
        self.width * self.length
    }

    pub fn contains(&self, pos: GridPos) -> bool {
        let (x0, y0, x1, y1) = self.span();
        (x0..x1).contains(&i64::from(pos.x)) && (y0..y1).contains(&i64::from(pos.y))
    }

    pub fn overlaps(&self, other: &RoomLayout) -> bool {
        let (ax0, ay0, ax1, ay1) = self.span();
        let (bx0, by0, bx1, by1) = other.span();
        ax0 < bx1 && bx0 < ax1 && ay0 < by1 && by0 < ay1
    }

    /// Half-open extent `(x0, y0, x1, y1)`, widened so it cannot overflow.
    fn span(&self) -> (i64, i64, i64, i64) {
        let x0 = i64::from(self.anchor.x);
        let y0 = i64::from(self.anchor.y);
        (x0, y0, x0 + i64::from(self.width), y0 + i64::from(self.length))
    }

    /// World position of the room root.
    pub fn origin(&self, cell_size: f32) -> Vec3 {
        Vec3::new(
            self.anchor.x as f32 * cell_size,
            0.0,
            self.anchor.y as f32 * cell_size,
        )
    }

    /// World positions of every tile, paired with its cell.
    pub fn tile_positions(&self, cell_size: f32) -> impl Iterator<Item = (GridPos, Vec3)> + '_ {
        let origin = self.origin(cell_size);
        self.cells().map(move |cell| {
            let offset = Vec3::new(
                (cell.x - self.anchor.x) as f32 * cell_size,
                0.0,
                (cell.y - self.anchor.y) as f32 * cell_size,
            );
            (cell, origin + offset)
        })
    }
}
