//! OccupancyGrid: the boolean cell map rooms are carved into.

use std::fmt;

use mineworks_core::types::GridPos;

/// 2D occupancy map, `true` = occupied. Row-major, row 0 = y 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an empty grid.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Center cell, used as the generator's seed.
    pub fn center(&self) -> GridPos {
        GridPos::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Whether a cell is occupied. Cells outside the grid read as occupied.
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.index(pos).map_or(true, |i| self.cells[i])
    }

    /// Whether a `width` x `length` rectangle anchored at `anchor`
    /// (extending toward +x, +y) lies fully inside the grid on free cells.
    pub fn can_place(&self, anchor: GridPos, width: u32, length: u32) -> bool {
        let (Ok(w), Ok(l)) = (i32::try_from(width), i32::try_from(length)) else {
            return false;
        };
        if w == 0 || l == 0 {
            return false;
        }
        let (Some(far_x), Some(far_y)) = (anchor.x.checked_add(w - 1), anchor.y.checked_add(l - 1))
        else {
            return false;
        };
        if !self.in_bounds(anchor) || !self.in_bounds(GridPos::new(far_x, far_y)) {
            return false;
        }
        rect_cells(anchor, width, length).all(|cell| !self.is_occupied(cell))
    }

    /// Mark a rectangle occupied. Cells outside the grid are ignored.
    /// Returns the number of cells newly marked.
    pub fn occupy_rect(&mut self, anchor: GridPos, width: u32, length: u32) -> u32 {
        let mut marked = 0;
        for cell in rect_cells(anchor, width, length) {
            if let Some(i) = self.index(cell) {
                if !self.cells[i] {
                    self.cells[i] = true;
                    marked += 1;
                }
            }
        }
        marked
    }

    pub fn occupied_count(&self) -> u32 {
        self.cells.iter().filter(|&&c| c).count() as u32
    }

    /// Reset every cell to free.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

/// Cells of a rectangle, x-major. Cells past `i32::MAX` are not produced.
pub(crate) fn rect_cells(anchor: GridPos, width: u32, length: u32) -> impl Iterator<Item = GridPos> {
    let xs = axis_cells(anchor.x, width);
    xs.flat_map(move |x| axis_cells(anchor.y, length).map(move |y| GridPos::new(x, y)))
}

fn axis_cells(start: i32, extent: u32) -> impl Iterator<Item = i32> {
    let end = (i64::from(start) + i64::from(extent)).min(i64::from(i32::MAX) + 1);
    (i64::from(start)..end).map(|v| v as i32)
}

impl fmt::Display for OccupancyGrid {
    /// ASCII map: `#` occupied, `.` free, highest row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            for x in 0..self.width as i32 {
                let ch = if self.is_occupied(GridPos::new(x, y)) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
