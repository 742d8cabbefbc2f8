//! Room carving: a frontier-driven growing-tree walk over the grid.
//!
//! The frontier starts as the (uncarved) grid center. The generator
//! repeatedly picks a frontier cell, looks `step` cells away in each free
//! direction (shuffled), and tries random room sizes there. A placed room's
//! anchor joins the frontier; a frontier cell with no room-able neighbour
//! is removed.
//! The walk ends when the minimum room count is met, the frontier runs
//! dry, or the backtrack budget is spent.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use mineworks_core::enums::FrontierStrategy;
use mineworks_core::types::{Color, Direction, GridPos};

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::grid::OccupancyGrid;
use crate::room::RoomLayout;

/// Counters describing how a generation run ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Rooms placed.
    pub placed: u32,
    /// Configured minimum room count.
    pub required: u32,
    /// Room placement attempts (each random size tried counts once).
    pub attempts: u32,
    /// Frontier cells dropped as dead ends.
    pub backtracks: u32,
}

impl GenerationOutcome {
    /// Whether the minimum room count was reached.
    pub fn is_complete(&self) -> bool {
        self.placed >= self.required
    }

    /// Rooms missing from the minimum count.
    pub fn shortfall(&self) -> u32 {
        self.required.saturating_sub(self.placed)
    }
}

/// Result of one generation run.
#[derive(Debug, Clone)]
pub struct MineLayout {
    pub grid: OccupancyGrid,
    pub rooms: Vec<RoomLayout>,
    pub outcome: GenerationOutcome,
    pub cell_size: f32,
}

impl MineLayout {
    /// Room covering `pos`, if any.
    pub fn room_at(&self, pos: GridPos) -> Option<&RoomLayout> {
        self.rooms.iter().find(|room| room.contains(pos))
    }

    /// ASCII map labelling each cell with its room id (base 36), `.` if free.
    pub fn render_ascii(&self) -> String {
        let mut out = String::new();
        for y in (0..self.grid.height() as i32).rev() {
            for x in 0..self.grid.width() as i32 {
                let ch = match self.room_at(GridPos::new(x, y)) {
                    Some(room) => std::char::from_digit(room.id % 36, 36).unwrap_or('#'),
                    None => '.',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Configured room carver.
#[derive(Debug, Clone)]
pub struct MineGenerator {
    config: GeneratorConfig,
}

impl MineGenerator {
    /// Validate `config` and build a generator from it.
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one generation on a fresh grid.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> MineLayout {
        let cfg = &self.config;
        let mut grid = OccupancyGrid::new(cfg.grid_width, cfg.grid_height);
        let mut rooms: Vec<RoomLayout> = Vec::new();
        let mut outcome = GenerationOutcome {
            required: cfg.min_room_count,
            ..Default::default()
        };

        let mut frontier = vec![grid.center()];
        while outcome.placed < cfg.min_room_count
            && !frontier.is_empty()
            && outcome.backtracks < cfg.max_backtracks
        {
            let index = select_index(cfg.frontier, frontier.len(), rng);
            let cell = frontier[index];

            let mut neighbours = unvisited_neighbours(&grid, cell, cfg.step as i32);
            neighbours.shuffle(rng);

            let mut grown = None;
            for neighbour in neighbours {
                if self.try_place_room(&mut grid, &mut rooms, &mut outcome, neighbour, rng) {
                    grown = Some(neighbour);
                    break;
                }
            }

            match grown {
                Some(neighbour) => frontier.push(neighbour),
                None => {
                    frontier.remove(index);
                    outcome.backtracks += 1;
                }
            }
        }

        if outcome.is_complete() {
            tracing::info!(
                rooms = outcome.placed,
                attempts = outcome.attempts,
                backtracks = outcome.backtracks,
                "mine generated"
            );
        } else {
            tracing::warn!(
                placed = outcome.placed,
                required = outcome.required,
                backtracks = outcome.backtracks,
                "could not place the minimum number of rooms"
            );
        }

        MineLayout {
            grid,
            rooms,
            outcome,
            cell_size: cfg.cell_size,
        }
    }

    /// Try up to `max_retries` random sizes for a room anchored at `anchor`.
    /// On success the room is carved into the grid and recorded.
    fn try_place_room<R: Rng + ?Sized>(
        &self,
        grid: &mut OccupancyGrid,
        rooms: &mut Vec<RoomLayout>,
        outcome: &mut GenerationOutcome,
        anchor: GridPos,
        rng: &mut R,
    ) -> bool {
        let cfg = &self.config;
        for _ in 0..cfg.max_retries {
            outcome.attempts += 1;
            let width = rng.gen_range(cfg.min_room_width..=cfg.max_room_width);
            let length = rng.gen_range(cfg.min_room_length..=cfg.max_room_length);
            if !grid.can_place(anchor, width, length) {
                continue;
            }

            grid.occupy_rect(anchor, width, length);
            let room = RoomLayout {
                id: rooms.len() as u32,
                anchor,
                width,
                length,
                color: Color::from_hsv(rng.gen(), rng.gen(), rng.gen()),
            };
            tracing::debug!(
                room_id = room.id,
                x = anchor.x,
                y = anchor.y,
                width,
                length,
                "room placed"
            );
            rooms.push(room);
            outcome.placed += 1;
            return true;
        }
        false
    }
}

/// Cells `step` away from `cell` that are inside the grid and free.
fn unvisited_neighbours(grid: &OccupancyGrid, cell: GridPos, step: i32) -> Vec<GridPos> {
    Direction::ALL
        .iter()
        .map(|&dir| cell.offset(dir, step))
        .filter(|&n| grid.in_bounds(n) && !grid.is_occupied(n))
        .collect()
}

fn select_index<R: Rng + ?Sized>(strategy: FrontierStrategy, len: usize, rng: &mut R) -> usize {
    match strategy {
        FrontierStrategy::Newest => len - 1,
        FrontierStrategy::Oldest => 0,
        FrontierStrategy::Random => rng.gen_range(0..len),
    }
}
