//! Tests for the occupancy grid, room geometry, configuration, and generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mineworks_core::enums::FrontierStrategy;
use mineworks_core::types::{Color, GridPos};

use crate::config::GeneratorConfig;
use crate::error::ConfigError;
use crate::generator::{MineGenerator, MineLayout};
use crate::grid::OccupancyGrid;
use crate::room::RoomLayout;

/// Roomy grid with small rooms: the walk reaches the minimum count easily.
fn open_config() -> GeneratorConfig {
    GeneratorConfig {
        grid_width: 40,
        grid_height: 40,
        cell_size: 2.0,
        min_room_width: 1,
        max_room_width: 2,
        min_room_length: 1,
        max_room_length: 2,
        min_room_count: 12,
        ..Default::default()
    }
}

fn generate(config: GeneratorConfig, seed: u64) -> MineLayout {
    let generator = MineGenerator::new(config).unwrap();
    generator.generate(&mut ChaCha8Rng::seed_from_u64(seed))
}

fn room(id: u32, x: i32, y: i32, width: u32, length: u32) -> RoomLayout {
    RoomLayout {
        id,
        anchor: GridPos::new(x, y),
        width,
        length,
        color: Color::WHITE,
    }
}

/// Every structural guarantee a layout must satisfy.
fn assert_layout_invariants(layout: &MineLayout) {
    let grid = &layout.grid;

    for (i, a) in layout.rooms.iter().enumerate() {
        assert_eq!(a.id, i as u32, "room ids should follow placement order");
        for cell in a.cells() {
            assert!(grid.in_bounds(cell), "room {} cell {cell:?} outside grid", a.id);
            assert!(grid.is_occupied(cell), "room {} cell {cell:?} not marked", a.id);
        }
        for b in &layout.rooms[i + 1..] {
            assert!(!a.overlaps(b), "rooms {} and {} overlap", a.id, b.id);
        }
    }

    let covered: u32 = layout.rooms.iter().map(RoomLayout::area).sum();
    assert_eq!(
        grid.occupied_count(),
        covered,
        "occupied cells should be exactly the union of rooms"
    );
    assert_eq!(layout.outcome.placed as usize, layout.rooms.len());
}

// ---- OccupancyGrid ----

#[test]
fn test_grid_starts_empty() {
    let grid = OccupancyGrid::new(4, 3);
    assert_eq!(grid.width(), 4);
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.occupied_count(), 0);
    assert_eq!(grid.center(), GridPos::new(2, 1));
}

#[test]
fn test_grid_bounds() {
    let grid = OccupancyGrid::new(4, 3);
    assert!(grid.in_bounds(GridPos::new(0, 0)));
    assert!(grid.in_bounds(GridPos::new(3, 2)));
    assert!(!grid.in_bounds(GridPos::new(4, 0)));
    assert!(!grid.in_bounds(GridPos::new(0, 3)));
    assert!(!grid.in_bounds(GridPos::new(-1, 0)));
    // Out-of-bounds cells are never free.
    assert!(grid.is_occupied(GridPos::new(-1, -1)));
    assert!(grid.is_occupied(GridPos::new(10, 10)));
}

#[test]
fn test_grid_can_place_respects_bounds() {
    let grid = OccupancyGrid::new(10, 10);
    assert!(grid.can_place(GridPos::new(0, 0), 10, 10));
    assert!(grid.can_place(GridPos::new(5, 5), 5, 5));
    assert!(!grid.can_place(GridPos::new(5, 5), 6, 5), "too wide");
    assert!(!grid.can_place(GridPos::new(5, 5), 5, 6), "too long");
    assert!(!grid.can_place(GridPos::new(-1, 0), 2, 2), "negative anchor");
    assert!(!grid.can_place(GridPos::new(0, 0), 0, 3), "zero width");
}

#[test]
fn test_grid_can_place_respects_occupancy() {
    let mut grid = OccupancyGrid::new(10, 10);
    assert_eq!(grid.occupy_rect(GridPos::new(2, 2), 3, 3), 9);
    assert!(!grid.can_place(GridPos::new(0, 0), 3, 3), "touches (2,2)");
    assert!(grid.can_place(GridPos::new(0, 0), 2, 2), "adjacent is fine");
    assert!(grid.can_place(GridPos::new(5, 2), 3, 3));
    assert!(!grid.can_place(GridPos::new(4, 4), 1, 1));
}

#[test]
fn test_grid_occupy_clips_to_bounds() {
    let mut grid = OccupancyGrid::new(3, 3);
    let marked = grid.occupy_rect(GridPos::new(1, 1), 5, 5);
    assert_eq!(marked, 4, "only the in-bounds 2x2 corner is marked");
    assert_eq!(grid.occupied_count(), 4);

    // Re-marking counts nothing new.
    assert_eq!(grid.occupy_rect(GridPos::new(1, 1), 2, 2), 0);

    grid.clear();
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_grid_display() {
    let mut grid = OccupancyGrid::new(3, 2);
    grid.occupy_rect(GridPos::new(0, 0), 1, 1);
    grid.occupy_rect(GridPos::new(2, 1), 1, 1);
    // Highest row printed first.
    assert_eq!(grid.to_string(), "..#\n#..\n");
}

// ---- RoomLayout ----

#[test]
fn test_room_cells_and_contains() {
    let r = room(0, 2, 3, 3, 2);
    let cells: Vec<GridPos> = r.cells().collect();
    assert_eq!(cells.len(), 6);
    assert_eq!(r.area(), 6);
    for cell in &cells {
        assert!(r.contains(*cell));
    }
    assert!(!r.contains(GridPos::new(5, 3)));
    assert!(!r.contains(GridPos::new(2, 5)));
    assert!(!r.contains(GridPos::new(1, 3)));
}

#[test]
fn test_room_overlap() {
    let a = room(0, 0, 0, 3, 3);
    assert!(a.overlaps(&room(1, 2, 2, 3, 3)));
    assert!(!a.overlaps(&room(1, 3, 0, 2, 2)), "touching edges do not overlap");
    assert!(!a.overlaps(&room(1, 0, 3, 2, 2)));
    assert!(a.overlaps(&room(1, 1, 1, 1, 1)), "contained room overlaps");
}

#[test]
fn test_room_world_positions() {
    let r = room(0, 2, 3, 2, 2);
    let origin = r.origin(10.0);
    assert_eq!(origin, glam::Vec3::new(20.0, 0.0, 30.0));

    let tiles: Vec<_> = r.tile_positions(10.0).collect();
    assert_eq!(tiles.len(), 4);
    assert!(tiles.contains(&(GridPos::new(2, 3), glam::Vec3::new(20.0, 0.0, 30.0))));
    assert!(tiles.contains(&(GridPos::new(3, 4), glam::Vec3::new(30.0, 0.0, 40.0))));
}

// ---- GeneratorConfig ----

#[test]
fn test_default_config_is_valid() {
    let cfg = GeneratorConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.grid_width, 10);
    assert_eq!(cfg.min_room_count, 7);
    assert_eq!(cfg.step, 2);
}

#[test]
fn test_config_rejects_bad_values() {
    let cases = vec![
        (
            GeneratorConfig {
                grid_width: 0,
                ..Default::default()
            },
            ConfigError::EmptyGrid {
                width: 0,
                height: 10,
            },
        ),
        (
            GeneratorConfig {
                cell_size: 0.0,
                ..Default::default()
            },
            ConfigError::InvalidCellSize(0.0),
        ),
        (
            GeneratorConfig {
                min_room_width: 0,
                ..Default::default()
            },
            ConfigError::ZeroRoomDimension {
                axis: "width",
                min: 0,
            },
        ),
        (
            GeneratorConfig {
                min_room_length: 8,
                max_room_length: 3,
                ..Default::default()
            },
            ConfigError::InvertedRoomBounds {
                axis: "length",
                min: 8,
                max: 3,
            },
        ),
        (
            GeneratorConfig {
                step: 3,
                ..Default::default()
            },
            ConfigError::InvalidStep(3),
        ),
        (
            GeneratorConfig {
                max_retries: 0,
                ..Default::default()
            },
            ConfigError::ZeroRetries,
        ),
    ];
    for (cfg, expected) in cases {
        assert_eq!(cfg.validate(), Err(expected.clone()));
        assert!(MineGenerator::new(cfg).is_err());
    }
}

#[test]
fn test_config_rejects_extents_beyond_coordinates() {
    let too_wide = GeneratorConfig {
        min_room_width: 1 << 31,
        max_room_width: 1 << 31,
        ..Default::default()
    };
    assert_eq!(
        too_wide.validate(),
        Err(ConfigError::ExtentTooLarge {
            field: "max_room_width",
            value: 1 << 31,
        })
    );
    assert!(MineGenerator::new(too_wide).is_err());

    let too_long = GeneratorConfig {
        max_room_length: u32::MAX,
        ..Default::default()
    };
    assert!(matches!(
        too_long.validate(),
        Err(ConfigError::ExtentTooLarge { field: "max_room_length", .. })
    ));

    let huge_grid = GeneratorConfig {
        grid_height: u32::MAX,
        ..Default::default()
    };
    assert!(matches!(
        huge_grid.validate(),
        Err(ConfigError::ExtentTooLarge { field: "grid_height", .. })
    ));

    let widest = GeneratorConfig {
        max_room_width: i32::MAX as u32,
        ..Default::default()
    };
    assert!(widest.validate().is_ok(), "i32::MAX still fits");
}

#[test]
fn test_generator_with_widest_rooms_does_not_overflow() {
    let cfg = GeneratorConfig {
        min_room_width: i32::MAX as u32,
        max_room_width: i32::MAX as u32,
        max_retries: 3,
        ..Default::default()
    };
    let layout = generate(cfg, 1);
    assert!(layout.rooms.is_empty(), "no such room fits a 10x10 grid");
    assert_eq!(layout.grid.occupied_count(), 0);
}

#[test]
fn test_grid_can_place_rejects_huge_extents() {
    let grid = OccupancyGrid::new(10, 10);
    assert!(!grid.can_place(GridPos::new(5, 5), 1 << 31, 1));
    assert!(!grid.can_place(GridPos::new(5, 5), 1, u32::MAX));
    assert!(!grid.can_place(GridPos::new(i32::MAX, 0), 2, 1));
}

#[test]
fn test_room_geometry_near_coordinate_limit() {
    let far = room(0, i32::MAX - 1, i32::MAX - 1, u32::MAX, u32::MAX);
    assert!(far.contains(GridPos::new(i32::MAX, i32::MAX)));
    assert!(!far.contains(GridPos::new(0, 0)));
    assert!(far.overlaps(&room(1, i32::MAX, i32::MAX, 1, 1)));
    assert_eq!(far.cells().count(), 4, "cells stop at the coordinate limit");
}

#[test]
fn test_config_nan_cell_size_rejected() {
    let cfg = GeneratorConfig {
        cell_size: f32::NAN,
        ..Default::default()
    };
    assert!(matches!(cfg.validate(), Err(ConfigError::InvalidCellSize(_))));
}

#[test]
fn test_config_partial_json_uses_defaults() {
    let cfg: GeneratorConfig =
        serde_json::from_str(r#"{"grid_width": 24, "frontier": "Random"}"#).unwrap();
    assert_eq!(cfg.grid_width, 24);
    assert_eq!(cfg.frontier, FrontierStrategy::Random);
    assert_eq!(cfg.grid_height, GeneratorConfig::default().grid_height);
    assert_eq!(cfg.max_retries, GeneratorConfig::default().max_retries);
}

#[test]
fn test_config_error_messages() {
    let err = ConfigError::InvertedRoomBounds {
        axis: "width",
        min: 9,
        max: 4,
    };
    assert_eq!(err.to_string(), "Room width bounds are inverted: min 9 > max 4");
}

// ---- Generator ----

#[test]
fn test_generator_reaches_minimum_room_count() {
    for strategy in [
        FrontierStrategy::Newest,
        FrontierStrategy::Random,
        FrontierStrategy::Oldest,
    ] {
        let layout = generate(
            GeneratorConfig {
                frontier: strategy,
                ..open_config()
            },
            7,
        );
        assert!(
            layout.outcome.is_complete(),
            "{strategy:?} placed only {} rooms",
            layout.outcome.placed
        );
        assert_eq!(layout.outcome.placed, 12, "generation stops at the minimum");
        assert_eq!(layout.outcome.shortfall(), 0);
        assert_layout_invariants(&layout);
    }
}

#[test]
fn test_generator_first_room_grows_from_center() {
    let center = GridPos::new(20, 20);
    for seed in 0..20 {
        let layout = generate(open_config(), seed);
        let first = &layout.rooms[0];
        let dx = (first.anchor.x - center.x).abs();
        let dy = (first.anchor.y - center.y).abs();
        assert!(
            (dx == 2 && dy == 0) || (dx == 0 && dy == 2),
            "first room at {:?} is not one step from the center",
            first.anchor
        );
        assert!(
            !first.contains(center),
            "the center cell is a frontier seed, not a room"
        );
    }
}

#[test]
fn test_generator_default_config_starts_beside_center() {
    let layout = generate(GeneratorConfig::default(), 1);
    let center = layout.grid.center();
    assert!(!layout.rooms.is_empty());
    assert!(layout.rooms.iter().all(|r| r.anchor != center));
    let first = layout.rooms[0].anchor;
    assert!(
        [GridPos::new(5, 3), GridPos::new(3, 5)].contains(&first),
        "only the -x and -y neighbours fit a 5x5 room, got {first:?}"
    );
}

#[test]
fn test_generator_rooms_are_step_apart() {
    for step in [1u32, 2] {
        let cfg = GeneratorConfig {
            step,
            min_room_width: 1,
            max_room_width: 1,
            min_room_length: 1,
            max_room_length: 1,
            ..open_config()
        };
        let layout = generate(cfg, 11);
        // Every room is exactly `step` cells from the center or an earlier room.
        let center = layout.grid.center();
        for (i, r) in layout.rooms.iter().enumerate() {
            let linked = std::iter::once(center)
                .chain(layout.rooms[..i].iter().map(|prev| prev.anchor))
                .any(|from| {
                    let dx = (r.anchor.x - from.x).abs();
                    let dy = (r.anchor.y - from.y).abs();
                    (dx == step as i32 && dy == 0) || (dx == 0 && dy == step as i32)
                });
            assert!(linked, "room {} is not {step} cells from the frontier", r.id);
        }
    }
}

#[test]
fn test_generator_invariants_across_seeds() {
    let configs = vec![
        open_config(),
        GeneratorConfig::default(),
        GeneratorConfig {
            frontier: FrontierStrategy::Random,
            step: 1,
            ..open_config()
        },
        GeneratorConfig {
            grid_width: 30,
            grid_height: 12,
            min_room_width: 2,
            max_room_width: 4,
            min_room_length: 1,
            max_room_length: 3,
            min_room_count: 50,
            frontier: FrontierStrategy::Oldest,
            ..Default::default()
        },
    ];
    for cfg in configs {
        for seed in 0..50 {
            let layout = generate(cfg.clone(), seed);
            assert_layout_invariants(&layout);
            assert!(layout.outcome.placed <= cfg.min_room_count);
        }
    }
}

#[test]
fn test_generator_shortfall_when_grid_too_small() {
    // Seven rooms of at least 5x5 need more than the 100 cells a
    // 10x10 grid has.
    let layout = generate(GeneratorConfig::default(), 1);
    assert!(!layout.outcome.is_complete());
    assert!(layout.outcome.shortfall() > 0);
    assert_layout_invariants(&layout);
}

#[test]
fn test_generator_terminates_within_backtrack_budget() {
    let cfg = GeneratorConfig {
        grid_width: 64,
        grid_height: 64,
        min_room_width: 1,
        max_room_width: 1,
        min_room_length: 1,
        max_room_length: 1,
        min_room_count: 10_000,
        max_backtracks: 5,
        max_retries: 3,
        ..Default::default()
    };
    let layout = generate(cfg.clone(), 99);
    assert!(layout.outcome.backtracks <= 5);
    // Bounded work: at most one attempt batch per neighbour per iteration.
    let iterations = layout.outcome.placed + layout.outcome.backtracks;
    assert!(layout.outcome.attempts <= (iterations + 1) * 4 * cfg.max_retries);
    assert_layout_invariants(&layout);
}

#[test]
fn test_generator_exhausts_frontier() {
    // Budget never binds; the frontier empties once the grid is saturated.
    let cfg = GeneratorConfig {
        grid_width: 9,
        grid_height: 9,
        min_room_width: 1,
        max_room_width: 1,
        min_room_length: 1,
        max_room_length: 1,
        min_room_count: 1_000,
        max_backtracks: u32::MAX,
        step: 2,
        ..Default::default()
    };
    let layout = generate(cfg, 5);
    // Step 2 from (4,4) reaches every even cell, the center included
    // once a neighbour links back to it: 5x5 = 25 rooms.
    assert_eq!(layout.outcome.placed, 25);
    assert_eq!(layout.grid.occupied_count(), 25);
    assert_layout_invariants(&layout);
}

#[test]
fn test_generator_zero_rooms_requested() {
    let layout = generate(
        GeneratorConfig {
            min_room_count: 0,
            ..open_config()
        },
        0,
    );
    assert!(layout.rooms.is_empty());
    assert!(layout.outcome.is_complete());
    assert_eq!(layout.grid.occupied_count(), 0);
}

#[test]
fn test_generator_is_deterministic() {
    let a = generate(open_config(), 1234);
    let b = generate(open_config(), 1234);
    assert_eq!(a.rooms, b.rooms);
    assert_eq!(a.outcome, b.outcome);

    let c = generate(open_config(), 4321);
    assert_ne!(a.rooms, c.rooms, "different seeds should differ");
}

#[test]
fn test_render_ascii_labels_rooms() {
    let layout = generate(open_config(), 8);
    let ascii = layout.render_ascii();
    let lines: Vec<&str> = ascii.lines().collect();
    assert_eq!(lines.len(), 40);
    assert!(lines.iter().all(|l| l.len() == 40));

    let labelled = ascii.chars().filter(|c| *c != '.' && *c != '\n').count() as u32;
    assert_eq!(labelled, layout.grid.occupied_count());
    assert!(ascii.contains('0'), "first room should be labelled 0");
}
