//! Scene constants and tuning defaults.

/// Fixed physics step rate (Hz).
pub const TICK_RATE: u32 = 50;

/// Seconds per physics step.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Mine generator defaults ---

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u32 = 10;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u32 = 10;

/// Default world size of one grid cell (meters).
pub const DEFAULT_CELL_SIZE: f32 = 10.0;

/// Default room width bounds in cells (inclusive).
pub const DEFAULT_MIN_ROOM_WIDTH: u32 = 5;
pub const DEFAULT_MAX_ROOM_WIDTH: u32 = 10;

/// Default room length bounds in cells (inclusive).
pub const DEFAULT_MIN_ROOM_LENGTH: u32 = 5;
pub const DEFAULT_MAX_ROOM_LENGTH: u32 = 10;

/// Generation stops once this many rooms are placed.
pub const DEFAULT_MIN_ROOM_COUNT: u32 = 7;

/// Random-size attempts per neighbour before moving on.
pub const DEFAULT_MAX_RETRIES: u32 = 100;

/// Dead-end frontier removals allowed before giving up.
pub const DEFAULT_MAX_BACKTRACKS: u32 = 1_000;

/// Distance in cells between a frontier cell and the next room anchor.
pub const DEFAULT_STEP: u32 = 2;

/// Height of a floor tile cube (meters).
pub const TILE_HEIGHT: f32 = 1.0;

// --- Player ---

/// Default player move speed (m/s at full input deflection).
pub const DEFAULT_PLAYER_SPEED: f32 = 5.0;

/// Default player spawn height above the mine floor (meters).
pub const DEFAULT_SPAWN_HEIGHT: f32 = 1.0;
