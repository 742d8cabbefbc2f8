//! Commands sent into the scene from input devices and tooling.
//!
//! Commands are queued and processed at the next physics step boundary.

use serde::{Deserialize, Serialize};

/// All possible scene actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    // --- Input binding ---
    /// Enable the movement binding (component enabled).
    EnableControls,
    /// Disable the movement binding; pending movement is dropped.
    DisableControls,
    /// Movement axis performed with a new 2D sample.
    Move { x: f32, y: f32 },
    /// Movement axis released.
    StopMove,

    // --- Camera ---
    /// Set the virtual camera's horizontal look axis.
    SetCameraYaw { degrees: f32 },

    // --- Mine ---
    /// Regenerate the mine with the scene RNG.
    GenerateMine,
    /// Regenerate the mine with an explicit seed.
    GenerateMineWithSeed { seed: u64 },
    /// Remove all generated rooms and tiles.
    ClearMine,
}
