//! Events emitted by the scene for tooling and UI feedback.

use serde::{Deserialize, Serialize};

/// Scene notifications, drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneEvent {
    /// A mine layout was instantiated.
    MineGenerated {
        rooms: u32,
        required: u32,
        attempts: u32,
    },
    /// Generation ended before reaching the minimum room count.
    MineShortfall { placed: u32, required: u32 },
    /// Previously generated output was removed.
    MineCleared { despawned: u32 },
    /// The movement binding was enabled or disabled.
    ControlsToggled { enabled: bool },
}
