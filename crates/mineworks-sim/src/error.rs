//! Scene setup errors.

use std::io;
use std::path::PathBuf;

use mineworks_procgen::ConfigError;

/// Errors raised while loading or validating a scene.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Scene config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid generator config: {0}")]
    Generator(#[from] ConfigError),

    #[error("Player speed must be a non-negative finite number, got {0}")]
    InvalidPlayerSpeed(f32),

    #[error("Player spawn height must be a finite number, got {0}")]
    InvalidSpawnHeight(f32),
}
