//! Scene configuration: seed, generator fields, and player tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use mineworks_core::constants::{DEFAULT_PLAYER_SPEED, DEFAULT_SPAWN_HEIGHT};
use mineworks_procgen::GeneratorConfig;

use crate::error::SceneError;

/// Configuration for building a new scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed for determinism. Same seed = same mines.
    pub seed: u64,
    /// Generate a mine as soon as the scene is built.
    pub generate_on_start: bool,
    pub generator: GeneratorConfig,
    pub player: PlayerConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            generate_on_start: true,
            generator: GeneratorConfig::default(),
            player: PlayerConfig::default(),
        }
    }
}

/// Player tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Speed at full input deflection (m/s).
    pub speed: f32,
    /// Whether heading follows the camera's horizontal axis.
    pub align_to_camera: bool,
    /// Spawn height above the mine floor (meters).
    pub spawn_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_PLAYER_SPEED,
            align_to_camera: true,
            spawn_height: DEFAULT_SPAWN_HEIGHT,
        }
    }
}

impl SceneConfig {
    /// Read and validate a JSON scene config file.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON scene config.
    pub fn from_json_str(text: &str) -> Result<Self, SceneError> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        self.generator.validate()?;
        let speed = self.player.speed;
        if !speed.is_finite() || speed < 0.0 {
            return Err(SceneError::InvalidPlayerSpeed(speed));
        }
        let height = self.player.spawn_height;
        if !height.is_finite() {
            return Err(SceneError::InvalidSpawnHeight(height));
        }
        Ok(())
    }
}
