//! Scene runtime for MINEWORKS.
//!
//! Owns the hecs ECS world, runs the player movement systems at a fixed
//! step, instantiates and clears generated mines, and produces
//! `SceneSnapshot`s.

pub mod config;
pub mod engine;
pub mod error;
pub mod hierarchy;
pub mod materials;
pub mod systems;
pub mod world_setup;

pub use mineworks_core as core;
pub use mineworks_procgen as procgen;

pub use config::{PlayerConfig, SceneConfig};
pub use engine::SceneEngine;
pub use error::SceneError;
