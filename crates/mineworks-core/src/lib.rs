//! Core types and definitions for the MINEWORKS scene.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid and color types, components, commands, snapshots, events, and
//! constants. It has no dependency on the ECS or any runtime.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
