//! Scene engine: the runtime core.
//!
//! `SceneEngine` owns the hecs ECS world, processes scene commands, runs
//! the fixed-step systems, regenerates mines, and produces
//! `SceneSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use mineworks_core::commands::SceneCommand;
use mineworks_core::components::{CameraRig, Controls, MaterialId, MovementInput, Room};
use mineworks_core::constants::DT;
use mineworks_core::events::SceneEvent;
use mineworks_core::state::SceneSnapshot;
use mineworks_core::types::{wrap_degrees, Color, SimTime};
use mineworks_procgen::{GenerationOutcome, MineGenerator, MineLayout};

use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::materials::MaterialLibrary;
use crate::systems;
use crate::world_setup;

/// The scene engine. Owns the ECS world and all scene state.
pub struct SceneEngine {
    world: World,
    config: SceneConfig,
    generator: MineGenerator,
    time: SimTime,
    rng: ChaCha8Rng,
    materials: MaterialLibrary,
    layout: Option<MineLayout>,
    player: Entity,
    command_queue: VecDeque<SceneCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SceneEvent>,
}

impl SceneEngine {
    /// Build a scene from `config`: spawn the player and, if configured,
    /// generate the first mine.
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        let generator = MineGenerator::new(config.generator.clone())?;

        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world, &config.player, &config.generator);

        let mut engine = Self {
            world,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            generator,
            time: SimTime::default(),
            materials: MaterialLibrary::new(),
            layout: None,
            player,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };

        if engine.config.generate_on_start {
            engine.generate_mine();
        }
        Ok(engine)
    }

    /// Queue a command for processing at the next step boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one physics step and return the resulting snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();
        self.snapshot()
    }

    /// Snapshot the current state without stepping. Drains pending events.
    pub fn snapshot(&mut self) -> SceneSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.layout.as_ref(),
            &self.materials,
            events,
        )
    }

    /// Regenerate the mine using the scene RNG.
    pub fn generate_mine(&mut self) -> GenerationOutcome {
        let layout = self.generator.generate(&mut self.rng);
        self.install_layout(layout)
    }

    /// Regenerate the mine from an explicit seed, leaving the scene RNG untouched.
    pub fn generate_mine_with_seed(&mut self, seed: u64) -> GenerationOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let layout = self.generator.generate(&mut rng);
        self.install_layout(layout)
    }

    /// Remove every generated room and tile. Returns the number of
    /// entities despawned.
    pub fn clear_mine(&mut self) -> usize {
        let had_layout = self.layout.take().is_some();
        let despawned =
            systems::regeneration::clear(&mut self.world, &mut self.materials, &mut self.despawn_buffer);

        if had_layout || despawned > 0 {
            tracing::info!(despawned, "mine cleared");
            self.events.push(SceneEvent::MineCleared {
                despawned: despawned as u32,
            });
        }
        despawned
    }

    /// Recolor a single room's material. Returns false if no such room exists.
    pub fn recolor_room(&mut self, room_id: u32, color: Color) -> bool {
        let material = self
            .world
            .query::<(&Room, &MaterialId)>()
            .iter()
            .find(|(_, (room, _))| room.room_id == room_id)
            .map(|(_, (_, material))| *material);

        match material {
            Some(id) => self.materials.set_color(id, color),
            None => false,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The current layout, if a mine is instantiated.
    pub fn layout(&self) -> Option<&MineLayout> {
        self.layout.as_ref()
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    /// The player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Clear previous output, then instantiate `layout`.
    fn install_layout(&mut self, layout: MineLayout) -> GenerationOutcome {
        self.clear_mine();
        systems::mine_spawner::spawn_layout(&mut self.world, &mut self.materials, &layout);

        let outcome = layout.outcome;
        self.events.push(SceneEvent::MineGenerated {
            rooms: outcome.placed,
            required: outcome.required,
            attempts: outcome.attempts,
        });
        if !outcome.is_complete() {
            self.events.push(SceneEvent::MineShortfall {
                placed: outcome.placed,
                required: outcome.required,
            });
        }

        self.layout = Some(layout);
        outcome
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single scene command.
    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::EnableControls => self.set_controls(true),
            SceneCommand::DisableControls => self.set_controls(false),
            SceneCommand::Move { x, y } => {
                let enabled = self.controls_enabled();
                if let Ok(mut input) = self.world.get::<&mut MovementInput>(self.player) {
                    if enabled {
                        input.value = Vec2::new(x, y);
                        tracing::trace!(x, y, "movement input");
                    }
                }
            }
            SceneCommand::StopMove => self.reset_movement(),
            SceneCommand::SetCameraYaw { degrees } => {
                if let Ok(mut camera) = self.world.get::<&mut CameraRig>(self.player) {
                    camera.yaw_degrees = wrap_degrees(degrees);
                }
            }
            SceneCommand::GenerateMine => {
                self.generate_mine();
            }
            SceneCommand::GenerateMineWithSeed { seed } => {
                self.generate_mine_with_seed(seed);
            }
            SceneCommand::ClearMine => {
                self.clear_mine();
            }
        }
    }

    fn controls_enabled(&self) -> bool {
        self.world
            .get::<&Controls>(self.player)
            .map_or(false, |c| c.enabled)
    }

    fn set_controls(&mut self, enabled: bool) {
        let changed = match self.world.get::<&mut Controls>(self.player) {
            Ok(mut controls) => {
                let changed = controls.enabled != enabled;
                controls.enabled = enabled;
                changed
            }
            Err(_) => false,
        };
        if !enabled {
            self.reset_movement();
        }
        if changed {
            tracing::debug!(enabled, "controls toggled");
            self.events.push(SceneEvent::ControlsToggled { enabled });
        }
    }

    fn reset_movement(&mut self) {
        if let Ok(mut input) = self.world.get::<&mut MovementInput>(self.player) {
            input.value = Vec2::ZERO;
        }
    }

    /// Run all fixed-step systems in order.
    fn run_systems(&mut self) {
        // 1. Input -> velocity, heading follows camera
        systems::player_movement::run(&mut self.world);
        // 2. Velocity -> position
        systems::integration::run(&mut self.world, DT);
    }
}
