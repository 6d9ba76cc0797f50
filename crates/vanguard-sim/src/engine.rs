//! Simulation engine: the headless core of the game.
//!
//! `SimulationEngine` owns the scene, the running level and the RNG,
//! processes player commands, and produces `GameStateSnapshot`s. No
//! rendering dependency, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use log::{info, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use vanguard_core::commands::PlayerCommand;
use vanguard_core::constants::{FRAME_MS, PLAYER_START_FRACTION};
use vanguard_core::enums::{GamePhase, LevelPhase};
use vanguard_core::events::LevelEvent;
use vanguard_core::state::GameStateSnapshot;
use vanguard_core::types::{Bounds, SceneTime};

use crate::level::Level;
use crate::registry::{builtin_registry, LevelRegistry};
use crate::scene::Scene;
use crate::sim_scene::SimScene;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Screen size the level is laid out on.
    pub screen: Bounds,
    /// Where the player ship starts. `None` starts without a player.
    pub player_start: Option<DVec2>,
}

impl Default for SimConfig {
    fn default() -> Self {
        let screen = Bounds::default();
        let (x, y) = PLAYER_START_FRACTION;
        Self {
            seed: 42,
            screen,
            player_start: Some(screen.at_fraction(x, y)),
        }
    }
}

/// The simulation engine. Owns the scene and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    scene: SimScene,
    registry: LevelRegistry,
    level: Option<Level>,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<LevelEvent>,
}

impl SimulationEngine {
    /// Create an engine over the built-in levels.
    pub fn new(config: SimConfig) -> Self {
        Self::with_registry(config, builtin_registry().clone())
    }

    /// Create an engine over a custom set of levels.
    pub fn with_registry(config: SimConfig, registry: LevelRegistry) -> Self {
        Self {
            scene: new_scene(&config),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            registry,
            level: None,
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `delta_ms` and return the resulting snapshot.
    pub fn tick(&mut self, delta_ms: f64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_frame(delta_ms);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.scene, self.phase, self.level.as_ref(), events)
    }

    /// Advance by one nominal frame.
    pub fn step(&mut self) -> GameStateSnapshot {
        self.tick(FRAME_MS)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SceneTime {
        self.scene.time()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn registry(&self) -> &LevelRegistry {
        &self.registry
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    /// Read-only access to the scene.
    pub fn scene(&self) -> &SimScene {
        &self.scene
    }

    /// Mutable scene access, used by tests to stand in for collisions.
    #[cfg(test)]
    pub fn scene_mut(&mut self) -> &mut SimScene {
        &mut self.scene
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartLevel { level } => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::Victory) {
                    self.start_level(&level);
                } else {
                    warn!("cannot start '{level}' while {:?}", self.phase);
                }
            }
            PlayerCommand::AbortLevel => {
                if let Some(mut level) = self.level.take() {
                    level.destroy(&mut self.scene);
                    self.events.extend(level.drain_events());
                }
                self.phase = GamePhase::MainMenu;
            }
            PlayerCommand::MovePlayer { x, y } => {
                self.scene.set_player_position(DVec2::new(x, y));
            }
            PlayerCommand::RemovePlayer => {
                self.scene.remove_player();
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    fn start_level(&mut self, id: &str) {
        let config = match self.registry.require(id) {
            Ok(config) => config.clone(),
            Err(err) => {
                warn!("{err}");
                return;
            }
        };

        if let Some(mut previous) = self.level.take() {
            previous.destroy(&mut self.scene);
        }
        // Fresh scene per run, keeping the player where it is.
        let player = self.scene.player();
        self.scene = SimScene::new(self.config.screen);
        if let Some(player) = player {
            self.scene.set_player_position(player);
        }

        info!("starting level '{id}'");
        let mut level = Level::new(config);
        level.start(&mut self.scene, &mut self.rng);
        self.events.extend(level.drain_events());
        self.phase = match level.phase() {
            LevelPhase::Victory => GamePhase::Victory,
            _ => GamePhase::Active,
        };
        self.level = Some(level);
    }

    fn run_frame(&mut self, delta_ms: f64) {
        // 1. Scene clock, movement, timers, projectile cleanup
        self.scene.advance(delta_ms);

        // 2. Level orchestration (tactics, pruning, wave progression)
        let Some(level) = self.level.as_mut() else {
            return;
        };
        let now = self.scene.now_ms();
        level.update(&mut self.scene, &mut self.rng, now, delta_ms);
        self.events.extend(level.drain_events());

        if level.is_complete() {
            self.phase = GamePhase::Victory;
        }
        trace!(
            "frame {}: {} ships, {} projectiles",
            self.scene.time().frame,
            self.scene.ship_count(),
            self.scene.projectile_count()
        );
    }
}

fn new_scene(config: &SimConfig) -> SimScene {
    let scene = SimScene::new(config.screen);
    match config.player_start {
        Some(position) => scene.with_player(position),
        None => scene,
    }
}
