//! Level orchestration: runs waves in order, spawns each wave's formations
//! after their own delays, and declares victory once the last wave clears.
//!
//! Phases: Idle → Running(0) → … → Running(n-1) → Victory.
//! A wave is cleared when every formation it spawned is complete and none
//! are still waiting on their start delay.

use log::{debug, info, warn};
use rand_chacha::ChaCha8Rng;

use vanguard_core::config::{FormationConfig, LevelConfig};
use vanguard_core::enums::LevelPhase;
use vanguard_core::events::LevelEvent;

use crate::formation::Formation;
use crate::scene::Scene;

/// A formation of the current wave still inside its start delay.
struct Delayed {
    spawn_at_ms: f64,
    config: FormationConfig,
}

/// One running instance of a level.
pub struct Level {
    config: LevelConfig,
    phase: LevelPhase,
    delayed: Vec<Delayed>,
    active: Vec<Formation>,
    events: Vec<LevelEvent>,
    on_victory: Option<Box<dyn FnOnce()>>,
}

impl Level {
    pub fn new(config: LevelConfig) -> Self {
        Self {
            config,
            phase: LevelPhase::Idle,
            delayed: Vec::new(),
            active: Vec::new(),
            events: Vec::new(),
            on_victory: None,
        }
    }

    /// Register the callback run exactly once when the last wave clears.
    pub fn on_victory(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_victory = Some(Box::new(callback));
        self
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    /// Index of the running wave.
    pub fn wave_index(&self) -> Option<usize> {
        match self.phase {
            LevelPhase::Running(index) => Some(index),
            _ => None,
        }
    }

    /// Every wave has been cleared.
    pub fn is_complete(&self) -> bool {
        self.phase == LevelPhase::Victory
    }

    /// Formations of the current wave that have spawned.
    pub fn formations(&self) -> &[Formation] {
        &self.active
    }

    /// Formations of the current wave still waiting to spawn.
    pub fn delayed_count(&self) -> usize {
        self.delayed.len()
    }

    /// Ships alive across the current wave.
    pub fn live_ships(&self) -> usize {
        self.active.iter().map(Formation::len).sum()
    }

    /// Take the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<LevelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin the first wave. Only valid from `Idle`.
    pub fn start<S: Scene + ?Sized>(&mut self, scene: &mut S, rng: &mut ChaCha8Rng) {
        if self.phase != LevelPhase::Idle {
            warn!(
                "level '{}' already started ({:?})",
                self.config.name, self.phase
            );
            return;
        }
        info!(
            "level '{}' started: {} waves, {} formations",
            self.config.name,
            self.config.waves.len(),
            self.config.total_formations()
        );
        self.begin_wave(0, scene, rng);
    }

    /// Advance the running wave by one frame.
    pub fn update<S: Scene + ?Sized>(
        &mut self,
        scene: &mut S,
        rng: &mut ChaCha8Rng,
        time_ms: f64,
        delta_ms: f64,
    ) {
        let LevelPhase::Running(index) = self.phase else {
            return;
        };

        self.spawn_due(index, scene, rng, time_ms);
        for formation in &mut self.active {
            formation.update(scene, time_ms, delta_ms);
        }

        if self.delayed.is_empty() && self.active.iter().all(Formation::is_complete) {
            self.active.clear();
            debug!("wave {index} cleared");
            self.begin_wave(index + 1, scene, rng);
        }
    }

    /// Tear down every formation and pending spawn. The victory callback
    /// is not run. The level returns to `Idle`.
    pub fn destroy<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        for formation in &mut self.active {
            formation.destroy(scene);
        }
        self.active.clear();
        self.delayed.clear();
        if self.phase != LevelPhase::Idle {
            info!("level '{}' aborted", self.config.name);
        }
        self.phase = LevelPhase::Idle;
    }

    fn begin_wave<S: Scene + ?Sized>(&mut self, index: usize, scene: &mut S, rng: &mut ChaCha8Rng) {
        let Some(wave) = self.config.waves.get(index) else {
            self.finish();
            return;
        };

        let now = scene.now_ms();
        self.delayed = wave
            .formations
            .iter()
            .map(|config| Delayed {
                spawn_at_ms: now + config.start_delay_ms.max(0.0),
                config: config.clone(),
            })
            .collect();
        self.phase = LevelPhase::Running(index);
        self.events.push(LevelEvent::WaveStarted { index });
        info!(
            "wave {}/{} started ({} formations)",
            index + 1,
            self.config.waves.len(),
            self.delayed.len()
        );

        self.spawn_due(index, scene, rng, now);
    }

    fn spawn_due<S: Scene + ?Sized>(
        &mut self,
        wave: usize,
        scene: &mut S,
        rng: &mut ChaCha8Rng,
        time_ms: f64,
    ) {
        if self.delayed.is_empty() {
            return;
        }
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.delayed)
            .into_iter()
            .partition(|d| d.spawn_at_ms <= time_ms);
        self.delayed = waiting;

        for delayed in due {
            match Formation::new(delayed.config) {
                Ok(mut formation) => {
                    let ships = formation.spawn(scene, rng);
                    self.events.push(LevelEvent::FormationSpawned {
                        wave,
                        kind: formation.kind(),
                        ships,
                    });
                    self.active.push(formation);
                }
                Err(err) => {
                    warn!("wave {wave}: skipping formation: {err}");
                    self.events.push(LevelEvent::FormationSkipped {
                        wave,
                        reason: err.to_string(),
                    });
                }
            }
        }
    }

    fn finish(&mut self) {
        self.phase = LevelPhase::Victory;
        self.events.push(LevelEvent::Victory);
        info!("level '{}' complete", self.config.name);
        if let Some(callback) = self.on_victory.take() {
            callback();
        }
    }
}
