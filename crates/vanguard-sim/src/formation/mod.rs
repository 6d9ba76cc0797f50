//! Formations: groups of ships spawned together and moved by tactics.
//!
//! A formation owns its members. Each frame it advances every member's
//! tactic, applies the result to the scene behind a liveness check, and
//! prunes ships that were destroyed or left the screen. It is complete
//! once no members remain.

pub mod diamond;
pub mod line;
pub mod shooting;

use glam::DVec2;
use log::{debug, trace, warn};
use rand_chacha::ChaCha8Rng;

use vanguard_core::config::{FormationConfig, FormationLayout, TacticConfig};
use vanguard_core::constants::OFFSCREEN_MARGIN;
use vanguard_core::enums::{FormationKind, ShipClass};
use vanguard_core::error::Result;
use vanguard_core::types::Bounds;
use vanguard_tactics::evaluator::PathEvaluator;
use vanguard_tactics::path::SinusWave;
use vanguard_tactics::profiles::get_profile;
use vanguard_tactics::tactic::{Tactic, TacticContext, TacticUpdate, Weave};

use crate::scene::{CancelToken, EntityId, Scene};

/// Where one ship of a formation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub position: DVec2,
    /// Displacement from the formation anchor.
    pub offset: DVec2,
    pub class: ShipClass,
    /// Wave phase (ms) that de-syncs neighbouring ships.
    pub phase_ms: f64,
}

/// A live ship owned by a formation.
#[derive(Debug)]
pub struct Member {
    entity: EntityId,
    class: ShipClass,
    tactic: Tactic,
    last_position: DVec2,
    /// Last non-zero movement, used for the exit test.
    direction: DVec2,
    shots: Option<CancelToken>,
}

impl Member {
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn tactic(&self) -> &Tactic {
        &self.tactic
    }

    /// Whether the ship rolled to shoot.
    pub fn is_armed(&self) -> bool {
        self.shots.is_some()
    }

    fn disarm<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        if let Some(token) = self.shots.take() {
            scene.cancel(&token);
        }
    }
}

/// A group of ships sharing a layout, tactic and shooting behaviour.
#[derive(Debug)]
pub struct Formation {
    config: FormationConfig,
    members: Vec<Member>,
    spawned: bool,
}

impl Formation {
    /// Build a formation from its configuration.
    ///
    /// Fatal problems (no ship classes) are returned as errors. Anything
    /// else is logged and handled by a fallback at spawn time.
    pub fn new(config: FormationConfig) -> Result<Self> {
        match config.validate() {
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => warn!("formation config degraded: {err}"),
            Ok(()) => {}
        }
        Ok(Self {
            config,
            members: Vec::new(),
            spawned: false,
        })
    }

    pub fn kind(&self) -> FormationKind {
        self.config.layout.kind()
    }

    pub fn config(&self) -> &FormationConfig {
        &self.config
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// No live members remain.
    pub fn is_complete(&self) -> bool {
        self.members.is_empty()
    }

    /// Movement speed (px/ms): the override, else the first ship's class speed.
    pub fn speed(&self) -> f64 {
        let fallback = self
            .config
            .ships
            .first()
            .map(|class| get_profile(*class).speed)
            .unwrap_or_default();
        self.config
            .speed
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(fallback)
    }

    /// Create the ships, attach their tactics and arm their weapons.
    /// Returns the number of ships spawned. Spawning twice is a no-op.
    pub fn spawn<S: Scene + ?Sized>(&mut self, scene: &mut S, rng: &mut ChaCha8Rng) -> usize {
        if self.spawned {
            return 0;
        }
        self.spawned = true;

        let bounds = scene.screen_bounds();
        let slots = match &self.config.layout {
            FormationLayout::Line(line) => line::slots(line, &self.config.ships, &bounds, rng),
            FormationLayout::Diamond(grid) => diamond::slots(grid, &self.config.ships, &bounds),
        };
        let speed = self.speed();

        for (index, slot) in slots.iter().enumerate() {
            let entity = scene.spawn_entity(slot.position, slot.class);
            let tactic = self.tactic_for(index, slot, speed, &bounds);
            let weapon = self
                .config
                .shooting
                .weapon
                .unwrap_or_else(|| get_profile(slot.class).weapon);
            let shots = shooting::arm(scene, rng, entity, &self.config.shooting, weapon);
            self.members.push(Member {
                entity,
                class: slot.class,
                tactic,
                last_position: slot.position,
                direction: DVec2::ZERO,
                shots,
            });
        }

        debug!(
            "{:?} formation spawned {} ships ({} armed)",
            self.kind(),
            self.members.len(),
            self.members.iter().filter(|m| m.is_armed()).count()
        );
        self.members.len()
    }

    fn tactic_for(&self, index: usize, slot: &Slot, speed: f64, bounds: &Bounds) -> Tactic {
        if let Some(TacticConfig::Path(path)) = &self.config.tactic {
            if !path.segments.is_empty() {
                let path_speed = path
                    .speed
                    .filter(|s| s.is_finite() && *s > 0.0)
                    .unwrap_or(speed);
                let evaluator = PathEvaluator::new(
                    path.segments.clone(),
                    path_speed,
                    slot.position,
                    slot.offset,
                );
                return Tactic::path(evaluator, path.face_movement)
                    .with_start_delay(index as f64 * path.stagger_ms)
                    .with_time_offset(slot.phase_ms);
            }
        }
        match &self.config.layout {
            FormationLayout::Line(line) => Tactic::weave(Weave::new(
                slot.position,
                speed,
                SinusWave::new(line.amplitude, line.frequency),
            ))
            .with_time_offset(slot.phase_ms),
            FormationLayout::Diamond(grid) => {
                Tactic::straight(diamond::drift_velocity(grid, bounds, speed))
            }
        }
    }

    /// Advance every member by one frame and prune the dead and departed.
    pub fn update<S: Scene + ?Sized>(&mut self, scene: &mut S, time_ms: f64, delta_ms: f64) {
        let bounds = scene.screen_bounds();
        let ctx = TacticContext {
            bounds,
            player: scene.player_position(),
            delta_ms,
        };

        self.members.retain_mut(|member| {
            if !scene.is_active(member.entity) {
                member.disarm(scene);
                return false;
            }

            let update = member.tactic.advance(&ctx);
            apply(scene, member.entity, &update);

            let Some(position) = scene.position(member.entity) else {
                member.disarm(scene);
                return false;
            };
            let moved = position - member.last_position;
            if moved != DVec2::ZERO {
                member.direction = moved;
            }
            member.last_position = position;

            if bounds.has_exited(position, member.direction, OFFSCREEN_MARGIN) {
                trace!("entity {} left the screen", member.entity.0);
                member.disarm(scene);
                scene.destroy_entity(member.entity);
                return false;
            }
            true
        });

        trace!("formation at {time_ms}ms: {} members", self.members.len());
    }

    /// Destroy every member and cancel all of their pending shots.
    /// Safe to call more than once.
    pub fn destroy<S: Scene + ?Sized>(&mut self, scene: &mut S) {
        if self.members.is_empty() {
            return;
        }
        let count = self.members.len();
        for mut member in self.members.drain(..) {
            member.disarm(scene);
            scene.destroy_entity(member.entity);
        }
        debug!("{:?} formation destroyed ({count} ships)", self.kind());
    }
}

/// Apply a tactic update, re-checking liveness before every mutation.
fn apply<S: Scene + ?Sized>(scene: &mut S, entity: EntityId, update: &TacticUpdate) {
    if let Some(position) = update.position {
        if scene.is_active(entity) {
            scene.set_position(entity, position);
        }
    }
    if let Some(rotation) = update.rotation {
        if scene.is_active(entity) {
            scene.set_rotation(entity, rotation);
        }
    }
    if let Some(velocity) = update.velocity {
        if scene.is_active(entity) {
            scene.set_velocity(entity, velocity);
        }
    }
}
