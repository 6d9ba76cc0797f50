//! Per-ship tactic state machine.
//!
//! Pending (start delay) → Active (moving) → Complete (final waypoint).
//! `advance` is pure with respect to the scene: it returns the transform
//! changes to apply and leaves applying them (behind a liveness check) to
//! the caller.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use vanguard_core::enums::TacticPhase;
use vanguard_core::types::{heading, Bounds};

use crate::evaluator::PathEvaluator;
use crate::path::SinusWave;

/// Input to a tactic for a single frame.
#[derive(Debug, Clone, Copy)]
pub struct TacticContext {
    pub bounds: Bounds,
    pub player: Option<DVec2>,
    pub delta_ms: f64,
}

/// Transform changes produced by one frame of a tactic.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TacticUpdate {
    pub phase: TacticPhase,
    pub position: Option<DVec2>,
    pub rotation: Option<f64>,
    pub velocity: Option<DVec2>,
}

/// Default line/sinus motion: steady descent with a lateral sine weave.
#[derive(Debug, Clone)]
pub struct Weave {
    pub origin: DVec2,
    /// Descent speed (px/ms).
    pub speed: f64,
    pub wave: SinusWave,
}

/// Default grid motion: one constant velocity, integrated by the physics
/// collaborator.
#[derive(Debug, Clone)]
pub struct Straight {
    pub velocity: DVec2,
    launched: bool,
}

#[derive(Debug, Clone)]
pub enum Behavior {
    Path(PathEvaluator),
    Weave(Weave),
    Straight(Straight),
}

/// Movement strategy for one ship.
#[derive(Debug, Clone)]
pub struct Tactic {
    phase: TacticPhase,
    start_delay_ms: f64,
    waited_ms: f64,
    active_ms: f64,
    /// Added to the active time for wave math, de-syncs neighbouring ships.
    time_offset_ms: f64,
    face_movement: bool,
    behavior: Behavior,
}

impl Weave {
    pub fn new(origin: DVec2, speed: f64, wave: SinusWave) -> Self {
        Self {
            origin,
            speed,
            wave,
        }
    }

    /// Position and facing after `active_ms` of motion with wave time `time_ms`.
    fn sample(&self, active_ms: f64, time_ms: f64) -> (DVec2, f64) {
        let base = self.origin + DVec2::new(0.0, self.speed * active_ms);
        let position = base + self.wave.lateral_offset(time_ms, FRAC_PI_2);
        let rotation = FRAC_PI_2 + self.wave.angle_adjustment(time_ms, self.speed);
        (position, rotation)
    }
}

impl Straight {
    pub fn new(velocity: DVec2) -> Self {
        Self {
            velocity,
            launched: false,
        }
    }
}

impl Tactic {
    fn with_behavior(behavior: Behavior, face_movement: bool) -> Self {
        Self {
            phase: TacticPhase::Pending,
            start_delay_ms: 0.0,
            waited_ms: 0.0,
            active_ms: 0.0,
            time_offset_ms: 0.0,
            face_movement,
            behavior,
        }
    }

    pub fn path(evaluator: PathEvaluator, face_movement: bool) -> Self {
        Self::with_behavior(Behavior::Path(evaluator), face_movement)
    }

    pub fn weave(weave: Weave) -> Self {
        Self::with_behavior(Behavior::Weave(weave), true)
    }

    pub fn straight(velocity: DVec2) -> Self {
        Self::with_behavior(Behavior::Straight(Straight::new(velocity)), true)
    }

    pub fn with_start_delay(mut self, delay_ms: f64) -> Self {
        self.start_delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn with_time_offset(mut self, offset_ms: f64) -> Self {
        self.time_offset_ms = offset_ms;
        self
    }

    pub fn phase(&self) -> TacticPhase {
        self.phase
    }

    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    pub fn is_complete(&self) -> bool {
        self.phase == TacticPhase::Complete
    }

    /// Advance one frame.
    pub fn advance(&mut self, ctx: &TacticContext) -> TacticUpdate {
        let mut delta_ms = ctx.delta_ms.max(0.0);

        match self.phase {
            TacticPhase::Complete => return self.hold(),
            TacticPhase::Pending => {
                self.waited_ms += delta_ms;
                if self.waited_ms < self.start_delay_ms {
                    return self.hold();
                }
                self.phase = TacticPhase::Active;
                // Only the part of the frame past the delay counts as motion.
                delta_ms = self.waited_ms - self.start_delay_ms;
            }
            TacticPhase::Active => {}
        }

        self.active_ms += delta_ms;
        let time_ms = self.active_ms + self.time_offset_ms;
        let face = self.face_movement;

        match &mut self.behavior {
            Behavior::Path(evaluator) => {
                let sample = evaluator.advance(delta_ms, time_ms, ctx.bounds, ctx.player);
                let mut update = TacticUpdate {
                    phase: TacticPhase::Active,
                    position: Some(sample.position),
                    rotation: face.then_some(sample.rotation),
                    velocity: None,
                };
                if sample.finished {
                    // Coast out along the final heading; bounds pruning
                    // removes the ship once it is off-screen.
                    self.phase = TacticPhase::Complete;
                    update.phase = TacticPhase::Complete;
                    update.velocity = Some(evaluator.exit_velocity());
                }
                update
            }
            Behavior::Weave(weave) => {
                let (position, rotation) = weave.sample(self.active_ms, time_ms);
                TacticUpdate {
                    phase: TacticPhase::Active,
                    position: Some(position),
                    rotation: face.then_some(rotation),
                    velocity: None,
                }
            }
            Behavior::Straight(straight) => {
                if straight.launched {
                    return TacticUpdate {
                        phase: TacticPhase::Active,
                        ..Default::default()
                    };
                }
                straight.launched = true;
                TacticUpdate {
                    phase: TacticPhase::Active,
                    position: None,
                    rotation: (face && straight.velocity != DVec2::ZERO)
                        .then(|| heading(straight.velocity)),
                    velocity: Some(straight.velocity),
                }
            }
        }
    }

    fn hold(&self) -> TacticUpdate {
        TacticUpdate {
            phase: self.phase,
            ..Default::default()
        }
    }
}
