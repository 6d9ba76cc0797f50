//! Path evaluator: walks an ordered list of path segments.
//!
//! Each leg runs from the anchor (the last reached waypoint) to the current
//! segment's resolved target at constant speed. Targets are re-resolved
//! every frame, so player-relative legs bend toward a moving player.
//! Sine legs scale their lateral offset by `sin(PI * progress)`, which is
//! zero at both waypoints.

use std::f64::consts::PI;

use glam::DVec2;

use vanguard_core::config::PathSegmentSpec;
use vanguard_core::types::{from_heading, heading, Bounds};

use crate::path::{resolve, sinus_of, ResolveContext};

/// Legs shorter than this keep the previous heading.
const MIN_LEG_LENGTH: f64 = 1e-6;

/// Result of advancing a path by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Position including any wave offset.
    pub position: DVec2,
    /// Facing: travel angle plus the wave's bank adjustment.
    pub rotation: f64,
    /// Lateral wave displacement included in `position`.
    pub wave_offset: DVec2,
    /// The final waypoint has been reached.
    pub finished: bool,
}

/// Path-following state for one ship.
#[derive(Debug, Clone)]
pub struct PathEvaluator {
    segments: Vec<PathSegmentSpec>,
    /// Path speed (px/ms).
    speed: f64,
    /// Fixed displacement applied to every waypoint (formation slot).
    offset: DVec2,
    index: usize,
    anchor: DVec2,
    leg_elapsed_ms: f64,
    /// Last valid target of the current leg, held when resolution fails.
    last_target: Option<DVec2>,
    position: DVec2,
    heading: f64,
}

impl PathEvaluator {
    /// Start a path at `start`. `offset` shifts every resolved waypoint so
    /// that ships of one formation keep their relative slots.
    pub fn new(segments: Vec<PathSegmentSpec>, speed: f64, start: DVec2, offset: DVec2) -> Self {
        Self {
            segments,
            speed,
            offset,
            index: 0,
            anchor: start,
            leg_elapsed_ms: 0.0,
            last_target: None,
            position: start,
            heading: std::f64::consts::FRAC_PI_2,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Index of the segment currently being travelled toward.
    pub fn segment_index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.segments.len()
    }

    /// Travel angle of the current (or last) leg.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// Velocity along the final heading at path speed.
    pub fn exit_velocity(&self) -> DVec2 {
        from_heading(self.heading) * self.speed
    }

    /// Advance by `delta_ms`. `time_ms` drives sine segments; `player` is
    /// the live player position for player-relative segments.
    pub fn advance(
        &mut self,
        delta_ms: f64,
        time_ms: f64,
        bounds: Bounds,
        player: Option<DVec2>,
    ) -> PathSample {
        let mut remaining = delta_ms.max(0.0);

        while let Some(segment) = self.segments.get(self.index) {
            // Resolve in formation space, then shift into this ship's slot.
            let ctx = ResolveContext {
                bounds,
                anchor: self.anchor - self.offset,
                time_ms,
                speed: self.speed,
                player,
            };
            let target = match resolve(segment, &ctx) {
                Some(point) => {
                    let target = point + self.offset;
                    self.last_target = Some(target);
                    target
                }
                None => self.last_target.unwrap_or(self.anchor),
            };
            let leg = target - self.anchor;
            let distance = leg.length();
            if distance > MIN_LEG_LENGTH {
                self.heading = heading(leg);
            }
            let duration = if self.speed > 0.0 {
                distance / self.speed
            } else {
                f64::INFINITY
            };

            if self.leg_elapsed_ms + remaining >= duration {
                // Leg done; carry the unused part of the frame into the next one.
                remaining -= (duration - self.leg_elapsed_ms).max(0.0);
                self.anchor = target;
                self.position = target;
                self.index += 1;
                self.leg_elapsed_ms = 0.0;
                self.last_target = None;
                continue;
            }

            self.leg_elapsed_ms += remaining;
            let t = self.leg_elapsed_ms / duration;
            let base = self.anchor + leg * t;

            let (wave_offset, rotation) = match sinus_of(segment) {
                Some(wave) => {
                    let envelope = (PI * t).sin();
                    let envelope_rate = PI / duration * (PI * t).cos();
                    let lateral_velocity = envelope * wave.lateral_velocity(time_ms)
                        + envelope_rate * wave.wave_offset(time_ms);
                    (
                        wave.lateral_offset(time_ms, self.heading) * envelope,
                        self.heading + lateral_velocity.atan2(self.speed),
                    )
                }
                None => (DVec2::ZERO, self.heading),
            };
            self.position = base + wave_offset;

            return PathSample {
                position: self.position,
                rotation,
                wave_offset,
                finished: false,
            };
        }

        PathSample {
            position: self.position,
            rotation: self.heading,
            wave_offset: DVec2::ZERO,
            finished: true,
        }
    }
}
