//! Path segment resolution and the sine wave perturbation.
//!
//! Pure functions over `PathSegmentSpec`. No ECS or scene dependency.

use glam::DVec2;

use vanguard_core::config::PathSegmentSpec;
use vanguard_core::constants::PLAYER_FALLBACK_MARGIN;
use vanguard_core::types::Bounds;

/// Everything a segment may consult while resolving.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext {
    pub bounds: Bounds,
    /// Last resolved absolute position along the path.
    pub anchor: DVec2,
    /// Elapsed path time (ms).
    pub time_ms: f64,
    /// Current path speed (px/ms).
    pub speed: f64,
    /// Live player position, `None` when no player is alive.
    pub player: Option<DVec2>,
}

/// Lateral sine perturbation carried by a `Sinus` segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinusWave {
    /// Amplitude (px).
    pub amplitude: f64,
    /// Angular frequency (rad/ms).
    pub frequency: f64,
}

/// Resolve a segment into an absolute target point.
///
/// Returns `None` only when the segment cannot produce a finite point;
/// callers hold their last valid coordinate in that case.
pub fn resolve(segment: &PathSegmentSpec, ctx: &ResolveContext) -> Option<DVec2> {
    let point = match segment {
        PathSegmentSpec::Coordinate {
            width_percent,
            height_percent,
        } => ctx.bounds.at_fraction(*width_percent, *height_percent),
        PathSegmentSpec::PlayerTarget { approach } => match ctx.player {
            Some(player) => ctx.anchor + (player - ctx.anchor) * *approach,
            None => player_fallback(&ctx.bounds),
        },
        // The wave changes presentation, not the destination.
        PathSegmentSpec::Sinus { target, .. } => return resolve(target, ctx),
    };
    point.is_finite().then_some(point)
}

/// Where player-relative segments aim when no player is alive: horizontal
/// center, below the bottom edge, so the ship leaves the screen.
pub fn player_fallback(bounds: &Bounds) -> DVec2 {
    DVec2::new(bounds.center_x(), bounds.height + PLAYER_FALLBACK_MARGIN)
}

/// The sine wave decorating `segment`, if it is a `Sinus` segment.
pub fn sinus_of(segment: &PathSegmentSpec) -> Option<SinusWave> {
    match segment {
        PathSegmentSpec::Sinus {
            amplitude,
            frequency,
            ..
        } => Some(SinusWave::new(*amplitude, *frequency)),
        _ => None,
    }
}

impl SinusWave {
    pub fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Signed lateral displacement at `time_ms`.
    pub fn wave_offset(&self, time_ms: f64) -> f64 {
        self.amplitude * (self.frequency * time_ms).sin()
    }

    /// Displacement vector perpendicular to `travel_angle`.
    pub fn lateral_offset(&self, time_ms: f64, travel_angle: f64) -> DVec2 {
        let offset = self.wave_offset(time_ms);
        let perpendicular = travel_angle + std::f64::consts::FRAC_PI_2;
        DVec2::new(perpendicular.cos() * offset, perpendicular.sin() * offset)
    }

    /// Rate of change of `wave_offset` (px/ms).
    pub fn lateral_velocity(&self, time_ms: f64) -> f64 {
        self.amplitude * self.frequency * (self.frequency * time_ms).cos()
    }

    /// Bank angle from the lateral velocity relative to forward speed.
    /// Added to the travel angle so the nose points along the actual drift.
    pub fn angle_adjustment(&self, time_ms: f64, path_speed: f64) -> f64 {
        self.lateral_velocity(time_ms).atan2(path_speed)
    }
}
