//! Fundamental geometric and timing types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Visible screen area in pixels. Origin is the top-left corner,
/// x grows to the right and y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

/// Monotonic scene clock.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SceneTime {
    /// Current frame number (increments by 1 each tick).
    pub frame: u64,
    /// Elapsed scene time in milliseconds.
    pub elapsed_ms: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Absolute point for a pair of screen fractions. Fractions outside
    /// 0.0..=1.0 address points beyond the visible edges.
    pub fn at_fraction(&self, width_fraction: f64, height_fraction: f64) -> DVec2 {
        DVec2::new(self.width * width_fraction, self.height * height_fraction)
    }

    /// Horizontal screen center.
    pub fn center_x(&self) -> f64 {
        self.width * 0.5
    }

    /// Whether `position` lies outside the screen grown by `margin` on
    /// the side that `direction` is heading toward.
    ///
    /// A ship entering from above while moving down is never "outside".
    pub fn has_exited(&self, position: DVec2, direction: DVec2, margin: f64) -> bool {
        (direction.y > 0.0 && position.y > self.height + margin)
            || (direction.y < 0.0 && position.y < -margin)
            || (direction.x > 0.0 && position.x > self.width + margin)
            || (direction.x < 0.0 && position.x < -margin)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(
            crate::constants::DEFAULT_SCREEN_WIDTH,
            crate::constants::DEFAULT_SCREEN_HEIGHT,
        )
    }
}

impl SceneTime {
    /// Advance by one frame of `delta_ms` milliseconds.
    pub fn advance(&mut self, delta_ms: f64) {
        self.frame += 1;
        self.elapsed_ms += delta_ms;
    }
}

/// Heading angle of a direction vector in radians (0 = +x, π/2 = down-screen).
pub fn heading(direction: DVec2) -> f64 {
    direction.y.atan2(direction.x)
}

/// Unit vector for a heading angle.
pub fn from_heading(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}
