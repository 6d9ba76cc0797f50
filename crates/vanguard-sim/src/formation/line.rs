//! Line / sinus layout: a zig-zag row of ships, evenly spread across the
//! screen, each weaving independently.

use glam::DVec2;
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use vanguard_core::config::{CountRange, LineLayout};
use vanguard_core::constants::*;
use vanguard_core::enums::ShipClass;
use vanguard_core::types::Bounds;

use super::Slot;

/// Inclusive ship count for a line formation.
///
/// A usable explicit `enemy_count` wins; otherwise the range is derived
/// from the screen width, wider screens holding more ships.
pub fn count_range(layout: &LineLayout, bounds: &Bounds) -> CountRange {
    if let Some(range) = layout.enemy_count {
        if range.is_usable() {
            return range;
        }
        debug!(
            "enemy count {}..={} unusable, deriving from width",
            range.min, range.max
        );
    }
    let width = bounds.width.max(0.0);
    let min = (width / LINE_MIN_COUNT_DIVISOR).floor() as u32;
    let min = min.max(LINE_MIN_COUNT_FLOOR);
    let max = ((width / LINE_MAX_COUNT_DIVISOR).floor() as u32)
        .max(LINE_MAX_COUNT_FLOOR)
        .max(min);
    CountRange::new(min, max)
}

/// Roll a ship count and lay the ships out above the top edge.
///
/// Ships alternate between two bands `vertical_spacing` apart, cycle
/// through `ships` for their class, and get a phase `phase_step_ms` apart.
pub fn slots(
    layout: &LineLayout,
    ships: &[ShipClass],
    bounds: &Bounds,
    rng: &mut ChaCha8Rng,
) -> Vec<Slot> {
    if ships.is_empty() {
        return Vec::new();
    }
    let range = count_range(layout, bounds);
    let count = rng.gen_range(range.min..=range.max) as usize;
    if count == 0 {
        return Vec::new();
    }

    let spacing = layout
        .spacing
        .filter(|s| s.is_finite() && *s > 0.0)
        .unwrap_or(bounds.width / (count + 1) as f64);
    let anchor = DVec2::new(bounds.center_x(), bounds.height * FORMATION_SPAWN_HEIGHT);
    let middle = (count - 1) as f64 / 2.0;

    (0..count)
        .map(|i| {
            let band = if i % 2 == 1 {
                layout.vertical_spacing
            } else {
                0.0
            };
            let offset = DVec2::new((i as f64 - middle) * spacing, -band);
            Slot {
                position: anchor + offset,
                offset,
                class: ships[i % ships.len()],
                phase_ms: i as f64 * layout.phase_step_ms,
            }
        })
        .collect()
}
