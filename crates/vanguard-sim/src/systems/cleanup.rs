//! Cleanup system: removes projectiles that left the screen.
//!
//! Ships are owned by their formation, which prunes them itself.

use hecs::{Entity, World};

use vanguard_core::constants::OFFSCREEN_MARGIN;
use vanguard_core::types::Bounds;

use crate::components::{Body, Projectile};

/// Despawn projectiles outside the screen grown by the off-screen margin.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, bounds: Bounds, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (body, _projectile)) in world.query_mut::<(&Body, &Projectile)>() {
        let p = body.position;
        if p.x < -OFFSCREEN_MARGIN
            || p.y < -OFFSCREEN_MARGIN
            || p.x > bounds.width + OFFSCREEN_MARGIN
            || p.y > bounds.height + OFFSCREEN_MARGIN
        {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
