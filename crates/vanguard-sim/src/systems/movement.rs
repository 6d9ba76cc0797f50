//! Kinematic integration system.
//!
//! Updates body positions from velocity each frame: position += velocity * dt.

use hecs::World;

use crate::components::Body;

/// Integrate every body over `delta_ms`.
pub fn run(world: &mut World, delta_ms: f64) {
    for (_entity, body) in world.query_mut::<&mut Body>() {
        body.position += body.velocity * delta_ms;
    }
}
