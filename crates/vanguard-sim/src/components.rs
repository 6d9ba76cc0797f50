//! ECS components for hecs entities in the headless scene.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and formations, not components.

use glam::DVec2;

use vanguard_core::enums::ShipClass;

use crate::scene::EntityId;

/// Transform and motion of any visual entity.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub position: DVec2,
    /// Velocity (px/ms), integrated by the movement system.
    pub velocity: DVec2,
    /// Facing (radians, 0 = +x, π/2 = down-screen).
    pub rotation: f64,
}

/// Marks an entity as an enemy ship.
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub class: ShipClass,
}

/// Marks an entity as an enemy projectile.
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub owner: EntityId,
    pub damage: u32,
}
