//! The capability set the core needs from the rendering/physics layer.
//!
//! Formations and levels talk to the outside world only through `Scene`.
//! The trait is object safe so timer callbacks can receive `&mut dyn Scene`.

use std::cell::Cell;
use std::rc::Rc;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use vanguard_core::config::WeaponSpec;
use vanguard_core::enums::ShipClass;
use vanguard_core::types::Bounds;

/// Opaque handle to a visual entity owned by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Shared cancellation flag for scheduled callbacks.
///
/// Every timer scheduled under a token (including re-armed ones) is
/// dropped once the token is cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

/// One-shot callback run by the scene once its deadline passes.
pub type TimerCallback = Box<dyn FnOnce(&mut dyn Scene)>;

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Rendering/physics capabilities consumed by formations and levels.
pub trait Scene {
    /// Create a ship entity at `position`.
    fn spawn_entity(&mut self, position: DVec2, class: ShipClass) -> EntityId;

    /// Remove an entity. Destroying a dead entity is a no-op.
    fn destroy_entity(&mut self, entity: EntityId);

    /// Whether the entity is still alive (not destroyed by damage or cleanup).
    fn is_active(&self, entity: EntityId) -> bool;

    fn position(&self, entity: EntityId) -> Option<DVec2>;

    fn set_position(&mut self, entity: EntityId, position: DVec2);

    fn set_rotation(&mut self, entity: EntityId, rotation: f64);

    /// Velocity in px/ms, integrated by the scene's physics.
    fn set_velocity(&mut self, entity: EntityId, velocity: DVec2);

    /// Run `callback` once `delay_ms` of scene time has passed under the
    /// given token.
    fn schedule_with(&mut self, token: &CancelToken, delay_ms: f64, callback: TimerCallback);

    /// Run `callback` once `delay_ms` of scene time has passed.
    fn schedule_delayed(&mut self, delay_ms: f64, callback: TimerCallback) -> CancelToken {
        let token = CancelToken::new();
        self.schedule_with(&token, delay_ms, callback);
        token
    }

    fn cancel(&mut self, token: &CancelToken) {
        token.cancel();
    }

    fn screen_bounds(&self) -> Bounds;

    /// Live player position, `None` when the player ship is dead.
    fn player_position(&self) -> Option<DVec2>;

    fn fire_weapon(&mut self, entity: EntityId, weapon: &WeaponSpec);

    /// Monotonic scene clock (ms).
    fn now_ms(&self) -> f64;
}
