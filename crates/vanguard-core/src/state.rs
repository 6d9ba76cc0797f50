//! Game state snapshot: the complete visible state sent to the frontend each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::LevelEvent;
use crate::types::SceneTime;

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SceneTime,
    pub phase: GamePhase,
    /// Name of the running level, if any.
    pub level: Option<String>,
    pub level_phase: LevelPhase,
    pub enemies: Vec<EnemyView>,
    pub player: Option<DVec2>,
    /// Live enemy projectiles.
    pub projectiles: usize,
    /// Projectiles fired since the level started.
    pub shots_fired: u64,
    pub events: Vec<LevelEvent>,
}

/// A live enemy ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub class: ShipClass,
    pub position: DVec2,
    /// Facing (radians, 0 = +x, π/2 = down-screen).
    pub rotation: f64,
}
