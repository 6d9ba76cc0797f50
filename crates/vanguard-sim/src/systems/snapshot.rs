//! Snapshot system: queries the scene and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use vanguard_core::enums::GamePhase;
use vanguard_core::events::LevelEvent;
use vanguard_core::state::{EnemyView, GameStateSnapshot};

use crate::components::{Body, Ship};
use crate::level::Level;
use crate::sim_scene::SimScene;

/// Build a complete GameStateSnapshot from the current scene state.
pub fn build_snapshot(
    scene: &SimScene,
    phase: GamePhase,
    level: Option<&Level>,
    events: Vec<LevelEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: scene.time(),
        phase,
        level: level.map(|l| l.name().to_string()),
        level_phase: level.map(Level::phase).unwrap_or_default(),
        enemies: build_enemies(scene),
        player: scene.player(),
        projectiles: scene.projectile_count(),
        shots_fired: scene.shots_fired(),
        events,
    }
}

/// Live ships ordered by entity id.
fn build_enemies(scene: &SimScene) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = scene
        .world()
        .query::<(&Body, &Ship)>()
        .iter()
        .map(|(entity, (body, ship))| EnemyView {
            id: entity.to_bits().get(),
            class: ship.class,
            position: body.position,
            rotation: body.rotation,
        })
        .collect();
    enemies.sort_by_key(|enemy| enemy.id);
    enemies
}
