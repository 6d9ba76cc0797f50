//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Ship configuration reference. Tuning for each class lives in
/// `vanguard_tactics::profiles`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    /// Light, fast fighter.
    #[default]
    Scout,
    /// Standard line fighter.
    Hunter,
    /// Slow, heavily armed ship.
    Gunship,
    /// Player-seeking raider.
    Raider,
}

/// Weapon family fired by an enemy ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Single projectile straight down-screen.
    #[default]
    Laser,
    /// Single projectile aimed at the live player.
    Seeker,
    /// Three projectiles in a fan.
    Spread,
}

/// Per-ship tactic lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TacticPhase {
    /// Waiting on the tactic's start delay.
    #[default]
    Pending,
    /// Moving.
    Active,
    /// Reached the final waypoint.
    Complete,
}

/// Formation layout discriminant, as written in level documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationKind {
    /// Ships in a zig-zag line with independent sine motion.
    #[serde(alias = "sinus")]
    Line,
    /// Ships in a (possibly ragged) 2D grid.
    #[serde(alias = "grid")]
    Diamond,
}

/// Level orchestration state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelPhase {
    #[default]
    Idle,
    /// Wave with the given index is in play.
    Running(usize),
    /// Every wave spawned and cleared.
    Victory,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    Victory,
}
