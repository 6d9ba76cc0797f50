//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start the level registered under `level`.
    StartLevel { level: String },
    /// Abandon the running level and return to the menu.
    AbortLevel,
    /// Move the player ship (screen pixels).
    MovePlayer { x: f64, y: f64 },
    /// The player ship was destroyed.
    RemovePlayer,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
