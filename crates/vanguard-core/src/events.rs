//! Events emitted by level orchestration for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::FormationKind;

/// Something noteworthy that happened during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelEvent {
    /// Wave `index` began; its formations spawn after their own delays.
    WaveStarted { index: usize },
    /// A formation of wave `wave` spawned `ships` ships.
    FormationSpawned {
        wave: usize,
        kind: FormationKind,
        ships: usize,
    },
    /// A formation was dropped because its configuration is unusable.
    FormationSkipped { wave: usize, reason: String },
    /// Every wave has been cleared.
    Victory,
}
