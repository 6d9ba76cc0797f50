//! Configuration errors raised while building levels and formations.

use thiserror::Error;

/// Convenient result alias for level and formation construction.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Problems found in declarative level data.
///
/// Only `NoShips`, `UnknownLevel` and `Json` are fatal for the entry they
/// belong to; the rest are recovered from with a fallback.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A formation names no ship classes to spawn.
    #[error("formation has no ship classes")]
    NoShips,
    /// An explicit enemy count range cannot produce any ship.
    #[error("enemy count range {min}..={max} is empty")]
    EmptyCountRange { min: u32, max: u32 },
    /// A diamond grid has no occupied cells.
    #[error("formation grid has no occupied cells")]
    EmptyGrid,
    /// A grid cell refers to a ship class the formation does not list.
    #[error("grid cell uses ship index {index}, only {available} ship classes given")]
    ShipIndexOutOfRange { index: usize, available: usize },
    /// A path tactic without waypoints.
    #[error("path tactic has no segments")]
    EmptyPath,
    /// A speed override that would never move the ship.
    #[error("speed must be positive, got {0}")]
    NonPositiveSpeed(f64),
    /// A probability outside 0.0..=1.0.
    #[error("shooting chance {0} is outside 0.0..=1.0")]
    InvalidChance(f64),
    /// Lookup of a level identifier that is not registered.
    #[error("unknown level '{0}'")]
    UnknownLevel(String),
    /// A level document that is not valid JSON for the expected shape.
    #[error("invalid level document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Whether the formation carrying this error must be skipped entirely.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConfigError::NoShips | ConfigError::UnknownLevel(_) | ConfigError::Json(_)
        )
    }
}
