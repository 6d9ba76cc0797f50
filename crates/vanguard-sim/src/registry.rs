//! Level registry: maps level identifiers to level definitions.
//!
//! The built-in table is constructed once and shared through
//! `builtin_registry()`. Additional registries can be loaded from JSON
//! level documents.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use log::{debug, warn};
use serde::Deserialize;

use vanguard_core::config::{FormationConfig, FormationSpec, LevelConfig, WaveStep};
use vanguard_core::error::{ConfigError, Result};

use crate::levels;

/// Read-only lookup from identifier to level.
#[derive(Debug, Clone, Default)]
pub struct LevelRegistry {
    levels: BTreeMap<String, LevelConfig>,
}

/// Top-level shape of a level document.
#[derive(Debug, Deserialize)]
struct RegistryDocument {
    levels: BTreeMap<String, LevelDocument>,
}

#[derive(Debug, Deserialize)]
struct LevelDocument {
    name: String,
    #[serde(default)]
    waves: Vec<Vec<serde_json::Value>>,
}

impl LevelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in level.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, level) in levels::all() {
            registry.register(id, level);
        }
        registry
    }

    /// Add or replace a level. Returns the replaced definition.
    pub fn register(&mut self, id: impl Into<String>, level: LevelConfig) -> Option<LevelConfig> {
        self.levels.insert(id.into(), level)
    }

    pub fn get(&self, id: &str) -> Option<&LevelConfig> {
        self.levels.get(id)
    }

    /// Like `get`, but an unknown identifier is an error.
    pub fn require(&self, id: &str) -> Result<&LevelConfig> {
        self.get(id)
            .ok_or_else(|| ConfigError::UnknownLevel(id.to_string()))
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Load levels from a JSON document of the form
    /// `{ "levels": { "<id>": { "name": ..., "waves": [[<formation>, ...], ...] } } }`.
    ///
    /// A document that does not have this shape is an error. Individual
    /// formation entries that fail to decode are skipped with a warning.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: RegistryDocument = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for (id, level) in document.levels {
            let waves = level
                .waves
                .into_iter()
                .enumerate()
                .map(|(wave, entries)| {
                    WaveStep::new(
                        entries
                            .into_iter()
                            .filter_map(|entry| decode_formation(&id, wave, entry))
                            .collect(),
                    )
                })
                .collect();
            let level = LevelConfig::new(level.name, waves);
            debug!(
                "loaded level '{id}': {} waves, {} formations",
                level.waves.len(),
                level.total_formations()
            );
            registry.register(id, level);
        }
        Ok(registry)
    }
}

fn decode_formation(id: &str, wave: usize, entry: serde_json::Value) -> Option<FormationConfig> {
    let decoded = serde_json::from_value::<FormationSpec>(entry)
        .map_err(ConfigError::from)
        .and_then(FormationSpec::into_config);
    match decoded {
        Ok(config) => Some(config),
        Err(err) => {
            warn!("level '{id}' wave {wave}: skipping formation: {err}");
            None
        }
    }
}

/// The shared built-in registry, built on first use.
pub fn builtin_registry() -> &'static LevelRegistry {
    static REGISTRY: OnceLock<LevelRegistry> = OnceLock::new();
    REGISTRY.get_or_init(LevelRegistry::builtin)
}
