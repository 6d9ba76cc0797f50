//! Declarative level data.
//!
//! Levels are built once (by hand in code or from a JSON document) and are
//! read-only afterwards. Field names serialize in camelCase so level
//! documents read the same as the data model (`shootingChance`,
//! `formationGrid`, `widthPercent`, ...).

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{FormationKind, ShipClass, WeaponKind};
use crate::error::{ConfigError, Result};

/// Inclusive ship count range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive delay range in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min: f64,
    pub max: f64,
}

impl CountRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn exactly(count: u32) -> Self {
        Self::new(count, count)
    }

    /// A range that can produce at least one ship.
    pub fn is_usable(&self) -> bool {
        self.max > 0 && self.min <= self.max
    }
}

impl DelayRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The same range with bounds in ascending order and clamped at zero.
    pub fn normalized(&self) -> Self {
        let lo = self.min.min(self.max).max(0.0);
        let hi = self.min.max(self.max).max(0.0);
        Self::new(lo, hi)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(DEFAULT_SHOT_DELAY_MIN_MS, DEFAULT_SHOT_DELAY_MAX_MS)
    }
}

/// Weapon fired by an enemy ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponSpec {
    pub kind: WeaponKind,
    /// Projectile speed (px/ms).
    pub projectile_speed: f64,
    pub damage: u32,
}

/// A waypoint-resolution primitive.
///
/// Segment order is traversal order. `PlayerTarget` is relative to the
/// anchor (the previously reached waypoint), so resolving the same segment
/// from a different anchor gives a different point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PathSegmentSpec {
    /// Fixed point given as screen fractions (may lie off-screen).
    #[serde(rename_all = "camelCase")]
    Coordinate {
        width_percent: f64,
        height_percent: f64,
    },
    /// Interpolate `approach` of the way from the anchor to the live player.
    PlayerTarget { approach: f64 },
    /// Sine perturbation around the wrapped segment's straight leg.
    Sinus {
        /// Lateral amplitude (px).
        amplitude: f64,
        /// Angular frequency (rad/ms).
        frequency: f64,
        target: Box<PathSegmentSpec>,
    },
}

impl PathSegmentSpec {
    pub fn coordinate(width_percent: f64, height_percent: f64) -> Self {
        PathSegmentSpec::Coordinate {
            width_percent,
            height_percent,
        }
    }

    pub fn player_target(approach: f64) -> Self {
        PathSegmentSpec::PlayerTarget { approach }
    }

    /// Wrap this segment in a sine perturbation.
    pub fn with_sinus(self, amplitude: f64, frequency: f64) -> Self {
        PathSegmentSpec::Sinus {
            amplitude,
            frequency,
            target: Box::new(self),
        }
    }
}

/// Path-following tactic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathTacticConfig {
    pub segments: Vec<PathSegmentSpec>,
    /// Path speed override (px/ms). Falls back to the formation speed.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Rotate the ship to face its direction of travel.
    #[serde(default = "default_true")]
    pub face_movement: bool,
    /// Extra start delay per ship index within the formation (ms).
    #[serde(default)]
    pub stagger_ms: f64,
}

/// Per-ship movement strategy attached by a formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TacticConfig {
    Path(PathTacticConfig),
}

/// When and how often the ships of a formation shoot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShootingConfig {
    /// Probability that a spawned ship shoots at all.
    pub shooting_chance: f64,
    /// Fixed number of shots per shooting ship.
    pub shots_per_enemy: u32,
    /// Range the first delay of every shot is drawn from.
    pub shot_delay: DelayRange,
    /// Keep firing at the drawn interval instead of a fixed count.
    pub continuous_fire: bool,
    /// Weapon override. Falls back to the ship class weapon.
    pub weapon: Option<WeaponSpec>,
}

impl Default for ShootingConfig {
    fn default() -> Self {
        Self {
            shooting_chance: 0.0,
            shots_per_enemy: 1,
            shot_delay: DelayRange::default(),
            continuous_fire: false,
            weapon: None,
        }
    }
}

/// Line / sinus layout: a zig-zag row with independent sine motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineLayout {
    /// Explicit count; overrides the width-derived default when usable.
    pub enemy_count: Option<CountRange>,
    /// Horizontal gap between ships. Defaults to an even split of the width.
    pub spacing: Option<f64>,
    /// Gap between the two zig-zag bands.
    pub vertical_spacing: f64,
    /// Lateral sine amplitude of the default motion (px).
    pub amplitude: f64,
    /// Sine frequency of the default motion (rad/ms).
    pub frequency: f64,
    /// Phase offset between neighbouring ships (ms).
    pub phase_step_ms: f64,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            enemy_count: None,
            spacing: None,
            vertical_spacing: LINE_DEFAULT_VERTICAL_SPACING,
            amplitude: DEFAULT_WEAVE_AMPLITUDE,
            frequency: DEFAULT_WEAVE_FREQUENCY,
            phase_step_ms: LINE_DEFAULT_PHASE_STEP_MS,
        }
    }
}

/// Diamond / grid layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiamondLayout {
    /// Ragged grid of ship indices into `FormationConfig::ships`;
    /// `null` cells are gaps.
    pub formation_grid: Option<Vec<Vec<Option<usize>>>>,
    /// Symmetric row counts used when no grid is given.
    pub rows: Option<Vec<usize>>,
    pub spacing: f64,
    pub vertical_spacing: f64,
    /// Horizontal anchor the formation enters at (screen fraction).
    pub start_width: f64,
    /// Horizontal anchor the formation travels toward (screen fraction).
    pub end_width: f64,
}

impl Default for DiamondLayout {
    fn default() -> Self {
        Self {
            formation_grid: None,
            rows: None,
            spacing: DIAMOND_DEFAULT_SPACING,
            vertical_spacing: DIAMOND_DEFAULT_VERTICAL_SPACING,
            start_width: 0.5,
            end_width: 0.5,
        }
    }
}

/// Layout variant with its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormationLayout {
    Line(LineLayout),
    Diamond(DiamondLayout),
}

impl FormationLayout {
    pub fn kind(&self) -> FormationKind {
        match self {
            FormationLayout::Line(_) => FormationKind::Line,
            FormationLayout::Diamond(_) => FormationKind::Diamond,
        }
    }
}

/// One formation of a wave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationConfig {
    /// Ship classes; line layouts cycle through them, grids index them.
    pub ships: Vec<ShipClass>,
    pub layout: FormationLayout,
    pub tactic: Option<TacticConfig>,
    pub shooting: ShootingConfig,
    /// Delay from the start of the wave until this formation spawns (ms).
    pub start_delay_ms: f64,
    /// Speed override (px/ms). Falls back to the first ship class speed.
    pub speed: Option<f64>,
}

impl FormationConfig {
    pub fn new(ships: Vec<ShipClass>, layout: FormationLayout) -> Self {
        Self {
            ships,
            layout,
            tactic: None,
            shooting: ShootingConfig::default(),
            start_delay_ms: 0.0,
            speed: None,
        }
    }

    pub fn line(ship: ShipClass, layout: LineLayout) -> Self {
        Self::new(vec![ship], FormationLayout::Line(layout))
    }

    pub fn diamond(ships: Vec<ShipClass>, layout: DiamondLayout) -> Self {
        Self::new(ships, FormationLayout::Diamond(layout))
    }

    pub fn with_tactic(mut self, tactic: TacticConfig) -> Self {
        self.tactic = Some(tactic);
        self
    }

    pub fn with_shooting(mut self, shooting: ShootingConfig) -> Self {
        self.shooting = shooting;
        self
    }

    pub fn with_start_delay(mut self, delay_ms: f64) -> Self {
        self.start_delay_ms = delay_ms;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Report the first problem in this formation, if any.
    pub fn validate(&self) -> Result<()> {
        if self.ships.is_empty() {
            return Err(ConfigError::NoShips);
        }
        if let Some(speed) = self.speed {
            if speed <= 0.0 {
                return Err(ConfigError::NonPositiveSpeed(speed));
            }
        }
        let chance = self.shooting.shooting_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::InvalidChance(chance));
        }
        match &self.layout {
            FormationLayout::Line(line) => {
                if let Some(range) = line.enemy_count {
                    if !range.is_usable() {
                        return Err(ConfigError::EmptyCountRange {
                            min: range.min,
                            max: range.max,
                        });
                    }
                }
            }
            FormationLayout::Diamond(diamond) => {
                if let Some(grid) = &diamond.formation_grid {
                    let mut occupied = 0;
                    for index in grid.iter().flatten().flatten() {
                        if *index >= self.ships.len() {
                            return Err(ConfigError::ShipIndexOutOfRange {
                                index: *index,
                                available: self.ships.len(),
                            });
                        }
                        occupied += 1;
                    }
                    if occupied == 0 {
                        return Err(ConfigError::EmptyGrid);
                    }
                }
            }
        }
        if let Some(TacticConfig::Path(path)) = &self.tactic {
            if path.segments.is_empty() {
                return Err(ConfigError::EmptyPath);
            }
            if let Some(speed) = path.speed {
                if speed <= 0.0 {
                    return Err(ConfigError::NonPositiveSpeed(speed));
                }
            }
        }
        Ok(())
    }
}

/// One wave: formations that spawn concurrently, each after its own delay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaveStep {
    pub formations: Vec<FormationConfig>,
}

impl WaveStep {
    pub fn new(formations: Vec<FormationConfig>) -> Self {
        Self { formations }
    }
}

/// A complete level: a name and its ordered waves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub waves: Vec<WaveStep>,
}

impl LevelConfig {
    pub fn new(name: impl Into<String>, waves: Vec<WaveStep>) -> Self {
        Self {
            name: name.into(),
            waves,
        }
    }

    /// Total number of formations across all waves.
    pub fn total_formations(&self) -> usize {
        self.waves.iter().map(|w| w.formations.len()).sum()
    }
}

/// A formation entry as written in a level document: a kind tag, ship
/// references, and a free-form per-kind payload in `config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationSpec {
    pub kind: FormationKind,
    pub ships: Vec<ShipClass>,
    #[serde(default)]
    pub config: serde_json::Value,
    #[serde(default)]
    pub tactic: Option<TacticConfig>,
    #[serde(default)]
    pub shooting: ShootingConfig,
    #[serde(default)]
    pub start_delay: f64,
    #[serde(default)]
    pub speed: Option<f64>,
}

impl FormationSpec {
    /// Decode the per-kind payload into a typed formation.
    pub fn into_config(self) -> Result<FormationConfig> {
        let layout = match self.kind {
            FormationKind::Line => FormationLayout::Line(decode_payload(self.config)?),
            FormationKind::Diamond => FormationLayout::Diamond(decode_payload(self.config)?),
        };
        Ok(FormationConfig {
            ships: self.ships,
            layout,
            tactic: self.tactic,
            shooting: self.shooting,
            start_delay_ms: self.start_delay,
            speed: self.speed,
        })
    }
}

fn decode_payload<T>(payload: serde_json::Value) -> Result<T>
where
    T: Default + serde::de::DeserializeOwned,
{
    if payload.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(payload)?)
}

fn default_true() -> bool {
    true
}
