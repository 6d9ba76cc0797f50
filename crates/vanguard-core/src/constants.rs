//! Simulation constants and tuning parameters.
//!
//! Distances are in pixels, times in milliseconds, speeds in pixels per
//! millisecond and angular frequencies in radians per millisecond.

/// Default frame length (ms), 60 Hz.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

// --- Screen ---

/// Default screen width (px).
pub const DEFAULT_SCREEN_WIDTH: f64 = 800.0;

/// Default screen height (px).
pub const DEFAULT_SCREEN_HEIGHT: f64 = 600.0;

/// Distance beyond a screen edge a ship must travel before it is pruned.
pub const OFFSCREEN_MARGIN: f64 = 64.0;

// --- Path segments ---

/// How far below the bottom edge a player-target segment aims when no
/// player is alive.
pub const PLAYER_FALLBACK_MARGIN: f64 = 100.0;

// --- Line / sinus layout ---

/// One ship per this many pixels of screen width, lower bound.
pub const LINE_MIN_COUNT_DIVISOR: f64 = 250.0;

/// One ship per this many pixels of screen width, upper bound.
pub const LINE_MAX_COUNT_DIVISOR: f64 = 150.0;

/// Floor of the width-derived minimum ship count.
pub const LINE_MIN_COUNT_FLOOR: u32 = 2;

/// Floor of the width-derived maximum ship count.
pub const LINE_MAX_COUNT_FLOOR: u32 = 3;

/// Default gap between the two zig-zag bands (px).
pub const LINE_DEFAULT_VERTICAL_SPACING: f64 = 40.0;

/// Default phase step between neighbouring ships' sine motion (ms).
pub const LINE_DEFAULT_PHASE_STEP_MS: f64 = 300.0;

/// Default lateral weave amplitude (px).
pub const DEFAULT_WEAVE_AMPLITUDE: f64 = 60.0;

/// Default lateral weave frequency (rad/ms), one cycle every ~2.1 s.
pub const DEFAULT_WEAVE_FREQUENCY: f64 = 0.003;

/// Vertical spawn line for formations, as a fraction of screen height.
pub const FORMATION_SPAWN_HEIGHT: f64 = -0.08;

// --- Diamond / grid layout ---

/// Row counts used when a diamond formation has no usable grid.
pub const DIAMOND_DEFAULT_ROWS: [usize; 5] = [1, 2, 3, 2, 1];

/// Default horizontal spacing between grid columns (px).
pub const DIAMOND_DEFAULT_SPACING: f64 = 48.0;

/// Default vertical spacing between grid rows (px).
pub const DIAMOND_DEFAULT_VERTICAL_SPACING: f64 = 40.0;

// --- Shooting ---

/// Extra delay added per shot index when a ship fires several shots.
pub const SHOT_STAGGER_MS: f64 = 250.0;

/// Default lower bound of the shot delay range (ms).
pub const DEFAULT_SHOT_DELAY_MIN_MS: f64 = 800.0;

/// Default upper bound of the shot delay range (ms).
pub const DEFAULT_SHOT_DELAY_MAX_MS: f64 = 2500.0;

/// Shortest re-arm interval for continuous fire (ms).
pub const CONTINUOUS_FIRE_MIN_INTERVAL_MS: f64 = 100.0;

// --- Weapons ---

/// Half-angle of the spread weapon's fan (radians, 15°).
pub const SPREAD_HALF_ANGLE: f64 = std::f64::consts::PI / 12.0;

// --- Player ---

/// Default player position as screen fractions.
pub const PLAYER_START_FRACTION: (f64, f64) = (0.5, 0.9);
