//! Level definitions: hand-built wave compositions shipped with the game.
//!
//! Each level lists its waves in order; formations inside a wave spawn
//! concurrently after their own start delays.

use vanguard_core::config::*;
use vanguard_core::enums::{ShipClass, WeaponKind};

/// Every built-in level with its registry identifier.
pub fn all() -> Vec<(&'static str, LevelConfig)> {
    vec![
        ("first_contact", first_contact()),
        ("blood_hunters", blood_hunters()),
        ("pincer", pincer()),
    ]
}

/// "First Contact"
/// 2 waves: a weaving scout line, then a hunter diamond crossing the screen.
fn first_contact() -> LevelConfig {
    let scouts = FormationConfig::line(ShipClass::Scout, LineLayout::default()).with_shooting(
        ShootingConfig {
            shooting_chance: 0.3,
            ..Default::default()
        },
    );

    let hunters = FormationConfig::diamond(
        vec![ShipClass::Hunter],
        DiamondLayout {
            start_width: 0.3,
            end_width: 0.7,
            ..Default::default()
        },
    )
    .with_shooting(ShootingConfig {
        shooting_chance: 0.5,
        ..Default::default()
    });

    LevelConfig::new(
        "First Contact",
        vec![WaveStep::new(vec![scouts]), WaveStep::new(vec![hunters])],
    )
}

/// "Blood Hunters"
/// 3 waves: hunters on a swooping path, twin diamonds (the second one
/// delayed 1.5s), then raiders diving at the player with continuous fire.
fn blood_hunters() -> LevelConfig {
    let swoop = PathTacticConfig {
        segments: vec![
            PathSegmentSpec::coordinate(0.5, 0.3).with_sinus(40.0, 0.004),
            PathSegmentSpec::player_target(0.6),
            PathSegmentSpec::coordinate(0.5, 1.3),
        ],
        speed: None,
        face_movement: true,
        stagger_ms: 150.0,
    };
    let hunters = FormationConfig::line(
        ShipClass::Hunter,
        LineLayout {
            enemy_count: Some(CountRange::new(3, 5)),
            ..Default::default()
        },
    )
    .with_tactic(TacticConfig::Path(swoop))
    .with_shooting(ShootingConfig {
        shooting_chance: 0.6,
        shots_per_enemy: 2,
        ..Default::default()
    });

    let left = FormationConfig::diamond(
        vec![ShipClass::Hunter, ShipClass::Scout],
        DiamondLayout {
            rows: Some(vec![1, 2, 3]),
            start_width: 0.25,
            end_width: 0.4,
            ..Default::default()
        },
    );
    let right = FormationConfig::diamond(
        vec![ShipClass::Hunter, ShipClass::Scout],
        DiamondLayout {
            rows: Some(vec![1, 2, 3]),
            start_width: 0.75,
            end_width: 0.6,
            ..Default::default()
        },
    )
    .with_start_delay(1500.0);

    let dive = PathTacticConfig {
        segments: vec![
            PathSegmentSpec::coordinate(0.5, 0.2),
            PathSegmentSpec::player_target(1.0).with_sinus(25.0, 0.006),
            PathSegmentSpec::player_target(2.0),
        ],
        speed: None,
        face_movement: true,
        stagger_ms: 250.0,
    };
    let raiders = FormationConfig::line(
        ShipClass::Raider,
        LineLayout {
            enemy_count: Some(CountRange::new(2, 3)),
            ..Default::default()
        },
    )
    .with_tactic(TacticConfig::Path(dive))
    .with_shooting(ShootingConfig {
        shooting_chance: 0.8,
        shot_delay: DelayRange::new(600.0, 1200.0),
        continuous_fire: true,
        ..Default::default()
    });

    LevelConfig::new(
        "Blood Hunters",
        vec![
            WaveStep::new(vec![hunters]),
            WaveStep::new(vec![left, right]),
            WaveStep::new(vec![raiders]),
        ],
    )
}

/// "Pincer"
/// 2 waves: a hand-drawn diamond with a gunship core, then two scout lines
/// converging from the flanks while a gunship line holds the center.
fn pincer() -> LevelConfig {
    let grid = vec![
        vec![None, None, Some(1), None, None],
        vec![None, Some(1), Some(0), Some(1), None],
        vec![Some(1), Some(0), None, Some(0), Some(1)],
        vec![None, Some(1), Some(0), Some(1), None],
        vec![None, None, Some(1), None, None],
    ];
    let fortress = FormationConfig::diamond(
        vec![ShipClass::Gunship, ShipClass::Scout],
        DiamondLayout {
            formation_grid: Some(grid),
            spacing: 44.0,
            ..Default::default()
        },
    )
    .with_speed(0.08)
    .with_shooting(ShootingConfig {
        shooting_chance: 0.4,
        shots_per_enemy: 3,
        ..Default::default()
    });

    let flank = |entry: f64, exit: f64, delay: f64| {
        FormationConfig::line(
            ShipClass::Scout,
            LineLayout {
                enemy_count: Some(CountRange::exactly(3)),
                spacing: Some(60.0),
                ..Default::default()
            },
        )
        .with_tactic(TacticConfig::Path(PathTacticConfig {
            segments: vec![
                PathSegmentSpec::coordinate(entry, 0.25),
                PathSegmentSpec::player_target(0.5),
                PathSegmentSpec::coordinate(exit, 1.2),
            ],
            speed: None,
            face_movement: true,
            stagger_ms: 100.0,
        }))
        .with_start_delay(delay)
    };
    let center = FormationConfig::line(
        ShipClass::Gunship,
        LineLayout {
            enemy_count: Some(CountRange::exactly(2)),
            amplitude: 30.0,
            ..Default::default()
        },
    )
    .with_shooting(ShootingConfig {
        shooting_chance: 1.0,
        weapon: Some(WeaponSpec {
            kind: WeaponKind::Seeker,
            projectile_speed: 0.25,
            damage: 2,
        }),
        ..Default::default()
    });

    LevelConfig::new(
        "Pincer",
        vec![
            WaveStep::new(vec![fortress]),
            WaveStep::new(vec![
                flank(0.15, 0.85, 0.0),
                flank(0.85, 0.15, 800.0),
                center,
            ]),
        ],
    )
}
