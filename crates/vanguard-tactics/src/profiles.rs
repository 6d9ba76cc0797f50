//! Ship-class-specific behavioral profiles.
//!
//! Consolidates per-class movement and weapon parameters.

use vanguard_core::config::WeaponSpec;
use vanguard_core::enums::{ShipClass, WeaponKind};

/// Behavioral profile for a ship class.
pub struct ShipProfile {
    /// Cruise speed (px/ms).
    pub speed: f64,
    /// Weapon fired when the formation's shooting roll succeeds.
    pub weapon: WeaponSpec,
}

/// Get the behavioral profile for a given ship class.
pub fn get_profile(class: ShipClass) -> ShipProfile {
    match class {
        ShipClass::Scout => ShipProfile {
            speed: 0.16,
            weapon: WeaponSpec {
                kind: WeaponKind::Laser,
                projectile_speed: 0.35,
                damage: 1,
            },
        },
        ShipClass::Hunter => ShipProfile {
            speed: 0.12,
            weapon: WeaponSpec {
                kind: WeaponKind::Laser,
                projectile_speed: 0.3,
                damage: 1,
            },
        },
        ShipClass::Gunship => ShipProfile {
            speed: 0.07,
            weapon: WeaponSpec {
                kind: WeaponKind::Spread,
                projectile_speed: 0.25,
                damage: 2,
            },
        },
        ShipClass::Raider => ShipProfile {
            speed: 0.2,
            weapon: WeaponSpec {
                kind: WeaponKind::Seeker,
                projectile_speed: 0.3,
                damage: 1,
            },
        },
    }
}
