//! Enemy fire scheduling.
//!
//! Each spawned ship rolls once against the formation's shooting chance.
//! Ships that pass get their shots scheduled on the scene under a single
//! cancel token, so destroying the formation silences them all.

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use vanguard_core::config::{DelayRange, ShootingConfig, WeaponSpec};
use vanguard_core::constants::{CONTINUOUS_FIRE_MIN_INTERVAL_MS, SHOT_STAGGER_MS};

use crate::scene::{CancelToken, EntityId, Scene};

/// Roll and schedule the shots of one ship.
///
/// Returns the token guarding every scheduled shot, or `None` when the
/// ship does not shoot.
pub fn arm<S: Scene + ?Sized>(
    scene: &mut S,
    rng: &mut ChaCha8Rng,
    entity: EntityId,
    shooting: &ShootingConfig,
    weapon: WeaponSpec,
) -> Option<CancelToken> {
    let chance = shooting.shooting_chance;
    let chance = if chance.is_finite() {
        chance.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if chance <= 0.0 || rng.gen::<f64>() >= chance {
        return None;
    }

    let delays = shooting.shot_delay.normalized();
    let token = CancelToken::new();
    if shooting.continuous_fire {
        let mut cadence = Cadence {
            rng: ChaCha8Rng::seed_from_u64(rng.gen()),
            delays,
        };
        let first = cadence.next_interval();
        schedule_shot(scene, &token, entity, weapon, first, Some(cadence));
    } else {
        for index in 0..shooting.shots_per_enemy {
            let delay = draw(rng, delays) + index as f64 * SHOT_STAGGER_MS;
            schedule_shot(scene, &token, entity, weapon, delay, None);
        }
    }
    trace!("entity {} armed: {:?}", entity.0, weapon.kind);
    Some(token)
}

fn draw(rng: &mut ChaCha8Rng, delays: DelayRange) -> f64 {
    if delays.max > delays.min {
        rng.gen_range(delays.min..=delays.max)
    } else {
        delays.min
    }
}

/// Per-ship stream of continuous-fire intervals, seeded from the level RNG.
struct Cadence {
    rng: ChaCha8Rng,
    delays: DelayRange,
}

impl Cadence {
    fn next_interval(&mut self) -> f64 {
        draw(&mut self.rng, self.delays).max(CONTINUOUS_FIRE_MIN_INTERVAL_MS)
    }
}

/// Fire after `delay_ms`. With a cadence, re-arm after every shot at a
/// freshly drawn interval. Every firing re-checks that the ship is alive.
fn schedule_shot<S: Scene + ?Sized>(
    scene: &mut S,
    token: &CancelToken,
    entity: EntityId,
    weapon: WeaponSpec,
    delay_ms: f64,
    cadence: Option<Cadence>,
) {
    let rearm_token = token.clone();
    scene.schedule_with(
        token,
        delay_ms,
        Box::new(move |scene: &mut dyn Scene| {
            if !scene.is_active(entity) {
                return;
            }
            scene.fire_weapon(entity, &weapon);
            if let Some(mut cadence) = cadence {
                let interval = cadence.next_interval();
                schedule_shot(scene, &rearm_token, entity, weapon, interval, Some(cadence));
            }
        }),
    );
}
