//! Headless scene backed by a hecs world.
//!
//! Implements `Scene` without any rendering: bodies move by velocity
//! integration, timers fire against the scene clock, and weapons spawn
//! projectile entities. Deterministic for a given sequence of calls.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;
use hecs::{Entity, World};
use log::trace;

use vanguard_core::config::WeaponSpec;
use vanguard_core::constants::SPREAD_HALF_ANGLE;
use vanguard_core::enums::{ShipClass, WeaponKind};
use vanguard_core::types::{from_heading, heading, Bounds, SceneTime};

use crate::components::{Body, Projectile, Ship};
use crate::scene::{CancelToken, EntityId, Scene, TimerCallback};
use crate::systems;
use crate::systems::timers::TimerQueue;

/// Scene implementation used by the engine and by tests.
pub struct SimScene {
    world: World,
    bounds: Bounds,
    time: SceneTime,
    player: Option<DVec2>,
    timers: TimerQueue,
    shots_fired: u64,
    despawn_buffer: Vec<Entity>,
}

impl SimScene {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            world: World::new(),
            bounds,
            time: SceneTime::default(),
            player: None,
            timers: TimerQueue::new(),
            shots_fired: 0,
            despawn_buffer: Vec::new(),
        }
    }

    pub fn with_player(mut self, position: DVec2) -> Self {
        self.player = Some(position);
        self
    }

    /// Advance the scene clock by one frame: integrate motion, fire due
    /// timers, then remove projectiles that left the screen.
    pub fn advance(&mut self, delta_ms: f64) {
        let delta_ms = delta_ms.max(0.0);
        self.time.advance(delta_ms);
        systems::movement::run(&mut self.world, delta_ms);

        // Timers scheduled by these callbacks wait for a later frame.
        for timer in self.timers.take_due(self.time.elapsed_ms) {
            if timer.token.is_cancelled() {
                continue;
            }
            (timer.callback)(self);
        }

        systems::cleanup::run(&mut self.world, self.bounds, &mut self.despawn_buffer);
    }

    pub fn set_player_position(&mut self, position: DVec2) {
        self.player = Some(position);
    }

    pub fn remove_player(&mut self) {
        self.player = None;
    }

    pub fn player(&self) -> Option<DVec2> {
        self.player
    }

    pub fn time(&self) -> SceneTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn shots_fired(&self) -> u64 {
        self.shots_fired
    }

    /// Timers that can still fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.live_count()
    }

    pub fn ship_count(&self) -> usize {
        self.world.query::<&Ship>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Ids of every live ship, ordered.
    pub fn ship_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .world
            .query::<&Ship>()
            .iter()
            .map(|(entity, _)| to_id(entity))
            .collect();
        ids.sort();
        ids
    }

    pub fn rotation(&self, entity: EntityId) -> Option<f64> {
        let entity = self.live(entity)?;
        self.world
            .get::<&Body>(entity)
            .ok()
            .map(|body| body.rotation)
    }

    pub fn velocity(&self, entity: EntityId) -> Option<DVec2> {
        let entity = self.live(entity)?;
        self.world
            .get::<&Body>(entity)
            .ok()
            .map(|body| body.velocity)
    }

    /// Velocities of all live projectiles.
    pub fn projectile_velocities(&self) -> Vec<DVec2> {
        self.world
            .query::<(&Body, &Projectile)>()
            .iter()
            .map(|(_, (body, _))| body.velocity)
            .collect()
    }

    fn live(&self, entity: EntityId) -> Option<Entity> {
        Entity::from_bits(entity.0).filter(|e| self.world.contains(*e))
    }

    fn with_body(&mut self, entity: EntityId, apply: impl FnOnce(&mut Body)) {
        let Some(entity) = self.live(entity) else {
            return;
        };
        if let Ok(mut body) = self.world.get::<&mut Body>(entity) {
            apply(&mut body);
        }
    }

    fn spawn_projectile(
        &mut self,
        owner: EntityId,
        origin: DVec2,
        direction: DVec2,
        weapon: &WeaponSpec,
    ) {
        self.world.spawn((
            Body {
                position: origin,
                velocity: direction * weapon.projectile_speed,
                rotation: heading(direction),
            },
            Projectile {
                owner,
                damage: weapon.damage,
            },
        ));
        self.shots_fired += 1;
    }
}

fn to_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

impl Scene for SimScene {
    fn spawn_entity(&mut self, position: DVec2, class: ShipClass) -> EntityId {
        let entity = self.world.spawn((
            Body {
                position,
                velocity: DVec2::ZERO,
                rotation: FRAC_PI_2,
            },
            Ship { class },
        ));
        to_id(entity)
    }

    fn destroy_entity(&mut self, entity: EntityId) {
        if let Some(entity) = self.live(entity) {
            let _ = self.world.despawn(entity);
        }
    }

    fn is_active(&self, entity: EntityId) -> bool {
        self.live(entity).is_some()
    }

    fn position(&self, entity: EntityId) -> Option<DVec2> {
        let entity = self.live(entity)?;
        self.world
            .get::<&Body>(entity)
            .ok()
            .map(|body| body.position)
    }

    fn set_position(&mut self, entity: EntityId, position: DVec2) {
        self.with_body(entity, |body| body.position = position);
    }

    fn set_rotation(&mut self, entity: EntityId, rotation: f64) {
        self.with_body(entity, |body| body.rotation = rotation);
    }

    fn set_velocity(&mut self, entity: EntityId, velocity: DVec2) {
        self.with_body(entity, |body| body.velocity = velocity);
    }

    fn schedule_with(&mut self, token: &CancelToken, delay_ms: f64, callback: TimerCallback) {
        let due_ms = self.time.elapsed_ms + delay_ms.max(0.0);
        self.timers.schedule(due_ms, token.clone(), callback);
    }

    fn screen_bounds(&self) -> Bounds {
        self.bounds
    }

    fn player_position(&self) -> Option<DVec2> {
        self.player
    }

    fn fire_weapon(&mut self, entity: EntityId, weapon: &WeaponSpec) {
        let Some(origin) = self.position(entity) else {
            return;
        };
        let down = DVec2::new(0.0, 1.0);
        match weapon.kind {
            WeaponKind::Laser => self.spawn_projectile(entity, origin, down, weapon),
            WeaponKind::Seeker => {
                let direction = self
                    .player
                    .map(|player| (player - origin).normalize_or_zero())
                    .filter(|d| *d != DVec2::ZERO)
                    .unwrap_or(down);
                self.spawn_projectile(entity, origin, direction, weapon);
            }
            WeaponKind::Spread => {
                for offset in [-SPREAD_HALF_ANGLE, 0.0, SPREAD_HALF_ANGLE] {
                    let direction = from_heading(FRAC_PI_2 + offset);
                    self.spawn_projectile(entity, origin, direction, weapon);
                }
            }
        }
        trace!("entity {} fired {:?}", entity.0, weapon.kind);
    }

    fn now_ms(&self) -> f64 {
        self.time.elapsed_ms
    }
}
