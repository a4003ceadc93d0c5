//! The effect lifecycle manager.
//!
//! [`EffectManager`] owns every live combat effect instance, advances them
//! each frame, resolves collisions against the caller's targets, applies
//! damage and status effects, and recycles expired instances. It never
//! draws; rendering reads the live collections through the accessors.
//!
//! Within one `update` call the collections are processed in a fixed order:
//! melee arcs, homing shots, piercing bursts, muzzle flashes, standard
//! projectiles, beams, explosions, particles, summons. Damage application
//! follows the same order, which keeps replays deterministic.

use glam::Vec2;
use tracing::{debug, trace};

use arclight_common::{heading, unit_from_angle, Rgba};

use crate::archetype::{
    ArchetypeKind, ProjectileStyle, DEFAULT_TRAVEL_DISTANCE, GUIDED_HIT_RADIUS, LIFETIME_FLOOR,
    MULTI_HIT_RANGE, MULTI_HIT_SPREAD, MULTI_HIT_STAGGER,
};
use crate::area::{Beam, Explosion};
use crate::config::EffectConfig;
use crate::element::Element;
use crate::events::{CombatEvent, EventBus};
use crate::guided::{HomingShot, PiercingBurst};
use crate::particle::{Particle, ParticleEmitter};
use crate::pool::ProjectilePool;
use crate::projectile::{MuzzleFlash, Projectile, ProjectileParams};
use crate::skill::SkillDescriptor;
use crate::status::StatusFlags;
use crate::strike::MeleeArc;
use crate::summon::{Summon, SummonMode};
use crate::target::CombatTarget;

/// Chance per tick that a travelling projectile sheds a trail puff.
const TRAIL_PUFF_CHANCE: f32 = 0.3;

/// Per-spawn knobs for standard projectiles.
#[derive(Debug, Clone, Copy)]
pub struct SpawnOptions {
    /// Speed override in units per frame; `None` uses the archetype default.
    pub speed: Option<f32>,
    /// Size scalar.
    pub size: f32,
    /// Silhouette override; `None` infers from the skill.
    pub style: Option<ProjectileStyle>,
    /// Activation delay in seconds.
    pub delay: f32,
}

impl Default for SpawnOptions {
    fn default() -> Self {
        Self {
            speed: None,
            size: 1.0,
            style: None,
            delay: 0.0,
        }
    }
}

/// Owns and advances all live combat effects.
#[derive(Debug)]
pub struct EffectManager {
    config: EffectConfig,
    pool: ProjectilePool,
    standard_overflow: Vec<Projectile>,
    beams: Vec<Beam>,
    explosions: Vec<Explosion>,
    arcs: Vec<MeleeArc>,
    homing: Vec<HomingShot>,
    bursts: Vec<PiercingBurst>,
    flashes: Vec<MuzzleFlash>,
    summons: Vec<Summon>,
    particles: ParticleEmitter,
    events: EventBus,
    pool_misses: u64,
}

impl Default for EffectManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectManager {
    /// Creates a manager with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EffectConfig::default())
    }

    /// Creates a manager with explicit configuration.
    #[must_use]
    pub fn with_config(config: EffectConfig) -> Self {
        Self {
            pool: ProjectilePool::with_capacity(config.pool_capacity),
            events: EventBus::new(config.event_capacity),
            config,
            standard_overflow: Vec::new(),
            beams: Vec::new(),
            explosions: Vec::new(),
            arcs: Vec::new(),
            homing: Vec::new(),
            bursts: Vec::new(),
            flashes: Vec::new(),
            summons: Vec::new(),
            particles: ParticleEmitter::new(),
            pool_misses: 0,
        }
    }

    // ------------------------------------------------------------------
    // Spawning
    // ------------------------------------------------------------------

    /// Spawns a standard projectile flying from `origin` toward `target`.
    ///
    /// A zero-length aim vector falls back to the default heading instead of
    /// dividing by zero, and the lifetime keeps even point-blank shots
    /// visible for at least two seconds.
    pub fn spawn_standard(
        &mut self,
        skill: &SkillDescriptor,
        origin: Vec2,
        target: Vec2,
        options: SpawnOptions,
    ) -> &Projectile {
        let params = self.standard_params(skill, origin, target, &options);
        trace!(skill = skill.id.raw(), "spawning standard projectile");
        self.particles.spawn_trail(origin, params.color);

        if let Some(index) = self.pool.acquire() {
            self.pool.reset_slot(index, params);
            return self.pool.slot(index);
        }

        // Pool exhausted: fall back to a fresh allocation. Not an error,
        // only a capacity hint.
        self.pool_misses += 1;
        debug!(live = self.pool.capacity(), "projectile pool exhausted");
        self.events.publish(CombatEvent::PoolExhausted {
            live: self.pool.capacity(),
        });

        self.standard_overflow.push(Projectile::new(params));
        let index = self.standard_overflow.len() - 1;
        &self.standard_overflow[index]
    }

    /// Spawns `count` standard projectiles fanned around the origin→target
    /// bearing, each staggered and slightly faster and larger than the last
    /// so simultaneous hits stay visually distinct.
    pub fn spawn_multi_hit(
        &mut self,
        skill: &SkillDescriptor,
        origin: Vec2,
        target: Vec2,
        count: u32,
    ) {
        if count <= 1 {
            self.spawn_standard(skill, origin, target, SpawnOptions::default());
            return;
        }

        let base = heading(origin, target);
        let step = MULTI_HIT_SPREAD / (count - 1) as f32;
        for i in 0..count {
            let offset = (i as f32 - (count - 1) as f32 / 2.0) * step;
            let aim = origin + unit_from_angle(base + offset) * MULTI_HIT_RANGE;
            self.spawn_standard(
                skill,
                origin,
                aim,
                SpawnOptions {
                    speed: Some(10.0 + 2.0 * i as f32),
                    size: 1.2 + 0.1 * i as f32,
                    style: None,
                    delay: MULTI_HIT_STAGGER * i as f32,
                },
            );
        }
    }

    /// Spawns a channeled beam between two points.
    pub fn spawn_beam(
        &mut self,
        skill: &SkillDescriptor,
        origin: Vec2,
        target: Vec2,
        duration: f32,
    ) -> &Beam {
        self.beams.push(Beam::new(
            skill.id,
            origin,
            target,
            skill.damage,
            skill.element,
            skill.status_flags(),
            duration,
            self.config.beam_tick_interval,
        ));
        let index = self.beams.len() - 1;
        &self.beams[index]
    }

    /// Spawns an explosion at a point.
    pub fn spawn_explosion(
        &mut self,
        skill: &SkillDescriptor,
        center: Vec2,
        radius: f32,
    ) -> &Explosion {
        let explosion = Explosion::new(
            skill.id,
            center,
            radius,
            skill.damage,
            skill.element,
            skill.status_flags(),
        );
        self.particles.spawn_burst(center, explosion.color);
        self.explosions.push(explosion);
        let index = self.explosions.len() - 1;
        &self.explosions[index]
    }

    /// Spawns a melee swing, optionally delayed by a windup.
    pub fn spawn_melee_arc(
        &mut self,
        origin: Vec2,
        angle: f32,
        color: Rgba,
        radius: f32,
        damage: f32,
        delay: f32,
    ) -> &MeleeArc {
        self.arcs
            .push(MeleeArc::new(origin, angle, color, radius, damage, delay));
        let index = self.arcs.len() - 1;
        &self.arcs[index]
    }

    /// Spawns a homing shot toward `target`, plus a muzzle flash at the
    /// firing position.
    pub fn spawn_homing_shot(
        &mut self,
        origin: Vec2,
        target: Vec2,
        damage: f32,
        homing: f32,
        pierce: u32,
        delay: f32,
    ) -> &HomingShot {
        self.flashes.push(MuzzleFlash::new(origin, delay));
        self.homing.push(HomingShot::new(
            origin,
            target,
            damage,
            homing,
            ArchetypeKind::HomingShot.default_speed(),
            self.config.homing_sense_radius,
            pierce,
            delay,
        ));
        let index = self.homing.len() - 1;
        &self.homing[index]
    }

    /// Spawns a piercing burst toward `target`, with the heading rotated by
    /// `spread` radians.
    pub fn spawn_piercing_burst(
        &mut self,
        skill: &SkillDescriptor,
        origin: Vec2,
        target: Vec2,
        pierce: u32,
        spread: f32,
        delay: f32,
    ) -> &PiercingBurst {
        self.bursts.push(PiercingBurst::new(
            origin,
            target,
            skill.damage,
            skill.element,
            ArchetypeKind::PiercingBurst.default_speed(),
            pierce,
            spread,
            delay,
        ));
        let index = self.bursts.len() - 1;
        &self.bursts[index]
    }

    /// Spawns a timed summon. `lifetime` of `None` uses the configured
    /// default.
    pub fn spawn_summon(
        &mut self,
        position: Vec2,
        lifetime: Option<f32>,
        mode: SummonMode,
        velocity: Vec2,
    ) -> &Summon {
        let lifetime = lifetime.unwrap_or(self.config.default_summon_lifetime);
        self.summons
            .push(Summon::new(position, lifetime, mode, velocity));
        let index = self.summons.len() - 1;
        &self.summons[index]
    }

    // ------------------------------------------------------------------
    // Frame update
    // ------------------------------------------------------------------

    /// Advances every live collection by `dt` seconds, resolving collisions
    /// against `targets`.
    ///
    /// An empty target list is fine: instances still travel and expire.
    pub fn update<T: CombatTarget>(&mut self, dt: f32, targets: &mut [T]) {
        let events = &self.events;
        let particles = &mut self.particles;

        // Melee arcs: one decisive swing, at most one victim.
        self.arcs.retain_mut(|arc| {
            arc.age += dt;
            if arc.is_active() && !arc.hit {
                for target in targets.iter_mut() {
                    if !target.is_alive() {
                        continue;
                    }
                    if arc.contains(target.position()) {
                        Self::apply_damage(
                            events,
                            target,
                            arc.damage,
                            Element::Physical,
                            StatusFlags::NONE,
                        );
                        arc.hit = true;
                        break;
                    }
                }
            }
            if arc.is_expired() {
                events.publish(CombatEvent::EffectExpired {
                    id: arc.id,
                    kind: ArchetypeKind::MeleeArc,
                });
                return false;
            }
            true
        });

        // Homing shots: re-aim toward the nearest live target, then move.
        self.homing.retain_mut(|shot| {
            if shot.is_active() {
                let mut nearest = None;
                let mut best = shot.sense_radius;
                for target in targets.iter() {
                    if !target.is_alive() {
                        continue;
                    }
                    let dist = shot.position.distance(target.position());
                    if dist < best {
                        best = dist;
                        nearest = Some(target.position());
                    }
                }
                if let Some(point) = nearest {
                    shot.steer_toward(point, dt);
                }
            }

            shot.advance(dt);
            if !shot.is_active() {
                return true;
            }

            for target in targets.iter_mut() {
                if !target.is_alive() {
                    continue;
                }
                let radius = GUIDED_HIT_RADIUS + target.hit_radius();
                if shot.position.distance(target.position()) < radius {
                    Self::apply_damage(
                        events,
                        target,
                        shot.damage,
                        Element::Physical,
                        StatusFlags::NONE,
                    );
                    shot.hits_remaining -= 1;
                    if shot.is_spent() {
                        particles.spawn_impact(shot.position, shot.color);
                        events.publish(CombatEvent::EffectExpired {
                            id: shot.id,
                            kind: ArchetypeKind::HomingShot,
                        });
                        return false;
                    }
                }
            }

            if shot.is_expired() {
                events.publish(CombatEvent::EffectExpired {
                    id: shot.id,
                    kind: ArchetypeKind::HomingShot,
                });
                return false;
            }
            true
        });

        // Piercing bursts: caller order decides who consumes the pierce.
        self.bursts.retain_mut(|burst| {
            burst.advance(dt);
            if !burst.is_active() {
                return true;
            }

            for target in targets.iter_mut() {
                if !target.is_alive() {
                    continue;
                }
                let radius = GUIDED_HIT_RADIUS + target.hit_radius();
                if burst.position.distance(target.position()) < radius {
                    Self::apply_damage(
                        events,
                        target,
                        burst.damage,
                        burst.element,
                        StatusFlags::NONE,
                    );
                    burst.hits_remaining -= 1;
                    if burst.is_spent() {
                        particles.spawn_impact(burst.position, burst.color);
                        events.publish(CombatEvent::EffectExpired {
                            id: burst.id,
                            kind: ArchetypeKind::PiercingBurst,
                        });
                        return false;
                    }
                }
            }

            if burst.is_expired() {
                events.publish(CombatEvent::EffectExpired {
                    id: burst.id,
                    kind: ArchetypeKind::PiercingBurst,
                });
                return false;
            }
            true
        });

        // Muzzle flashes.
        self.flashes.retain_mut(|flash| {
            flash.age += dt;
            !flash.is_expired()
        });

        // Standard projectiles: pooled slots first, then overflow.
        for index in 0..self.pool.capacity() {
            if !self.pool.is_active(index) {
                continue;
            }
            let remove = match self.pool.get_mut(index) {
                Some(projectile) => {
                    Self::step_standard(projectile, dt, targets, particles, events)
                }
                None => false,
            };
            if remove {
                self.pool.release(index);
            }
        }
        self.standard_overflow
            .retain_mut(|projectile| !Self::step_standard(projectile, dt, targets, particles, events));

        // Beams: discrete damage ticks, one per elapsed interval.
        self.beams.retain_mut(|beam| {
            if beam.advance(dt) {
                for target in targets.iter_mut() {
                    if !target.is_alive() {
                        continue;
                    }
                    if beam.hits(target.position()) {
                        Self::apply_damage(events, target, beam.damage, beam.element, beam.status);
                    }
                }
            }
            if beam.is_expired() {
                events.publish(CombatEvent::EffectExpired {
                    id: beam.id,
                    kind: ArchetypeKind::Beam,
                });
                return false;
            }
            true
        });

        // Explosions: damage exactly once, within the current radius.
        self.explosions.retain_mut(|explosion| {
            explosion.age += dt;
            if !explosion.dealt {
                explosion.dealt = true;
                let radius = explosion.radius();
                for target in targets.iter_mut() {
                    if !target.is_alive() {
                        continue;
                    }
                    if explosion.center.distance(target.position()) < radius {
                        Self::apply_damage(
                            events,
                            target,
                            explosion.damage,
                            explosion.element,
                            explosion.status,
                        );
                    }
                }
            }
            if explosion.is_expired() {
                events.publish(CombatEvent::EffectExpired {
                    id: explosion.id,
                    kind: ArchetypeKind::Explosion,
                });
                return false;
            }
            true
        });

        // Particles.
        particles.update(dt);

        // Summons render and expire last.
        self.summons.retain_mut(|summon| {
            summon.advance(dt);
            if summon.is_expired() {
                events.publish(CombatEvent::EffectExpired {
                    id: summon.id,
                    kind: ArchetypeKind::Summon,
                });
                return false;
            }
            true
        });
    }

    /// Drops every live instance and frees all pooled slots.
    pub fn clear(&mut self) {
        self.pool.clear();
        self.standard_overflow.clear();
        self.beams.clear();
        self.explosions.clear();
        self.arcs.clear();
        self.homing.clear();
        self.bursts.clear();
        self.flashes.clear();
        self.summons.clear();
        self.particles.clear();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Live standard projectiles, pooled first.
    pub fn standard(&self) -> impl Iterator<Item = &Projectile> {
        self.pool.iter_active().chain(self.standard_overflow.iter())
    }

    /// Live beams.
    #[must_use]
    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    /// Live explosions.
    #[must_use]
    pub fn explosions(&self) -> &[Explosion] {
        &self.explosions
    }

    /// Live melee arcs.
    #[must_use]
    pub fn melee_arcs(&self) -> &[MeleeArc] {
        &self.arcs
    }

    /// Live homing shots.
    #[must_use]
    pub fn homing_shots(&self) -> &[HomingShot] {
        &self.homing
    }

    /// Live piercing bursts.
    #[must_use]
    pub fn piercing_bursts(&self) -> &[PiercingBurst] {
        &self.bursts
    }

    /// Live muzzle flashes.
    #[must_use]
    pub fn muzzle_flashes(&self) -> &[MuzzleFlash] {
        &self.flashes
    }

    /// Live summons.
    #[must_use]
    pub fn summons(&self) -> &[Summon] {
        &self.summons
    }

    /// Live VFX particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        self.particles.particles()
    }

    /// Combat event bus; drain once per frame.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    /// Total live combat instances (particles excluded).
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.pool.active_count()
            + self.standard_overflow.len()
            + self.beams.len()
            + self.explosions.len()
            + self.arcs.len()
            + self.homing.len()
            + self.bursts.len()
            + self.flashes.len()
            + self.summons.len()
    }

    /// How many spawns missed the pool and allocated fresh.
    #[must_use]
    pub const fn pool_misses(&self) -> u64 {
        self.pool_misses
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn standard_params(
        &self,
        skill: &SkillDescriptor,
        origin: Vec2,
        target: Vec2,
        options: &SpawnOptions,
    ) -> ProjectileParams {
        let speed = options
            .speed
            .filter(|s| *s > 0.0)
            .unwrap_or_else(|| ArchetypeKind::Standard.default_speed());

        let delta = target - origin;
        let dist = delta.length();
        let velocity = if dist > 0.0 {
            delta / dist * speed
        } else {
            // Degenerate aim vector: default heading.
            Vec2::new(speed, 0.0)
        };

        let travel = if dist > 0.0 {
            dist
        } else {
            DEFAULT_TRAVEL_DISTANCE
        };
        let lifetime = (travel / speed + 1.0).max(LIFETIME_FLOOR);

        ProjectileParams {
            skill: skill.id,
            position: origin,
            velocity,
            target: Some(target),
            damage: skill.damage,
            element: skill.element,
            style: options.style.unwrap_or_else(|| skill.style()),
            size: options.size,
            color: skill.color(),
            lifetime,
            hits: skill.hit_budget(),
            status: skill.status_flags(),
            delay: options.delay,
            trail_len: self.config.max_trail_length,
        }
    }

    /// Advances one standard projectile; returns `true` when it should be
    /// removed.
    fn step_standard<T: CombatTarget>(
        projectile: &mut Projectile,
        dt: f32,
        targets: &mut [T],
        particles: &mut ParticleEmitter,
        events: &EventBus,
    ) -> bool {
        projectile.advance(dt);
        if !projectile.is_active() {
            return false;
        }

        if particles.chance(TRAIL_PUFF_CHANCE) {
            particles.spawn_trail(projectile.position, projectile.color);
        }

        if !projectile.is_spent() {
            for target in targets.iter_mut() {
                if !target.is_alive() {
                    continue;
                }
                let radius = projectile.hit_radius() + target.hit_radius();
                if projectile.position.distance(target.position()) < radius {
                    Self::apply_damage(
                        events,
                        target,
                        projectile.damage,
                        projectile.element,
                        projectile.status,
                    );
                    projectile.hits_remaining -= 1;
                    if projectile.is_spent() {
                        particles.spawn_impact(projectile.position, projectile.color);
                        events.publish(CombatEvent::EffectExpired {
                            id: projectile.id,
                            kind: ArchetypeKind::Standard,
                        });
                        return true;
                    }
                }
            }
        }

        if projectile.is_expired() {
            events.publish(CombatEvent::EffectExpired {
                id: projectile.id,
                kind: ArchetypeKind::Standard,
            });
            return true;
        }
        false
    }

    /// Applies clamped damage, status, and liveness to one target.
    fn apply_damage<T: CombatTarget>(
        events: &EventBus,
        target: &mut T,
        amount: f32,
        element: Element,
        status: StatusFlags,
    ) {
        if !target.is_alive() {
            return;
        }

        let amount = amount.max(0.0);
        let health = (target.health() - amount).max(0.0);
        target.set_health(health);
        target.apply_status(status);

        events.publish(CombatEvent::DamageDealt {
            target: target.id(),
            damage: amount,
            element,
        });

        if health <= 0.0 {
            target.set_alive(false);
            events.publish(CombatEvent::TargetDefeated {
                target: target.id(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetState;
    use arclight_common::SkillId;

    fn skill(damage: f32) -> SkillDescriptor {
        SkillDescriptor::new(SkillId::new(1), "Test Bolt").with_damage(damage)
    }

    fn targets_at(positions: &[(f32, f32)]) -> Vec<TargetState> {
        positions
            .iter()
            .enumerate()
            .map(|(i, (x, y))| TargetState::new(i as u64 + 1, Vec2::new(*x, *y), 100.0))
            .collect()
    }

    #[test]
    fn test_spawn_geometry_deterministic() {
        let mut manager = EffectManager::new();
        let p = manager.spawn_standard(
            &skill(5.0),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            SpawnOptions {
                speed: Some(10.0),
                ..Default::default()
            },
        );

        assert!((p.velocity.x - 10.0).abs() < 1e-5);
        assert!(p.velocity.y.abs() < 1e-5);
        assert!(p.lifetime >= 2.0);
    }

    #[test]
    fn test_zero_length_aim_defaults_heading() {
        let mut manager = EffectManager::new();
        let p = manager.spawn_standard(
            &skill(5.0),
            Vec2::ZERO,
            Vec2::ZERO,
            SpawnOptions::default(),
        );

        assert!(p.velocity.x > 0.0);
        assert!(p.velocity.y.abs() < 1e-6);
    }

    #[test]
    fn test_expiry_monotonicity() {
        let mut manager = EffectManager::new();
        let lifetime = manager
            .spawn_standard(
                &skill(5.0),
                Vec2::ZERO,
                Vec2::new(10.0, 0.0),
                SpawnOptions::default(),
            )
            .lifetime;

        let mut empty: Vec<TargetState> = Vec::new();
        let steps = 50;
        for _ in 0..steps {
            manager.update((lifetime + 0.1) / steps as f32, &mut empty);
        }

        assert_eq!(manager.standard().count(), 0);
    }

    #[test]
    fn test_update_without_targets_is_fine() {
        let mut manager = EffectManager::new();
        manager.spawn_standard(
            &skill(5.0),
            Vec2::ZERO,
            Vec2::new(50.0, 0.0),
            SpawnOptions::default(),
        );

        let mut empty: Vec<TargetState> = Vec::new();
        manager.update(0.016, &mut empty);
        assert_eq!(manager.standard().count(), 1);
    }

    #[test]
    fn test_standard_hit_consumes_and_removes() {
        let mut manager = EffectManager::new();
        manager.spawn_standard(
            &skill(25.0),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            SpawnOptions::default(),
        );

        // Target sits right on the spawn point.
        let mut targets = targets_at(&[(0.0, 0.0)]);
        manager.update(0.016, &mut targets);

        assert!((targets[0].health - 75.0).abs() < 1e-4);
        assert_eq!(manager.standard().count(), 0);
    }

    #[test]
    fn test_dead_targets_not_damaged() {
        let mut manager = EffectManager::new();
        let mut targets = targets_at(&[(0.0, 0.0)]);
        targets[0].alive = false;
        targets[0].health = 10.0;

        manager.spawn_standard(
            &skill(25.0),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            SpawnOptions::default(),
        );
        manager.update(0.016, &mut targets);

        assert!((targets[0].health - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_pierce_exhaustion_exact() {
        let mut manager = EffectManager::new();
        let pierce = 3;
        // Eight co-located targets; only the first three may be damaged.
        let mut targets = targets_at(&[(0.0, 0.0); 8]);

        manager.spawn_piercing_burst(
            &skill(10.0),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            pierce,
            0.0,
            0.0,
        );
        manager.update(0.001, &mut targets);

        let damaged = targets.iter().filter(|t| t.health < 100.0).count();
        assert_eq!(damaged, pierce as usize);
        // Caller order decides who pays.
        for (i, target) in targets.iter().enumerate() {
            assert_eq!(target.health < 100.0, i < pierce as usize);
        }
        assert!(manager.piercing_bursts().is_empty());
    }

    #[test]
    fn test_melee_arc_single_hit() {
        let mut manager = EffectManager::new();
        let mut targets = targets_at(&[(30.0, 0.0), (35.0, 0.0), (40.0, 0.0)]);

        manager.spawn_melee_arc(Vec2::ZERO, 0.0, Rgba::WHITE, 60.0, 15.0, 0.0);
        manager.update(0.016, &mut targets);

        let damaged = targets.iter().filter(|t| t.health < 100.0).count();
        assert_eq!(damaged, 1);
        assert!(targets[0].health < 100.0);

        // The latched swing never lands a second blow.
        manager.update(0.016, &mut targets);
        let damaged = targets.iter().filter(|t| t.health < 100.0).count();
        assert_eq!(damaged, 1);
        assert!((targets[0].health - 85.0).abs() < 1e-4);
    }

    #[test]
    fn test_beam_tick_cadence() {
        let mut manager = EffectManager::new();
        let mut targets = targets_at(&[(100.0, 0.0)]);

        manager.spawn_beam(&skill(10.0), Vec2::ZERO, Vec2::new(200.0, 0.0), 0.35);

        // 1 ms steps across the whole beam life: ticks near 100/200/300 ms.
        for _ in 0..400 {
            manager.update(0.001, &mut targets);
        }

        assert!((targets[0].health - 70.0).abs() < 1e-3);
        assert!(manager.beams().is_empty());
    }

    #[test]
    fn test_explosion_damages_once() {
        let mut manager = EffectManager::new();
        let mut targets = targets_at(&[(10.0, 0.0), (500.0, 0.0)]);

        manager.spawn_explosion(&skill(30.0), Vec2::ZERO, 100.0);
        manager.update(0.016, &mut targets);
        manager.update(0.016, &mut targets);

        assert!((targets[0].health - 70.0).abs() < 1e-4);
        // Out of blast range.
        assert!((targets[1].health - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_homing_steers_and_hits() {
        let mut manager = EffectManager::new();
        // Target off-axis from the initial aim.
        let mut targets = targets_at(&[(200.0, 60.0)]);

        manager.spawn_homing_shot(Vec2::ZERO, Vec2::new(200.0, 0.0), 12.0, 8.0, 1, 0.0);
        for _ in 0..120 {
            manager.update(1.0 / 60.0, &mut targets);
        }

        assert!(targets[0].health < 100.0);
        assert!(manager.homing_shots().is_empty());
    }

    #[test]
    fn test_homing_spawns_muzzle_flash() {
        let mut manager = EffectManager::new();
        manager.spawn_homing_shot(Vec2::ZERO, Vec2::new(100.0, 0.0), 5.0, 8.0, 1, 0.0);
        assert_eq!(manager.muzzle_flashes().len(), 1);

        let mut empty: Vec<TargetState> = Vec::new();
        manager.update(0.2, &mut empty);
        assert!(manager.muzzle_flashes().is_empty());
    }

    #[test]
    fn test_multi_hit_staggered_activation() {
        let mut manager = EffectManager::new();
        manager.spawn_multi_hit(&skill(5.0), Vec2::ZERO, Vec2::new(100.0, 0.0), 3);
        assert_eq!(manager.standard().count(), 3);

        // After 10 ms only the first shot has activated.
        let mut empty: Vec<TargetState> = Vec::new();
        manager.update(0.01, &mut empty);
        let active = manager.standard().filter(|p| p.is_active()).count();
        assert_eq!(active, 1);

        // After another 80 ms the second joins it.
        manager.update(0.08, &mut empty);
        let active = manager.standard().filter(|p| p.is_active()).count();
        assert_eq!(active, 2);
    }

    #[test]
    fn test_status_flags_applied() {
        let mut manager = EffectManager::new();
        let burner = SkillDescriptor::new(SkillId::new(9), "Ember Bolt")
            .with_damage(5.0)
            .with_status(true, false, true);

        let mut targets = targets_at(&[(0.0, 0.0)]);
        manager.spawn_standard(
            &burner,
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            SpawnOptions::default(),
        );
        manager.update(0.016, &mut targets);

        assert!(targets[0].status.is_burning());
        assert!(targets[0].status.is_stunned());
        assert!(!targets[0].status.is_frozen());
    }

    #[test]
    fn test_pool_overflow_allocates_fresh() {
        let config = EffectConfig {
            pool_capacity: 2,
            ..Default::default()
        };
        let mut manager = EffectManager::with_config(config);

        for _ in 0..5 {
            manager.spawn_standard(
                &skill(1.0),
                Vec2::ZERO,
                Vec2::new(100.0, 0.0),
                SpawnOptions::default(),
            );
        }

        assert_eq!(manager.standard().count(), 5);
        assert_eq!(manager.pool_misses(), 3);
    }

    #[test]
    fn test_events_report_damage_and_defeat() {
        let mut manager = EffectManager::new();
        let mut targets = vec![TargetState::new(7, Vec2::ZERO, 10.0)];

        manager.spawn_standard(
            &skill(25.0),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            SpawnOptions::default(),
        );
        manager.update(0.016, &mut targets);

        let events = manager.events().drain();
        assert!(events.iter().any(|e| matches!(
            e,
            CombatEvent::DamageDealt { target: 7, .. }
        )));
        assert!(events
            .iter()
            .any(|e| matches!(e, CombatEvent::TargetDefeated { target: 7 })));
        assert!(!targets[0].alive);
    }

    #[test]
    fn test_summon_lifecycle() {
        let mut manager = EffectManager::new();
        manager.spawn_summon(Vec2::ZERO, Some(1.0), SummonMode::Hunt, Vec2::ZERO);
        assert_eq!(manager.summons().len(), 1);

        let mut empty: Vec<TargetState> = Vec::new();
        manager.update(0.5, &mut empty);
        assert_eq!(manager.summons().len(), 1);
        manager.update(0.6, &mut empty);
        assert!(manager.summons().is_empty());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut manager = EffectManager::new();
        manager.spawn_standard(
            &skill(5.0),
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            SpawnOptions::default(),
        );
        manager.spawn_beam(&skill(5.0), Vec2::ZERO, Vec2::new(100.0, 0.0), 1.0);
        manager.spawn_summon(Vec2::ZERO, None, SummonMode::Assist, Vec2::ZERO);
        manager.spawn_melee_arc(Vec2::ZERO, 0.0, Rgba::WHITE, 50.0, 5.0, 0.0);
        assert!(manager.live_count() > 0);

        manager.clear();
        assert_eq!(manager.live_count(), 0);
        assert!(manager.particles().is_empty());
    }
}
