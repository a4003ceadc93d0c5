//! Transient VFX particles: trails, impact bursts, and explosion debris.
//!
//! Jitter comes from a seeded in-crate generator, so a replayed simulation
//! produces the identical particle field.

use glam::Vec2;

use arclight_common::Rgba;

use crate::archetype::FRAME_SCALE;

/// Particles emitted per trail puff.
const TRAIL_COUNT: usize = 2;

/// Particles emitted per impact burst.
const IMPACT_COUNT: usize = 8;

/// Particles emitted per explosion burst.
const BURST_COUNT: usize = 20;

/// A single renderer-only particle.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// World position.
    pub position: Vec2,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Seconds since spawn.
    pub age: f32,
    /// Seconds until expiry.
    pub lifetime: f32,
    /// Draw size.
    pub size: f32,
    /// Tint.
    pub color: Rgba,
    /// Alpha at spawn; fades linearly to zero over the lifetime.
    pub base_alpha: f32,
}

impl Particle {
    /// Whether the particle has outlived its lifetime.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Current alpha after the linear fade.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.base_alpha * (1.0 - self.age / self.lifetime).clamp(0.0, 1.0)
    }

    /// Advances position and age by one simulation step.
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        self.position += self.velocity * dt * FRAME_SCALE;
    }
}

/// Owns all live particles and the deterministic jitter source.
#[derive(Debug)]
pub struct ParticleEmitter {
    particles: Vec<Particle>,
    seed: u32,
}

impl Default for ParticleEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleEmitter {
    /// Creates an emitter with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            seed: 12345,
        }
    }

    /// Creates an emitter with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            seed,
        }
    }

    /// Simple random number generator.
    fn random(&mut self) -> f32 {
        self.seed = self.seed.wrapping_mul(1_103_515_245).wrapping_add(12345);
        self.seed as f32 / u32::MAX as f32
    }

    /// Random in range.
    fn random_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.random() * (max - min)
    }

    /// Rolls a probability in 0.0..=1.0.
    pub fn chance(&mut self, probability: f32) -> bool {
        self.random() < probability
    }

    /// Spawns a small puff behind a travelling projectile.
    pub fn spawn_trail(&mut self, position: Vec2, color: Rgba) {
        for _ in 0..TRAIL_COUNT {
            let jitter = Vec2::new(
                self.random_range(-5.0, 5.0),
                self.random_range(-5.0, 5.0),
            );
            let velocity = Vec2::new(
                self.random_range(-1.0, 1.0),
                self.random_range(-1.0, 1.0),
            );
            let size = self.random_range(2.0, 5.0);
            let lifetime = self.random_range(0.2, 0.4);

            self.particles.push(Particle {
                position: position + jitter,
                velocity,
                age: 0.0,
                lifetime,
                size,
                color,
                base_alpha: 0.6,
            });
        }
    }

    /// Spawns a radial burst where a projectile lands or expends its hits.
    pub fn spawn_impact(&mut self, position: Vec2, color: Rgba) {
        for i in 0..IMPACT_COUNT {
            let angle = std::f32::consts::TAU * i as f32 / IMPACT_COUNT as f32;
            let speed = 2.0 + self.random() * 3.0;
            let size = self.random_range(3.0, 7.0);
            let lifetime = self.random_range(0.3, 0.5);

            self.particles.push(Particle {
                position,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                age: 0.0,
                lifetime,
                size,
                color,
                base_alpha: 1.0,
            });
        }
    }

    /// Spawns the heavy debris ring of an explosion.
    pub fn spawn_burst(&mut self, position: Vec2, color: Rgba) {
        for i in 0..BURST_COUNT {
            let angle = std::f32::consts::TAU * i as f32 / BURST_COUNT as f32;
            let speed = 3.0 + self.random() * 4.0;
            let size = self.random_range(4.0, 8.0);
            let lifetime = self.random_range(0.5, 0.8);

            self.particles.push(Particle {
                position,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                age: 0.0,
                lifetime,
                size,
                color,
                base_alpha: 1.0,
            });
        }
    }

    /// Advances all particles and drops the expired.
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.particles.retain(|p| !p.is_expired());
    }

    /// Live particles, oldest first.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drops all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impact_burst_count() {
        let mut emitter = ParticleEmitter::new();
        emitter.spawn_impact(Vec2::ZERO, Rgba::WHITE);
        assert_eq!(emitter.len(), IMPACT_COUNT);
    }

    #[test]
    fn test_particles_expire() {
        let mut emitter = ParticleEmitter::new();
        emitter.spawn_burst(Vec2::ZERO, Rgba::WHITE);
        assert_eq!(emitter.len(), BURST_COUNT);

        emitter.update(0.1);
        assert_eq!(emitter.len(), BURST_COUNT);

        emitter.update(2.0);
        assert!(emitter.is_empty());
    }

    #[test]
    fn test_alpha_fades_with_age() {
        let mut emitter = ParticleEmitter::new();
        emitter.spawn_trail(Vec2::ZERO, Rgba::WHITE);

        let fresh = emitter.particles()[0].alpha();
        emitter.update(0.15);
        if let Some(p) = emitter.particles().first() {
            assert!(p.alpha() < fresh);
        }
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = ParticleEmitter::with_seed(7);
        let mut b = ParticleEmitter::with_seed(7);
        a.spawn_impact(Vec2::ZERO, Rgba::WHITE);
        b.spawn_impact(Vec2::ZERO, Rgba::WHITE);

        for (pa, pb) in a.particles().iter().zip(b.particles()) {
            assert_eq!(pa.velocity, pb.velocity);
            assert_eq!(pa.lifetime, pb.lifetime);
        }
    }
}
