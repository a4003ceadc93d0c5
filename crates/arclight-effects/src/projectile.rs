//! Standard projectiles, their trails, and muzzle-flash transients.

use std::collections::VecDeque;

use glam::Vec2;

use arclight_common::{EffectId, Rgba, SkillId};

use crate::archetype::{ProjectileStyle, FRAME_SCALE, HIT_RADIUS_PER_SIZE};
use crate::element::Element;
use crate::status::StatusFlags;

/// Visible duration of a muzzle flash, in seconds.
pub const FLASH_DURATION: f32 = 0.1;

/// Bounded list of recent projectile positions, oldest first.
///
/// Renderer-only state; the simulation never reads it back.
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: VecDeque<Vec2>,
    max_len: usize,
}

impl Trail {
    /// Creates an empty trail bounded to `max_len` points.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    /// Records a position, dropping the oldest past the bound.
    pub fn push(&mut self, position: Vec2) {
        if self.max_len == 0 {
            return;
        }
        if self.points.len() == self.max_len {
            self.points.pop_front();
        }
        self.points.push_back(position);
    }

    /// Points with their fade alpha, oldest (most transparent) first.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        let len = self.points.len().max(1);
        self.points
            .iter()
            .enumerate()
            .map(move |(i, p)| (*p, i as f32 / len as f32))
    }

    /// Number of recorded points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no points are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drops all points, keeping the bound and buffer.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Data for activating a standard projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileParams {
    /// Originating skill.
    pub skill: SkillId,
    /// Spawn position.
    pub position: Vec2,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Aim point, if any.
    pub target: Option<Vec2>,
    /// Damage per hit.
    pub damage: f32,
    /// Damage element.
    pub element: Element,
    /// Rendered silhouette.
    pub style: ProjectileStyle,
    /// Size scalar.
    pub size: f32,
    /// Tint.
    pub color: Rgba,
    /// Seconds until expiry.
    pub lifetime: f32,
    /// Distinct targets this projectile may still damage.
    pub hits: u32,
    /// Status effects applied on hit.
    pub status: StatusFlags,
    /// Activation delay in seconds (stored as negative initial age).
    pub delay: f32,
    /// Trail bound.
    pub trail_len: usize,
}

/// A straight-flying combat projectile.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Instance identity.
    pub id: EffectId,
    /// Originating skill.
    pub skill: SkillId,
    /// World position.
    pub position: Vec2,
    /// Velocity in units per frame.
    pub velocity: Vec2,
    /// Aim point, if any.
    pub target: Option<Vec2>,
    /// Damage per hit.
    pub damage: f32,
    /// Damage element.
    pub element: Element,
    /// Rendered silhouette.
    pub style: ProjectileStyle,
    /// Size scalar.
    pub size: f32,
    /// Tint.
    pub color: Rgba,
    /// Seconds since activation; negative while the launch is delayed.
    pub age: f32,
    /// Seconds until expiry.
    pub lifetime: f32,
    /// Distinct targets this projectile may still damage.
    pub hits_remaining: u32,
    /// Status effects applied on hit.
    pub status: StatusFlags,
    /// Recent positions for the renderer.
    pub trail: Trail,
}

impl Projectile {
    /// Creates a projectile from activation data.
    #[must_use]
    pub fn new(params: ProjectileParams) -> Self {
        let mut projectile = Self {
            id: EffectId::NULL,
            skill: SkillId::new(0),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: None,
            damage: 0.0,
            element: Element::Physical,
            style: ProjectileStyle::Bolt,
            size: 1.0,
            color: Rgba::WHITE,
            age: 0.0,
            lifetime: 0.0,
            hits_remaining: 0,
            status: StatusFlags::NONE,
            trail: Trail::new(params.trail_len),
        };
        projectile.reset(params);
        projectile
    }

    /// Re-initializes this instance in place, reusing the trail buffer.
    pub fn reset(&mut self, params: ProjectileParams) {
        self.id = EffectId::new();
        self.skill = params.skill;
        self.position = params.position;
        self.velocity = params.velocity;
        self.target = params.target;
        self.damage = params.damage;
        self.element = params.element;
        self.style = params.style;
        self.size = params.size;
        self.color = params.color;
        self.age = -params.delay.max(0.0);
        self.lifetime = params.lifetime;
        self.hits_remaining = params.hits;
        self.status = params.status;
        self.trail.clear();
        self.trail.max_len = params.trail_len;
    }

    /// Whether the launch delay has elapsed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age >= 0.0
    }

    /// Whether the visual lifetime has run out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Whether the hit budget is exhausted.
    #[must_use]
    pub const fn is_spent(&self) -> bool {
        self.hits_remaining == 0
    }

    /// Collision radius derived from size.
    #[must_use]
    pub fn hit_radius(&self) -> f32 {
        self.size * HIT_RADIUS_PER_SIZE
    }

    /// Advances age and, once active, position and trail.
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
        if !self.is_active() {
            return;
        }
        self.position += self.velocity * dt * FRAME_SCALE;
        self.trail.push(self.position);
    }
}

/// Short-lived flash drawn at a firing position.
#[derive(Debug, Clone, Copy)]
pub struct MuzzleFlash {
    /// Instance identity.
    pub id: EffectId,
    /// World position.
    pub position: Vec2,
    /// Seconds since activation; negative while delayed.
    pub age: f32,
    /// Seconds until expiry.
    pub lifetime: f32,
}

impl MuzzleFlash {
    /// Creates a flash, optionally delayed.
    #[must_use]
    pub fn new(position: Vec2, delay: f32) -> Self {
        Self {
            id: EffectId::new(),
            position,
            age: -delay.max(0.0),
            lifetime: FLASH_DURATION,
        }
    }

    /// Whether the delay has elapsed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age >= 0.0
    }

    /// Whether the flash has faded out.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Fade progress in 0.0..=1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ProjectileParams {
        ProjectileParams {
            skill: SkillId::new(1),
            position: Vec2::ZERO,
            velocity: Vec2::new(10.0, 0.0),
            target: Some(Vec2::new(100.0, 0.0)),
            damage: 5.0,
            element: Element::Fire,
            style: ProjectileStyle::Bolt,
            size: 1.0,
            color: Rgba::WHITE,
            lifetime: 2.0,
            hits: 1,
            status: StatusFlags::NONE,
            delay: 0.0,
            trail_len: 10,
        }
    }

    #[test]
    fn test_advance_moves_per_frame_units() {
        let mut p = Projectile::new(params());
        p.advance(1.0 / 60.0);
        // 10 units/frame at one 60 Hz step.
        assert!((p.position.x - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_delay_blocks_movement() {
        let mut delayed = params();
        delayed.delay = 0.5;
        let mut p = Projectile::new(delayed);

        p.advance(0.25);
        assert!(!p.is_active());
        assert!(p.position.x.abs() < 1e-6);

        p.advance(0.5);
        assert!(p.is_active());
        assert!(p.position.x > 0.0);
    }

    #[test]
    fn test_trail_bounded() {
        let mut p = Projectile::new(params());
        for _ in 0..50 {
            p.advance(0.02);
        }
        assert_eq!(p.trail.len(), 10);
    }

    #[test]
    fn test_reset_reuses_trail() {
        let mut p = Projectile::new(params());
        for _ in 0..5 {
            p.advance(0.02);
        }
        let old_id = p.id;

        p.reset(params());
        assert!(p.trail.is_empty());
        assert_ne!(p.id, old_id);
    }

    #[test]
    fn test_flash_progress() {
        let mut flash = MuzzleFlash::new(Vec2::ZERO, 0.0);
        flash.age = 0.05;
        assert!((flash.progress() - 0.5).abs() < 1e-5);
        flash.age = 0.2;
        assert!(flash.is_expired());
    }
}
