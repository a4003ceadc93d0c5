//! Guided shots: homing projectiles and piercing bursts.

use glam::Vec2;

use arclight_common::{angle_diff, heading, unit_from_angle, EffectId, Rgba};

use crate::archetype::FRAME_SCALE;
use crate::element::Element;

/// Default homing turn strength.
pub const DEFAULT_HOMING_STRENGTH: f32 = 8.0;

/// Lifetime of guided shots, in seconds.
pub const GUIDED_LIFETIME: f32 = 2.0;

/// A projectile that re-aims toward the nearest live target each tick.
#[derive(Debug, Clone, Copy)]
pub struct HomingShot {
    /// Instance identity.
    pub id: EffectId,
    /// World position.
    pub position: Vec2,
    /// Current heading, in radians.
    pub angle: f32,
    /// Speed in units per second.
    pub speed: f32,
    /// Turn strength; higher values re-aim faster.
    pub homing: f32,
    /// Radius within which targets are acquired.
    pub sense_radius: f32,
    /// Damage per hit.
    pub damage: f32,
    /// Size scalar.
    pub size: f32,
    /// Tint.
    pub color: Rgba,
    /// Seconds since activation; negative while delayed.
    pub age: f32,
    /// Seconds until expiry.
    pub lifetime: f32,
    /// Distinct targets this shot may still damage.
    pub hits_remaining: u32,
}

impl HomingShot {
    /// Creates a shot aimed from `origin` toward `target`.
    #[must_use]
    pub fn new(
        origin: Vec2,
        target: Vec2,
        damage: f32,
        homing: f32,
        speed: f32,
        sense_radius: f32,
        pierce: u32,
        delay: f32,
    ) -> Self {
        Self {
            id: EffectId::new(),
            position: origin,
            angle: heading(origin, target),
            speed,
            homing,
            sense_radius,
            damage,
            size: 1.0,
            // Gold tracer round.
            color: Rgba::rgb(1.0, 0.843, 0.0),
            age: -delay.max(0.0),
            lifetime: GUIDED_LIFETIME,
            hits_remaining: pierce.max(1),
        }
    }

    /// Velocity in units per frame, derived from heading and speed.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        unit_from_angle(self.angle) * self.speed / FRAME_SCALE
    }

    /// Whether the launch delay has elapsed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age >= 0.0
    }

    /// Whether the shot has outlived its lifetime.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Whether the hit budget is exhausted.
    #[must_use]
    pub const fn is_spent(&self) -> bool {
        self.hits_remaining == 0
    }

    /// Rotates the heading toward a point, bounded by the turn strength so
    /// re-aiming is gradual rather than a snap.
    pub fn steer_toward(&mut self, point: Vec2, dt: f32) {
        let desired = heading(self.position, point);
        let diff = angle_diff(self.angle, desired);
        let mut turn = diff * (self.homing / 100.0) * dt * FRAME_SCALE;
        if turn.abs() > diff.abs() {
            turn = diff;
        }
        self.angle += turn;
    }

    /// Advances age and, once active, position.
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
        if !self.is_active() {
            return;
        }
        self.position += self.velocity() * dt * FRAME_SCALE;
    }
}

/// A straight shot that pierces through a fixed number of targets.
#[derive(Debug, Clone, Copy)]
pub struct PiercingBurst {
    /// Instance identity.
    pub id: EffectId,
    /// World position.
    pub position: Vec2,
    /// Flight heading, in radians.
    pub angle: f32,
    /// Speed in units per second.
    pub speed: f32,
    /// Damage per pierced target.
    pub damage: f32,
    /// Damage element.
    pub element: Element,
    /// Size scalar.
    pub size: f32,
    /// Tint.
    pub color: Rgba,
    /// Seconds since activation; negative while delayed.
    pub age: f32,
    /// Seconds until expiry.
    pub lifetime: f32,
    /// Distinct targets this burst may still damage.
    pub hits_remaining: u32,
}

impl PiercingBurst {
    /// Creates a burst aimed from `origin` toward `target`, with the heading
    /// rotated by `spread`.
    #[must_use]
    pub fn new(
        origin: Vec2,
        target: Vec2,
        damage: f32,
        element: Element,
        speed: f32,
        pierce: u32,
        spread: f32,
        delay: f32,
    ) -> Self {
        Self {
            id: EffectId::new(),
            position: origin,
            angle: heading(origin, target) + spread,
            speed,
            damage,
            element,
            size: 1.0,
            color: element.base_color(),
            age: -delay.max(0.0),
            lifetime: GUIDED_LIFETIME,
            hits_remaining: pierce.max(1),
        }
    }

    /// Velocity in units per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        unit_from_angle(self.angle) * self.speed / FRAME_SCALE
    }

    /// Whether the launch delay has elapsed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age >= 0.0
    }

    /// Whether the burst has outlived its lifetime.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Whether the hit budget is exhausted.
    #[must_use]
    pub const fn is_spent(&self) -> bool {
        self.hits_remaining == 0
    }

    /// Advances age and, once active, position.
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
        if !self.is_active() {
            return;
        }
        self.position += self.velocity() * dt * FRAME_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_homing_travels_at_speed() {
        let mut shot = HomingShot::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            5.0,
            DEFAULT_HOMING_STRENGTH,
            720.0,
            500.0,
            1,
            0.0,
        );
        shot.advance(0.5);
        // 720 units/s for half a second.
        assert!((shot.position.x - 360.0).abs() < 1.0);
    }

    #[test]
    fn test_steer_turns_gradually() {
        let mut shot = HomingShot::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            5.0,
            DEFAULT_HOMING_STRENGTH,
            720.0,
            500.0,
            1,
            0.0,
        );

        // Target straight up; a single small step must not snap 90 degrees.
        shot.steer_toward(Vec2::new(0.0, 100.0), 1.0 / 60.0);
        assert!(shot.angle > 0.0);
        assert!(shot.angle < PI / 2.0);
    }

    #[test]
    fn test_steer_never_overshoots() {
        let mut shot = HomingShot::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            5.0,
            200.0, // absurd turn strength
            720.0,
            500.0,
            1,
            0.0,
        );

        shot.steer_toward(Vec2::new(0.0, 100.0), 1.0);
        assert!(shot.angle <= PI / 2.0 + 1e-4);
    }

    #[test]
    fn test_burst_spread_rotates_heading() {
        let straight = PiercingBurst::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            5.0,
            Element::Plasma,
            875.0,
            4,
            0.0,
            0.0,
        );
        let skewed = PiercingBurst::new(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            5.0,
            Element::Plasma,
            875.0,
            4,
            0.3,
            0.0,
        );

        assert!(straight.angle.abs() < 1e-6);
        assert!((skewed.angle - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_pierce_floor_of_one() {
        let burst = PiercingBurst::new(
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            5.0,
            Element::Plasma,
            875.0,
            0,
            0.0,
            0.0,
        );
        assert_eq!(burst.hits_remaining, 1);
    }
}
