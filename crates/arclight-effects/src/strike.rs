//! Melee arc strikes.
//!
//! A melee arc is a single decisive swing: it activates once after an
//! optional windup delay, damages at most one target inside its arc, and
//! fades over a short visible duration.

use glam::Vec2;

use arclight_common::{angle_diff, heading, EffectId, Rgba};

/// Visible duration of a swing, in seconds.
pub const ARC_DURATION: f32 = 0.2;

/// Half-angle of the swing arc, in radians.
pub const ARC_HALF_ANGLE: f32 = 0.6;

/// One melee swing.
#[derive(Debug, Clone, Copy)]
pub struct MeleeArc {
    /// Instance identity.
    pub id: EffectId,
    /// Swing origin.
    pub origin: Vec2,
    /// Facing angle of the swing, in radians.
    pub angle: f32,
    /// Reach of the swing.
    pub radius: f32,
    /// Half-angle of the covered arc.
    pub half_angle: f32,
    /// Damage applied to the single victim.
    pub damage: f32,
    /// Tint.
    pub color: Rgba,
    /// Seconds since activation; negative during windup.
    pub age: f32,
    /// Seconds until the swing fades.
    pub lifetime: f32,
    /// One-shot latch: set once damage has been applied.
    pub hit: bool,
}

impl MeleeArc {
    /// Creates a swing, optionally delayed by a windup.
    #[must_use]
    pub fn new(
        origin: Vec2,
        angle: f32,
        color: Rgba,
        radius: f32,
        damage: f32,
        delay: f32,
    ) -> Self {
        Self {
            id: EffectId::new(),
            origin,
            angle,
            radius,
            half_angle: ARC_HALF_ANGLE,
            damage,
            color,
            age: -delay.max(0.0),
            lifetime: ARC_DURATION,
            hit: false,
        }
    }

    /// Whether the windup has elapsed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.age >= 0.0
    }

    /// Whether the swing has fully faded.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Fade progress in 0.0..=1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    /// Whether a point lies inside the swing's reach and arc.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        if self.origin.distance(point) >= self.radius {
            return false;
        }
        angle_diff(self.angle, heading(self.origin, point)).abs() < self.half_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arc_containment() {
        let arc = MeleeArc::new(Vec2::ZERO, 0.0, Rgba::WHITE, 50.0, 10.0, 0.0);

        // Straight ahead, inside reach.
        assert!(arc.contains(Vec2::new(30.0, 0.0)));
        // Inside reach but behind.
        assert!(!arc.contains(Vec2::new(-30.0, 0.0)));
        // Ahead but out of reach.
        assert!(!arc.contains(Vec2::new(80.0, 0.0)));
        // Inside the angular edge.
        assert!(arc.contains(Vec2::new(30.0, 15.0)));
    }

    #[test]
    fn test_windup_delay() {
        let mut arc = MeleeArc::new(Vec2::ZERO, 0.0, Rgba::WHITE, 50.0, 10.0, 0.3);
        assert!(!arc.is_active());

        arc.age += 0.3;
        assert!(arc.is_active());
        assert!(!arc.is_expired());

        arc.age += ARC_DURATION;
        assert!(arc.is_expired());
    }

    #[test]
    fn test_arc_wraps_across_pi() {
        let arc = MeleeArc::new(
            Vec2::ZERO,
            std::f32::consts::PI,
            Rgba::WHITE,
            50.0,
            10.0,
            0.0,
        );
        // Pointing along -x; a point just across the angle seam still counts.
        assert!(arc.contains(Vec2::new(-30.0, -5.0)));
    }
}
