//! Timed summoned companions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use arclight_common::EffectId;

use crate::archetype::FRAME_SCALE;

/// Behavior mode of a summon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummonMode {
    /// Chase and engage targets.
    Hunt,
    /// Sweep for pickups.
    Loot,
    /// Shadow the owner.
    #[default]
    Assist,
}

/// A temporary companion entity.
#[derive(Debug, Clone, Copy)]
pub struct Summon {
    /// Instance identity.
    pub id: EffectId,
    /// World position.
    pub position: Vec2,
    /// Drift velocity in units per frame.
    pub velocity: Vec2,
    /// Behavior mode.
    pub mode: SummonMode,
    /// Seconds since summoning.
    pub age: f32,
    /// Seconds until the summon dissolves.
    pub lifetime: f32,
}

impl Summon {
    /// Creates a summon at a position.
    #[must_use]
    pub fn new(position: Vec2, lifetime: f32, mode: SummonMode, velocity: Vec2) -> Self {
        Self {
            id: EffectId::new(),
            position,
            velocity,
            mode,
            age: 0.0,
            lifetime,
        }
    }

    /// Whether the summon has dissolved.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Remaining time before dissolution.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        (self.lifetime - self.age).max(0.0)
    }

    /// Advances age and drift.
    pub fn advance(&mut self, dt: f32) {
        self.age += dt;
        self.position += self.velocity * dt * FRAME_SCALE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summon_expires() {
        let mut s = Summon::new(Vec2::ZERO, 15.0, SummonMode::Assist, Vec2::ZERO);
        s.advance(14.0);
        assert!(!s.is_expired());
        assert!((s.remaining() - 1.0).abs() < 1e-4);

        s.advance(1.5);
        assert!(s.is_expired());
        assert!(s.remaining().abs() < 1e-6);
    }

    #[test]
    fn test_summon_drifts() {
        let mut s = Summon::new(Vec2::ZERO, 15.0, SummonMode::Hunt, Vec2::new(0.5, 0.0));
        s.advance(1.0);
        assert!((s.position.x - 30.0).abs() < 1e-3);
    }
}
