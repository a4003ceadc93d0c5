//! Effect archetypes and their default tuning.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::element::Element;

/// Stored speeds are expressed in units per 60 Hz frame; position updates
/// multiply by `delta * FRAME_SCALE` to preserve the legacy tuning values.
pub const FRAME_SCALE: f32 = 60.0;

/// Travel distance assumed when origin and target coincide.
pub const DEFAULT_TRAVEL_DISTANCE: f32 = 500.0;

/// Minimum on-screen lifetime for short-range shots, in seconds.
pub const LIFETIME_FLOOR: f32 = 2.0;

/// Hit radius contributed per unit of projectile size.
pub const HIT_RADIUS_PER_SIZE: f32 = 16.0;

/// Base hit radius of homing and piercing shots.
pub const GUIDED_HIT_RADIUS: f32 = 20.0;

/// Total angular fan of a multi-hit volley, in radians.
pub const MULTI_HIT_SPREAD: f32 = PI / 8.0;

/// Distance of the synthetic aim point for fanned multi-hit shots.
pub const MULTI_HIT_RANGE: f32 = 400.0;

/// Activation stagger between consecutive multi-hit shots, in seconds.
pub const MULTI_HIT_STAGGER: f32 = 0.08;

/// Kind of combat effect an instance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArchetypeKind {
    /// Straight-flying projectile.
    Standard,
    /// Channeled line beam with interval damage ticks.
    Beam,
    /// One-shot area burst.
    Explosion,
    /// Single decisive melee swing.
    MeleeArc,
    /// Projectile that re-aims toward the nearest target.
    HomingShot,
    /// Straight projectile that pierces a fixed number of targets.
    PiercingBurst,
    /// Timed companion entity.
    Summon,
    /// Renderer-only transient particle.
    Particle,
}

impl ArchetypeKind {
    /// Derives the kind from a skill name, falling back to the standard
    /// projectile for anything unrecognized.
    #[must_use]
    pub fn infer(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("beam") || name.contains("kamehameha") {
            Self::Beam
        } else if name.contains("clone") || name.contains("summon") {
            Self::Summon
        } else if name.contains("explosion") || name.contains("burst") {
            Self::Explosion
        } else {
            Self::Standard
        }
    }

    /// Whether instances of this kind carry a hit budget.
    #[must_use]
    pub const fn is_hit_capable(&self) -> bool {
        matches!(
            self,
            Self::Standard | Self::Beam | Self::Explosion | Self::MeleeArc
                | Self::HomingShot | Self::PiercingBurst
        )
    }

    /// Default speed for moving kinds (per-frame units for `Standard`,
    /// per-second for guided shots; zero for stationary kinds).
    #[must_use]
    pub const fn default_speed(&self) -> f32 {
        match self {
            Self::Standard => 8.0,
            Self::HomingShot => 720.0,
            Self::PiercingBurst => 875.0,
            _ => 0.0,
        }
    }

    /// Default lifetime in seconds.
    #[must_use]
    pub const fn default_lifetime(&self) -> f32 {
        match self {
            Self::Standard | Self::HomingShot | Self::PiercingBurst => 2.0,
            Self::Beam => 1.0,
            Self::Explosion => 0.5,
            Self::MeleeArc => 0.2,
            Self::Summon => 15.0,
            Self::Particle => 0.4,
        }
    }
}

/// Silhouette drawn for a standard projectile by the detailed render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileStyle {
    /// Crossed slashing wave.
    Wave,
    /// Round energy bolt.
    #[default]
    Bolt,
    /// Crescent moon sliver.
    Crescent,
}

impl ProjectileStyle {
    /// Derives the silhouette from a skill name, falling back to the
    /// element's default.
    #[must_use]
    pub fn infer(name: &str, element: Element) -> Self {
        let name = name.to_lowercase();
        if name.contains("slash") || name.contains("wave") {
            Self::Wave
        } else if name.contains("plasma") || name.contains("blaster") {
            Self::Bolt
        } else if name.contains("moon") || name.contains("luna") {
            Self::Crescent
        } else {
            element.default_style()
        }
    }
}
