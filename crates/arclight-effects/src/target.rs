//! The seam between the effects core and the caller's live entities.

use glam::Vec2;

use crate::status::{StatusFlags, StatusTimers};

/// Default hit radius assumed when a target supplies no size.
pub const DEFAULT_TARGET_RADIUS: f32 = 20.0;

/// A damageable entity supplied by the caller each frame.
///
/// The effects core mutates health, liveness, and status through this trait
/// and nothing else; it never removes entries from, reorders, or retains the
/// caller's list.
pub trait CombatTarget {
    /// Stable identifier used in damage events.
    fn id(&self) -> u64;

    /// Current world position.
    fn position(&self) -> Vec2;

    /// Current health.
    fn health(&self) -> f32;

    /// Overwrites health.
    fn set_health(&mut self, health: f32);

    /// Whether the target can still be damaged.
    fn is_alive(&self) -> bool;

    /// Sets liveness; called with `false` when health reaches zero.
    fn set_alive(&mut self, alive: bool);

    /// Collision radius; defaults when the entity has no meaningful size.
    fn hit_radius(&self) -> f32 {
        DEFAULT_TARGET_RADIUS
    }

    /// Applies status effects on hit. Targets that cannot be statused may
    /// leave this as the no-op default.
    fn apply_status(&mut self, _flags: StatusFlags) {}
}

/// Ready-made target state for callers and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetState {
    /// Stable identifier.
    pub id: u64,
    /// World position.
    pub position: Vec2,
    /// Current health.
    pub health: f32,
    /// Liveness flag.
    pub alive: bool,
    /// Collision radius.
    pub radius: f32,
    /// Active status timers.
    pub status: StatusTimers,
}

impl TargetState {
    /// Creates a live target at a position.
    #[must_use]
    pub fn new(id: u64, position: Vec2, health: f32) -> Self {
        Self {
            id,
            position,
            health,
            alive: true,
            radius: DEFAULT_TARGET_RADIUS,
            status: StatusTimers::default(),
        }
    }

    /// Set the collision radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

impl CombatTarget for TargetState {
    fn id(&self) -> u64 {
        self.id
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    fn hit_radius(&self) -> f32 {
        self.radius
    }

    fn apply_status(&mut self, flags: StatusFlags) {
        self.status.apply(flags);
    }
}
