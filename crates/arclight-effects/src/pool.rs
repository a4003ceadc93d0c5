//! Fixed-capacity slot pool for standard projectiles.
//!
//! Standard shots are the highest-frequency kind, so their instances (and
//! trail buffers) are recycled instead of reallocated. Exhaustion is a
//! capacity hint, not an error: callers fall back to a fresh allocation.

use glam::Vec2;

use arclight_common::{EffectId, Rgba, SkillId};

use crate::archetype::ProjectileStyle;
use crate::element::Element;
use crate::projectile::{Projectile, ProjectileParams};
use crate::status::StatusFlags;

/// Default number of reusable slots.
pub const DEFAULT_POOL_CAPACITY: usize = 100;

/// One reusable slot.
#[derive(Debug, Clone)]
struct PoolSlot {
    active: bool,
    projectile: Projectile,
}

/// Pool of reusable projectile slots.
#[derive(Debug)]
pub struct ProjectilePool {
    slots: Vec<PoolSlot>,
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_POOL_CAPACITY)
    }
}

impl ProjectilePool {
    /// Creates a pool with a fixed number of slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut placeholder = Projectile::new(ProjectileParams {
            skill: SkillId::new(0),
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: None,
            damage: 0.0,
            element: Element::Physical,
            style: ProjectileStyle::Bolt,
            size: 1.0,
            color: Rgba::WHITE,
            lifetime: 0.0,
            hits: 0,
            status: StatusFlags::NONE,
            delay: 0.0,
            trail_len: 0,
        });
        placeholder.id = EffectId::NULL;

        let slots = (0..capacity)
            .map(|_| PoolSlot {
                active: false,
                projectile: placeholder.clone(),
            })
            .collect();

        Self { slots }
    }

    /// Total slot count; never changes after construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots currently in use.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.active).count()
    }

    /// Claims the first free slot, returning its index, or `None` when every
    /// slot is in use.
    pub fn acquire(&mut self) -> Option<usize> {
        let index = self.slots.iter().position(|s| !s.active)?;
        self.slots[index].active = true;
        Some(index)
    }

    /// Frees a slot and clears its identity.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.active = false;
            slot.projectile.id = EffectId::NULL;
        }
    }

    /// Re-initializes a slot's projectile in place, reusing its buffers.
    /// The index must come from [`Self::acquire`].
    pub fn reset_slot(&mut self, index: usize, params: ProjectileParams) {
        self.slots[index].projectile.reset(params);
    }

    /// Direct borrow of a slot's projectile. The index must come from
    /// [`Self::acquire`].
    #[must_use]
    pub fn slot(&self, index: usize) -> &Projectile {
        &self.slots[index].projectile
    }

    /// Whether a slot is in use.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.active)
    }

    /// Borrow of an active slot's projectile.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Projectile> {
        self.slots
            .get(index)
            .filter(|s| s.active)
            .map(|s| &s.projectile)
    }

    /// Mutable borrow of an active slot's projectile.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Projectile> {
        self.slots
            .get_mut(index)
            .filter(|s| s.active)
            .map(|s| &mut s.projectile)
    }

    /// Iterates over active projectiles in slot order.
    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots
            .iter()
            .filter(|s| s.active)
            .map(|s| &s.projectile)
    }

    /// Frees every slot.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            self.release(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release_round_trip() {
        let mut pool = ProjectilePool::with_capacity(4);
        assert_eq!(pool.capacity(), 4);

        for _ in 0..10 {
            let index = pool.acquire().unwrap();
            assert!(pool.is_active(index));
            pool.release(index);
            assert!(!pool.is_active(index));
        }

        // Slot count never grows.
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.active_count(), 0);
    }

    #[test]
    fn test_exhaustion_returns_none() {
        let mut pool = ProjectilePool::with_capacity(2);
        assert!(pool.acquire().is_some());
        assert!(pool.acquire().is_some());
        assert!(pool.acquire().is_none());

        pool.release(0);
        assert_eq!(pool.acquire(), Some(0));
    }

    #[test]
    fn test_release_clears_identity() {
        let mut pool = ProjectilePool::with_capacity(1);
        let index = pool.acquire().unwrap();
        pool.get_mut(index).unwrap().id = EffectId::new();
        pool.release(index);

        let reacquired = pool.acquire().unwrap();
        assert!(!pool.get(reacquired).unwrap().id.is_valid());
    }

    #[test]
    fn test_inactive_slots_hidden() {
        let mut pool = ProjectilePool::with_capacity(3);
        pool.acquire();
        pool.acquire();
        assert_eq!(pool.iter_active().count(), 2);
        assert!(pool.get(2).is_none());
    }

    #[test]
    fn test_clear_frees_everything() {
        let mut pool = ProjectilePool::with_capacity(3);
        pool.acquire();
        pool.acquire();
        pool.clear();
        assert_eq!(pool.active_count(), 0);
    }
}
