//! ID types for effects and skills.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for effect IDs.
static EFFECT_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a live combat effect instance.
///
/// IDs are handed out from a process-wide monotonic counter, so two
/// coexisting instances never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(u64);

impl EffectId {
    /// Creates a new unique effect ID.
    #[must_use]
    pub fn new() -> Self {
        Self(EFFECT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates an effect ID from a raw value (for deserialization).
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Null/invalid effect ID.
    pub const NULL: Self = Self(0);

    /// Checks if this is a valid (non-null) effect ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for EffectId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for a skill definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkillId(u32);

impl SkillId {
    /// Creates a skill ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_id_invalid() {
        assert!(!EffectId::NULL.is_valid());
        assert!(EffectId::new().is_valid());
    }

    #[test]
    fn test_from_raw_round_trip() {
        let id = EffectId::from_raw(42);
        assert_eq!(id.raw(), 42);
    }

    #[test]
    fn test_skill_id() {
        assert_eq!(SkillId::new(7).raw(), 7);
    }
}
