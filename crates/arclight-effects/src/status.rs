//! Status effects applied to targets on hit.

use serde::{Deserialize, Serialize};

/// Burn duration applied on hit, in seconds.
pub const BURN_DURATION: f32 = 3.0;

/// Freeze duration applied on hit, in seconds.
pub const FREEZE_DURATION: f32 = 2.0;

/// Stun duration applied on hit, in seconds.
pub const STUN_DURATION: f32 = 1.0;

/// Which status effects a hit applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusFlags {
    /// Apply burn.
    pub burn: bool,
    /// Apply freeze.
    pub freeze: bool,
    /// Apply stun.
    pub stun: bool,
}

impl StatusFlags {
    /// No status effects.
    pub const NONE: Self = Self {
        burn: false,
        freeze: false,
        stun: false,
    };

    /// Whether any flag is set.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.burn || self.freeze || self.stun
    }
}

/// Countdown timers for the status effects on one target.
///
/// Re-application refreshes a timer to its full duration; it never shortens
/// one already running.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusTimers {
    /// Remaining burn time in seconds.
    pub burning: f32,
    /// Remaining freeze time in seconds.
    pub frozen: f32,
    /// Remaining stun time in seconds.
    pub stunned: f32,
}

impl StatusTimers {
    /// Applies the flagged effects, refreshing their timers.
    pub fn apply(&mut self, flags: StatusFlags) {
        if flags.burn {
            self.burning = self.burning.max(BURN_DURATION);
        }
        if flags.freeze {
            self.frozen = self.frozen.max(FREEZE_DURATION);
        }
        if flags.stun {
            self.stunned = self.stunned.max(STUN_DURATION);
        }
    }

    /// Counts all timers down by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.burning = (self.burning - dt).max(0.0);
        self.frozen = (self.frozen - dt).max(0.0);
        self.stunned = (self.stunned - dt).max(0.0);
    }

    /// Whether the target is burning.
    #[must_use]
    pub fn is_burning(&self) -> bool {
        self.burning > 0.0
    }

    /// Whether the target is frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen > 0.0
    }

    /// Whether the target is stunned.
    #[must_use]
    pub fn is_stunned(&self) -> bool {
        self.stunned > 0.0
    }

    /// Whether any status is active.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.is_burning() || self.is_frozen() || self.is_stunned()
    }
}
