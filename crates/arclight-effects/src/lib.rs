//! # Arclight Effects
//!
//! Combat effects core for Project Arclight.
//!
//! This crate owns every transient combat entity from spawn to expiry:
//! - Skill descriptors and the on-disk skill library
//! - Effect archetypes (standard, beam, explosion, melee arc, homing shot,
//!   piercing burst, summon, particle)
//! - The lifecycle manager: per-frame advancement, collision, and damage
//! - Fixed-capacity pooling for high-frequency projectiles
//! - Status effects, combat events, and configuration
//!
//! The caller drives one `update` per frame with a delta and its live
//! targets; rendering is a separate read-only pass over the accessors, so
//! the whole simulation runs headless in tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod archetype;
pub mod area;
pub mod config;
pub mod element;
pub mod events;
pub mod guided;
pub mod manager;
pub mod particle;
pub mod pool;
pub mod projectile;
pub mod skill;
pub mod status;
pub mod strike;
pub mod summon;
pub mod target;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::archetype::*;
    pub use crate::area::*;
    pub use crate::config::*;
    pub use crate::element::*;
    pub use crate::events::*;
    pub use crate::guided::*;
    pub use crate::manager::*;
    pub use crate::particle::*;
    pub use crate::pool::*;
    pub use crate::projectile::*;
    pub use crate::skill::*;
    pub use crate::status::*;
    pub use crate::strike::*;
    pub use crate::summon::*;
    pub use crate::target::*;
}

pub use prelude::*;
