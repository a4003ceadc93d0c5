//! # Arclight Common
//!
//! Common types and shared abstractions for Project Arclight.
//!
//! This crate provides foundational types used across all Arclight
//! subsystems:
//! - ID types (EffectId, SkillId)
//! - 2D geometry helpers (headings, distances, segment tests)
//! - RGBA color
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod color;
pub mod geom;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::*;
    pub use crate::geom::*;
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_effect_id_generation() {
        let id1 = EffectId::new();
        let id2 = EffectId::new();
        assert_ne!(id1, id2);
        assert!(id2.raw() > id1.raw());
    }

    #[test]
    fn test_heading_and_distance() {
        let origin = Vec2::ZERO;
        let target = Vec2::new(0.0, 5.0);

        assert!((heading(origin, target) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((distance(origin, target) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_color_alpha() {
        let c = Rgba::rgb(1.0, 0.5, 0.0).with_alpha(0.25);
        assert!((c.a - 0.25).abs() < 1e-6);
    }
}
