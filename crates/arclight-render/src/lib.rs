//! # Arclight Render
//!
//! Render dispatch for Project Arclight's combat effects.
//!
//! This crate turns the live instance collections owned by
//! `arclight-effects` into draw primitives against an opaque 2D surface:
//! - A seam trait of draw primitives the embedding game implements
//! - An explicit frame view (camera offset, viewport, cull margin)
//! - A detailed routine set (multi-layer glow and gradient draws)
//! - A fallback routine set (plain filled shapes) with identical culling,
//!   ordering, and instance selection
//!
//! Rendering is strictly read-only: the dispatcher never mutates gameplay
//! state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod fallback;
mod primary;

pub mod dispatch;
pub mod surface;
pub mod view;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::dispatch::*;
    pub use crate::surface::*;
    pub use crate::view::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;
    use arclight_common::SkillId;
    use arclight_effects::prelude::{EffectManager, SkillDescriptor, SpawnOptions, TargetState};
    use glam::Vec2;

    #[test]
    fn test_simulate_then_render_headless() {
        let mut manager = EffectManager::new();
        let skill = SkillDescriptor::new(SkillId::new(1), "Crimson Slash").with_damage(12.0);

        manager.spawn_standard(
            &skill,
            Vec2::new(100.0, 300.0),
            Vec2::new(700.0, 300.0),
            SpawnOptions::default(),
        );

        let mut targets = vec![TargetState::new(1, Vec2::new(400.0, 300.0), 50.0)];
        let view = FrameView::new(Camera::default(), Viewport::new(800.0, 600.0));
        let renderer = EffectRenderer::new();

        for _ in 0..30 {
            manager.update(1.0 / 60.0, &mut targets);
            let mut surface = RecordingSurface::new();
            renderer.render(&manager, &mut surface, &view);
            assert!(surface.is_balanced());
        }

        assert!(targets[0].health < 50.0);
    }
}
