//! Frame view: explicit camera, viewport, and the shared culling decision.
//!
//! The camera offset and viewport arrive as parameters every frame, never
//! from ambient globals, so the renderer can run headless. Both routine
//! sets go through [`FrameView::is_visible`]; keeping the decision in one
//! place prevents the two paths from drifting apart.

use glam::Vec2;

/// Default off-screen margin before an instance is culled.
pub const DEFAULT_CULL_MARGIN: f32 = 100.0;

/// Caller-supplied camera offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    /// World-space offset subtracted from every drawn position.
    pub offset: Vec2,
}

impl Camera {
    /// Creates a camera at a world offset.
    #[must_use]
    pub const fn new(offset: Vec2) -> Self {
        Self { offset }
    }
}

/// Caller-supplied viewport size in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in screen units.
    pub width: f32,
    /// Height in screen units.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Everything the renderer needs to place and cull one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    /// Camera offset.
    pub camera: Camera,
    /// Viewport size.
    pub viewport: Viewport,
    /// Generous margin so instances fade in at the screen edge.
    pub margin: f32,
}

impl FrameView {
    /// Creates a view with the default cull margin.
    #[must_use]
    pub const fn new(camera: Camera, viewport: Viewport) -> Self {
        Self {
            camera,
            viewport,
            margin: DEFAULT_CULL_MARGIN,
        }
    }

    /// Override the cull margin.
    #[must_use]
    pub const fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Transforms a world position into screen space.
    #[must_use]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.camera.offset
    }

    /// The single culling decision shared by every routine set.
    #[must_use]
    pub fn is_visible(&self, world: Vec2) -> bool {
        let screen = self.world_to_screen(world);
        screen.x >= -self.margin
            && screen.x <= self.viewport.width + self.margin
            && screen.y >= -self.margin
            && screen.y <= self.viewport.height + self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> FrameView {
        FrameView::new(
            Camera::new(Vec2::new(1000.0, 0.0)),
            Viewport::new(800.0, 600.0),
        )
    }

    #[test]
    fn test_world_to_screen_subtracts_offset() {
        let screen = view().world_to_screen(Vec2::new(1400.0, 300.0));
        assert_eq!(screen, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_visibility_with_margin() {
        let v = view();
        // On-screen.
        assert!(v.is_visible(Vec2::new(1400.0, 300.0)));
        // Inside the margin band.
        assert!(v.is_visible(Vec2::new(950.0, 300.0)));
        // Far off the left edge.
        assert!(!v.is_visible(Vec2::new(700.0, 300.0)));
        // Far below.
        assert!(!v.is_visible(Vec2::new(1400.0, 800.0)));
    }

    #[test]
    fn test_margin_override() {
        let tight = view().with_margin(0.0);
        assert!(!tight.is_visible(Vec2::new(950.0, 300.0)));
    }
}
