//! The draw-surface seam.
//!
//! The effects renderer only ever issues these primitives; the embedding
//! game maps them onto its actual 2D context. Every drawn effect instance
//! is bracketed in [`DrawSurface::push`]/[`DrawSurface::pop`], which gives
//! tests a primitive-independent way to count drawn instances.

use glam::Vec2;

use arclight_common::Rgba;

/// An opaque 2D drawing context.
///
/// Coordinates arriving here are already screen-space; the renderer applies
/// the camera transform before issuing primitives.
pub trait DrawSurface {
    /// Begins one effect instance.
    fn push(&mut self);

    /// Ends the current effect instance.
    fn pop(&mut self);

    /// Filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroked circle outline.
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba);

    /// Radial gradient from `inner` at the center to `outer` at the rim.
    fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);

    /// Line segment.
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Stroked arc between two angles.
    fn stroke_arc(
        &mut self,
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        width: f32,
        color: Rgba,
    );
}

/// Call-counting surface for tests and diagnostics.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    /// Completed push/pop instance brackets.
    pub instances: usize,
    /// Filled circles issued.
    pub fills: usize,
    /// Stroked circles issued.
    pub strokes: usize,
    /// Gradient fills issued.
    pub gradients: usize,
    /// Line segments issued.
    pub lines: usize,
    /// Stroked arcs issued.
    pub arcs: usize,
    depth: usize,
}

impl RecordingSurface {
    /// Creates an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total primitives issued, brackets excluded.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.fills + self.strokes + self.gradients + self.lines + self.arcs
    }

    /// Whether every push was matched by a pop.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        self.depth == 0
    }
}

impl DrawSurface for RecordingSurface {
    fn push(&mut self) {
        self.depth += 1;
    }

    fn pop(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
            if self.depth == 0 {
                self.instances += 1;
            }
        }
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.fills += 1;
    }

    fn stroke_circle(&mut self, _center: Vec2, _radius: f32, _width: f32, _color: Rgba) {
        self.strokes += 1;
    }

    fn fill_gradient_circle(&mut self, _center: Vec2, _radius: f32, _inner: Rgba, _outer: Rgba) {
        self.gradients += 1;
    }

    fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Rgba) {
        self.lines += 1;
    }

    fn stroke_arc(
        &mut self,
        _center: Vec2,
        _radius: f32,
        _start_angle: f32,
        _end_angle: f32,
        _width: f32,
        _color: Rgba,
    ) {
        self.arcs += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_counts() {
        let mut surface = RecordingSurface::new();
        surface.push();
        surface.fill_circle(Vec2::ZERO, 5.0, Rgba::WHITE);
        surface.line(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0, Rgba::WHITE);
        surface.pop();

        assert_eq!(surface.instances, 1);
        assert_eq!(surface.primitive_count(), 2);
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_stray_pop_counts_nothing() {
        let mut surface = RecordingSurface::new();
        surface.pop();
        assert!(surface.is_balanced());
        assert_eq!(surface.instances, 0);
    }
}
