//! The render dispatcher.
//!
//! Maps every live effect instance to a draw routine by kind, in a fixed
//! order: particles first, summons last (so companions draw above the
//! projectile effects). Two complete routine sets exist; which one runs is
//! chosen once at construction. Culling, activation checks, and the
//! push/pop instance bracket all live here, shared by both sets, so the
//! paths can only differ in the primitives they emit.
//!
//! The dispatcher reads instance state and never mutates gameplay.

use tracing::warn;

use arclight_effects::prelude::{EffectManager, Particle};

use crate::surface::DrawSurface;
use crate::view::FrameView;
use crate::{fallback, primary};

/// Which routine set the dispatcher runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Multi-layer glow and gradient draws.
    Detailed,
    /// Plain filled shapes, used when the detailed set is unavailable.
    Fallback,
}

/// Dispatches live effect instances to draw routines.
#[derive(Debug, Clone, Copy)]
pub struct EffectRenderer {
    style: RenderStyle,
}

impl Default for EffectRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectRenderer {
    /// Creates a renderer running the detailed routine set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: RenderStyle::Detailed,
        }
    }

    /// Creates a renderer running the fallback routine set.
    ///
    /// Logged once here, never per frame.
    #[must_use]
    pub fn fallback() -> Self {
        warn!("detailed draw routines unavailable, using flat-shape fallback");
        Self {
            style: RenderStyle::Fallback,
        }
    }

    /// The active routine set.
    #[must_use]
    pub const fn style(&self) -> RenderStyle {
        self.style
    }

    /// Draws every live instance the manager holds.
    ///
    /// Instances whose activation delay has not elapsed, and instances
    /// outside the view margin, are skipped identically by both routine
    /// sets.
    pub fn render<S: DrawSurface>(
        &self,
        manager: &EffectManager,
        surface: &mut S,
        view: &FrameView,
    ) {
        // Ambient and trail particles sit under everything.
        for particle in manager.particles() {
            if !view.is_visible(particle.position) {
                continue;
            }
            surface.push();
            draw_particle(surface, particle, view);
            surface.pop();
        }

        for arc in manager.melee_arcs() {
            if !arc.is_active() || !view.is_visible(arc.origin) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_arc(surface, arc, view),
                RenderStyle::Fallback => fallback::draw_arc(surface, arc, view),
            }
            surface.pop();
        }

        for flash in manager.muzzle_flashes() {
            if !flash.is_active() || !view.is_visible(flash.position) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_flash(surface, flash, view),
                RenderStyle::Fallback => fallback::draw_flash(surface, flash, view),
            }
            surface.pop();
        }

        for shot in manager.homing_shots() {
            if !shot.is_active() || !view.is_visible(shot.position) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_homing(surface, shot, view),
                RenderStyle::Fallback => fallback::draw_homing(surface, shot, view),
            }
            surface.pop();
        }

        for burst in manager.piercing_bursts() {
            if !burst.is_active() || !view.is_visible(burst.position) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_burst(surface, burst, view),
                RenderStyle::Fallback => fallback::draw_burst(surface, burst, view),
            }
            surface.pop();
        }

        for projectile in manager.standard() {
            if !projectile.is_active() || !view.is_visible(projectile.position) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_standard(surface, projectile, view),
                RenderStyle::Fallback => fallback::draw_standard(surface, projectile, view),
            }
            surface.pop();
        }

        for beam in manager.beams() {
            if !view.is_visible(beam.from) && !view.is_visible(beam.to) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_beam(surface, beam, view),
                RenderStyle::Fallback => fallback::draw_beam(surface, beam, view),
            }
            surface.pop();
        }

        for explosion in manager.explosions() {
            if !view.is_visible(explosion.center) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_explosion(surface, explosion, view),
                RenderStyle::Fallback => fallback::draw_explosion(surface, explosion, view),
            }
            surface.pop();
        }

        // Summons draw above every projectile effect.
        for summon in manager.summons() {
            if !view.is_visible(summon.position) {
                continue;
            }
            surface.push();
            match self.style {
                RenderStyle::Detailed => primary::draw_summon(surface, summon, view),
                RenderStyle::Fallback => fallback::draw_summon(surface, summon, view),
            }
            surface.pop();
        }
    }
}

/// Particles draw the same way in both routine sets.
fn draw_particle<S: DrawSurface>(surface: &mut S, particle: &Particle, view: &FrameView) {
    surface.fill_circle(
        view.world_to_screen(particle.position),
        particle.size,
        particle.color.faded(particle.alpha()),
    );
}
