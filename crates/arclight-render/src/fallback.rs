//! Fallback draw routines: plain filled shapes.
//!
//! Used when the detailed routine set is unavailable. Culling, draw order,
//! and the drawn instance set are decided by the dispatcher, so this path
//! stays behaviorally identical to the detailed one; only the primitives
//! per instance differ.

use arclight_common::Rgba;
use arclight_effects::prelude::{
    Beam, Explosion, HomingShot, MeleeArc, MuzzleFlash, PiercingBurst, Projectile, Summon,
};

use crate::surface::DrawSurface;
use crate::view::FrameView;

pub(crate) fn draw_standard<S: DrawSurface>(
    surface: &mut S,
    projectile: &Projectile,
    view: &FrameView,
) {
    let screen = view.world_to_screen(projectile.position);
    surface.fill_circle(screen, 10.0 * projectile.size, projectile.color);
}

pub(crate) fn draw_beam<S: DrawSurface>(surface: &mut S, beam: &Beam, view: &FrameView) {
    surface.line(
        view.world_to_screen(beam.from),
        view.world_to_screen(beam.to),
        beam.width,
        beam.color.faded(0.8),
    );
}

pub(crate) fn draw_explosion<S: DrawSurface>(
    surface: &mut S,
    explosion: &Explosion,
    view: &FrameView,
) {
    let alpha = 1.0 - explosion.progress();
    surface.stroke_circle(
        view.world_to_screen(explosion.center),
        explosion.radius(),
        4.0,
        explosion.color.faded(alpha),
    );
}

pub(crate) fn draw_arc<S: DrawSurface>(surface: &mut S, arc: &MeleeArc, view: &FrameView) {
    let alpha = 1.0 - arc.progress();
    surface.stroke_arc(
        view.world_to_screen(arc.origin),
        arc.radius * 0.8,
        arc.angle - arc.half_angle,
        arc.angle + arc.half_angle,
        8.0,
        arc.color.faded(alpha),
    );
}

pub(crate) fn draw_homing<S: DrawSurface>(surface: &mut S, shot: &HomingShot, view: &FrameView) {
    surface.fill_circle(view.world_to_screen(shot.position), 8.0 * shot.size, shot.color);
}

pub(crate) fn draw_burst<S: DrawSurface>(
    surface: &mut S,
    burst: &PiercingBurst,
    view: &FrameView,
) {
    surface.fill_circle(view.world_to_screen(burst.position), 8.0 * burst.size, burst.color);
}

pub(crate) fn draw_flash<S: DrawSurface>(surface: &mut S, flash: &MuzzleFlash, view: &FrameView) {
    let alpha = 1.0 - flash.progress();
    surface.fill_circle(
        view.world_to_screen(flash.position),
        15.0 * alpha,
        Rgba::rgb(1.0, 0.843, 0.0).faded(alpha),
    );
}

pub(crate) fn draw_summon<S: DrawSurface>(surface: &mut S, summon: &Summon, view: &FrameView) {
    let alpha = summon.remaining().min(1.0) * 0.7;
    surface.fill_circle(
        view.world_to_screen(summon.position),
        15.0,
        Rgba::rgb(1.0, 0.667, 0.0).faded(alpha),
    );
}
