//! Detailed draw routines: multi-layer glow and gradient rendering.
//!
//! Every routine draws at screen coordinates supplied by the dispatcher's
//! [`FrameView`]; culling and instance bracketing happen before these are
//! called.

use glam::Vec2;

use arclight_common::Rgba;
use arclight_effects::prelude::{
    Beam, Element, Explosion, HomingShot, MeleeArc, MuzzleFlash, PiercingBurst, Projectile,
    ProjectileStyle, Summon,
};

use crate::surface::DrawSurface;
use crate::view::FrameView;

/// Transparent version of a color for gradient rims.
fn rim(color: Rgba) -> Rgba {
    color.with_alpha(0.0)
}

pub(crate) fn draw_standard<S: DrawSurface>(
    surface: &mut S,
    projectile: &Projectile,
    view: &FrameView,
) {
    let screen = view.world_to_screen(projectile.position);
    let size = 16.0 * projectile.size;
    let fade = ((projectile.lifetime - projectile.age) / projectile.lifetime).clamp(0.0, 1.0);
    let palette = projectile.element.palette();

    // Trail ribbon, oldest points most transparent.
    let mut previous = None;
    for (point, alpha) in projectile.trail.iter() {
        let point = view.world_to_screen(point);
        if let Some(last) = previous {
            surface.line(last, point, 3.0, projectile.color.faded(alpha * 0.3));
        }
        previous = Some(point);
    }

    match projectile.style {
        ProjectileStyle::Wave => {
            let reach = Vec2::splat(size * 1.1);
            // Outer energy cross.
            surface.line(
                screen - reach,
                screen + reach,
                size * 0.7,
                palette.secondary.faded(fade * 0.4),
            );
            surface.line(
                screen + Vec2::new(reach.x, -reach.y),
                screen + Vec2::new(-reach.x, reach.y),
                size * 0.7,
                palette.secondary.faded(fade * 0.4),
            );
            // Bright inner cross.
            let core = Vec2::splat(size);
            surface.line(
                screen - core,
                screen + core,
                size * 0.3,
                palette.primary.faded(fade),
            );
            surface.line(
                screen + Vec2::new(core.x, -core.y),
                screen + Vec2::new(-core.x, core.y),
                size * 0.3,
                palette.primary.faded(fade),
            );
            // Center flash.
            surface.fill_circle(screen, size * 0.2, Rgba::WHITE.faded(fade * 0.8));
        }
        ProjectileStyle::Bolt => {
            surface.fill_gradient_circle(
                screen,
                size,
                palette.glow.faded(fade * 0.5),
                rim(palette.glow),
            );
            surface.fill_circle(screen, size * 0.5, palette.primary.faded(fade));
            surface.fill_circle(screen, size * 0.25, Rgba::WHITE.faded(fade));
            surface.stroke_circle(screen, size * 0.7, 2.0, palette.glow.faded(fade * 0.6));
        }
        ProjectileStyle::Crescent => {
            let facing = projectile.velocity.y.atan2(projectile.velocity.x);
            surface.stroke_arc(
                screen,
                size,
                facing - 1.2,
                facing + 1.2,
                size * 0.35,
                palette.primary.faded(fade),
            );
            surface.stroke_arc(
                screen,
                size * 0.75,
                facing - 0.9,
                facing + 0.9,
                size * 0.2,
                palette.secondary.faded(fade * 0.7),
            );
            surface.fill_circle(screen, size * 0.15, Rgba::WHITE.faded(fade * 0.8));
        }
    }
}

pub(crate) fn draw_beam<S: DrawSurface>(surface: &mut S, beam: &Beam, view: &FrameView) {
    let from = view.world_to_screen(beam.from);
    let to = view.world_to_screen(beam.to);
    let fade = ((beam.lifetime - beam.age) / beam.lifetime).clamp(0.0, 1.0);
    let palette = beam.element.palette();

    surface.line(from, to, beam.width, palette.primary.faded(fade * 0.8));
    surface.line(from, to, beam.width / 3.0, Rgba::WHITE.faded(fade));
    surface.fill_circle(from, beam.width, palette.glow.faded(fade * 0.6));
    surface.fill_circle(to, beam.width * 0.8, palette.glow.faded(fade * 0.6));
}

pub(crate) fn draw_explosion<S: DrawSurface>(
    surface: &mut S,
    explosion: &Explosion,
    view: &FrameView,
) {
    let screen = view.world_to_screen(explosion.center);
    let alpha = 1.0 - explosion.progress();

    surface.stroke_circle(screen, explosion.radius(), 4.0, explosion.color.faded(alpha * 0.6));
    surface.fill_gradient_circle(
        screen,
        explosion.radius(),
        explosion.color.faded(alpha * 0.3),
        rim(explosion.color),
    );
}

pub(crate) fn draw_arc<S: DrawSurface>(surface: &mut S, arc: &MeleeArc, view: &FrameView) {
    let screen = view.world_to_screen(arc.origin);
    let alpha = 1.0 - arc.progress();
    let start = arc.angle - arc.half_angle;
    let end = arc.angle + arc.half_angle;

    surface.stroke_arc(screen, arc.radius * 0.9, start, end, 12.0, arc.color.faded(alpha * 0.3));
    surface.stroke_arc(screen, arc.radius * 0.8, start, end, 8.0, arc.color.faded(alpha));
    surface.stroke_arc(
        screen,
        arc.radius * 0.7,
        start,
        end,
        3.0,
        Rgba::WHITE.faded(alpha * 0.8),
    );
}

pub(crate) fn draw_homing<S: DrawSurface>(surface: &mut S, shot: &HomingShot, view: &FrameView) {
    let screen = view.world_to_screen(shot.position);

    surface.fill_gradient_circle(screen, 14.0 * shot.size, shot.color.faded(0.5), rim(shot.color));
    surface.fill_circle(screen, 8.0 * shot.size, shot.color);
    surface.fill_circle(
        screen - Vec2::splat(2.0),
        4.0 * shot.size,
        Rgba::rgb(1.0, 1.0, 0.0),
    );
}

pub(crate) fn draw_burst<S: DrawSurface>(
    surface: &mut S,
    burst: &PiercingBurst,
    view: &FrameView,
) {
    let screen = view.world_to_screen(burst.position);
    let fade = (burst.lifetime - burst.age).clamp(0.0, 1.0);
    let palette = burst.element.palette();

    surface.fill_circle(screen, 12.0 * burst.size, palette.glow.faded(fade * 0.3));
    surface.fill_circle(screen, 8.0 * burst.size, palette.secondary.faded(fade * 0.6));
    surface.fill_circle(screen, 4.0 * burst.size, Rgba::WHITE.faded(fade));
}

pub(crate) fn draw_flash<S: DrawSurface>(surface: &mut S, flash: &MuzzleFlash, view: &FrameView) {
    let screen = view.world_to_screen(flash.position);
    let alpha = 1.0 - flash.progress();
    let gold = Rgba::rgb(1.0, 0.843, 0.0);

    surface.fill_circle(screen, 15.0 * alpha, gold.faded(alpha));
    surface.fill_circle(screen, 8.0 * alpha, Rgba::WHITE.faded(alpha));
}

pub(crate) fn draw_summon<S: DrawSurface>(surface: &mut S, summon: &Summon, view: &FrameView) {
    let screen = view.world_to_screen(summon.position);
    let aura = Element::Summon.palette();
    // Dissolve over the last second of life.
    let alpha = summon.remaining().min(1.0);

    surface.fill_gradient_circle(screen, 24.0, aura.glow.faded(alpha * 0.4), rim(aura.glow));
    surface.fill_circle(screen, 15.0, aura.primary.faded(alpha * 0.7));
    surface.stroke_circle(screen, 18.0, 2.0, aura.secondary.faded(alpha * 0.5));
}
