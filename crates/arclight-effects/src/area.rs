//! Area effects: channeled beams and one-shot explosions.

use glam::Vec2;

use arclight_common::{point_segment_distance, EffectId, Rgba, SkillId};

use crate::element::Element;
use crate::status::StatusFlags;

/// Stroke width of a beam.
pub const BEAM_WIDTH: f32 = 12.0;

/// Visible duration of an explosion, in seconds.
pub const EXPLOSION_DURATION: f32 = 0.5;

/// Fraction of the final radius an explosion starts at.
const EXPLOSION_START_FRACTION: f32 = 0.3;

/// A channeled line beam dealing damage on a fixed interval.
///
/// Damage lands in discrete ticks, one per elapsed interval, never once per
/// frame; the accumulator starts empty so the first tick lands a full
/// interval after the beam ignites.
#[derive(Debug, Clone, Copy)]
pub struct Beam {
    /// Instance identity.
    pub id: EffectId,
    /// Originating skill.
    pub skill: SkillId,
    /// Beam start point.
    pub from: Vec2,
    /// Beam end point.
    pub to: Vec2,
    /// Stroke width.
    pub width: f32,
    /// Damage per tick.
    pub damage: f32,
    /// Damage element.
    pub element: Element,
    /// Status effects applied on each tick.
    pub status: StatusFlags,
    /// Tint.
    pub color: Rgba,
    /// Seconds since ignition.
    pub age: f32,
    /// Seconds until the beam ends.
    pub lifetime: f32,
    /// Seconds between damage ticks.
    pub tick_interval: f32,
    /// Time accumulated toward the next tick.
    tick_timer: f32,
}

impl Beam {
    /// Creates a beam between two points.
    #[must_use]
    pub fn new(
        skill: SkillId,
        from: Vec2,
        to: Vec2,
        damage: f32,
        element: Element,
        status: StatusFlags,
        lifetime: f32,
        tick_interval: f32,
    ) -> Self {
        Self {
            id: EffectId::new(),
            skill,
            from,
            to,
            width: BEAM_WIDTH,
            damage,
            element,
            status,
            color: element.base_color(),
            age: 0.0,
            lifetime,
            tick_interval: tick_interval.max(1e-3),
            tick_timer: 0.0,
        }
    }

    /// Whether the beam has ended.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Advances the beam clock; returns `true` when a damage tick lands.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.age += dt;
        self.tick_timer += dt;
        if self.tick_timer >= self.tick_interval {
            self.tick_timer = 0.0;
            return true;
        }
        false
    }

    /// Whether a point lies within the beam's stroke.
    #[must_use]
    pub fn hits(&self, point: Vec2) -> bool {
        point_segment_distance(point, self.from, self.to) < self.width / 2.0
    }
}

/// A one-shot area burst with an expanding visual radius.
#[derive(Debug, Clone, Copy)]
pub struct Explosion {
    /// Instance identity.
    pub id: EffectId,
    /// Originating skill.
    pub skill: SkillId,
    /// Blast center.
    pub center: Vec2,
    /// Final blast radius.
    pub max_radius: f32,
    /// Damage applied to everything inside the blast.
    pub damage: f32,
    /// Damage element.
    pub element: Element,
    /// Status effects applied on the blast.
    pub status: StatusFlags,
    /// Tint.
    pub color: Rgba,
    /// Seconds since detonation.
    pub age: f32,
    /// Seconds until the visual fades.
    pub lifetime: f32,
    /// One-shot latch: set once damage has been dealt.
    pub dealt: bool,
}

impl Explosion {
    /// Creates an explosion at a point.
    #[must_use]
    pub fn new(
        skill: SkillId,
        center: Vec2,
        radius: f32,
        damage: f32,
        element: Element,
        status: StatusFlags,
    ) -> Self {
        Self {
            id: EffectId::new(),
            skill,
            center,
            max_radius: radius,
            damage,
            element,
            status,
            color: element.base_color(),
            age: 0.0,
            lifetime: EXPLOSION_DURATION,
            dealt: false,
        }
    }

    /// Whether the visual has faded.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Expansion progress in 0.0..=1.0.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    /// Current animated radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.max_radius
            * (EXPLOSION_START_FRACTION + self.progress() * (1.0 - EXPLOSION_START_FRACTION))
    }
}
