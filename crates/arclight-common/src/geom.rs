//! 2D geometry helpers for aiming, collision, and beam tests.
//!
//! All functions are pure; positions are world-space [`Vec2`].

use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Bearing in radians from one point toward another.
#[must_use]
pub fn heading(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector pointing along the given angle.
#[must_use]
pub fn unit_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Wraps an angle into the (-PI, PI] range.
#[must_use]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// Shortest signed difference rotating `from` toward `to`, in [-PI, PI].
#[must_use]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Distance from a point to the closest point on segment `a`-`b`.
///
/// Degenerate segments (a == b) reduce to point distance.
#[must_use]
pub fn point_segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }

    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}
