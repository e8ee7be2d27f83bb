//! Spatial queries between two points in the arena plane.
//!
//! Headings are rotations about +Z in radians, and an agent's forward is its local +Y.
//! A heading of 0 therefore faces straight up the screen.

use bevy::prelude::*;

/// Heading that points an agent at `from` toward `to`.
///
/// Coincident points return 0 (facing up) rather than an arbitrary `atan2(0, 0)`.
#[inline]
pub fn bearing_angle(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    if d.length_squared() <= f32::EPSILON {
        return 0.0;
    }
    d.y.atan2(d.x) - std::f32::consts::FRAC_PI_2
}

#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit forward vector for a heading.
#[inline]
pub fn forward(heading: f32) -> Vec2 {
    let (sin, cos) = heading.sin_cos();
    Vec2::new(-sin, cos)
}

/// Bearing from `from` to `to`, offset by `jitter_degrees`.
#[inline]
pub fn jittered_bearing(from: Vec2, to: Vec2, jitter_degrees: f32) -> f32 {
    bearing_angle(from, to) + jitter_degrees.to_radians()
}
