//! Agent motion model: forward integration and charge-up scale.

use bevy::prelude::*;

use super::spatial::forward;

/// Kinematic state owned by the simulation.
///
/// The sprite's `Transform` is derived from this every tick, never read back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BomberBody {
    pub position: Vec2,
    pub heading: f32,
    pub scale: f32,
}

impl BomberBody {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self {
            position,
            heading,
            scale: 1.0,
        }
    }

    /// Move along the current heading by `speed * scaled_dt`.
    #[inline]
    pub fn advance(&mut self, speed: f32, scaled_dt: f32) {
        self.position += forward(self.heading) * (speed * scaled_dt);
    }

    pub fn write_to(&self, tf: &mut Transform) {
        tf.translation.x = self.position.x;
        tf.translation.y = self.position.y;
        tf.rotation = Quat::from_rotation_z(self.heading);
        tf.scale = Vec3::new(self.scale, self.scale, 1.0);
    }
}

/// Visual scale after `elapsed` seconds of charging.
///
/// The interpolation parameter is clamped, so the scale settles at `to` instead of
/// growing for as long as the phase lasts.
#[inline]
pub fn charge_scale(from: f32, to: f32, charge_secs: f32, elapsed: f32) -> f32 {
    let t = (elapsed / charge_secs.max(f32::EPSILON)).clamp(0.0, 1.0);
    from + (to - from) * t
}
