//! Global gameplay time multiplier (slow motion).
//!
//! Every timed gameplay rule multiplies its fixed-step delta by this value.
//! The FX plugin is the only writer and runs in `PostUpdate`, outside the fixed loop,
//! so all agents updated within one fixed tick read the same multiplier.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct TimeScale(f32);

impl Default for TimeScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TimeScale {
    /// Negative multipliers would run timers backwards; they are clamped to zero.
    pub fn new(multiplier: f32) -> Self {
        Self(multiplier.max(0.0))
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }

    #[inline]
    pub fn set(&mut self, multiplier: f32) {
        self.0 = multiplier.max(0.0);
    }

    /// Scaled elapsed time for a real delta.
    #[inline]
    pub fn scaled(self, real_delta: f32) -> f32 {
        self.0 * real_delta
    }
}
