//! Buffered burst spawn requests.
//!
//! Producers (bombers) only write intent; `spawn_bursts` is the single consumer that
//! creates entities, and from then on the burst plugin owns their lifetime.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct SpawnBurst {
    pub position: Vec2,
    /// Rotation of the bullet ring (radians).
    pub rotation: f32,
    /// Seconds until the burst and all of its bullets are removed.
    pub lifetime_secs: f32,
}
