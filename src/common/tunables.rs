//! Tunable gameplay constants.
//!
//! World units are arena units: the visible play area spans ±9.4 horizontally and
//! ±7.3 vertically. The camera maps them to pixels with `pixels_per_unit`.

use bevy::prelude::*;

use crate::plugins::audio::SoundChannel;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_unit: f32,
    pub player_speed: f32,
    pub player_radius: f32,
    pub play_area: PlayArea,
    pub bomber: BomberTunables,
    pub burst: BurstTunables,
    pub waves: WaveTunables,
    /// Seed for spawn positions and aim jitter.
    pub seed: u64,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_unit: 48.0,
            player_speed: 6.0,
            player_radius: 0.35,
            play_area: PlayArea::default(),
            bomber: BomberTunables::default(),
            burst: BurstTunables::default(),
            waves: WaveTunables::default(),
            seed: 0x0B0B_BE12,
        }
    }
}

/// Axis-aligned rectangle centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub half_extents: Vec2,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(9.4, 7.3),
        }
    }
}

impl PlayArea {
    /// Strictly inside: points on the border count as outside.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > -self.half_extents.x
            && p.x < self.half_extents.x
            && p.y > -self.half_extents.y
            && p.y < self.half_extents.y
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BomberTunables {
    /// Base forward speed (units/s).
    pub speed: f32,
    /// Anticipation slow-down per fixed tick, multiplied by the time scale.
    pub anticipation_decay_per_tick: f32,
    pub anticipation_secs: f32,
    pub engagement_distance: f32,
    pub pre_explosion_secs: f32,
    pub explosion_secs: f32,
    /// PreExploding braking (units/s per second).
    pub brake_rate: f32,
    pub charge_scale_from: f32,
    pub charge_scale_to: f32,
    pub charge_secs: f32,
    /// Spawn aim is jittered by up to this many degrees either way.
    pub aim_jitter_degrees: f32,
    pub shake_intensity: f32,
    pub explosion_clip: &'static str,
    pub explosion_channel: SoundChannel,
    pub explosion_volume: f32,
    pub explosion_fade_in_secs: f32,
    pub burst_lifetime_secs: f32,
    pub sprite_size: f32,
}

impl Default for BomberTunables {
    fn default() -> Self {
        Self {
            speed: 2.5,
            anticipation_decay_per_tick: 0.05,
            anticipation_secs: 0.5,
            engagement_distance: 5.0,
            pre_explosion_secs: 5.0,
            explosion_secs: 2.0,
            brake_rate: 2.0,
            charge_scale_from: 1.0,
            charge_scale_to: 1.2,
            charge_secs: 1.0,
            aim_jitter_degrees: 5.0,
            shake_intensity: 0.4,
            explosion_clip: "sfx_BomberExplosion",
            explosion_channel: SoundChannel::Sfx,
            explosion_volume: 0.3,
            explosion_fade_in_secs: 0.3,
            burst_lifetime_secs: 10.0,
            sprite_size: 0.6,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BurstTunables {
    pub bullet_count: u32,
    pub bullet_speed: f32,
    pub bullet_radius: f32,
}

impl Default for BurstTunables {
    fn default() -> Self {
        Self {
            bullet_count: 12,
            bullet_speed: 3.0,
            bullet_radius: 0.12,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WaveTunables {
    pub interval_secs: f32,
    /// Distance outside the play area at which bombers appear.
    pub spawn_margin: f32,
}

impl Default for WaveTunables {
    fn default() -> Self {
        Self {
            interval_secs: 2.5,
            spawn_margin: 1.0,
        }
    }
}
