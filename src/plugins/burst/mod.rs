//! Burst plugin: the projectile ring left behind by an exploding bomber.
//!
//! ```text
//!   SpawnBurst ──► spawn_bursts ──► BomberBurst (Lifetime) ◄── BurstOf ── BurstBullet × N
//!                                        │                                   │
//!                     expire_bursts: despawn root (+ linked bullets)   advance_burst_bullets
//!                                                                      bullet_player_hits ──► PlayerHit
//! ```
//!
//! Bullets are moved by hand instead of by the physics step so they follow `TimeScale`
//! like everything else the bombers do.

pub mod components;
pub mod messages;
pub mod systems;

use bevy::prelude::*;

use crate::common::state::GameState;

pub fn plugin(app: &mut App) {
    app.add_message::<messages::SpawnBurst>();

    app.add_systems(
        FixedUpdate,
        (
            systems::spawn_bursts,
            systems::advance_burst_bullets,
            systems::bullet_player_hits,
            systems::expire_bursts,
        )
            .chain()
            .after(crate::plugins::bomber::drive_bombers)
            .run_if(in_state(GameState::InGame)),
    );
}

#[cfg(test)]
mod tests;
