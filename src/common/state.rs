//! Top-level game state.
//!
//! Everything spawned for a round (player, walls, bombers, bursts) is scoped to
//! `InGame` with `DespawnOnExit`, which is also how a bomber gets cancelled mid-phase.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
