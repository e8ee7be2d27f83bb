//! Side effects a bomber can cause, and the ECS adapter that turns them into messages.
//!
//! The state machine never touches the world directly. It calls a `BomberEffects`
//! implementation; in the game that is `EntityEffects`, which enqueues intent for the
//! consumers that own each concern (audio mixer, global FX, burst spawner):
//!
//! ```text
//!   Bomber::update ──► EntityEffects ──► PlaySound   ──► audio::play_sounds
//!                                    ├─► ScreenShake ──► fx::collect_fx_requests
//!                                    ├─► SpawnBurst  ──► burst::spawn_bursts
//!                                    └─► despawn(self) via Commands
//! ```
//!
//! Every call is fire-and-forget. Consumers absorb their own failures, so nothing here
//! can stop the final despawn.

use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::plugins::audio::PlaySound;
use crate::plugins::burst::messages::SpawnBurst;
use crate::plugins::fx::ScreenShake;

pub trait BomberEffects {
    fn play_sound(&mut self, sound: PlaySound);
    fn shake_camera(&mut self, intensity: f32);
    /// Hands the burst (and its lifetime) to the spawner. Nothing is returned: the bomber
    /// keeps no reference to what it spawned.
    fn spawn_burst(&mut self, burst: SpawnBurst);
    fn destroy_self(&mut self);
}

/// Writers for every collaborator a bomber talks to.
#[derive(SystemParam)]
pub struct BomberOutputs<'w, 's> {
    commands: Commands<'w, 's>,
    sounds: MessageWriter<'w, PlaySound>,
    shakes: MessageWriter<'w, ScreenShake>,
    bursts: MessageWriter<'w, SpawnBurst>,
}

impl<'w, 's> BomberOutputs<'w, 's> {
    pub fn for_entity(&mut self, entity: Entity) -> EntityEffects<'_, 'w, 's> {
        EntityEffects { out: self, entity }
    }
}

/// `BomberEffects` bound to one bomber entity.
pub struct EntityEffects<'a, 'w, 's> {
    out: &'a mut BomberOutputs<'w, 's>,
    entity: Entity,
}

impl BomberEffects for EntityEffects<'_, '_, '_> {
    fn play_sound(&mut self, sound: PlaySound) {
        self.out.sounds.write(sound);
    }

    fn shake_camera(&mut self, intensity: f32) {
        self.out.shakes.write(ScreenShake { intensity });
    }

    fn spawn_burst(&mut self, burst: SpawnBurst) {
        self.out.bursts.write(burst);
    }

    fn destroy_self(&mut self) {
        // try_: the entity may already be gone if the round ended in the same frame.
        self.out.commands.entity(self.entity).try_despawn();
    }
}
