//! Sound cues.
//!
//! Gameplay writes `PlaySound` messages; `play_sounds` is the only consumer. The build
//! ships without an audio backend, so the mixer resolves each cue to a final gain on its
//! channel and counts it. A muted channel or an unnamed clip drops the cue with a warning
//! and never reaches back into the caller.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundChannel {
    Sfx,
    Music,
}

/// Request to play a named clip.
#[derive(Message, Clone, Debug, PartialEq)]
pub struct PlaySound {
    pub clip: &'static str,
    pub channel: SoundChannel,
    /// Cue volume in [0..1], before the channel volume is applied.
    pub volume: f32,
    pub looped: bool,
    pub fade_in_secs: f32,
}

/// A cue after mixing.
#[derive(Clone, Debug, PartialEq)]
pub struct MixedCue {
    pub clip: &'static str,
    pub channel: SoundChannel,
    pub gain: f32,
    pub looped: bool,
    pub fade_in_secs: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct SoundMixer {
    pub sfx_volume: f32,
    pub music_volume: f32,
    cues_played: u64,
}

impl Default for SoundMixer {
    fn default() -> Self {
        Self {
            sfx_volume: 1.0,
            music_volume: 0.6,
            cues_played: 0,
        }
    }
}

impl SoundMixer {
    pub fn channel_volume(&self, channel: SoundChannel) -> f32 {
        match channel {
            SoundChannel::Sfx => self.sfx_volume,
            SoundChannel::Music => self.music_volume,
        }
        .clamp(0.0, 1.0)
    }

    pub fn cues_played(&self) -> u64 {
        self.cues_played
    }

    /// Mix one request. Returns `None` when the cue is dropped.
    fn mix(&self, req: &PlaySound) -> Option<MixedCue> {
        if req.clip.is_empty() {
            warn!("dropping sound cue with no clip name");
            return None;
        }
        let gain = req.volume.clamp(0.0, 1.0) * self.channel_volume(req.channel);
        if gain <= 0.0 {
            debug!("cue {} is silent on {:?}", req.clip, req.channel);
            return None;
        }
        Some(MixedCue {
            clip: req.clip,
            channel: req.channel,
            gain,
            looped: req.looped,
            fade_in_secs: req.fade_in_secs.max(0.0),
        })
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<SoundMixer>()
        .add_message::<PlaySound>()
        .add_systems(PostUpdate, play_sounds);
}

fn play_sounds(mut mixer: ResMut<SoundMixer>, mut requests: MessageReader<PlaySound>) {
    for req in requests.read() {
        let Some(cue) = mixer.mix(req) else {
            continue;
        };
        mixer.cues_played += 1;
        info!(
            "sound {} on {:?} at gain {:.2} (cue #{})",
            cue.clip,
            cue.channel,
            cue.gain,
            mixer.cues_played()
        );
    }
}

#[cfg(test)]
mod tests;
