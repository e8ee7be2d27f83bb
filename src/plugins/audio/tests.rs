use super::*;

use crate::common::test_utils::run_system_once;

fn explosion(volume: f32) -> PlaySound {
    PlaySound {
        clip: "sfx_BomberExplosion",
        channel: SoundChannel::Sfx,
        volume,
        looped: false,
        fade_in_secs: 0.3,
    }
}

fn mixer_world(mixer: SoundMixer) -> World {
    let mut world = World::new();
    world.insert_resource(mixer);
    world.init_resource::<Messages<PlaySound>>();
    world
}

#[test]
fn gain_is_cue_volume_times_channel_volume() {
    let mixer = SoundMixer {
        sfx_volume: 0.5,
        ..default()
    };
    let cue = mixer.mix(&explosion(0.3)).expect("audible");
    assert!((cue.gain - 0.15).abs() < 1e-6);
    assert_eq!(cue.fade_in_secs, 0.3);
    assert!(!cue.looped);
}

#[test]
fn muted_channel_drops_cue() {
    let mixer = SoundMixer {
        sfx_volume: 0.0,
        ..default()
    };
    assert!(mixer.mix(&explosion(0.3)).is_none());
}

#[test]
fn empty_clip_is_dropped() {
    let mixer = SoundMixer::default();
    let req = PlaySound {
        clip: "",
        ..explosion(1.0)
    };
    assert!(mixer.mix(&req).is_none());
}

#[test]
fn play_sounds_records_each_audible_cue() {
    let mut world = mixer_world(SoundMixer::default());
    world.write_message(explosion(0.3));
    world.write_message(PlaySound {
        clip: "",
        ..explosion(1.0)
    });
    world.write_message(explosion(0.3));

    run_system_once(&mut world, play_sounds);

    assert_eq!(world.resource::<SoundMixer>().cues_played(), 2);
}
