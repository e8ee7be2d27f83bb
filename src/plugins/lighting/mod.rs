//! Lighting plugin (Firefly) (render-only).
//!
//! The player carries a warm light as a child entity, so it follows without a system.
//! Every new burst flashes a glow at its origin that shrinks away over `GLOW_SECS`.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::burst::components::BomberBurst;
use crate::plugins::player::Player;

const GLOW_SECS: f32 = 0.6;
const GLOW_RANGE: f32 = 6.0;

#[derive(Component)]
struct BurstGlow(Timer);

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(
        Update,
        (attach_player_light, spawn_burst_glows, fade_burst_glows)
            .run_if(in_state(GameState::InGame)),
    );
}

fn attach_player_light(mut commands: Commands, q_new: Query<Entity, Added<Player>>) {
    for player in &q_new {
        commands.spawn((
            Name::new("PlayerLight"),
            PointLight2d {
                color: Color::srgb(1.0, 0.9, 0.75),
                radius: 9.0,
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 10.0),
            ChildOf(player),
        ));
    }
}

fn spawn_burst_glows(mut commands: Commands, q_new: Query<&Transform, Added<BomberBurst>>) {
    for tf in &q_new {
        commands.spawn((
            Name::new("BurstGlow"),
            BurstGlow(Timer::from_seconds(GLOW_SECS, TimerMode::Once)),
            PointLight2d {
                color: Color::srgb(1.0, 0.6, 0.25),
                radius: GLOW_RANGE,
                ..default()
            },
            Transform::from_xyz(tf.translation.x, tf.translation.y, 10.0),
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn fade_burst_glows(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut BurstGlow, &mut PointLight2d)>,
) {
    for (e, mut glow, mut light) in &mut q {
        glow.0.tick(time.delta());
        if glow.0.is_finished() {
            commands.entity(e).try_despawn();
            continue;
        }
        light.radius = GLOW_RANGE * (1.0 - glow.0.fraction());
    }
}
