use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::time_scale::TimeScale;
use crate::common::tunables::Tunables;
use crate::plugins::player::{Player, PlayerHit};

use super::components::{BomberBurst, BurstBullet, BurstOf, Lifetime};
use super::messages::SpawnBurst;

/// Consumer: materialize each requested burst as a root plus a ring of bullets.
pub fn spawn_bursts(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut reader: MessageReader<SpawnBurst>,
) {
    let cfg = tunables.burst;

    for req in reader.read() {
        if !(req.lifetime_secs > 0.0) {
            warn!(
                "burst at {:?} requested with lifetime {}; it will expire immediately",
                req.position, req.lifetime_secs
            );
        }

        let root = commands
            .spawn((
                Name::new("BomberBurst"),
                BomberBurst,
                Lifetime::from_secs(req.lifetime_secs),
                Transform::from_translation(req.position.extend(2.0))
                    .with_rotation(Quat::from_rotation_z(req.rotation)),
                DespawnOnExit(GameState::InGame),
            ))
            .id();

        for i in 0..cfg.bullet_count {
            let angle = req.rotation + std::f32::consts::TAU * i as f32 / cfg.bullet_count as f32;
            commands.spawn((
                Name::new("BurstBullet"),
                BurstBullet {
                    velocity: Vec2::from_angle(angle) * cfg.bullet_speed,
                },
                BurstOf(root),
                Sprite {
                    color: Color::srgb(1.0, 0.55, 0.2),
                    custom_size: Some(Vec2::splat(cfg.bullet_radius * 2.0)),
                    ..default()
                },
                Transform::from_translation(req.position.extend(2.0)),
                DespawnOnExit(GameState::InGame),
            ));
        }

        info!("burst {root:?} with {} bullets at {:?}", cfg.bullet_count, req.position);
    }
}

pub fn advance_burst_bullets(
    time: Res<Time<Fixed>>,
    time_scale: Res<TimeScale>,
    mut q: Query<(&BurstBullet, &mut Transform)>,
) {
    let dt = time_scale.scaled(time.delta_secs());
    for (bullet, mut tf) in &mut q {
        tf.translation += (bullet.velocity * dt).extend(0.0);
    }
}

/// Bullets that reach the player are consumed and reported.
pub fn bullet_player_hits(
    mut commands: Commands,
    tunables: Res<Tunables>,
    q_player: Query<&Transform, (With<Player>, Without<BurstBullet>)>,
    q_bullets: Query<(Entity, &Transform), With<BurstBullet>>,
    mut hits: MessageWriter<PlayerHit>,
) {
    let Ok(player_tf) = q_player.single() else {
        return;
    };
    let player = player_tf.translation.truncate();
    let reach = tunables.player_radius + tunables.burst.bullet_radius;

    for (e, tf) in &q_bullets {
        let at = tf.translation.truncate();
        if at.distance_squared(player) < reach * reach {
            commands.entity(e).try_despawn();
            hits.write(PlayerHit { at });
        }
    }
}

/// The spawner's side of the lifetime handoff: despawn bursts whose time is up.
pub fn expire_bursts(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut q: Query<(Entity, &mut Lifetime), With<BomberBurst>>,
) {
    for (e, mut lt) in &mut q {
        lt.tick(time.delta());
        if lt.is_finished() {
            debug!("burst {e:?} expired");
            commands.entity(e).try_despawn();
        }
    }
}
