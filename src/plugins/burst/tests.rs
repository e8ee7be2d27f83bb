use bevy::ecs::relationship::RelationshipTarget;
use bevy::prelude::*;

use crate::common::test_utils::{fixed_time_with_delta, run_system_once};
use crate::common::time_scale::TimeScale;
use crate::common::tunables::Tunables;
use crate::plugins::player::{Player, PlayerHit};

use super::components::{BomberBurst, BurstBullet, BurstBullets, BurstOf, Lifetime};
use super::messages::SpawnBurst;
use super::systems::*;

fn burst_world(dt: f32) -> World {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(TimeScale::default());
    world.insert_resource(fixed_time_with_delta(dt));
    world.init_resource::<Messages<SpawnBurst>>();
    world.init_resource::<Messages<PlayerHit>>();
    world
}

fn spawn_one(world: &mut World, lifetime_secs: f32) -> Entity {
    world.write_message(SpawnBurst {
        position: Vec2::new(1.0, 2.0),
        rotation: 0.0,
        lifetime_secs,
    });
    run_system_once(world, spawn_bursts);
    world
        .query_filtered::<Entity, With<BomberBurst>>()
        .single(world)
        .expect("one burst root")
}

#[test]
fn spawn_bursts_builds_root_and_linked_ring() {
    let mut world = burst_world(0.125);
    let root = spawn_one(&mut world, 10.0);

    let linked = world.get::<BurstBullets>(root).expect("bullets linked");
    assert_eq!(linked.len(), 12);

    let mut q = world.query::<(&BurstOf, &BurstBullet, &Transform)>();
    let mut count = 0;
    for (of, bullet, tf) in q.iter(&world) {
        assert_eq!(of.0, root);
        assert!((bullet.velocity.length() - 3.0).abs() < 1e-5);
        assert_eq!(tf.translation.truncate(), Vec2::new(1.0, 2.0));
        count += 1;
    }
    assert_eq!(count, 12);

    let lifetime = world.get::<Lifetime>(root).unwrap();
    assert_eq!(lifetime.duration().as_secs_f32(), 10.0);
}

#[test]
fn expired_burst_takes_its_bullets_with_it() {
    let mut world = burst_world(0.125);
    spawn_one(&mut world, 0.5);

    // 0.5s at 0.125s per tick.
    for _ in 0..3 {
        run_system_once(&mut world, expire_bursts);
    }
    assert_eq!(world.query::<&BomberBurst>().iter(&world).count(), 1);

    run_system_once(&mut world, expire_bursts);
    assert_eq!(world.query::<&BomberBurst>().iter(&world).count(), 0);
    assert_eq!(world.query::<&BurstBullet>().iter(&world).count(), 0);
}

#[test]
fn burst_lifetime_ignores_time_scale() {
    let mut world = burst_world(0.5);
    world.insert_resource(TimeScale::new(0.0));
    spawn_one(&mut world, 0.5);

    run_system_once(&mut world, expire_bursts);

    assert_eq!(world.query::<&BomberBurst>().iter(&world).count(), 0);
}

#[test]
fn bullets_move_by_scaled_time() {
    let mut world = burst_world(0.5);
    world.insert_resource(TimeScale::new(0.5));
    let e = world
        .spawn((
            BurstBullet {
                velocity: Vec2::new(4.0, 0.0),
            },
            Transform::default(),
        ))
        .id();

    run_system_once(&mut world, advance_burst_bullets);

    assert_eq!(world.get::<Transform>(e).unwrap().translation.x, 1.0);
}

#[test]
fn bullet_touching_player_reports_hit_and_is_consumed() {
    let mut world = burst_world(0.125);
    world.spawn((Player, Transform::from_xyz(0.0, 0.0, 1.0)));
    let near = world
        .spawn((BurstBullet { velocity: Vec2::X }, Transform::from_xyz(0.2, 0.0, 2.0)))
        .id();
    let far = world
        .spawn((BurstBullet { velocity: Vec2::X }, Transform::from_xyz(3.0, 0.0, 2.0)))
        .id();

    run_system_once(&mut world, bullet_player_hits);

    assert!(world.get_entity(near).is_err());
    assert!(world.get_entity(far).is_ok());
    let hits: Vec<_> = world.resource_mut::<Messages<PlayerHit>>().drain().collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].at, Vec2::new(0.2, 0.0));
}

#[test]
fn non_positive_lifetime_still_spawns_and_expires_next_tick() {
    let mut world = burst_world(0.125);
    spawn_one(&mut world, 0.0);

    run_system_once(&mut world, expire_bursts);

    assert_eq!(world.query::<&BomberBurst>().iter(&world).count(), 0);
}
