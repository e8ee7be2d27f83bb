use bevy::prelude::*;
use avian2d::prelude::*;

use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;

#[test]
fn spawn_creates_player_sized_from_tunables() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        player_radius: 0.5,
        ..default()
    });
    run_system_once(&mut world, super::spawn);

    let mut q = world.query_filtered::<&Sprite, With<super::Player>>();
    let sprite = q.single(&world).expect("one player");
    assert_eq!(sprite.custom_size, Some(Vec2::splat(1.0)));
}

#[test]
fn apply_movement_sets_velocity() {
    let mut world = World::new();
    world.insert_resource(Tunables {
        player_speed: 4.0,
        ..default()
    });
    world.insert_resource(super::PlayerInput {
        move_axis: Vec2::new(1.0, 0.0),
    });
    world.spawn((super::Player, LinearVelocity::ZERO));

    run_system_once(&mut world, super::apply_movement);

    let v = world.query::<&LinearVelocity>().iter(&world).next().unwrap();
    assert_eq!(v.0, Vec2::new(4.0, 0.0));
}

#[test]
fn gather_input_without_keyboard_keeps_axis() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput { move_axis: Vec2::X });

    run_system_once(&mut world, super::gather_input);

    assert_eq!(world.resource::<super::PlayerInput>().move_axis, Vec2::X);
}

#[test]
fn gather_input_normalizes_diagonals() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput::default());
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::KeyD);
    world.insert_resource(keys);

    run_system_once(&mut world, super::gather_input);

    let axis = world.resource::<super::PlayerInput>().move_axis;
    assert!((axis.length() - 1.0).abs() < 1e-6);
    assert!(axis.x > 0.0 && axis.y > 0.0);
}

#[test]
fn arrow_keys_move_and_duplicate_bindings_count_once() {
    let mut world = World::new();
    world.insert_resource(super::PlayerInput::default());
    let mut keys = ButtonInput::<KeyCode>::default();
    keys.press(KeyCode::KeyW);
    keys.press(KeyCode::ArrowUp);
    world.insert_resource(keys);

    run_system_once(&mut world, super::gather_input);

    assert_eq!(world.resource::<super::PlayerInput>().move_axis, Vec2::Y);
}
