//! Player plugin. The player is what bombers home on.
//!
//! Pipeline:
//! - Update: sample WASD/arrow keys, write PlayerInput resource
//! - FixedUpdate: apply velocity to the rigid body
//!
//! The body is dynamic with rotation locked, so the arena walls stop it.
//! Input is `Option<Res<...>>` so headless apps without an input plugin just idle.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};

#[derive(Component)]
pub struct Player;

/// A burst bullet reached the player.
#[derive(Message, Clone, Copy, Debug)]
pub struct PlayerHit {
    pub at: Vec2,
}

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    move_axis: Vec2,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_message::<PlayerHit>()
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input)
        .add_systems(FixedUpdate, apply_movement);
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World]);
    let r = tunables.player_radius;

    commands.spawn((
        Name::new("Player"),
        Player,
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(r * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
        RigidBody::Dynamic,
        LockedAxes::ROTATION_LOCKED,
        Collider::circle(r),
        layers,
        LinearVelocity::ZERO,
        TranslationInterpolation,
        DespawnOnExit(GameState::InGame),
    ));
}

/// Movement bindings: WASD and the arrow keys.
const BINDINGS: [(KeyCode, Vec2); 8] = [
    (KeyCode::KeyW, Vec2::Y),
    (KeyCode::ArrowUp, Vec2::Y),
    (KeyCode::KeyS, Vec2::NEG_Y),
    (KeyCode::ArrowDown, Vec2::NEG_Y),
    (KeyCode::KeyA, Vec2::NEG_X),
    (KeyCode::ArrowLeft, Vec2::NEG_X),
    (KeyCode::KeyD, Vec2::X),
    (KeyCode::ArrowRight, Vec2::X),
];

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else {
        return;
    };

    // A direction counts once even when both of its keys are held.
    let held = |dir: Vec2| -> f32 {
        let down = BINDINGS.iter().any(|(key, d)| *d == dir && keys.pressed(*key));
        if down { 1.0 } else { 0.0 }
    };
    let axis = Vec2::new(held(Vec2::X) - held(Vec2::NEG_X), held(Vec2::Y) - held(Vec2::NEG_Y));

    input.move_axis = axis.normalize_or_zero();
}

fn apply_movement(
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mut q_player: Query<&mut LinearVelocity, With<Player>>,
) {
    let Ok(mut vel) = q_player.single_mut() else {
        return;
    };
    vel.0 = input.move_axis * tunables.player_speed;
}

#[cfg(test)]
mod tests;
