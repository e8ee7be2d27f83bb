//! World plugin: walls on the play area border and a checkered floor.
//!
//! Walls only collide with the player. Bombers fly in from outside and pass straight
//! through them.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;
use crate::common::tunables::Tunables;

const WALL_THICKNESS: f32 = 0.5;
const TILE: f32 = 1.0;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_arena, spawn_floor));
}

fn spawn_arena(mut commands: Commands, tunables: Res<Tunables>) {
    let wall_color = Color::srgb(0.25, 0.27, 0.33);
    let half = tunables.play_area.half_extents;
    let t = WALL_THICKNESS;

    let wall_layers = CollisionLayers::new(Layer::World, [Layer::Player]);

    let mut spawn_wall = |name: &'static str, pos: Vec2, size: Vec2| {
        commands.spawn((
            Name::new(name),
            Sprite {
                color: wall_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(pos.extend(0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    let horizontal = Vec2::new(half.x * 2.0 + t * 2.0, t);
    let vertical = Vec2::new(t, half.y * 2.0);

    spawn_wall("WallTop", Vec2::new(0.0, half.y + t * 0.5), horizontal);
    spawn_wall("WallBottom", Vec2::new(0.0, -half.y - t * 0.5), horizontal);
    spawn_wall("WallLeft", Vec2::new(-half.x - t * 0.5, 0.0), vertical);
    spawn_wall("WallRight", Vec2::new(half.x + t * 0.5, 0.0), vertical);
}

/// Solid-color tiles; the project ships no assets.
fn spawn_floor(mut commands: Commands, tunables: Res<Tunables>) {
    let half = tunables.play_area.half_extents;
    let nx = (half.x / TILE).floor() as i32;
    let ny = (half.y / TILE).floor() as i32;

    (-ny..=ny)
        .flat_map(|y| (-nx..=nx).map(move |x| (x, y)))
        .for_each(|(x, y)| {
            let color = if (x + y) % 2 == 0 {
                Color::srgb(0.14, 0.14, 0.16)
            } else {
                Color::srgb(0.12, 0.12, 0.14)
            };

            commands.spawn((
                Name::new("FloorTile"),
                Sprite::from_color(color, Vec2::splat(TILE)),
                Transform::from_xyz(x as f32 * TILE, y as f32 * TILE, 0.0),
                DespawnOnExit(GameState::InGame),
            ));
        });
}
