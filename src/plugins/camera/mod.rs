//! Camera plugin (render-only).
//!
//! A fixed orthographic camera over the whole arena. The projection maps arena units to
//! pixels with `Tunables::pixels_per_unit`. Shake is applied on top by the FX plugin,
//! which finds this camera through the `MainCamera` marker.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;

#[derive(Component, Debug, Clone, Copy)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera);
}

fn spawn_camera(mut commands: Commands, tunables: Res<Tunables>) {
    let projection = OrthographicProjection {
        scale: 1.0 / tunables.pixels_per_unit.max(f32::EPSILON),
        ..OrthographicProjection::default_2d()
    };

    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        Projection::Orthographic(projection),
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}
