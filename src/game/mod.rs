//! Game composition root.
//!
//! - `configure_full`: window, renderer, gameplay and render-only plugins.
//! - `configure_headless`: gameplay only. Integration tests bring their own
//!   `MinimalPlugins`.

use bevy::prelude::*;
use bevy::window::WindowResolution;

use crate::common::state::GameState;
use crate::plugins;

pub fn run() {
    App::new().add_plugins(configure_full).run();
}

pub fn configure_full(app: &mut App) {
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bomber".into(),
            // 20 x 15 arena units at 48 px per unit.
            resolution: WindowResolution::new(960, 720),
            ..default()
        }),
        ..default()
    }));

    configure_game(app);
    plugins::register_render(app);
}

/// No DefaultPlugins and no render-only plugins (Firefly, camera).
pub fn configure_headless(app: &mut App) {
    configure_game(app);
}

fn configure_game(app: &mut App) {
    app.init_state::<GameState>();
    plugins::register_gameplay(app);
}
