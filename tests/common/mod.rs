//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides the core ECS runtime.
//! - `bomber_game::game::configure_headless` installs the gameplay plugins.
//! - Time advances by exactly one fixed step per `app.update()`, so runs are repeatable.

#![allow(dead_code)]

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

/// One 64 Hz fixed step.
pub const STEP: Duration = Duration::from_micros(15_625);

pub fn app_headless() -> App {
    let mut app = App::new();

    // AssetPlugin + ScenePlugin so SceneSpawner exists.
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));

    bomber_game::game::configure_headless(&mut app);
    // `App::run` does this before the first update; plugins such as avian
    // create resources in `Plugin::finish`.
    app.finish();
    app.cleanup();
    app
}

pub fn run_updates(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}

pub fn count<C: Component>(app: &mut App) -> usize {
    app.world_mut().query::<&C>().iter(app.world()).count()
}
