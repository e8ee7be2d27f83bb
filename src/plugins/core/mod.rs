//! Core plugin: shared resources and global settings.
//!
//! Must be registered first: later plugins read `Tunables` while they are built.

use bevy::prelude::*;

use crate::common::time_scale::TimeScale;
use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    if !app.world().contains_resource::<Tunables>() {
        app.insert_resource(Tunables::default());
    }
    app.init_resource::<TimeScale>();
    app.insert_resource(ClearColor(Color::srgb(0.05, 0.05, 0.07)));
}

#[cfg(test)]
mod tests;
