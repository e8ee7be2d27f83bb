//! Physics: the player body and the arena walls. Bombers and bursts move kinematically
//! under `TimeScale` and never enter the solver.

use avian2d::prelude::*;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    // Arena units are roughly meters, so the default length unit fits.
    app.add_plugins(PhysicsPlugins::default());
    app.insert_resource(Gravity(Vec2::ZERO));
}
