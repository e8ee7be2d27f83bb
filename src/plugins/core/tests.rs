use bevy::prelude::*;

use crate::common::time_scale::TimeScale;
use crate::common::tunables::Tunables;
use crate::plugins::core;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
    assert_eq!(app.world().resource::<TimeScale>().get(), 1.0);
}

#[test]
fn keeps_tunables_inserted_before_it() {
    let mut app = App::new();
    app.insert_resource(Tunables {
        seed: 7,
        ..default()
    });
    core::plugin(&mut app);
    assert_eq!(app.world().resource::<Tunables>().seed, 7);
}
