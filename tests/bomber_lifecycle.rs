mod common;

use std::f32::consts::PI;

use bevy::prelude::*;
use bomber_game::common::tunables::Tunables;
use bomber_game::plugins::bomber::{bomber_bundle, BomberWaves};
use bomber_game::plugins::burst::components::{BomberBurst, BurstBullet};

#[test]
fn bomber_detonates_once_and_its_burst_expires() {
    let mut app = common::app_headless();
    app.world_mut().resource_mut::<BomberWaves>().enabled = false;
    common::run_updates(&mut app, 1);

    let tunables = app.world().resource::<Tunables>().clone();
    let bomber = app
        .world_mut()
        .spawn(bomber_bundle(&tunables, Vec2::new(0.0, 3.0), PI))
        .id();

    let mut ticks = 0;
    while app.world().get_entity(bomber).is_ok() {
        app.update();
        ticks += 1;
        assert!(ticks < 2000, "bomber never detonated");
    }

    assert_eq!(common::count::<BomberBurst>(&mut app), 1);
    assert!(common::count::<BurstBullet>(&mut app) > 0);

    // Burst lifetime is 10s.
    common::run_updates(&mut app, 700);

    assert_eq!(common::count::<BomberBurst>(&mut app), 0);
    assert_eq!(common::count::<BurstBullet>(&mut app), 0);
}
