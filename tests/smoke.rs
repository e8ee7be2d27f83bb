mod common;

use avian2d::prelude::TranslationInterpolation;
use bomber_game::plugins::bomber::machine::Bomber;
use bomber_game::plugins::player::Player;

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();
    common::run_updates(&mut app, 3);
}

#[test]
fn player_interpolation_pipeline_is_wired() {
    let mut app = common::app_headless();
    common::run_updates(&mut app, 5);

    let ok = app
        .world_mut()
        .query::<(&Player, &TranslationInterpolation)>()
        .iter(app.world())
        .next()
        .is_some();

    assert!(ok, "Player should opt in to smoothing via TranslationInterpolation");
}

#[test]
fn waves_bring_in_bombers() {
    let mut app = common::app_headless();
    assert_eq!(common::count::<Bomber>(&mut app), 0);

    // First wave after 2.5s at 64 ticks per second.
    common::run_updates(&mut app, 200);

    assert!(common::count::<Bomber>(&mut app) >= 1);
}
