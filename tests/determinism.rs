mod common;

use bevy::prelude::*;
use bomber_game::plugins::bomber::machine::Bomber;
use bomber_game::plugins::bomber::phase::BomberPhase;

fn snapshot(app: &mut App) -> Vec<(BomberPhase, Vec2)> {
    let mut out: Vec<_> = app
        .world_mut()
        .query::<&Bomber>()
        .iter(app.world())
        .map(|b| (b.phase(), b.body().position))
        .collect();
    out.sort_by(|a, b| a.1.x.total_cmp(&b.1.x).then(a.1.y.total_cmp(&b.1.y)));
    out
}

#[test]
fn same_seed_same_run() {
    let mut a = common::app_headless();
    let mut b = common::app_headless();

    for _ in 0..6 {
        common::run_updates(&mut a, 100);
        common::run_updates(&mut b, 100);
        assert_eq!(snapshot(&mut a), snapshot(&mut b));
    }

    assert!(!snapshot(&mut a).is_empty());
}
