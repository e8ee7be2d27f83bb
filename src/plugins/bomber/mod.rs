//! Bomber plugin: kamikaze enemies that fly in, home on the player, swell and burst.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! 1) FACTS live in the `Bomber` component: phase, speeds, timers and a `BomberBody`
//!    (position, heading, scale). The sprite's `Transform` is derived from the body.
//!
//! 2) RULES live in `machine.rs` as plain Rust. `drive_bombers` samples the clock, the
//!    global `TimeScale` and the player's position once per fixed tick and feeds the same
//!    `BomberTick` to every bomber.
//!
//! 3) SIDE EFFECTS leave through `BomberEffects`. In the game these become messages
//!    (sound, shake, burst) plus a despawn, consumed by the plugins that own them.
//!
//! 4) PRESENTATION (`tint_bombers`) only reads facts.
//!
//! Waves come from `BomberWaves`, a seeded spawner, so a run is reproducible from
//! `Tunables::seed`.

pub mod effects;
pub mod machine;
pub mod motion;
pub mod phase;
pub mod spatial;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::state::GameState;
use crate::common::time_scale::TimeScale;
use crate::common::tunables::{PlayArea, Tunables};
use crate::plugins::player::Player;

use effects::BomberOutputs;
use machine::{Bomber, BomberTick};
use motion::BomberBody;
use phase::BomberPhase;
use spatial::jittered_bearing;

// -----------------------------------------------------------------------------
// Resources
// -----------------------------------------------------------------------------

/// Periodic, seeded bomber spawner.
#[derive(Resource, Debug)]
pub struct BomberWaves {
    pub enabled: bool,
    countdown: f32,
    rng: ChaCha8Rng,
}

impl BomberWaves {
    pub fn new(seed: u64, first_wave_in: f32) -> Self {
        Self {
            enabled: true,
            countdown: first_wave_in,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Count down by `dt`. Returns true once per elapsed interval.
    fn tick(&mut self, dt: f32, interval: f32) -> bool {
        self.countdown -= dt;
        if self.countdown > 0.0 {
            return false;
        }
        self.countdown += interval.max(f32::EPSILON);
        true
    }

    /// A point just outside the play area, on a uniformly chosen side.
    fn next_spawn_point(&mut self, area: PlayArea, margin: f32) -> Vec2 {
        let outer = area.half_extents + Vec2::splat(margin);
        let along: f32 = self.rng.gen_range(-1.0..1.0);
        match self.rng.gen_range(0..4) {
            0 => Vec2::new(along * area.half_extents.x, outer.y),
            1 => Vec2::new(along * area.half_extents.x, -outer.y),
            2 => Vec2::new(-outer.x, along * area.half_extents.y),
            _ => Vec2::new(outer.x, along * area.half_extents.y),
        }
    }

    /// Aim jitter in degrees, in `[-max, max)`.
    fn next_jitter(&mut self, max_degrees: f32) -> f32 {
        if max_degrees <= 0.0 {
            return 0.0;
        }
        self.rng.gen_range(-max_degrees..max_degrees)
    }
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

/// Register bomber systems.
///
/// Schedules:
/// - FixedUpdate: spawn waves, then run every bomber's state machine.
/// - Update: derive sprite tint from phase.
pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    app.insert_resource(BomberWaves::new(tunables.seed, tunables.waves.interval_secs));

    app.add_systems(
        FixedUpdate,
        (spawn_bomber_waves, drive_bombers.after(spawn_bomber_waves))
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(Update, tint_bombers.run_if(in_state(GameState::InGame)));
}

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

/// Everything a bomber entity needs, already in `Anticipation`.
pub fn bomber_bundle(tunables: &Tunables, position: Vec2, heading: f32) -> impl Bundle {
    let body = BomberBody::new(position, heading);
    let mut tf = Transform::from_xyz(0.0, 0.0, 1.5);
    body.write_to(&mut tf);

    (
        Name::new("Bomber"),
        Bomber::new(&tunables.bomber, tunables.play_area, body),
        Sprite {
            color: phase_color(BomberPhase::Anticipation, 0.0),
            custom_size: Some(Vec2::splat(tunables.bomber.sprite_size)),
            ..default()
        },
        tf,
        DespawnOnExit(GameState::InGame),
    )
}

pub fn spawn_bomber(
    commands: &mut Commands,
    tunables: &Tunables,
    position: Vec2,
    heading: f32,
) -> Entity {
    commands.spawn(bomber_bundle(tunables, position, heading)).id()
}

/// Spawn one bomber per elapsed wave interval, aimed at the player (or the arena centre).
fn spawn_bomber_waves(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    tunables: Res<Tunables>,
    mut waves: ResMut<BomberWaves>,
    q_player: Query<&Transform, With<Player>>,
) {
    if !waves.enabled {
        return;
    }
    if !waves.tick(time.delta_secs(), tunables.waves.interval_secs) {
        return;
    }

    let aim_at = q_player
        .single()
        .map(|tf| tf.translation.truncate())
        .unwrap_or(Vec2::ZERO);

    let position = waves.next_spawn_point(tunables.play_area, tunables.waves.spawn_margin);
    let jitter = waves.next_jitter(tunables.bomber.aim_jitter_degrees);
    let heading = jittered_bearing(position, aim_at, jitter);

    let e = spawn_bomber(&mut commands, &tunables, position, heading);
    debug!("spawned bomber {e:?} at {position:?}");
}

// -----------------------------------------------------------------------------
// Rules
// -----------------------------------------------------------------------------

/// Advance every bomber by one fixed tick and sync its transform.
pub fn drive_bombers(
    time: Res<Time<Fixed>>,
    time_scale: Res<TimeScale>,
    // Disjointness proof: players are never bombers.
    q_target: Query<&Transform, (With<Player>, Without<Bomber>)>,
    mut q_bombers: Query<(Entity, &mut Bomber, &mut Transform), Without<Player>>,
    mut out: BomberOutputs,
) {
    let tick = BomberTick {
        delta: time.delta_secs(),
        time_scale: time_scale.get(),
        now: time.elapsed_secs_f64(),
        target: q_target.single().ok().map(|tf| tf.translation.truncate()),
    };

    for (e, mut bomber, mut tf) in &mut q_bombers {
        if bomber.is_destroyed() || bomber.phase().is_terminal() {
            continue;
        }
        let mut fx = out.for_entity(e);
        bomber.update(&tick, &mut fx);
        bomber.body().write_to(&mut tf);
    }
}

// -----------------------------------------------------------------------------
// Presentation
// -----------------------------------------------------------------------------

/// Phase tint. While charging, `flicker` in [0..1] pushes the colour toward white.
fn phase_color(phase: BomberPhase, flicker: f32) -> Color {
    match phase {
        BomberPhase::Anticipation => Color::srgb(0.6, 0.2, 0.2),
        BomberPhase::Seeking => Color::srgb(0.9, 0.25, 0.2),
        BomberPhase::PreExploding | BomberPhase::Exploding => {
            let f = flicker.clamp(0.0, 1.0);
            Color::srgb(1.0, 0.35 + 0.65 * f, 0.2 + 0.8 * f)
        }
    }
}

/// Flicker rate climbs as the explosion timer runs out.
fn charge_flicker(explosion_timer: f32, explosion_secs: f32, clock: f32) -> f32 {
    let remaining = (explosion_timer / explosion_secs.max(f32::EPSILON)).clamp(0.0, 1.0);
    let hz = 2.0 + 14.0 * (1.0 - remaining);
    0.5 + 0.5 * (clock * hz * std::f32::consts::TAU).sin()
}

fn tint_bombers(time: Res<Time>, tunables: Res<Tunables>, mut q: Query<(&Bomber, &mut Sprite)>) {
    // The oscillator only needs phase.
    let clock = time.elapsed_secs_wrapped();
    for (bomber, mut sprite) in &mut q {
        let flicker = match bomber.phase() {
            BomberPhase::PreExploding => {
                charge_flicker(bomber.explosion_timer(), tunables.bomber.explosion_secs, clock)
            }
            _ => 0.0,
        };
        sprite.color = phase_color(bomber.phase(), flicker);
    }
}
