//! Global feedback: camera shake, white flash, hitstop and slow motion.
//!
//! ```text
//!   ScreenShake ─┐
//!                ├─► collect_fx_requests ──► GlobalFx ──► apply_time_scale ──► TimeScale
//!   PlayerHit ───┘                                   └──► apply_global_fx  ──► camera offset, overlay
//! ```
//!
//! Producers only write messages. `GlobalFx` is the one place the feedback state lives,
//! and `apply_time_scale` is the only writer of `TimeScale`. It runs in PostUpdate, so the
//! multiplier holds still across the next batch of fixed ticks.
//!
//! All FX clocks run on `Time<Real>`: a hitstop freezes gameplay time, and it must still
//! be able to end. The camera half (`ensure_fx_handles`, `apply_global_fx`) does nothing
//! until a `MainCamera` exists, so headless apps still get time scaling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::Real;

use crate::common::state::GameState;
use crate::common::time_scale::TimeScale;
use crate::plugins::camera::MainCamera;
use crate::plugins::player::PlayerHit;

/// Largest camera offset (arena units) at full trauma.
const MAX_SHAKE_OFFSET: f32 = 0.8;
/// Trauma lost per real second.
const TRAUMA_FADE: f32 = 0.9;
/// Flash lost per real second.
const FLASH_FADE: f32 = 3.0;
const FLASH_MAX_ALPHA: f32 = 0.85;

/// Intensity in [0..1], clamped on every write.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Level(f32);

impl Level {
    fn full(v: f32) -> Self {
        Self(v.clamp(0.0, 1.0))
    }
    fn value(self) -> f32 {
        self.0
    }
    fn bump(&mut self, by: f32) {
        *self = Self::full(self.0 + by);
    }
    /// Linear fade toward zero.
    fn fade(&mut self, per_sec: f32, dt: f32) {
        self.0 = (self.0 - per_sec * dt).max(0.0);
    }
}

/// Real seconds left on a countdown; never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Countdown(f32);

impl Countdown {
    fn secs(self) -> f32 {
        self.0
    }
    /// Extend to at least `secs`. Never shortens a running countdown.
    fn extend_to(&mut self, secs: f32) {
        self.0 = self.0.max(secs).max(0.0);
    }
    fn run_down(&mut self, dt: f32) {
        self.0 = (self.0 - dt).max(0.0);
    }
    fn running(self) -> bool {
        self.0 > 0.0
    }
}

/// Add camera trauma. Intensity is in [0..1]; shakes stack up to 1.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ScreenShake {
    pub intensity: f32,
}

#[derive(Component, Debug, Clone, Copy)]
struct ScreenFlashOverlay;

/// Cached camera/overlay entities, plus the shake offset applied last frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
struct FxHandles {
    camera: Option<Entity>,
    overlay: Option<Entity>,
    applied_offset: Vec2,
}

#[derive(Resource, Debug)]
pub struct GlobalFx {
    trauma: Level,
    /// Real seconds fed to the shake oscillator.
    shake_clock: f32,
    flash: Level,
    hitstop: Countdown,
    slowmo: Countdown,
    slowmo_len: f32,
    slowmo_floor: f32,
}

impl Default for GlobalFx {
    fn default() -> Self {
        Self {
            trauma: Level::default(),
            shake_clock: 0.0,
            flash: Level::default(),
            hitstop: Countdown::default(),
            slowmo: Countdown::default(),
            slowmo_len: 0.8,
            slowmo_floor: 0.3,
        }
    }
}

impl GlobalFx {
    fn add_shake(&mut self, intensity: f32) {
        self.trauma.bump(intensity);
    }

    /// Flash, a 60ms freeze, then time eases back up from `slowmo_floor`.
    fn trigger_player_hit(&mut self) {
        self.trauma.bump(0.3);
        self.flash = Level::full(0.7);
        self.hitstop.extend_to(0.06);
        self.slowmo.extend_to(self.slowmo_len);
    }

    /// Gameplay multiplier for the current state. Hitstop wins over slowmo.
    fn time_scale(&self) -> f32 {
        if self.hitstop.running() {
            return 0.0;
        }
        if !self.slowmo.running() {
            return 1.0;
        }
        let progress = 1.0 - (self.slowmo.secs() / self.slowmo_len.max(1e-4)).clamp(0.0, 1.0);
        let floor = self.slowmo_floor.clamp(0.0, 1.0);
        floor + (1.0 - floor) * smootherstep(progress)
    }

    /// Advance the real-time countdowns. Slowmo waits for the hitstop to end.
    fn run_down(&mut self, dt: f32) {
        if self.hitstop.running() {
            self.hitstop.run_down(dt);
        } else {
            self.slowmo.run_down(dt);
        }
    }
}

/// Quintic ease, 0..1 -> 0..1.
#[inline]
fn smootherstep(x: f32) -> f32 {
    x * x * x * (x * (x * 6.0 - 15.0) + 10.0)
}

/// Deterministic shake offset for a trauma level at an oscillator time.
fn shake_offset(trauma: f32, clock: f32) -> Vec2 {
    use std::f32::consts::TAU;

    if trauma <= 0.0 {
        return Vec2::ZERO;
    }
    let wobble = Vec2::new(
        (clock * 37.0 * TAU).sin() + 0.5 * (clock * 61.0 * TAU).sin(),
        (clock * 41.0 * TAU).cos() + 0.5 * (clock * 53.0 * TAU).cos(),
    );
    wobble.clamp_length_max(1.0) * MAX_SHAKE_OFFSET * trauma * trauma
}

pub fn plugin(app: &mut App) {
    app.init_resource::<GlobalFx>()
        .init_resource::<FxHandles>()
        .init_resource::<TimeScale>()
        .add_message::<ScreenShake>()
        .add_systems(
            PostUpdate,
            (
                collect_fx_requests,
                apply_time_scale,
                ensure_fx_handles,
                apply_global_fx,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );
}

fn collect_fx_requests(
    mut fx: ResMut<GlobalFx>,
    mut shakes: MessageReader<ScreenShake>,
    mut hits: MessageReader<PlayerHit>,
) {
    for shake in shakes.read() {
        fx.add_shake(shake.intensity);
    }
    for hit in hits.read() {
        debug!("player hit at {:?}", hit.at);
        fx.trigger_player_hit();
    }
}

fn apply_time_scale(
    real_time: Res<Time<Real>>,
    mut fx: ResMut<GlobalFx>,
    mut scale: ResMut<TimeScale>,
) {
    // Publish before running down: the frame that starts a hitstop is already frozen.
    scale.set(fx.time_scale());
    fx.run_down(real_time.delta_secs());
}

fn ensure_fx_handles(
    mut commands: Commands,
    mut handles: ResMut<FxHandles>,
    q_main_cam: Query<Entity, With<MainCamera>>,
) {
    if handles.camera.is_none() {
        handles.camera = q_main_cam.single().ok();
    }
    if handles.camera.is_none() || handles.overlay.is_some() {
        return;
    }

    let overlay = commands
        .spawn((
            Name::new("ScreenFlash"),
            ScreenFlashOverlay,
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, 0.0),
                custom_size: Some(Vec2::splat(200.0)),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 900.0),
            Visibility::Hidden,
        ))
        .id();
    handles.overlay = Some(overlay);
}

fn apply_global_fx(
    real_time: Res<Time<Real>>,
    mut fx: ResMut<GlobalFx>,
    mut handles: ResMut<FxHandles>,
    // Disjoint: the camera never carries the overlay marker.
    mut q_cam: Query<&mut Transform, (With<MainCamera>, Without<ScreenFlashOverlay>)>,
    mut q_overlay: Query<
        (&mut Transform, &mut Sprite, &mut Visibility),
        (With<ScreenFlashOverlay>, Without<MainCamera>),
    >,
) {
    let (Some(cam_e), Some(overlay_e)) = (handles.camera, handles.overlay) else {
        return;
    };
    let Ok(mut cam_tf) = q_cam.get_mut(cam_e) else {
        return;
    };
    let dt = real_time.delta_secs();

    // Every shake frequency is a whole number of Hz, so wrapping at 1s is seamless.
    fx.shake_clock = (fx.shake_clock + dt).rem_euclid(1.0);
    fx.trauma.fade(TRAUMA_FADE, dt);
    fx.flash.fade(FLASH_FADE, dt);

    // Swap last frame's offset for this frame's so the camera never drifts.
    let offset = shake_offset(fx.trauma.value(), fx.shake_clock);
    let delta = offset - handles.applied_offset;
    cam_tf.translation.x += delta.x;
    cam_tf.translation.y += delta.y;
    handles.applied_offset = offset;

    let Ok((mut tf, mut sprite, mut vis)) = q_overlay.get_mut(overlay_e) else {
        return;
    };
    tf.translation.x = cam_tf.translation.x;
    tf.translation.y = cam_tf.translation.y;

    let alpha = (fx.flash.value() * FLASH_MAX_ALPHA).min(FLASH_MAX_ALPHA);
    if alpha > 0.001 {
        *vis = Visibility::Visible;
        sprite.color = Color::srgba(1.0, 1.0, 1.0, alpha);
    } else {
        *vis = Visibility::Hidden;
    }
}
