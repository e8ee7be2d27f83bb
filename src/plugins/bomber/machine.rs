//! The bomber's phase state machine.
//!
//! ```text
//!   Anticipation ──► Seeking ──► PreExploding ──► Exploding ──► (destroyed)
//! ```
//!
//! Plain data plus an explicit `BomberTick` per update: no ECS queries, no ambient
//! clock, no global time scale. `drive_bombers` builds the tick from `Time<Fixed>`,
//! `TimeScale` and the player's transform; tests build it by hand.
//!
//! Each phase is an arm in `enter` and `update`. A phase's update returns the phase to
//! hand over to; `change_phase` then runs that phase's entry before the tick ends.

use bevy::prelude::*;

use crate::common::tunables::{BomberTunables, PlayArea};
use crate::plugins::audio::PlaySound;
use crate::plugins::burst::messages::SpawnBurst;

use super::effects::BomberEffects;
use super::motion::{charge_scale, BomberBody};
use super::phase::BomberPhase;
use super::spatial::{bearing_angle, distance};

/// Speeds at or below this count as stopped. Subtracting a per-tick step from a float
/// leaves a residue of a few ULPs, which would otherwise cost an extra tick.
const STOPPED_EPSILON: f32 = 1e-4;

/// Inputs sampled once per fixed tick and shared by every bomber updated in it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BomberTick {
    /// Real seconds since the previous tick.
    pub delta: f32,
    pub time_scale: f32,
    /// Clock time in seconds; used for phase start stamps. Kept in f64 so long sessions
    /// don't lose sub-tick precision.
    pub now: f64,
    pub target: Option<Vec2>,
}

impl BomberTick {
    #[inline]
    pub fn scaled_delta(&self) -> f32 {
        self.time_scale * self.delta
    }
}

#[derive(Component, Debug, Clone)]
pub struct Bomber {
    config: BomberTunables,
    play_area: PlayArea,
    body: BomberBody,
    phase: BomberPhase,
    speed: f32,
    anticipation_speed: f32,
    anticipation_timer: f32,
    pre_explosion_timer: f32,
    explosion_timer: f32,
    pre_explosion_started_at: Option<f64>,
    destroyed: bool,
}

impl Bomber {
    /// Create a bomber in `Anticipation`, with that phase's entry already run.
    pub fn new(config: &BomberTunables, play_area: PlayArea, body: BomberBody) -> Self {
        let mut bomber = Self {
            config: *config,
            play_area,
            body,
            phase: BomberPhase::Anticipation,
            speed: config.speed,
            anticipation_speed: 0.0,
            anticipation_timer: config.anticipation_secs,
            pre_explosion_timer: config.pre_explosion_secs,
            explosion_timer: config.explosion_secs,
            pre_explosion_started_at: None,
            destroyed: false,
        };
        bomber.enter_anticipation();
        bomber
    }

    pub fn phase(&self) -> BomberPhase {
        self.phase
    }

    pub fn body(&self) -> &BomberBody {
        &self.body
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn anticipation_speed(&self) -> f32 {
        self.anticipation_speed
    }

    pub fn anticipation_timer(&self) -> f32 {
        self.anticipation_timer
    }

    pub fn pre_explosion_timer(&self) -> f32 {
        self.pre_explosion_timer
    }

    pub fn explosion_timer(&self) -> f32 {
        self.explosion_timer
    }

    pub fn pre_explosion_started_at(&self) -> Option<f64> {
        self.pre_explosion_started_at
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Run the active phase for one tick.
    ///
    /// Returns the phase entered this tick, if any. A destroyed bomber ignores updates.
    pub fn update(
        &mut self,
        tick: &BomberTick,
        fx: &mut impl BomberEffects,
    ) -> Option<BomberPhase> {
        if self.destroyed {
            return None;
        }

        let next = match self.phase {
            BomberPhase::Anticipation => self.update_anticipation(tick),
            BomberPhase::Seeking => self.update_seeking(tick),
            BomberPhase::PreExploding => self.update_pre_exploding(tick),
            BomberPhase::Exploding => None,
        };

        if let Some(next) = next {
            self.change_phase(next, tick, fx);
        }
        next
    }

    /// Hand over to `next` and run its entry.
    ///
    /// # Panics
    /// If `next` is not the immediate successor of the current phase.
    pub(super) fn change_phase(
        &mut self,
        next: BomberPhase,
        tick: &BomberTick,
        fx: &mut impl BomberEffects,
    ) {
        if self.phase.next() != Some(next) {
            panic!(
                "bomber phases only move forward one step: {:?} -> {:?}",
                self.phase, next
            );
        }

        debug!("bomber {:?} -> {:?} at {:?}", self.phase, next, self.body.position);
        self.phase = next;

        match next {
            BomberPhase::Anticipation => self.enter_anticipation(),
            BomberPhase::Seeking => {}
            BomberPhase::PreExploding => self.enter_pre_exploding(tick),
            BomberPhase::Exploding => self.enter_exploding(fx),
        }
    }

    // -------------------------------------------------------------------------
    // Anticipation
    // -------------------------------------------------------------------------

    fn enter_anticipation(&mut self) {
        self.anticipation_speed = self.speed;
    }

    fn update_anticipation(&mut self, tick: &BomberTick) -> Option<BomberPhase> {
        let scaled = tick.scaled_delta();
        let mut next = None;

        // Outside the arena nothing decays: the bomber keeps flying in at full speed.
        if self.play_area.contains(self.body.position) {
            if self.anticipation_speed > 0.0 {
                self.anticipation_speed -=
                    self.config.anticipation_decay_per_tick * tick.time_scale;
                if self.anticipation_speed <= STOPPED_EPSILON {
                    self.anticipation_speed = 0.0;
                }
            }
            // The timer starts on the same tick the speed reaches zero.
            if self.anticipation_speed == 0.0 {
                self.anticipation_timer -= scaled;
                if self.anticipation_timer < 0.0 {
                    next = Some(BomberPhase::Seeking);
                }
            }
        }

        self.body.advance(self.anticipation_speed, scaled);
        next
    }

    // -------------------------------------------------------------------------
    // Seeking
    // -------------------------------------------------------------------------

    fn update_seeking(&mut self, tick: &BomberTick) -> Option<BomberPhase> {
        let scaled = tick.scaled_delta();
        self.body.advance(self.speed, scaled);

        let Some(target) = tick.target else {
            return Some(BomberPhase::PreExploding);
        };

        self.body.heading = bearing_angle(self.body.position, target);
        self.pre_explosion_timer -= scaled;

        let in_range = distance(self.body.position, target) < self.config.engagement_distance;
        (self.pre_explosion_timer <= 0.0 || in_range).then_some(BomberPhase::PreExploding)
    }

    // -------------------------------------------------------------------------
    // PreExploding
    // -------------------------------------------------------------------------

    fn enter_pre_exploding(&mut self, tick: &BomberTick) {
        let started = *self.pre_explosion_started_at.get_or_insert(tick.now);
        self.body.scale = self.charge_scale_at((tick.now - started) as f32);
    }

    fn update_pre_exploding(&mut self, tick: &BomberTick) -> Option<BomberPhase> {
        let scaled = tick.scaled_delta();

        self.speed = (self.speed - self.config.brake_rate * scaled).max(0.0);
        self.body.advance(self.speed, scaled);

        let started = self.pre_explosion_started_at.unwrap_or(tick.now);
        self.body.scale = self.charge_scale_at((tick.now - started) as f32);

        self.explosion_timer -= scaled;
        (self.explosion_timer < 0.0).then_some(BomberPhase::Exploding)
    }

    /// Scale after `elapsed` seconds of PreExploding.
    pub fn charge_scale_at(&self, elapsed: f32) -> f32 {
        charge_scale(
            self.config.charge_scale_from,
            self.config.charge_scale_to,
            self.config.charge_secs,
            elapsed,
        )
    }

    // -------------------------------------------------------------------------
    // Exploding
    // -------------------------------------------------------------------------

    fn enter_exploding(&mut self, fx: &mut impl BomberEffects) {
        info!("bomber detonating at {:?}", self.body.position);

        fx.play_sound(PlaySound {
            clip: self.config.explosion_clip,
            channel: self.config.explosion_channel,
            volume: self.config.explosion_volume,
            looped: false,
            fade_in_secs: self.config.explosion_fade_in_secs,
        });
        fx.shake_camera(self.config.shake_intensity);
        fx.spawn_burst(SpawnBurst {
            position: self.body.position,
            rotation: 0.0,
            lifetime_secs: self.config.burst_lifetime_secs,
        });

        self.destroyed = true;
        fx.destroy_self();
    }
}
