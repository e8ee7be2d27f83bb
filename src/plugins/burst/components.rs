use bevy::prelude::*;

/// Root of one explosion's bullet ring.
#[derive(Component, Debug, Clone, Copy)]
pub struct BomberBurst;

/// Remaining life of a burst, counted on the unscaled fixed clock.
#[derive(Component, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_secs(secs: f32) -> Self {
        Self(Timer::from_seconds(secs.max(0.0), TimerMode::Once))
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct BurstBullet {
    pub velocity: Vec2,
}

/// Bullet → burst link. Despawning the burst despawns every linked bullet.
#[derive(Component, Debug, Clone)]
#[relationship(relationship_target = BurstBullets)]
pub struct BurstOf(pub Entity);

#[derive(Component, Debug, Default)]
#[relationship_target(relationship = BurstOf, linked_spawn)]
pub struct BurstBullets(Vec<Entity>);
