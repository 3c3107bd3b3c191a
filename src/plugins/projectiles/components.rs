use bevy::prelude::*;

use crate::plugins::weapons::WeaponType;

/// Entity that belongs to the bullet pool.
#[derive(Component)]
pub struct PooledBullet;

/// Pool handle: only pooled bullet entities are ever wrapped in this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulletEntity(pub Entity);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BulletState {
    #[default]
    Inactive,
    Active,
    PendingReturn,
}

/// The weapon that fired this bullet. Damage is looked up on impact.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Bullet {
    pub weapon: WeaponType,
}

impl Bullet {
    #[inline]
    pub fn reset_for_fire(&mut self, weapon: WeaponType) {
        self.weapon = weapon;
    }
}
