//! Fire consumer: activate bullets from the pool.
//!
//! Invariant: the pool free list only contains pooled bullet entities, so every popped
//! entity matches the bullet query. A miss is logged and the request dropped.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::components::{Bullet, BulletEntity, BulletState, PooledBullet};
use super::messages::FireRequest;
use super::pool::{active_bullet_layers, BulletPool};
use crate::plugins::weapons::WeaponRegistry;

pub fn allocate_bullets_from_pool(
    registry: Res<WeaponRegistry>,
    mut pool: ResMut<BulletPool>,
    mut reader: MessageReader<FireRequest>,
    mut q: Query<(
        &mut BulletState,
        &mut Bullet,
        &mut Transform,
        &mut LinearVelocity,
        &mut Visibility,
        &mut CollisionLayers,
        &mut Sprite,
    ), With<PooledBullet>>,
) {
    for req in reader.read() {
        let Some(BulletEntity(e)) = pool.pop_free() else {
            // Capacity decision, not a correctness failure.
            debug!("bullet pool exhausted, dropping {:?} shot", req.weapon);
            continue;
        };

        let Ok((mut state, mut bullet, mut tf, mut vel, mut vis, mut layers, mut sprite)) = q.get_mut(e) else {
            error!("bullet pool held {e:?} without pooled bullet components");
            continue;
        };

        *state = BulletState::Active;
        bullet.reset_for_fire(req.weapon);
        tf.translation = req.pos.extend(2.0);
        vel.0 = req.vel;
        *vis = Visibility::Visible;
        *layers = active_bullet_layers();
        sprite.color = registry.get(req.weapon).projectile_color();
    }
}
