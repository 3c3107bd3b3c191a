//! Return commit: recycle bullets back into the pool.
//!
//! This system is the "owner" of the *Inactive invariants*.
//!
//! Invariant: Inactive bullets must be:
//! - hidden
//! - velocity = 0
//! - collide with nothing (filters empty)

use avian2d::prelude::*;
use bevy::prelude::*;

use super::components::{BulletEntity, BulletState, PooledBullet};
use super::pool::{inactive_bullet_layers, BulletPool};
use crate::plugins::bounds::ScreenBounds;

/// Bullets that flew past the screen edge go back to the pool.
pub fn recall_offscreen_bullets(
    bounds: Res<ScreenBounds>,
    mut q: Query<(&mut BulletState, &Transform), With<PooledBullet>>,
) {
    for (mut state, tf) in &mut q {
        if *state == BulletState::Active && bounds.is_past_edge(tf.translation.truncate(), 8.0) {
            *state = BulletState::PendingReturn;
        }
    }
}

/// Leaving the game scene: every bullet in flight goes back.
pub fn recall_all_bullets(mut q: Query<&mut BulletState, With<PooledBullet>>) {
    for mut state in &mut q {
        if *state == BulletState::Active {
            *state = BulletState::PendingReturn;
        }
    }
}

pub fn return_to_pool_commit(
    mut pool: ResMut<BulletPool>,
    mut q: Query<(
        Entity,
        &mut BulletState,
        &mut Visibility,
        &mut LinearVelocity,
        &mut CollisionLayers,
    ), With<PooledBullet>>,
) {
    for (e, mut state, mut vis, mut vel, mut layers) in &mut q {
        if *state != BulletState::PendingReturn { continue; }

        *state = BulletState::Inactive;
        *vis = Visibility::Hidden;
        vel.0 = Vec2::ZERO;
        *layers = inactive_bullet_layers();

        pool.push_free(BulletEntity(e));
    }
}
