//! Projectiles plugin: **message-based producer → consumer** firing + pooled bullets.
//!
//! # Data flow
//! ```text
//!   FixedUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: hero weapon (player plugin)                                 │
//!│      - writes: FireRequest { pos, vel, weapon }                            │
//!│                                                                            │
//!│  (B) Consumer: allocate_bullets_from_pool                                  │
//!│      - reads: FireRequest messages, WeaponRegistry (projectile colour)     │
//!│      - mutates: BulletPool free list, bullet components                    │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (C) Physics emits CollisionStart messages (Avian)                         │
//!│                                                                            │
//!│  (D) process_player_bullet_collisions                                      │
//!│      - resolves the hit against the enemy's parts                          │
//!│      - BulletState -> PendingReturn, EnemyDestroyed on the final part      │
//!│                                                                            │
//!│  (E) recall_offscreen_bullets, then return_to_pool_commit                  │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Producers never borrow `ResMut<BulletPool>`; the allocator is the single writer
//! that pops, the commit is the single writer that pushes.

pub mod components;
pub mod pool;
pub mod collision;

pub mod messages;
pub mod allocator;
pub mod commit;

use bevy::prelude::*;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::physics::ContactSystems;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        let capacity = app.world().resource::<Tunables>().bullet_pool_capacity;

        app.insert_resource(pool::BulletPool::new(capacity))
            .add_message::<messages::FireRequest>()
            .add_systems(Startup, pool::init_bullet_pool);

        app.add_systems(
            FixedUpdate,
            allocator::allocate_bullets_from_pool.run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            (
                collision::process_player_bullet_collisions.in_set(ContactSystems),
                commit::recall_offscreen_bullets,
                commit::return_to_pool_commit,
            )
                .chain()
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            OnExit(GameState::InGame),
            (commit::recall_all_bullets, commit::return_to_pool_commit).chain(),
        );
    }
}
