//! Hero bullets vs. multi-part enemies.
//!
//! A bullet is consumed by any contact with an enemy, whether or not damage lands:
//! off-screen, unresolved, shielded and already-finished enemies all eat the bullet.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::components::{Bullet, BulletState, PooledBullet};
use crate::common::contact::targets;
use crate::plugins::bounds::BoundsCheck;
use crate::plugins::enemies::parts::{resolve_hit, ContactPair, DestructibleParts, HitOutcome, PartVisuals};
use crate::plugins::enemies::{Enemy, EnemyDestroyed, PendingDespawn};
use crate::plugins::weapons::WeaponRegistry;

pub fn process_player_bullet_collisions(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    mut destroyed: MessageWriter<EnemyDestroyed>,
    registry: Res<WeaponRegistry>,
    // Fast “is this a pooled bullet?” check
    q_is_bullet: Query<(), With<PooledBullet>>,
    mut q_bullets: Query<(&Bullet, &mut BulletState), With<PooledBullet>>,
    q_parent: Query<&ChildOf>,
    mut q_enemies: Query<(
        &Enemy,
        &mut DestructibleParts,
        &PartVisuals,
        &BoundsCheck,
        &Transform,
        Has<PendingDespawn>,
    )>,
    // Per-tick dedupe: one bullet resolves at most one hit.
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let b1 = q_is_bullet.contains(t1.collider);
        let b2 = q_is_bullet.contains(t2.collider);
        if !(b1 ^ b2) {
            continue; // must be exactly one bullet
        }
        let (bullet_side, other_side) = if b1 { (t1, t2) } else { (t2, t1) };

        let Ok((bullet, mut state)) = q_bullets.get_mut(bullet_side.collider) else {
            continue;
        };
        if *state != BulletState::Active {
            continue;
        }

        let enemy_entity = other_side.gameplay_owner(&q_parent);
        let Ok((enemy, mut parts, visuals, check, tf, finished)) = q_enemies.get_mut(enemy_entity) else {
            continue;
        };

        if !seen.insert(bullet_side.collider) {
            continue;
        }

        *state = BulletState::PendingReturn;

        // Destroyed or rammed this frame; removal happens in PostUpdate.
        if finished {
            continue;
        }

        let damage = registry.damage_on_hit(bullet.weapon);
        let contact = ContactPair::new(ev.collider1, ev.collider2);
        let outcome = resolve_hit(&mut parts, visuals, contact, damage, check.is_on_screen());

        match outcome {
            HitOutcome::Damaged { part, part_destroyed: true, .. } => {
                debug!("{enemy_entity:?} lost part {}", parts.parts()[part].name);
            }
            HitOutcome::Unresolved => {
                debug!("bullet hit {enemy_entity:?} but no part matched the contact");
            }
            _ => {}
        }

        if outcome.enemy_destroyed() {
            let position = tf.translation.truncate();
            info!("enemy {enemy_entity:?} destroyed at {position}");
            destroyed.write(EnemyDestroyed {
                enemy: enemy_entity,
                position,
                drop_chance: enemy.drop_chance,
            });
            commands.entity(enemy_entity).insert(PendingDespawn);
        }
    }
}
