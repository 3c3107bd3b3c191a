//! Test helpers.
//!
//! `run_system_once` executes a system against a bare `World` and flushes queued commands
//! so structural changes are visible to assertions.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::{Message, Messages};
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Install a `Time` whose last delta is `dt`, the way a schedule run would see it.
pub fn insert_time_with_delta(world: &mut World, dt: f32) {
    let mut t = Time::<()>::default();
    t.advance_by(Duration::from_secs_f32(dt));
    world.insert_resource(t);
}

/// Ensure the message buffer for `M` exists (needed by `MessageReader`/`MessageWriter`).
pub fn ensure_messages<M: Message>(world: &mut World) {
    if world.get_resource::<Messages<M>>().is_none() {
        world.init_resource::<Messages<M>>();
    }
}

/// Inject a `CollisionStart` as if Avian had reported it.
pub fn write_collision_start(
    world: &mut World,
    collider1: Entity,
    collider2: Entity,
    body1: Option<Entity>,
    body2: Option<Entity>,
) {
    ensure_messages::<CollisionStart>(world);
    world.write_message(CollisionStart {
        collider1,
        collider2,
        body1,
        body2,
    });
}

/// Drain every message of type `M` written so far.
pub fn drain_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    world
        .resource_mut::<Messages<M>>()
        .drain()
        .collect()
}
