//! Physics setup: Avian with a top-down world and a shared slot for contact handling.
//!
//! Every system that reacts to `CollisionStart` runs in [`ContactSystems`], which sits
//! after Avian's collision event systems in `FixedPostUpdate`.

use avian2d::collision::narrow_phase::CollisionEventSystems;
use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactSystems;

pub fn plugin(app: &mut App) {
    let ppm = app.world().resource::<Tunables>().pixels_per_meter;
    app.add_plugins(PhysicsPlugins::default().with_length_unit(ppm));

    // Nothing falls in space.
    app.insert_resource(Gravity(Vec2::ZERO));
    app.configure_sets(FixedPostUpdate, ContactSystems.after(CollisionEventSystems));
}
