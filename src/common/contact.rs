//! Helpers for reading Avian collision messages.

use avian2d::prelude::*;
use bevy::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct CollisionTarget {
    pub collider: Entity,
    pub body: Option<Entity>,
}

impl CollisionTarget {
    /// Entity that owns the gameplay state for this collider.
    ///
    /// Enemy parts are child colliders of one kinematic body, so the body wins.
    /// Without a body (e.g. injected test messages) we fall back to the hierarchy parent.
    #[inline]
    pub fn gameplay_owner(self, q_parent: &Query<&ChildOf>) -> Entity {
        self.body
            .or_else(|| q_parent.get(self.collider).ok().map(ChildOf::parent))
            .unwrap_or(self.collider)
    }
}

#[inline]
pub fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}
