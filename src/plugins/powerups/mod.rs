//! Power-ups: a weapon letter-box that drifts down the screen until collected or gone.
//!
//! The director spawns these on enemy destruction; the hero plugin collects them.
//! This module only owns their body and their lifetime.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::bounds::ScreenBounds;
use crate::plugins::weapons::{WeaponRegistry, WeaponType};

pub const POWER_UP_SIZE: f32 = 24.0;

#[derive(Component, Debug, Clone)]
pub struct PowerUp {
    pub kind: WeaponType,
    pub lifetime: Timer,
}

impl PowerUp {
    pub fn new(kind: WeaponType, lifetime_secs: f32) -> Self {
        Self {
            kind,
            lifetime: Timer::from_seconds(lifetime_secs.max(0.0), TimerMode::Once),
        }
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        expire_power_ups.run_if(in_state(GameState::InGame)),
    );
}

/// Spawn a power-up of `kind` at `position`, tinted with the weapon's colour.
pub fn spawn_power_up(
    commands: &mut Commands,
    kind: WeaponType,
    position: Vec2,
    registry: &WeaponRegistry,
    tunables: &Tunables,
) -> Entity {
    let def = registry.get(kind);

    commands
        .spawn((
            Name::new(format!("PowerUp({})", def.letter)),
            PowerUp::new(kind, tunables.power_up_lifetime),
            Sprite {
                color: def.color(),
                custom_size: Some(Vec2::splat(POWER_UP_SIZE)),
                ..default()
            },
            Transform::from_translation(position.extend(0.5)),
            RigidBody::Kinematic,
            Collider::rectangle(POWER_UP_SIZE, POWER_UP_SIZE),
            Sensor,
            CollisionLayers::new(Layer::PowerUp, [Layer::Hero]),
            LinearVelocity(Vec2::new(0.0, -tunables.power_up_drift_speed)),
            DespawnOnExit(GameState::InGame),
        ))
        .id()
}

/// Remove power-ups whose lifetime ran out or that drifted off the bottom edge.
pub fn expire_power_ups(
    mut commands: Commands,
    time: Res<Time>,
    bounds: Res<ScreenBounds>,
    mut q: Query<(Entity, &mut PowerUp, &Transform)>,
) {
    for (e, mut power_up, tf) in &mut q {
        power_up.lifetime.tick(time.delta());
        let below = tf.translation.y < -bounds.half_height - POWER_UP_SIZE;

        if power_up.lifetime.is_finished() || below {
            debug!("power-up {:?} expired", power_up.kind);
            commands.entity(e).despawn();
        }
    }
}
