//! Hero plugin.
//!
//! Pipeline:
//! - Update: sample input, write HeroInput resource
//! - FixedUpdate: apply velocity, tick the weapon and write FireRequest messages
//! - FixedPostUpdate: react to contacts (power-up pickup, enemy ram)
//!
//! Input resources are optional so headless apps (no InputPlugin) simply never fire.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::contact::targets;
use crate::common::{layers::Layer, state::GameState, tunables::Tunables};
use crate::plugins::bounds::ScreenBounds;
use crate::plugins::physics::ContactSystems;
use crate::plugins::director::restart::DelayedRestart;
use crate::plugins::enemies::{Enemy, PendingDespawn};
use crate::plugins::powerups::PowerUp;
use crate::plugins::projectiles::messages::FireRequest;
use crate::plugins::weapons::{WeaponRegistry, WeaponType};

pub const MAX_SHIELD_LEVEL: i32 = 4;

#[derive(Component, Debug, Clone)]
pub struct Hero {
    pub weapon: WeaponType,
    pub shield_level: i32,
    fire_cooldown: f32,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            weapon: WeaponType::Blaster,
            shield_level: 1,
            fire_cooldown: 0.0,
        }
    }
}

impl Hero {
    /// Shield power-ups stack up to the cap; anything else replaces the weapon.
    pub fn collect(&mut self, kind: WeaponType) {
        match kind {
            WeaponType::Shield => self.shield_level = (self.shield_level + 1).min(MAX_SHIELD_LEVEL),
            WeaponType::None => {}
            other => self.weapon = other,
        }
    }

    /// Take a ram. Returns true when the hero is out of shield.
    pub fn absorb_hit(&mut self) -> bool {
        self.shield_level -= 1;
        self.shield_level < 0
    }
}

#[derive(Resource, Default, Debug)]
struct HeroInput {
    move_axis: Vec2,
    fire: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(HeroInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, gather_input.run_if(in_state(GameState::InGame)))
        .add_systems(
            FixedUpdate,
            (apply_movement, fire_weapon).run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            FixedPostUpdate,
            process_hero_collisions
                .in_set(ContactSystems)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>, bounds: Res<ScreenBounds>) {
    let layers = CollisionLayers::new(Layer::Hero, [Layer::Enemy, Layer::PowerUp]);
    let r = tunables.hero_radius;

    commands.spawn((
        Name::new("Hero"),
        Hero::default(),
        Sprite {
            color: Color::srgb(0.2, 0.75, 0.9),
            custom_size: Some(Vec2::splat(r * 2.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -bounds.half_height * 0.6, 1.0),
        RigidBody::Dynamic,
        LockedAxes::ROTATION_LOCKED,
        Collider::circle(r),
        layers,
        LinearVelocity::ZERO,
        CollisionEventsEnabled,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<HeroInput>) {
    let Some(keys) = keys else { return; };
    let mut axis = Vec2::ZERO;

    if keys.pressed(KeyCode::KeyW) {
        axis.y += 1.0;
    }
    if keys.pressed(KeyCode::KeyS) {
        axis.y -= 1.0;
    }
    if keys.pressed(KeyCode::KeyA) {
        axis.x -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis.x += 1.0;
    }

    input.move_axis = axis.normalize_or_zero();
    input.fire = keys.pressed(KeyCode::Space);
}

fn apply_movement(
    tunables: Res<Tunables>,
    bounds: Res<ScreenBounds>,
    input: Res<HeroInput>,
    mut q_hero: Query<(&mut LinearVelocity, &mut Transform), With<Hero>>,
) {
    let Ok((mut vel, mut tf)) = q_hero.single_mut() else {
        return;
    };

    let clamped = bounds.clamp_inside(tf.translation.truncate(), tunables.hero_radius);
    tf.translation.x = clamped.x;
    tf.translation.y = clamped.y;
    vel.0 = input.move_axis * tunables.hero_speed;
}

/// Launch angles in degrees from straight up. Empty means the weapon cannot fire.
pub fn shot_angles(kind: WeaponType) -> &'static [f32] {
    match kind {
        WeaponType::None | WeaponType::Shield => &[],
        WeaponType::Spread => &[0.0, 10.0, -10.0],
        WeaponType::Blaster | WeaponType::Phaser | WeaponType::Missile | WeaponType::Laser => &[0.0],
    }
}

fn fire_weapon(
    time: Res<Time>,
    registry: Res<WeaponRegistry>,
    input: Res<HeroInput>,
    mut q_hero: Query<(&mut Hero, &Transform)>,
    mut writer: MessageWriter<FireRequest>,
) {
    let Ok((mut hero, tf)) = q_hero.single_mut() else {
        return;
    };

    hero.fire_cooldown = (hero.fire_cooldown - time.delta_secs()).max(0.0);
    if !input.fire || hero.fire_cooldown > 0.0 {
        return;
    }

    let def = registry.get(hero.weapon);
    let angles = shot_angles(hero.weapon);
    if angles.is_empty() || def.velocity <= 0.0 {
        return;
    }

    let origin = tf.translation.truncate() + Vec2::Y * 18.0;
    for deg in angles {
        let dir = Vec2::from_angle(deg.to_radians()).rotate(Vec2::Y);
        writer.write(FireRequest {
            pos: origin,
            vel: dir * def.velocity,
            weapon: hero.weapon,
        });
    }
    hero.fire_cooldown = def.delay_between_shots;
}

/// Power-up pickups and enemy rams.
///
/// A ram costs one shield level and removes the enemy without a drop roll.
/// Running out of shield removes the hero and schedules a restart.
fn process_hero_collisions(
    mut commands: Commands,
    mut started: MessageReader<CollisionStart>,
    tunables: Res<Tunables>,
    mut restart: ResMut<DelayedRestart>,
    mut q_hero: Query<&mut Hero>,
    q_power_ups: Query<&PowerUp>,
    q_enemies: Query<(), (With<Enemy>, Without<PendingDespawn>)>,
    q_parent: Query<&ChildOf>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);
        let (hero_side, other_side) = if q_hero.contains(t1.collider) {
            (t1, t2)
        } else if q_hero.contains(t2.collider) {
            (t2, t1)
        } else {
            continue;
        };

        let other = other_side.gameplay_owner(&q_parent);
        if !seen.insert(other) {
            continue;
        }
        let Ok(mut hero) = q_hero.get_mut(hero_side.collider) else {
            continue;
        };
        if hero.shield_level < 0 {
            continue;
        }

        if let Ok(power_up) = q_power_ups.get(other) {
            hero.collect(power_up.kind);
            info!("hero collected {:?} (weapon {:?}, shield {})", power_up.kind, hero.weapon, hero.shield_level);
            commands.entity(other).despawn();
            continue;
        }

        if q_enemies.contains(other) {
            commands.entity(other).insert(PendingDespawn);
            if hero.absorb_hit() {
                info!("hero destroyed, restarting in {}s", tunables.restart_delay);
                commands.entity(hero_side.collider).despawn();
                restart.schedule(tunables.restart_delay);
            }
        }
    }
}
