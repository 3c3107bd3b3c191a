//! Enemies plugin: multi-part enemies that patrol on eased legs and come apart piece by piece.
//!
//! ---------------------------
//! HOW THIS IS DESIGNED (ECS)
//! ---------------------------
//! 1) FACTS live on the enemy root:
//!    - `DestructibleParts` holds per-part health and protection rules.
//!    - `PartVisuals` maps each part to the child entity that renders and collides for it.
//!    - `EasedPatrol` + `BoundsCheck` describe movement and screen visibility.
//!
//! 2) RULES mutate facts in predictable places:
//!    - the projectile collision system resolves hits through `parts::resolve_hit`.
//!    - this module moves enemies and removes finished ones.
//!
//! 3) PRESENTATION is derived from facts:
//!    - `fx::part_fx_update` flashes struck parts and hides destroyed ones.
//!
//! Despawning is deferred: the collision step marks `PendingDespawn` and a PostUpdate
//! system removes the entity, so nothing else in the fixed step sees a half-dead enemy.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use rand::Rng;

use crate::common::{rng::GameRng, state::GameState};
use crate::plugins::bounds::{BoundsCheck, ScreenBounds};

pub mod archetype;
pub mod fx;
pub mod parts;
pub mod patrol;

use archetype::EnemyArchetype;
use fx::{live_part_layers, PartFx};
use parts::PartVisuals;
use patrol::EasedPatrol;

/// Enemy root marker + drop odds handed to the director on destruction.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy {
    pub drop_chance: f32,
}

/// Child entity that renders and collides for one part.
#[derive(Component, Debug, Clone, Copy)]
pub struct EnemyPart;

/// Marker: enemy should be removed from the world.
#[derive(Component, Debug, Clone, Copy)]
pub struct PendingDespawn;

/// Written exactly once per enemy, on the hit that destroys its last part.
#[derive(Message, Debug, Clone, Copy)]
pub struct EnemyDestroyed {
    pub enemy: Entity,
    pub position: Vec2,
    pub drop_chance: f32,
}

pub fn plugin(app: &mut App) {
    app.add_message::<EnemyDestroyed>();

    app.add_systems(
        FixedUpdate,
        patrol_enemies
            .before(crate::plugins::bounds::refresh_bounds_checks)
            .run_if(in_state(GameState::InGame)),
    );

    // Presentation follows hit resolution so the flash lands on the same tick.
    app.add_systems(
        FixedPostUpdate,
        fx::part_fx_update
            .after(crate::plugins::physics::ContactSystems)
            .run_if(in_state(GameState::InGame)),
    );

    app.add_systems(
        PostUpdate,
        despawn_marked_enemies.run_if(in_state(GameState::InGame)),
    );
}

// -----------------------------------------------------------------------------
// Spawn
// -----------------------------------------------------------------------------

/// Spawn one enemy of `archetype` at `position`.
///
/// Part visuals are spawned as children and bound to their parts right here, so hit
/// resolution never searches by name.
pub fn spawn_enemy(
    commands: &mut Commands,
    archetype: &EnemyArchetype,
    position: Vec2,
    now: f32,
    bounds: &ScreenBounds,
    rng: &mut impl Rng,
) -> Entity {
    let parts = archetype.build_parts();
    let radius = archetype.bounds_radius();
    let patrol = EasedPatrol::begin(
        position,
        archetype.patrol_duration,
        now,
        bounds.inner_extent(radius),
        rng,
    );

    let root = commands
        .spawn((
            Name::new(format!("Enemy({})", archetype.name)),
            Enemy {
                drop_chance: archetype.drop_chance,
            },
            BoundsCheck::new(radius),
            patrol,
            Transform::from_translation(position.extend(1.0)),
            Visibility::default(),
            RigidBody::Kinematic,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    let mut bound: Vec<(String, Entity)> = Vec::with_capacity(archetype.parts.len());
    for (index, def) in archetype.parts.iter().enumerate() {
        let Some(visual) = &def.visual else {
            continue;
        };
        let (r, g, b) = visual.color;
        let color = Color::srgb(r, g, b);
        let (w, h) = visual.size;
        let (x, y) = visual.offset;

        let child = commands
            .spawn((
                Name::new(def.name.clone()),
                EnemyPart,
                PartFx::new(root, index, color),
                Sprite {
                    color,
                    custom_size: Some(Vec2::new(w, h)),
                    ..default()
                },
                Transform::from_xyz(x, y, 0.1),
                Visibility::default(),
                Collider::rectangle(w, h),
                live_part_layers(),
                ChildOf(root),
            ))
            .id();
        bound.push((def.name.clone(), child));
    }

    let visuals = PartVisuals::bind(&parts, |name| {
        bound.iter().find(|(n, _)| n == name).map(|(_, e)| *e)
    });
    if visuals.bound_count() < parts.parts().len() {
        warn!(
            "enemy {} spawned with {}/{} part visuals bound; unbound parts cannot be hit",
            archetype.name,
            visuals.bound_count(),
            parts.parts().len()
        );
    }

    commands.entity(root).insert((parts, visuals));
    root
}

// -----------------------------------------------------------------------------
// Movement
// -----------------------------------------------------------------------------

pub fn patrol_enemies(
    time: Res<Time>,
    bounds: Res<ScreenBounds>,
    mut rng: ResMut<GameRng>,
    mut q: Query<(&mut EasedPatrol, &BoundsCheck, &mut Transform), (With<Enemy>, Without<PendingDespawn>)>,
) {
    let now = time.elapsed_secs();

    for (mut patrol, check, mut tf) in &mut q {
        let extent = bounds.inner_extent(check.radius);
        let pos = patrol.sample(now, extent, &mut rng.0);
        tf.translation.x = pos.x;
        tf.translation.y = pos.y;
    }
}

// -----------------------------------------------------------------------------
// Cleanup (PostUpdate)
// -----------------------------------------------------------------------------

/// Despawn enemies marked for removal. Children go with them.
fn despawn_marked_enemies(mut commands: Commands, q: Query<Entity, With<PendingDespawn>>) {
    for e in &q {
        commands.entity(e).despawn();
    }
}
