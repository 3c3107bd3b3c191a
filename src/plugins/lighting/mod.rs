//! Lighting plugin (Firefly) (render-only).
//!
//! A warm light rides with the hero; every power-up glows in its weapon colour.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::Hero;
use crate::plugins::powerups::PowerUp;
use crate::plugins::weapons::WeaponRegistry;

#[derive(Component)]
pub struct HeroLight;

pub fn plugin(app: &mut App) {
    if !app.is_plugin_added::<FireflyPlugin>() {
        app.add_plugins(FireflyPlugin);
    }

    app.add_systems(OnEnter(GameState::InGame), setup)
        .add_systems(Update, (follow_hero_light, light_new_power_ups));
}

fn setup(mut commands: Commands) {
    commands.spawn((
        Name::new("HeroLight"),
        HeroLight,
        PointLight2d {
            color: Color::srgb(1.0, 0.9, 0.75),
            radius: 450.0,
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 10.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_hero_light(
    q_hero: Query<&Transform, (With<Hero>, Without<HeroLight>)>,
    mut q_light: Query<&mut Transform, (With<HeroLight>, Without<Hero>)>,
) {
    let Ok(tf_hero) = q_hero.single() else {
        return;
    };
    let Ok(mut tf_light) = q_light.single_mut() else {
        return;
    };

    tf_light.translation.x = tf_hero.translation.x;
    tf_light.translation.y = tf_hero.translation.y;
}

/// The glow is a component on the power-up itself, so it goes away with it.
fn light_new_power_ups(
    mut commands: Commands,
    registry: Res<WeaponRegistry>,
    q_new: Query<(Entity, &PowerUp), Added<PowerUp>>,
) {
    for (e, power_up) in &q_new {
        commands.entity(e).insert(PointLight2d {
            color: registry.get(power_up.kind).color(),
            radius: 90.0,
            ..default()
        });
    }
}
