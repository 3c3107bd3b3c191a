mod common;

use std::time::Duration;

use bevy::prelude::*;
use bevy_shmup::common::state::GameState;
use bevy_shmup::plugins::director::restart::DelayedRestart;
use bevy_shmup::plugins::player::Hero;
use bevy_shmup::plugins::projectiles::components::PooledBullet;

fn hero_count(app: &mut App) -> usize {
    app.world_mut().query::<&Hero>().iter(app.world()).count()
}

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(hero_count(&mut app), 1);
    let pooled = app
        .world_mut()
        .query::<&PooledBullet>()
        .iter(app.world())
        .count();
    assert!(pooled > 0);
}

#[test]
fn delayed_restart_rebuilds_the_scene() {
    let mut app = common::app_headless_stepped(Duration::from_millis(50));
    app.update();
    assert_eq!(hero_count(&mut app), 1);

    let hero = app
        .world_mut()
        .query_filtered::<Entity, With<Hero>>()
        .single(app.world())
        .unwrap();
    app.world_mut().entity_mut(hero).despawn();
    app.world_mut().resource_mut::<DelayedRestart>().schedule(0.1);

    for _ in 0..10 {
        app.update();
    }

    assert!(!app.world().resource::<DelayedRestart>().is_pending());
    assert_eq!(*app.world().resource::<State<GameState>>().get(), GameState::InGame);
    assert_eq!(hero_count(&mut app), 1);
}
