use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::restart::{tick_delayed_restart, DelayedRestart};
use super::*;
use crate::common::state::GameState;
use crate::common::test_utils::{ensure_messages, insert_time_with_delta, run_system_once};
use crate::plugins::enemies::archetype::default_archetypes;
use crate::plugins::enemies::Enemy;
use crate::plugins::powerups::PowerUp;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn director(rate: f32, table: Vec<WeaponType>) -> Director {
    Director::new(default_archetypes(), rate, 30.0, table)
}

#[test]
fn spawn_period_is_inverse_of_rate() {
    assert!((director(0.5, vec![]).spawn_period() - 2.0).abs() < 1e-6);
    assert!((director(4.0, vec![]).spawn_period() - 0.25).abs() < 1e-6);
}

#[test]
fn non_positive_rate_never_spawns() {
    for rate in [0.0, -1.0, f32::NAN, f32::INFINITY, 1e-38] {
        let mut world = World::new();
        world.insert_resource(ScreenBounds::new(640.0, 360.0));
        world.insert_resource(GameRng::seeded(2));
        world.insert_resource(director(rate, vec![]));

        insert_time_with_delta(&mut world, 100.0);
        run_system_once(&mut world, tick_spawner);

        assert_eq!(world.resource::<Director>().spawned_total(), 0);
    }
}

#[test]
fn padding_prefers_archetype_radius() {
    let mut a = default_archetypes().remove(0);
    a.radius = Some(-12.0);
    assert_eq!(spawn_padding(&a, 30.0), 12.0);

    a.radius = None;
    assert_eq!(spawn_padding(&a, 30.0), 30.0);
}

#[test]
fn spawn_points_stay_in_padded_band_above_screen() {
    let bounds = ScreenBounds::new(200.0, 100.0);
    let mut r = rng(3);

    for _ in 0..500 {
        let p = spawn_point(&bounds, 20.0, &mut r);
        assert!(p.x >= -180.0 && p.x <= 180.0, "x = {}", p.x);
        assert_eq!(p.y, 120.0);
    }
}

#[test]
fn spawn_point_collapses_when_padding_exceeds_width() {
    let bounds = ScreenBounds::new(10.0, 100.0);
    let p = spawn_point(&bounds, 50.0, &mut rng(1));
    assert_eq!(p.x, 0.0);
}

#[test]
fn duplicate_entries_bias_the_drop_table() {
    let table = [WeaponType::Blaster, WeaponType::Blaster, WeaponType::Spread];
    let mut r = rng(42);
    let n = 30_000;

    let blasters = (0..n)
        .filter_map(|_| roll_power_up(&mut r, 1.0, &table))
        .filter(|k| *k == WeaponType::Blaster)
        .count();

    let share = blasters as f32 / n as f32;
    assert!((share - 2.0 / 3.0).abs() < 0.02, "blaster share {share}");
}

#[test]
fn zero_chance_or_empty_table_never_drops() {
    let mut r = rng(7);
    for _ in 0..1_000 {
        assert_eq!(roll_power_up(&mut r, 0.0, &[WeaponType::Blaster]), None);
        assert_eq!(roll_power_up(&mut r, 1.0, &[]), None);
    }
}

#[test]
fn spawner_fires_once_per_period() {
    let mut world = World::new();
    world.insert_resource(ScreenBounds::new(640.0, 360.0));
    world.insert_resource(GameRng::seeded(9));
    world.insert_resource(director(0.5, vec![]));

    insert_time_with_delta(&mut world, 1.5);
    run_system_once(&mut world, tick_spawner);
    assert_eq!(world.resource::<Director>().spawned_total(), 0);

    insert_time_with_delta(&mut world, 1.0);
    run_system_once(&mut world, tick_spawner);
    assert_eq!(world.resource::<Director>().spawned_total(), 1);

    let enemies = world.query::<(&Enemy, &Transform)>().iter(&world).count();
    assert_eq!(enemies, 1);
}

#[test]
fn spawned_enemies_start_above_the_top_edge() {
    let mut world = World::new();
    world.insert_resource(ScreenBounds::new(640.0, 360.0));
    world.insert_resource(GameRng::seeded(11));
    world.insert_resource(director(1.0, vec![]));

    insert_time_with_delta(&mut world, 1.0);
    run_system_once(&mut world, tick_spawner);

    let (_, tf) = world
        .query::<(&Enemy, &Transform)>()
        .iter(&world)
        .next()
        .unwrap();
    assert!(tf.translation.y > 360.0);
}

#[test]
fn each_destruction_rolls_once() {
    let mut world = World::new();
    ensure_messages::<EnemyDestroyed>(&mut world);
    world.insert_resource(GameRng::seeded(5));
    world.insert_resource(WeaponRegistry::default());
    world.insert_resource(Tunables::default());
    world.insert_resource(director(0.5, vec![WeaponType::Spread]));

    for i in 0..3 {
        world.write_message(EnemyDestroyed {
            enemy: Entity::PLACEHOLDER,
            position: Vec2::new(i as f32 * 10.0, 0.0),
            drop_chance: 1.0,
        });
    }

    run_system_once(&mut world, drop_power_ups);

    let kinds: Vec<WeaponType> = world
        .query::<&PowerUp>()
        .iter(&world)
        .map(|p| p.kind)
        .collect();
    assert_eq!(kinds, vec![WeaponType::Spread; 3]);
}

#[test]
fn restart_fires_after_delay_and_only_once() {
    let mut world = World::new();
    world.init_resource::<NextState<GameState>>();
    let mut restart = DelayedRestart::default();
    restart.schedule(2.0);
    restart.schedule(10.0);
    world.insert_resource(restart);

    insert_time_with_delta(&mut world, 1.0);
    run_system_once(&mut world, tick_delayed_restart);
    assert!(world.resource::<DelayedRestart>().is_pending());
    assert!(matches!(*world.resource::<NextState<GameState>>(), NextState::Unchanged));

    insert_time_with_delta(&mut world, 1.5);
    run_system_once(&mut world, tick_delayed_restart);
    assert!(!world.resource::<DelayedRestart>().is_pending());
    assert!(!matches!(*world.resource::<NextState<GameState>>(), NextState::Unchanged));
}
