//! Director: paces enemy spawns and turns enemy deaths into power-up drops.
//!
//! The director is an explicitly constructed resource built from the game config.
//! Spawning is a repeating `Timer`; every completion spawns one enemy at a random
//! x just above the top edge. Drops react to `EnemyDestroyed` with one roll each.

use bevy::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::{rng::GameRng, state::GameState, tunables::Tunables};
use crate::plugins::bounds::ScreenBounds;
use crate::plugins::core::config::GameConfig;
use crate::plugins::enemies::archetype::EnemyArchetype;
use crate::plugins::enemies::{spawn_enemy, EnemyDestroyed};
use crate::plugins::powerups::spawn_power_up;
use crate::plugins::weapons::{WeaponRegistry, WeaponType};

pub mod restart;

/// Longest spawn period accepted, in seconds (one day).
pub const MAX_SPAWN_PERIOD: f32 = 86_400.0;

#[derive(Resource, Debug, Clone)]
pub struct Director {
    pub archetypes: Vec<EnemyArchetype>,
    /// Spawn padding in pixels for archetypes without a radius.
    pub enemy_default_padding: f32,
    pub power_up_frequency: Vec<WeaponType>,
    spawn_timer: Timer,
    spawned_total: u32,
}

impl Director {
    pub fn new(
        archetypes: Vec<EnemyArchetype>,
        enemy_spawn_per_second: f32,
        enemy_default_padding: f32,
        power_up_frequency: Vec<WeaponType>,
    ) -> Self {
        // A rate with no usable period means "never": the timer stays paused.
        let period = 1.0 / enemy_spawn_per_second;
        let spawn_timer = if enemy_spawn_per_second.is_finite() && period > 0.0 && period <= MAX_SPAWN_PERIOD {
            Timer::from_seconds(period, TimerMode::Repeating)
        } else {
            warn!("enemy spawn rate {enemy_spawn_per_second} has no usable period, spawning disabled");
            let mut timer = Timer::from_seconds(1.0, TimerMode::Repeating);
            timer.pause();
            timer
        };

        Self {
            archetypes,
            enemy_default_padding,
            power_up_frequency,
            spawn_timer,
            spawned_total: 0,
        }
    }

    /// Padding is configured in world units and scaled to pixels here.
    pub fn from_config(config: &GameConfig, tunables: &Tunables) -> Self {
        Self::new(
            config.archetypes.clone(),
            config.enemy_spawn_per_second,
            config.enemy_default_padding * tunables.pixels_per_meter,
            config.power_up_frequency.clone(),
        )
    }

    #[inline]
    pub fn spawn_period(&self) -> f32 {
        self.spawn_timer.duration().as_secs_f32()
    }

    #[inline]
    pub fn spawned_total(&self) -> u32 {
        self.spawned_total
    }
}

pub fn plugin(app: &mut App) {
    app.init_resource::<restart::DelayedRestart>();

    app.add_systems(OnEnter(GameState::InGame), reset_spawn_schedule)
        .add_systems(OnEnter(GameState::Restarting), restart::reenter_game)
        .add_systems(
            FixedUpdate,
            (tick_spawner, drop_power_ups).run_if(in_state(GameState::InGame)),
        )
        .add_systems(
            Update,
            restart::tick_delayed_restart.run_if(in_state(GameState::InGame)),
        );
}

// -----------------------------------------------------------------------------
// Rules
// -----------------------------------------------------------------------------

pub fn spawn_padding(archetype: &EnemyArchetype, default_padding: f32) -> f32 {
    match archetype.radius {
        Some(r) => r.abs(),
        None => default_padding,
    }
}

/// `x` uniform in `[-w + pad, w - pad]`, `y` just above the top edge.
pub fn spawn_point(bounds: &ScreenBounds, pad: f32, rng: &mut impl Rng) -> Vec2 {
    let min_x = -bounds.half_width + pad;
    let max_x = bounds.half_width - pad;
    let x = if max_x > min_x { rng.gen_range(min_x..=max_x) } else { 0.0 };
    Vec2::new(x, bounds.half_height + pad)
}

pub fn choose_archetype<'a>(archetypes: &'a [EnemyArchetype], rng: &mut impl Rng) -> Option<&'a EnemyArchetype> {
    archetypes.choose(rng)
}

/// One drop roll. On success picks uniformly from `table`; duplicates raise the odds.
pub fn roll_power_up(rng: &mut impl Rng, drop_chance: f32, table: &[WeaponType]) -> Option<WeaponType> {
    if table.is_empty() {
        return None;
    }
    if !rng.gen_bool(f64::from(drop_chance.clamp(0.0, 1.0))) {
        return None;
    }
    table.choose(rng).copied()
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

fn reset_spawn_schedule(mut director: ResMut<Director>) {
    director.spawn_timer.reset();
}

pub fn tick_spawner(
    mut commands: Commands,
    time: Res<Time>,
    bounds: Res<ScreenBounds>,
    mut rng: ResMut<GameRng>,
    mut director: ResMut<Director>,
) {
    director.spawn_timer.tick(time.delta());
    let due = director.spawn_timer.times_finished_this_tick();
    let now = time.elapsed_secs();

    for _ in 0..due {
        let Some(archetype) = choose_archetype(&director.archetypes, &mut rng.0) else {
            warn!("director has no archetypes to spawn");
            return;
        };
        let pad = spawn_padding(archetype, director.enemy_default_padding);
        let pos = spawn_point(&bounds, pad, &mut rng.0);
        let e = spawn_enemy(&mut commands, archetype, pos, now, &bounds, &mut rng.0);
        debug!("spawned {} {:?} at {:?}", archetype.name, e, pos);

        director.spawned_total += 1;
    }
}

pub fn drop_power_ups(
    mut commands: Commands,
    mut destroyed: MessageReader<EnemyDestroyed>,
    director: Res<Director>,
    registry: Res<WeaponRegistry>,
    tunables: Res<Tunables>,
    mut rng: ResMut<GameRng>,
) {
    for ev in destroyed.read() {
        let Some(kind) = roll_power_up(&mut rng.0, ev.drop_chance, &director.power_up_frequency) else {
            continue;
        };
        debug!("enemy {:?} dropped {:?}", ev.enemy, kind);
        spawn_power_up(&mut commands, kind, ev.position, &registry, &tunables);
    }
}

#[cfg(test)]
mod tests;
