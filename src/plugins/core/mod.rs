//! Core plugin: shared resources and global settings.
//!
//! Everything here is inserted at build time so later plugins can read it while
//! they build, and every lookup table is in place before the first system runs.
//! A `GameConfig` inserted ahead of the plugin is validated like the file.

use bevy::prelude::*;

use crate::common::{rng::GameRng, tunables::Tunables};
use crate::plugins::director::Director;
use crate::plugins::weapons::WeaponRegistry;

pub mod config;

use config::{GameConfig, CONFIG_PATH};

pub fn plugin(app: &mut App) {
    app.init_resource::<Tunables>();
    app.insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.05)));

    let tunables = app.world().resource::<Tunables>().clone();
    let rng = match tunables.rng_seed {
        Some(seed) => GameRng::seeded(seed),
        None => GameRng::from_entropy(),
    };

    let config = match app.world().get_resource::<GameConfig>().cloned() {
        Some(preset) => match preset.validate() {
            Ok(()) => preset,
            Err(e) => {
                error!("{}. Using defaults.", e);
                GameConfig::default()
            }
        },
        None => GameConfig::load_or_default(CONFIG_PATH),
    };
    let registry = WeaponRegistry::from_definitions(config.weapons.iter().cloned());
    let director = Director::from_config(&config, &tunables);

    app.insert_resource(rng)
        .insert_resource(registry)
        .insert_resource(director)
        .insert_resource(config);
}
