//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::projectiles::ProjectilesPlugin;

pub mod bounds;
pub mod core;
pub mod director;
pub mod enemies;
pub mod physics;
pub mod player;
pub mod powerups;
pub mod projectiles;
pub mod weapons;

// Render-only
pub mod camera;
pub mod lighting;

/// Register gameplay plugins that work in headless tests.
///
/// `core` goes first: the others read `Tunables` while they build.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    bounds::plugin(app);
    enemies::plugin(app);
    director::plugin(app);
    powerups::plugin(app);
    player::plugin(app);
    app.add_plugins(ProjectilesPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    lighting::plugin(app);
    camera::plugin(app);
}
