//! Tunable gameplay constants.
//!
//! Values that shape feel and presentation live here. Content (weapons, enemy
//! archetypes, drop tables) lives in the RON game config instead.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub pixels_per_meter: f32,
    pub hero_speed: f32,
    pub hero_radius: f32,
    /// Camera half extents used until a window reports its real size.
    pub camera_half_width: f32,
    pub camera_half_height: f32,
    /// How long a struck part stays tinted.
    pub show_damage_duration: f32,
    pub bullet_pool_capacity: usize,
    pub power_up_drift_speed: f32,
    pub power_up_lifetime: f32,
    pub restart_delay: f32,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            pixels_per_meter: 20.0,
            hero_speed: 420.0,
            hero_radius: 14.0,
            camera_half_width: 640.0,
            camera_half_height: 360.0,
            show_damage_duration: 0.1,
            bullet_pool_capacity: 256,
            power_up_drift_speed: 60.0,
            power_up_lifetime: 6.0,
            restart_delay: 2.0,
            rng_seed: None,
        }
    }
}
