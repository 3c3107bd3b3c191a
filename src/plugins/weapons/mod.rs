//! Weapon definitions and the read-only lookup table built from them.
//!
//! The table is built once at startup from validated configuration and is never
//! mutated afterwards. A lookup for a kind that was never registered returns the
//! documented fallback (`WeaponType::None`, zero damage) instead of failing.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Weapon tag carried by projectiles, power-ups and the hero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    /// No weapon. Also the kind of the lookup fallback.
    #[default]
    None,
    Blaster,
    Spread,
    Phaser,
    Missile,
    Laser,
    /// Power-up only: raises the hero's shield instead of changing weapon.
    Shield,
}

/// Static combat parameters for one weapon kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDefinition {
    pub kind: WeaponType,
    /// Letter shown on the power-up cube.
    #[serde(default)]
    pub letter: String,
    /// Power-up tint.
    #[serde(default = "white")]
    pub color: (f32, f32, f32),
    #[serde(default = "white")]
    pub projectile_color: (f32, f32, f32),
    pub damage_on_hit: f32,
    /// Damage per second for beam weapons.
    #[serde(default)]
    pub continuous_damage: f32,
    #[serde(default)]
    pub delay_between_shots: f32,
    /// Projectile speed in pixels per second.
    #[serde(default)]
    pub velocity: f32,
}

fn white() -> (f32, f32, f32) {
    (1.0, 1.0, 1.0)
}

impl Default for WeaponDefinition {
    fn default() -> Self {
        Self {
            kind: WeaponType::None,
            letter: String::new(),
            color: white(),
            projectile_color: white(),
            damage_on_hit: 0.0,
            continuous_damage: 0.0,
            delay_between_shots: 0.0,
            velocity: 0.0,
        }
    }
}

impl WeaponDefinition {
    #[inline]
    pub fn color(&self) -> Color {
        let (r, g, b) = self.color;
        Color::srgb(r, g, b)
    }

    #[inline]
    pub fn projectile_color(&self) -> Color {
        let (r, g, b) = self.projectile_color;
        Color::srgb(r, g, b)
    }
}

/// Built-in weapon list used when no config file is present.
pub fn default_weapon_definitions() -> Vec<WeaponDefinition> {
    vec![
        WeaponDefinition {
            kind: WeaponType::Blaster,
            letter: "B".into(),
            color: (0.3, 0.5, 1.0),
            projectile_color: (0.4, 0.8, 1.0),
            damage_on_hit: 1.0,
            continuous_damage: 0.0,
            delay_between_shots: 0.2,
            velocity: 900.0,
        },
        WeaponDefinition {
            kind: WeaponType::Spread,
            letter: "S".into(),
            color: (1.0, 0.55, 0.1),
            projectile_color: (1.0, 0.7, 0.3),
            damage_on_hit: 1.0,
            continuous_damage: 0.0,
            delay_between_shots: 0.4,
            velocity: 900.0,
        },
        WeaponDefinition {
            kind: WeaponType::Shield,
            letter: "O".into(),
            color: (0.3, 1.0, 0.4),
            ..default()
        },
    ]
}

/// Immutable weapon lookup keyed by `WeaponType`.
#[derive(Resource, Debug, Clone)]
pub struct WeaponRegistry {
    definitions: HashMap<WeaponType, WeaponDefinition>,
    fallback: WeaponDefinition,
}

impl Default for WeaponRegistry {
    fn default() -> Self {
        Self::from_definitions(default_weapon_definitions())
    }
}

impl WeaponRegistry {
    /// Build the table. On duplicate kinds the last definition wins.
    pub fn from_definitions(definitions: impl IntoIterator<Item = WeaponDefinition>) -> Self {
        let mut map = HashMap::default();
        for def in definitions {
            map.insert(def.kind, def);
        }
        Self {
            definitions: map,
            fallback: WeaponDefinition::default(),
        }
    }

    /// Definition for `kind`, or the zero-damage `None` definition if unregistered.
    pub fn get(&self, kind: WeaponType) -> &WeaponDefinition {
        self.definitions.get(&kind).unwrap_or(&self.fallback)
    }

    #[inline]
    pub fn damage_on_hit(&self, kind: WeaponType) -> f32 {
        self.get(kind).damage_on_hit
    }

    pub fn contains(&self, kind: WeaponType) -> bool {
        self.definitions.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests;
