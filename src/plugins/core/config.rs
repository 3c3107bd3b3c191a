//! Game content configuration: weapons, enemy archetypes and the power-up drop table.
//!
//! Read once at startup from `assets/config/game.ron`. Any failure is logged and the
//! built-in defaults are used instead, so the game always starts.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plugins::enemies::archetype::{default_archetypes, EnemyArchetype};
use crate::plugins::weapons::{default_weapon_definitions, WeaponDefinition, WeaponType};

pub const CONFIG_PATH: &str = "assets/config/game.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Enemies per second; must be positive.
    pub enemy_spawn_per_second: f32,
    /// Spawn padding in world units for archetypes without a radius.
    pub enemy_default_padding: f32,
    pub weapons: Vec<WeaponDefinition>,
    /// Uniform pick list; repeat an entry to make it more likely.
    pub power_up_frequency: Vec<WeaponType>,
    pub archetypes: Vec<EnemyArchetype>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            enemy_spawn_per_second: 0.5,
            enemy_default_padding: 1.5,
            weapons: default_weapon_definitions(),
            power_up_frequency: vec![
                WeaponType::Blaster,
                WeaponType::Blaster,
                WeaponType::Spread,
                WeaponType::Shield,
            ],
            archetypes: default_archetypes(),
        }
    }
}

impl GameConfig {
    /// Parse and validate RON text. `origin` only names the source in errors.
    pub fn from_ron_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            details: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(shown));
        }
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: shown.clone(),
            details: e.to_string(),
        })?;
        Self::from_ron_str(&contents, &shown)
    }

    /// Like [`GameConfig::load`], but never fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => {
                info!(
                    "Loaded game config: {} weapons, {} archetypes",
                    config.weapons.len(),
                    config.archetypes.len()
                );
                config
            }
            Err(e @ ConfigError::FileNotFound(_)) => {
                warn!("{}. Using defaults.", e);
                Self::default()
            }
            Err(e) => {
                error!("{}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.enemy_spawn_per_second > 0.0 && self.enemy_spawn_per_second.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "enemy_spawn_per_second must be positive and finite, got {}",
                self.enemy_spawn_per_second
            )));
        }
        if self.enemy_default_padding < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "enemy_default_padding must not be negative, got {}",
                self.enemy_default_padding
            )));
        }

        for w in &self.weapons {
            if w.damage_on_hit < 0.0 || w.continuous_damage < 0.0 {
                return Err(ConfigError::Invalid(format!("weapon {:?} has negative damage", w.kind)));
            }
            if w.delay_between_shots < 0.0 {
                return Err(ConfigError::Invalid(format!("weapon {:?} has negative shot delay", w.kind)));
            }
        }

        for a in &self.archetypes {
            if !(0.0..=1.0).contains(&a.drop_chance) {
                return Err(ConfigError::Invalid(format!(
                    "archetype '{}' drop_chance {} outside [0, 1]",
                    a.name, a.drop_chance
                )));
            }
            if a.parts.is_empty() {
                return Err(ConfigError::Invalid(format!("archetype '{}' has no parts", a.name)));
            }

            let mut names = HashSet::new();
            for p in &a.parts {
                // No visual means no collider, so nothing could ever destroy the enemy.
                if p.visual.is_none() {
                    return Err(ConfigError::Invalid(format!(
                        "part '{}' of '{}' has no visual and could never be hit",
                        p.name, a.name
                    )));
                }
                if !names.insert(p.name.as_str()) {
                    return Err(ConfigError::Invalid(format!(
                        "archetype '{}' repeats part '{}'",
                        a.name, p.name
                    )));
                }
            }
            for p in &a.parts {
                if let Some(missing) = p.protected_by.iter().find(|n| !names.contains(n.as_str())) {
                    return Err(ConfigError::Invalid(format!(
                        "part '{}' of '{}' is protected by unknown part '{}'",
                        p.name, a.name, missing
                    )));
                }
            }
        }

        Ok(())
    }
}
