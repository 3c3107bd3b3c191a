//! Enemy archetypes: data describing what the director can spawn.

use serde::{Deserialize, Serialize};

use super::parts::{DestructibleParts, Part};
use super::patrol::EasedPatrol;

/// Sprite + collider of a single part, relative to the enemy origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartVisualDefinition {
    pub offset: (f32, f32),
    pub size: (f32, f32),
    pub color: (f32, f32, f32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDefinition {
    pub name: String,
    pub health: f32,
    #[serde(default)]
    pub protected_by: Vec<String>,
    /// Sprite and collider. Config validation requires one; without it the part
    /// cannot be struck and its enemy can never be destroyed.
    #[serde(default)]
    pub visual: Option<PartVisualDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyArchetype {
    pub name: String,
    /// Footprint radius. `None` means the director pads spawns with its default.
    #[serde(default)]
    pub radius: Option<f32>,
    pub drop_chance: f32,
    #[serde(default = "default_patrol_duration")]
    pub patrol_duration: f32,
    pub parts: Vec<PartDefinition>,
}

fn default_patrol_duration() -> f32 {
    EasedPatrol::DEFAULT_DURATION
}

impl EnemyArchetype {
    /// Radius used for on-screen checks and patrol margins.
    #[inline]
    pub fn bounds_radius(&self) -> f32 {
        self.radius.map(f32::abs).unwrap_or(0.0)
    }

    /// Fresh, full-health part set for a new instance.
    pub fn build_parts(&self) -> DestructibleParts {
        DestructibleParts::new(
            self.parts
                .iter()
                .map(|def| Part::new(def.name.clone(), def.health).protected_by(def.protected_by.iter().cloned()))
                .collect(),
        )
    }
}

fn part(
    name: &str,
    health: f32,
    protected_by: &[&str],
    offset: (f32, f32),
    size: (f32, f32),
    color: (f32, f32, f32),
) -> PartDefinition {
    PartDefinition {
        name: name.into(),
        health,
        protected_by: protected_by.iter().map(|s| s.to_string()).collect(),
        visual: Some(PartVisualDefinition { offset, size, color }),
    }
}

/// Built-in archetypes used when no config file is present.
pub fn default_archetypes() -> Vec<EnemyArchetype> {
    let hull = (0.55, 0.6, 0.7);
    vec![
        // Wings shield the fuselage, the fuselage shields the cockpit.
        EnemyArchetype {
            name: "Gunship".into(),
            radius: Some(48.0),
            drop_chance: 1.0,
            patrol_duration: 4.0,
            parts: vec![
                part("WingL", 10.0, &[], (-34.0, 4.0), (30.0, 14.0), hull),
                part("WingR", 10.0, &[], (34.0, 4.0), (30.0, 14.0), hull),
                part("Fuselage", 20.0, &["WingL", "WingR"], (0.0, 6.0), (22.0, 52.0), (0.7, 0.7, 0.8)),
                part("Cockpit", 10.0, &["Fuselage"], (0.0, -30.0), (16.0, 16.0), (0.9, 0.3, 0.3)),
            ],
        },
        EnemyArchetype {
            name: "Drone".into(),
            radius: Some(20.0),
            drop_chance: 0.25,
            patrol_duration: 3.0,
            parts: vec![part("Hull", 4.0, &[], (0.0, 0.0), (28.0, 28.0), (0.9, 0.25, 0.25))],
        },
    ]
}
