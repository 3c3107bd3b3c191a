//! Destructible parts and the hit resolver.
//!
//! Pure data + rules: no queries, no commands. The collision system feeds hits in,
//! presentation systems derive visuals from the resulting health values.
//!
//! Rules:
//! - A part is destroyed once `health <= 0`. Health never goes back up.
//! - A part is shielded while any part named in `protected_by` is not destroyed.
//!   A protector name that matches no part cannot shield anything.
//! - An enemy is destroyed once every part is destroyed, in any order.

use bevy::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    pub health: f32,
    pub protected_by: Vec<String>,
    /// Unshielded hits taken, zero-damage ones included. Drives the damage flash.
    hits: u32,
}

impl Part {
    pub fn new(name: impl Into<String>, health: f32) -> Self {
        Self {
            name: name.into(),
            health,
            protected_by: Vec::new(),
            hits: 0,
        }
    }

    pub fn protected_by<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected_by = names.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    #[inline]
    pub fn hits(&self) -> u32 {
        self.hits
    }
}

/// Gameplay truth for a multi-part enemy.
#[derive(Component, Debug, Clone, Default)]
pub struct DestructibleParts {
    parts: Vec<Part>,
}

impl DestructibleParts {
    pub fn new(parts: Vec<Part>) -> Self {
        Self { parts }
    }

    #[inline]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.parts.iter().position(|p| p.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    /// Missing names count as destroyed.
    pub fn is_destroyed(&self, name: &str) -> bool {
        self.get(name).is_none_or(Part::is_destroyed)
    }

    /// True while at least one protector of part `index` still stands.
    /// An index with no part is not shielded.
    pub fn is_shielded(&self, index: usize) -> bool {
        self.parts.get(index).is_some_and(|part| {
            part.protected_by
                .iter()
                .any(|protector| !self.is_destroyed(protector))
        })
    }

    pub fn all_destroyed(&self) -> bool {
        self.parts.iter().all(Part::is_destroyed)
    }

    /// Apply one hit to part `index`, honouring its protectors.
    ///
    /// `visual` is only echoed back in the outcome so callers can drive feedback.
    pub fn strike(&mut self, index: usize, damage: f32, visual: Option<Entity>) -> HitOutcome {
        if self.is_shielded(index) {
            return HitOutcome::Shielded { part: index };
        }

        let enemy_was_destroyed = self.all_destroyed();
        let Some(part) = self.parts.get_mut(index) else {
            return HitOutcome::Unresolved;
        };
        let part_was_destroyed = part.is_destroyed();

        part.health -= damage;
        part.hits = part.hits.wrapping_add(1);
        let part_destroyed = !part_was_destroyed && part.is_destroyed();

        HitOutcome::Damaged {
            part: index,
            visual,
            part_destroyed,
            enemy_destroyed: !enemy_was_destroyed && self.all_destroyed(),
        }
    }

    /// Named variant of [`Self::strike`]. Unknown names resolve to nothing.
    pub fn strike_named(&mut self, name: &str, damage: f32) -> HitOutcome {
        match self.index_of(name) {
            Some(index) => self.strike(index, damage, None),
            None => HitOutcome::Unresolved,
        }
    }
}

/// Render handles bound to parts at spawn time, indexed like `DestructibleParts`.
///
/// A part without a visual keeps `None`; hits on it still apply health rules but
/// there is nothing to tint or hide.
#[derive(Component, Debug, Clone, Default)]
pub struct PartVisuals {
    handles: Vec<Option<Entity>>,
}

impl PartVisuals {
    /// Bind every part through `lookup`, called once per part name.
    pub fn bind(parts: &DestructibleParts, mut lookup: impl FnMut(&str) -> Option<Entity>) -> Self {
        Self {
            handles: parts.parts().iter().map(|p| lookup(&p.name)).collect(),
        }
    }

    #[inline]
    pub fn handle(&self, index: usize) -> Option<Entity> {
        self.handles.get(index).copied().flatten()
    }

    /// Identity lookup: which part is rendered by `entity`?
    pub fn find_part(&self, entity: Entity) -> Option<usize> {
        self.handles.iter().position(|h| *h == Some(entity))
    }

    pub fn bound_count(&self) -> usize {
        self.handles.iter().flatten().count()
    }
}

/// Both participants of a contact, in the order the physics layer reported them.
///
/// Either side may be the struck part, so resolution tries `first` then `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactPair {
    pub first: Entity,
    pub second: Entity,
}

impl ContactPair {
    pub fn new(first: Entity, second: Entity) -> Self {
        Self { first, second }
    }

    pub fn resolve(&self, visuals: &PartVisuals) -> Option<usize> {
        visuals
            .find_part(self.first)
            .or_else(|| visuals.find_part(self.second))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    /// Enemy is outside the camera; projectile consumed, nothing applied.
    OffScreen,
    /// Neither contact participant maps to a part, or the part index is out of range.
    Unresolved,
    /// Part still has a standing protector.
    Shielded { part: usize },
    Damaged {
        part: usize,
        visual: Option<Entity>,
        /// The part crossed to destroyed on this hit.
        part_destroyed: bool,
        /// The enemy crossed to fully destroyed on this hit. Reported once.
        enemy_destroyed: bool,
    },
}

impl HitOutcome {
    #[inline]
    pub fn damage_applied(&self) -> bool {
        matches!(self, Self::Damaged { .. })
    }

    #[inline]
    pub fn enemy_destroyed(&self) -> bool {
        matches!(self, Self::Damaged { enemy_destroyed: true, .. })
    }
}

/// Resolve one projectile hit against an enemy.
///
/// The projectile is consumed whatever the outcome; that decision belongs to the caller.
pub fn resolve_hit(
    parts: &mut DestructibleParts,
    visuals: &PartVisuals,
    contact: ContactPair,
    damage: f32,
    on_screen: bool,
) -> HitOutcome {
    if !on_screen {
        return HitOutcome::OffScreen;
    }

    let Some(index) = contact.resolve(visuals) else {
        return HitOutcome::Unresolved;
    };

    parts.strike(index, damage, visuals.handle(index))
}
