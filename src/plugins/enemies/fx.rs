//! Part presentation: damage flash and deactivation, derived from part health.
//!
//! `DestructibleParts` on the enemy is gameplay truth. Each part visual carries a
//! `PartFx` that remembers the part's hit count; a new hit means "flash" (even a
//! zero-damage one), a crossing to zero health means "hide and stop colliding".
//! The component is always present so hits only mutate numbers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::common::{layers::Layer, tunables::Tunables};

use super::parts::DestructibleParts;

pub const DAMAGE_TINT: Color = Color::srgb(1.0, 0.1, 0.1);

#[derive(Component, Debug, Clone)]
pub struct PartFx {
    owner: Entity,
    index: usize,
    base_color: Color,
    seen_hits: u32,
    flash_remaining: f32,
    deactivated: bool,
}

impl PartFx {
    pub fn new(owner: Entity, index: usize, base_color: Color) -> Self {
        Self {
            owner,
            index,
            base_color,
            seen_hits: 0,
            flash_remaining: 0.0,
            deactivated: false,
        }
    }

    #[inline]
    pub fn is_flashing(&self) -> bool {
        self.flash_remaining > 0.0
    }

    #[inline]
    pub fn is_deactivated(&self) -> bool {
        self.deactivated
    }
}

/// A destroyed part keeps its membership but collides with nothing.
#[inline]
pub fn inert_part_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [] as [Layer; 0])
}

#[inline]
pub fn live_part_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Enemy, [Layer::Hero, Layer::HeroBullet])
}

pub fn part_fx_update(
    time: Res<Time>,
    tunables: Res<Tunables>,
    q_owner: Query<&DestructibleParts>,
    mut q: Query<(&mut PartFx, &mut Sprite, &mut Visibility, &mut CollisionLayers)>,
) {
    let dt = time.delta_secs();

    for (mut fx, mut sprite, mut vis, mut layers) in &mut q {
        let Ok(parts) = q_owner.get(fx.owner) else {
            continue;
        };
        let Some(part) = parts.parts().get(fx.index) else {
            continue;
        };

        if part.hits() != fx.seen_hits {
            fx.seen_hits = part.hits();
            fx.flash_remaining = tunables.show_damage_duration;
        }

        if part.is_destroyed() && !fx.deactivated {
            fx.deactivated = true;
            *vis = Visibility::Hidden;
            *layers = inert_part_layers();
        }

        // Tint for the frame the hit lands, then count down.
        sprite.color = if fx.is_flashing() { DAMAGE_TINT } else { fx.base_color };
        fx.flash_remaining = (fx.flash_remaining - dt).max(0.0);
    }
}
