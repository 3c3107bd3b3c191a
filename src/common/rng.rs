//! Seeded random source shared by gameplay systems.
//!
//! Rules take `&mut impl Rng` so tests can drive them with their own seeded generator;
//! systems borrow this resource and pass it through.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[derive(Resource, Debug, Clone, Deref, DerefMut)]
pub struct GameRng(pub ChaCha8Rng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

/// Uniform sample in `[-extent, extent)`, collapsing to 0 for a degenerate extent.
#[inline]
pub fn symmetric_range(rng: &mut impl rand::Rng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(-extent..extent)
    } else {
        0.0
    }
}
