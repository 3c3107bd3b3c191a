//! Eased waypoint patrol.
//!
//! Each leg blends from the previous waypoint `p0` to a new random on-screen waypoint
//! `p1` with an ease-out curve, so the enemy darts off and settles. When a leg
//! completes, `p1` becomes the next `p0` and a fresh waypoint is drawn.

use bevy::prelude::*;
use rand::Rng;

use crate::common::rng::symmetric_range;

/// Quadratic ease-out (0..1 -> 0..1): fast start, decelerating finish.
#[inline]
pub fn ease_out(u: f32) -> f32 {
    1.0 - (1.0 - u) * (1.0 - u)
}

#[derive(Component, Debug, Clone)]
pub struct EasedPatrol {
    p0: Vec2,
    p1: Vec2,
    start: f32,
    duration: f32,
}

impl EasedPatrol {
    pub const DEFAULT_DURATION: f32 = 4.0;

    /// Start patrolling from `origin`: the first leg begins at `now`.
    pub fn begin(
        origin: Vec2,
        duration: f32,
        now: f32,
        extent: Vec2,
        rng: &mut impl Rng,
    ) -> Self {
        let mut patrol = Self {
            p0: origin,
            p1: origin,
            start: now,
            duration: duration.max(1e-4),
        };
        patrol.retarget(now, extent, rng);
        patrol
    }

    #[inline]
    pub fn from(&self) -> Vec2 {
        self.p0
    }

    #[inline]
    pub fn to(&self) -> Vec2 {
        self.p1
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Normalized leg progress. Not clamped.
    #[inline]
    pub fn progress(&self, now: f32) -> f32 {
        (now - self.start) / self.duration
    }

    /// Close the current leg and draw the next waypoint inside `[-extent, extent]`.
    pub fn retarget(&mut self, now: f32, extent: Vec2, rng: &mut impl Rng) {
        self.p0 = self.p1;
        self.p1 = Vec2::new(symmetric_range(rng, extent.x), symmetric_range(rng, extent.y));
        self.start = now;
    }

    /// Position at `now`, rolling over to a new leg once the current one completes.
    pub fn sample(&mut self, now: f32, extent: Vec2, rng: &mut impl Rng) -> Vec2 {
        let mut u = self.progress(now);
        if u >= 1.0 {
            self.retarget(now, extent, rng);
            u = 0.0;
        }
        self.p0.lerp(self.p1, ease_out(u.max(0.0)))
    }
}
