//! Screen bounds: the visible play area and per-entity on-screen tracking.
//!
//! The camera is centred on the origin, so the play area is `[-half, half]` on both axes.
//! Headless apps keep the tunable defaults; the camera plugin resizes the bounds from
//! the primary window in full builds.

use bevy::prelude::*;

use crate::common::{state::GameState, tunables::Tunables};

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub half_width: f32,
    pub half_height: f32,
}

impl ScreenBounds {
    pub fn new(half_width: f32, half_height: f32) -> Self {
        Self {
            half_width: half_width.max(0.0),
            half_height: half_height.max(0.0),
        }
    }

    /// Half extents shrunk by `radius`: where a circle's centre may go while staying visible.
    #[inline]
    pub fn inner_extent(&self, radius: f32) -> Vec2 {
        Vec2::new(
            (self.half_width - radius).max(0.0),
            (self.half_height - radius).max(0.0),
        )
    }

    /// Whole circle inside the visible rectangle.
    #[inline]
    pub fn contains_circle(&self, center: Vec2, radius: f32) -> bool {
        center.x.abs() <= self.half_width - radius && center.y.abs() <= self.half_height - radius
    }

    /// Whole circle outside the visible rectangle.
    #[inline]
    pub fn is_past_edge(&self, center: Vec2, radius: f32) -> bool {
        center.x.abs() > self.half_width + radius || center.y.abs() > self.half_height + radius
    }

    #[inline]
    pub fn clamp_inside(&self, center: Vec2, radius: f32) -> Vec2 {
        let ext = self.inner_extent(radius);
        center.clamp(-ext, ext)
    }
}

/// Footprint + cached visibility for things that care about the screen edge.
#[derive(Component, Debug, Clone, Copy)]
pub struct BoundsCheck {
    pub radius: f32,
    on_screen: bool,
}

impl BoundsCheck {
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.abs(),
            on_screen: false,
        }
    }

    #[inline]
    pub fn is_on_screen(&self) -> bool {
        self.on_screen
    }

    #[inline]
    pub fn refresh(&mut self, bounds: &ScreenBounds, center: Vec2) {
        self.on_screen = bounds.contains_circle(center, self.radius);
    }
}

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    app.insert_resource(ScreenBounds::new(
        tunables.camera_half_width,
        tunables.camera_half_height,
    ));

    app.add_systems(
        FixedUpdate,
        refresh_bounds_checks.run_if(in_state(GameState::InGame)),
    );
}

/// Recompute `on_screen` after movement, ahead of collision resolution in FixedPostUpdate.
pub fn refresh_bounds_checks(
    bounds: Res<ScreenBounds>,
    mut q: Query<(&mut BoundsCheck, &Transform)>,
) {
    for (mut check, tf) in &mut q {
        check.refresh(&bounds, tf.translation.truncate());
    }
}
