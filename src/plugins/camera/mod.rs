//! Camera plugin (render-only).
//!
//! The camera never moves: it sits on the origin so the play area is the window
//! rectangle centred there. `ScreenBounds` follows the primary window size.
//!
//! ```text
//! OnEnter(InGame): spawn MainCamera
//! PreUpdate:       sync_bounds_to_window (only when the window size changed)
//! ```

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;
use bevy::window::PrimaryWindow;
use bevy_firefly::prelude::*;

use crate::common::state::GameState;
use crate::plugins::bounds::ScreenBounds;

#[derive(Component)]
pub struct MainCamera;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(PreUpdate, sync_bounds_to_window);
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera2d,
        MainCamera,
        FireflyConfig::default(),
        Transform::from_xyz(0.0, 0.0, 999.0),
        DespawnOnExit(GameState::InGame),
    ));
}

fn sync_bounds_to_window(
    q_window: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut bounds: ResMut<ScreenBounds>,
) {
    let Ok(window) = q_window.single() else {
        return;
    };

    let next = ScreenBounds::new(window.width() * 0.5, window.height() * 0.5);
    if *bounds != next {
        debug!("screen bounds -> {}x{}", next.half_width, next.half_height);
        *bounds = next;
    }
}
