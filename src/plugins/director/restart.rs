//! Delayed scene restart after the hero dies.
//!
//! `InGame -> Restarting -> InGame`: leaving `InGame` clears every entity tagged
//! `DespawnOnExit(GameState::InGame)` and re-entering runs the spawn systems again.

use bevy::prelude::*;

use crate::common::state::GameState;

#[derive(Resource, Debug, Default, Clone)]
pub struct DelayedRestart {
    timer: Option<Timer>,
}

impl DelayedRestart {
    /// Arm the restart. A pending restart keeps its original deadline.
    pub fn schedule(&mut self, delay: f32) {
        if self.timer.is_none() {
            self.timer = Some(Timer::from_seconds(delay.max(0.0), TimerMode::Once));
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }
}

pub fn tick_delayed_restart(
    time: Res<Time>,
    mut restart: ResMut<DelayedRestart>,
    mut next: ResMut<NextState<GameState>>,
) {
    let Some(timer) = restart.timer.as_mut() else {
        return;
    };
    timer.tick(time.delta());
    if timer.is_finished() {
        info!("restarting scene");
        restart.timer = None;
        next.set(GameState::Restarting);
    }
}

pub fn reenter_game(mut next: ResMut<NextState<GameState>>) {
    next.set(GameState::InGame);
}
