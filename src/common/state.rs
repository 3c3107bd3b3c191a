//! Global state machine.
//!
//! `Restarting` is a one-frame hop used to rebuild the scene: everything tagged with
//! `DespawnOnExit(GameState::InGame)` is removed on the way out and respawned on re-entry.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
    Restarting,
}
