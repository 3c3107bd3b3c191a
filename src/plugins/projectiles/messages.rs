//! Buffered fire requests.
//!
//! Producers (the hero's weapon) write intent; the allocator is the only system that
//! touches the pool.

use bevy::prelude::*;

use crate::plugins::weapons::WeaponType;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest {
    pub pos: Vec2,
    pub vel: Vec2,
    pub weapon: WeaponType,
}
