//! Arena domain: the demo level built from `GameplayTuning::arena`.

mod spawn;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::GameState;

pub use spawn::{ArenaBlock, GROUND_COLOR, WALL_COLOR, block_transform, terrain_layers};

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Run), spawn::spawn_arena);
    }
}
