//! Player domain: keyboard-driven movement, jumping and melee.

mod controller;
mod input;
mod spawn;
mod systems;


use bevy::prelude::*;

use crate::core::{GameState, SimulationSet};
use crate::health::subscribe_owner;

pub use controller::{PlayerController, PlayerFrame, PlayerTick};
pub use input::PlayerInput;
pub use spawn::{PLAYER_COLOR, Player, PlayerTemplate, PlayerVisual};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>()
            .add_systems(
                Update,
                (input::read_input, systems::drive_player)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                PostUpdate,
                (
                    subscribe_owner::<PlayerController>.before(SimulationSet::ApplyDamage),
                    systems::handle_player_notices.in_set(SimulationSet::Notices),
                ),
            );
    }
}
