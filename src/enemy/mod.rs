//! Enemy domain: patrolling melee enemies.

mod controller;
mod spawn;
mod systems;


use bevy::prelude::*;

use crate::core::{GameState, SimulationSet};
use crate::health::subscribe_owner;

pub use controller::{EnemyController, EnemyState};
pub use spawn::{ENEMY_COLOR, Enemy, EnemyBundle};

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            systems::drive_enemies.run_if(in_state(GameState::Run)),
        )
        .add_systems(
            PostUpdate,
            (
                subscribe_owner::<EnemyController>.before(SimulationSet::ApplyDamage),
                systems::handle_enemy_notices.in_set(SimulationSet::Notices),
            ),
        );
    }
}
