//! Respawn domain: replacing a dead player with a fresh one.

mod events;
mod resources;
mod systems;


use bevy::prelude::*;

use crate::core::SimulationSet;

pub use events::{EnableBehaviorsRequest, RespawnRequest};
pub use resources::{RespawnController, RespawnPlan, SpawnPoint};

#[cfg(test)]
pub(crate) use systems::{enable_behaviors, process_respawns};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RespawnRequest>()
            .add_message::<EnableBehaviorsRequest>()
            .add_systems(
                PostUpdate,
                (
                    systems::process_respawns.in_set(SimulationSet::Respawn),
                    systems::enable_behaviors.in_set(SimulationSet::Enable),
                ),
            );
    }
}
