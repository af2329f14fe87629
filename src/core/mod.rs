//! Core domain: game state, schedule ordering, timers and the camera view.

mod state;
mod timer;
mod view;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use state::{GameState, SimulationSet};
pub use timer::{CoopTimer, Liveness, LivenessToken, Resume};
pub use view::{PIXELS_PER_UNIT, ViewBounds};

/// Rate of the authoritative actor update.
pub const SIMULATION_HZ: f64 = 60.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            .configure_sets(
                PostUpdate,
                (
                    SimulationSet::ApplyDamage,
                    SimulationSet::Notices,
                    SimulationSet::Respawn,
                    SimulationSet::Enable,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(Startup, view::setup_camera)
            .add_systems(PreUpdate, view::update_view_bounds);
    }
}
