//! Debug domain: developer overlay for probe rays and player hotkeys.
//!
//! Only built with the `dev-tools` feature.

mod state;
mod systems;


use bevy::prelude::*;

use crate::core::GameState;

pub use state::{DebugState, ProbeSketch, enemy_sketches, player_sketches};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (systems::toggle_probe_overlay, systems::handle_debug_hotkeys)
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(
                Update,
                systems::draw_probe_gizmos.run_if(|state: Res<DebugState>| state.show_probes),
            );
    }
}
