//! Content domain: gameplay tuning and arena layout read from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

use std::path::Path;

use bevy::prelude::*;

use crate::audio::SoundSettings;
use crate::core::GameState;

pub use data::{
    ArenaDef, BlockDef, EnemySpawnDef, EnemyTuning, GameplayTuning, PlayerTuning, PointDef,
    SoundTuning, SpikeTuning,
};
pub use loader::{ContentLoadError, load_tuning, parse_tuning};
pub use validation::{ValidationError, sanitize_tuning};

pub const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GameplayTuning>()
            .add_systems(Startup, load_content);
    }
}

/// Read the tuning file, falling back to defaults, then start the run.
fn load_content(
    mut commands: Commands,
    mut sound: ResMut<SoundSettings>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let path = Path::new(TUNING_PATH);
    let mut tuning = if path.exists() {
        match load_tuning(path) {
            Ok(tuning) => {
                info!("Loaded gameplay tuning from {}", TUNING_PATH);
                tuning
            }
            Err(e) => {
                warn!("{}; using defaults", e);
                GameplayTuning::default()
            }
        }
    } else {
        warn!("Tuning file not found at {:?}, using defaults", TUNING_PATH);
        GameplayTuning::default()
    };

    let errors = sanitize_tuning(&mut tuning);
    for error in &errors {
        warn!("Tuning: {}", error);
    }

    sound.set_volume(tuning.sound.volume);
    commands.insert_resource(tuning);
    next_state.set(GameState::Run);
}
