//! Audio domain: one-shot gameplay sounds.
//!
//! Controllers never reach for a global sound player. They write
//! `PlaySoundEvent`s through the `SoundSink` they were handed, and this plugin
//! turns those into Bevy audio entities.

mod cues;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use cues::{PlaySoundEvent, SoundCue};
pub use resources::{SoundBank, SoundManifest, SoundSettings};
pub use systems::SOUND_MANIFEST_PATH;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PlaySoundEvent>()
            .init_resource::<SoundSettings>()
            .init_resource::<SoundBank>()
            .add_systems(Startup, systems::load_sound_bank)
            .add_systems(PostUpdate, systems::play_sounds);
    }
}
