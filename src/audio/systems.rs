//! Audio domain: manifest loading and one-shot playback.

use bevy::audio::{PlaybackSettings, Volume};
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use super::cues::PlaySoundEvent;
use super::resources::{SoundBank, SoundSettings};

pub const SOUND_MANIFEST_PATH: &str = "assets/audio/manifest.json";

pub(crate) fn load_sound_bank(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.load_from_file(SOUND_MANIFEST_PATH, &asset_server);
}

pub(crate) fn play_sounds(
    mut commands: Commands,
    mut requests: MessageReader<PlaySoundEvent>,
    bank: Res<SoundBank>,
    settings: Res<SoundSettings>,
) {
    for request in requests.read() {
        let Some(clip) = bank.get(request.cue) else {
            trace!("No clip for {:?}", request.cue);
            continue;
        };

        commands.spawn((
            AudioPlayer::new(clip),
            PlaybackSettings {
                volume: Volume::Linear(settings.volume()),
                ..PlaybackSettings::DESPAWN
            },
        ));
    }
}
