//! Audio domain: sound cues and the message that requests them.

use bevy::ecs::message::Message;

/// Every one-shot sound the gameplay core can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A swing that struck nothing
    AirHit,
    /// A swing or hazard that struck an actor
    EnemyHit,
    /// The player took damage
    PlayerHit,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::AirHit, SoundCue::EnemyHit, SoundCue::PlayerHit];

    /// Manifest key for this cue.
    pub fn key(self) -> &'static str {
        match self {
            SoundCue::AirHit => "air_hit",
            SoundCue::EnemyHit => "enemy_hit",
            SoundCue::PlayerHit => "player_hit",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cue| cue.key() == key)
    }
}

/// Request to play a cue once at the current volume.
#[derive(Debug, Clone, Copy)]
pub struct PlaySoundEvent {
    pub cue: SoundCue,
}

impl Message for PlaySoundEvent {}
