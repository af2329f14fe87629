//! In-memory collaborators for controller tests.

use std::collections::HashMap;

use bevy::prelude::*;

use super::{ActorIo, AnimationSink, PhysicsBody, SoundSink, SpriteSink};
use crate::audio::SoundCue;

/// Allocate `count` distinct entity ids.
pub(crate) fn test_entities(count: usize) -> Vec<Entity> {
    let mut world = World::new();
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBody {
    pub velocity: Vec2,
    pub impulses: Vec<Vec2>,
}

impl PhysicsBody for RecordingBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.impulses.push(impulse);
        self.velocity += impulse;
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingAnimation {
    pub bools: HashMap<String, bool>,
    pub triggers: Vec<String>,
}

impl RecordingAnimation {
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    pub fn trigger_count(&self, name: &str) -> usize {
        self.triggers.iter().filter(|t| t.as_str() == name).count()
    }
}

impl AnimationSink for RecordingAnimation {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.push(name.to_string());
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSprite {
    pub flip_x: Option<bool>,
}

impl SpriteSink for RecordingSprite {
    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = Some(flip);
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSound {
    pub played: Vec<SoundCue>,
}

impl SoundSink for RecordingSound {
    fn play_one_shot(&mut self, cue: SoundCue) {
        self.played.push(cue);
    }
}

/// Every collaborator an actor can have, recorded.
#[derive(Debug, Default)]
pub(crate) struct Rig {
    pub body: RecordingBody,
    pub animation: RecordingAnimation,
    pub sprite: RecordingSprite,
    pub sound: RecordingSound,
}

impl Rig {
    pub fn io(&mut self) -> ActorIo<'_> {
        ActorIo {
            body: Some(&mut self.body),
            animation: Some(&mut self.animation),
            sprite: Some(&mut self.sprite),
            sound: Some(&mut self.sound),
        }
    }
}
