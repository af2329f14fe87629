//! Actor domain: collaborator contracts the controllers write into.
//!
//! Controllers never touch engine types directly. Each tick they receive an
//! `ActorIo` holding whichever collaborators the actor actually has; a missing
//! collaborator is a wiring problem and the dependent output is skipped.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::audio::{PlaySoundEvent, SoundCue};

/// Velocity access on an externally owned rigid body.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// Fire-and-forget animation parameters. Unknown names are ignored.
pub trait AnimationSink {
    fn set_bool(&mut self, name: &str, value: bool);
    fn set_trigger(&mut self, name: &str);
}

pub trait SpriteSink {
    fn set_flip_x(&mut self, flip: bool);
}

pub trait SoundSink {
    fn play_one_shot(&mut self, cue: SoundCue);
}

/// The outputs available to a controller for one tick.
#[derive(Default)]
pub struct ActorIo<'a> {
    pub body: Option<&'a mut dyn PhysicsBody>,
    pub animation: Option<&'a mut dyn AnimationSink>,
    pub sprite: Option<&'a mut dyn SpriteSink>,
    pub sound: Option<&'a mut dyn SoundSink>,
}

impl ActorIo<'_> {
    pub fn velocity(&self) -> Vec2 {
        self.body.as_deref().map_or(Vec2::ZERO, |body| body.velocity())
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        if let Some(body) = self.body.as_deref_mut() {
            body.set_velocity(velocity);
        }
    }

    pub fn apply_impulse(&mut self, impulse: Vec2) {
        if let Some(body) = self.body.as_deref_mut() {
            body.apply_impulse(impulse);
        }
    }

    pub fn set_bool(&mut self, name: &str, value: bool) {
        if let Some(animation) = self.animation.as_deref_mut() {
            animation.set_bool(name, value);
        }
    }

    pub fn set_trigger(&mut self, name: &str) {
        if let Some(animation) = self.animation.as_deref_mut() {
            animation.set_trigger(name);
        }
    }

    pub fn set_flip_x(&mut self, flip: bool) {
        if let Some(sprite) = self.sprite.as_deref_mut() {
            sprite.set_flip_x(flip);
        }
    }

    pub fn play(&mut self, cue: SoundCue) {
        if let Some(sound) = self.sound.as_deref_mut() {
            sound.play_one_shot(cue);
        }
    }
}

/// `PhysicsBody` over an avian2d body's `LinearVelocity`.
pub struct BodyHandle<'a> {
    velocity: &'a mut LinearVelocity,
    inverse_mass: f32,
}

impl<'a> BodyHandle<'a> {
    pub fn new(velocity: &'a mut LinearVelocity, mass: Option<&Mass>) -> Self {
        let inverse_mass = match mass {
            Some(mass) if mass.0 > 0.0 => 1.0 / mass.0,
            _ => 1.0,
        };
        Self {
            velocity,
            inverse_mass,
        }
    }
}

impl PhysicsBody for BodyHandle<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }
}

impl SpriteSink for Sprite {
    fn set_flip_x(&mut self, flip: bool) {
        self.flip_x = flip;
    }
}

/// `SoundSink` that forwards cues as `PlaySoundEvent` messages.
pub struct SoundWriter<'a, 'w> {
    writer: &'a mut MessageWriter<'w, PlaySoundEvent>,
}

impl<'a, 'w> SoundWriter<'a, 'w> {
    pub fn new(writer: &'a mut MessageWriter<'w, PlaySoundEvent>) -> Self {
        Self { writer }
    }
}

impl SoundSink for SoundWriter<'_, '_> {
    fn play_one_shot(&mut self, cue: SoundCue) {
        self.writer.write(PlaySoundEvent { cue });
    }
}
