//! Actor domain: facing, collaborator sinks and toggleable behaviors shared by
//! the player and enemy controllers.

mod behavior;
mod facing;
mod sinks;

#[cfg(test)]
pub(crate) mod testing;

pub use behavior::Toggle;
pub use facing::Facing;
pub use sinks::{
    ActorIo, AnimationSink, BodyHandle, PhysicsBody, SoundSink, SoundWriter, SpriteSink,
};

use bevy::prelude::*;

/// A melee hit resolved by a controller, turned into a `DamageEvent` by the
/// owning system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    pub target: Entity,
    pub amount: f32,
}
