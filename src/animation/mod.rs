//! Animation domain: animator parameters and the playback they drive.

mod animator;
mod playback;


use bevy::prelude::*;

pub use animator::{ATTACK, Animator, IS_GROUNDED, IS_RUNNING, TAKE_DAMAGE};
pub use playback::{AnimationController, AnimationState};

pub struct ActorAnimationPlugin;

impl Plugin for ActorAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, playback::drive_animations);
    }
}
