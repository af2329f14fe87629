//! Player domain: keyboard sampling.

use bevy::prelude::*;

/// Player intent for the current frame.
///
/// `horizontal` is continuous in `[-1, 1]`; the actions are edge-triggered
/// and only true on the frame the key went down.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerInput {
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub attack_pressed: bool,
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.horizontal = x;
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || keyboard.just_pressed(KeyCode::ArrowUp);
    input.attack_pressed =
        keyboard.just_pressed(KeyCode::KeyJ) || keyboard.just_pressed(KeyCode::KeyZ);
}
