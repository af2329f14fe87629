//! Animation domain: playback state and frame progression.
//!
//! There are no sprite sheets; states are shown by tinting the actor and
//! one-shot states (attack, hurt) last for their frame count.

use bevy::prelude::*;

use super::animator::{ATTACK, Animator, IS_GROUNDED, IS_RUNNING, TAKE_DAMAGE};
use crate::actor::Toggle;

/// Animation states for actors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Airborne,
    Attack,
    Hurt,
}

impl AnimationState {
    fn is_one_shot(self) -> bool {
        matches!(self, AnimationState::Attack | AnimationState::Hurt)
    }
}

/// Component for animation playback driven by an `Animator`.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
    /// Whether a one-shot animation has played out.
    pub finished: bool,
    /// Sprite color outside of attack and hurt flashes.
    pub base_color: Color,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(Color::WHITE)
    }
}

impl AnimationController {
    pub fn new(base_color: Color) -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
            base_color,
        }
    }

    /// Set the animation state, resetting frame if state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state == state {
            return;
        }
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
        self.looping = !state.is_one_shot();

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Run => 6,
            AnimationState::Airborne => 2,
            AnimationState::Attack => 3,
            AnimationState::Hurt => 2,
        };

        self.frame_duration = match state {
            AnimationState::Attack => 0.08,
            AnimationState::Hurt => 0.1,
            _ => 0.15,
        };
    }

    /// Restart the current one-shot, or switch to `state`.
    fn restart(&mut self, state: AnimationState) {
        if self.state == state {
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.finished = false;
        } else {
            self.set_state(state);
        }
    }

    /// Pick the next state from the animator's parameters, consuming triggers.
    ///
    /// Hurt outranks attack. A running one-shot is not interrupted by
    /// locomotion changes.
    pub fn apply(&mut self, animator: &mut Animator) {
        let hurt = animator.take_trigger(TAKE_DAMAGE);
        let attack = animator.take_trigger(ATTACK);

        if hurt {
            self.restart(AnimationState::Hurt);
            return;
        }
        if attack {
            self.restart(AnimationState::Attack);
            return;
        }
        if self.state.is_one_shot() && !self.finished {
            return;
        }

        let grounded = animator.bool(IS_GROUNDED).unwrap_or(true);
        let running = animator.bool(IS_RUNNING).unwrap_or(false);
        let next = if !grounded {
            AnimationState::Airborne
        } else if running {
            AnimationState::Run
        } else {
            AnimationState::Idle
        };
        self.set_state(next);
    }

    /// Advance frame timing by `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        if self.finished {
            return;
        }

        self.frame_timer += delta;
        while self.frame_timer >= self.frame_duration && !self.finished {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                }
            }
        }
    }

    pub fn tint(&self) -> Color {
        match self.state {
            AnimationState::Hurt => Color::srgb(1.0, 0.5, 0.5),
            AnimationState::Attack => Color::srgb(1.0, 1.0, 0.8),
            _ => self.base_color,
        }
    }
}

pub(crate) fn drive_animations(
    time: Res<Time>,
    mut query: Query<(&mut Animator, &mut AnimationController, Option<&mut Sprite>)>,
) {
    for (mut animator, mut controller, sprite) in &mut query {
        if !animator.is_enabled() {
            continue;
        }

        let previous = controller.state;
        controller.apply(&mut animator);
        controller.advance(time.delta_secs());
        if controller.state != previous {
            trace!("Animation {:?} -> {:?}", previous, controller.state);
        }

        if let Some(mut sprite) = sprite {
            let tint = controller.tint();
            if sprite.color != tint {
                sprite.color = tint;
            }
        }
    }
}
