//! Player domain: per-frame movement, jump and melee attack.
//!
//! Each concern runs every frame in a fixed order: move, clamp to the view,
//! face the input direction, update animation flags, jump, attack.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{ActorIo, Facing, Strike, Toggle};
use crate::animation::{ATTACK, IS_GROUNDED, IS_RUNNING, TAKE_DAMAGE};
use crate::audio::SoundCue;
use crate::content::PlayerTuning;
use crate::core::ViewBounds;
use crate::probe::combat::{grounded, strike_probe};
use crate::probe::{GameLayer, Probe};

/// What the controller sees this frame.
#[derive(Debug, Clone, Copy)]
pub struct PlayerFrame {
    pub input: super::PlayerInput,
    /// Seconds since startup
    pub now: f64,
    pub origin: Vec2,
    pub view: Option<ViewBounds>,
}

/// What the owning system must apply after a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlayerTick {
    /// New x position when the actor had to be pulled back on screen
    pub clamped_x: Option<f32>,
    pub strike: Option<Strike>,
}

#[derive(Component, Debug, Clone)]
pub struct PlayerController {
    tuning: PlayerTuning,
    half_extents: Vec2,
    facing: Facing,
    next_attack_time: f64,
    dead: bool,
    enabled: bool,
}

impl PlayerController {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            half_extents: tuning.half_extents(),
            tuning,
            facing: Facing::Right,
            next_attack_time: 0.0,
            dead: false,
            enabled: true,
        }
    }

    /// A controller that does nothing until enabled.
    pub fn dormant(tuning: PlayerTuning) -> Self {
        Self {
            enabled: false,
            ..Self::new(tuning)
        }
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn next_attack_time(&self) -> f64 {
        self.next_attack_time
    }

    /// Melee reach: body edge plus attack distance.
    pub fn strike_reach(&self) -> f32 {
        self.half_extents.x + self.tuning.attack_distance
    }

    pub fn tick(&mut self, frame: &PlayerFrame, probe: &dyn Probe, io: &mut ActorIo) -> PlayerTick {
        if !self.enabled || self.dead {
            return PlayerTick::default();
        }
        let axis = frame.input.horizontal.clamp(-1.0, 1.0);

        let vertical = io.velocity().y;
        io.set_velocity(Vec2::new(axis * self.tuning.speed, vertical));

        let clamped_x = frame.view.and_then(|view| {
            let x = view.clamp_x(frame.origin.x, self.half_extents.x);
            (x != frame.origin.x).then_some(x)
        });

        if let Some(facing) = Facing::from_axis(axis) {
            self.facing = facing;
            io.set_flip_x(facing.flip_x());
        }

        let on_ground = grounded(probe, frame.origin, self.tuning.ground_probe_length);
        io.set_bool(IS_RUNNING, axis != 0.0);
        io.set_bool(IS_GROUNDED, on_ground);

        // No buffering: a press while airborne is dropped
        if frame.input.jump_pressed && on_ground {
            io.apply_impulse(Vec2::Y * self.tuning.jump_impulse);
        }

        let strike = if frame.input.attack_pressed {
            self.attack(frame.now, frame.origin, probe, io)
        } else {
            None
        };

        PlayerTick { clamped_x, strike }
    }

    fn attack(
        &mut self,
        now: f64,
        origin: Vec2,
        probe: &dyn Probe,
        io: &mut ActorIo,
    ) -> Option<Strike> {
        if now < self.next_attack_time {
            return None;
        }
        self.next_attack_time = now + f64::from(self.tuning.attack_cooldown);
        io.set_trigger(ATTACK);

        let Some(hit) = strike_probe(
            probe,
            origin,
            self.facing,
            self.strike_reach(),
            LayerMask::from(GameLayer::Enemy),
        ) else {
            io.play(SoundCue::AirHit);
            return None;
        };

        let target = hit.health_owner?;
        io.play(SoundCue::EnemyHit);
        Some(Strike {
            target,
            amount: self.tuning.damage,
        })
    }

    /// Damage reaction: hurt animation and the player-hit sound.
    pub fn react_to_damage(&mut self, io: &mut ActorIo) {
        if self.dead {
            return;
        }
        io.set_trigger(TAKE_DAMAGE);
        io.play(SoundCue::PlayerHit);
    }

    /// Enter the terminal state. Returns false if already dead.
    pub fn die(&mut self) -> bool {
        if self.dead {
            return false;
        }
        self.dead = true;
        true
    }
}

impl Toggle for PlayerController {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
