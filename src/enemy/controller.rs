//! Enemy domain: patrol, turn-around and attack loop.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::actor::{ActorIo, Facing, Strike, Toggle};
use crate::animation::{ATTACK, IS_RUNNING, TAKE_DAMAGE};
use crate::content::EnemyTuning;
use crate::core::{CoopTimer, Liveness, Resume};
use crate::probe::combat::{detect, ground_ahead, resolve_hit, wall_ahead};
use crate::probe::{GameLayer, Probe};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EnemyState {
    #[default]
    Patrolling,
    /// Stopped at a wall or ledge, waiting to reverse
    TurningAround { prior_velocity: Vec2 },
    /// Attack loop: strike, cool down, strike again while the player stays close
    Engaging,
    Dead,
}

#[derive(Component, Debug, Clone)]
pub struct EnemyController {
    tuning: EnemyTuning,
    half_extents: Vec2,
    facing: Facing,
    state: EnemyState,
    turn_timer: CoopTimer,
    attack_timer: CoopTimer,
    liveness: Liveness,
    enabled: bool,
}

impl EnemyController {
    pub fn new(tuning: EnemyTuning, facing: Facing) -> Self {
        Self {
            half_extents: tuning.half_extents(),
            tuning,
            facing,
            state: EnemyState::Patrolling,
            turn_timer: CoopTimer::default(),
            attack_timer: CoopTimer::default(),
            liveness: Liveness::default(),
            enabled: true,
        }
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn tuning(&self) -> &EnemyTuning {
        &self.tuning
    }

    pub fn half_extents(&self) -> Vec2 {
        self.half_extents
    }

    pub fn is_dead(&self) -> bool {
        self.state == EnemyState::Dead
    }

    /// Detection reach: body edge plus attack range.
    pub fn detection_reach(&self) -> f32 {
        self.half_extents.x + self.tuning.attack_range
    }

    /// Damage reach: body edge plus attack distance.
    pub fn strike_reach(&self) -> f32 {
        self.half_extents.x + self.tuning.attack_distance
    }

    fn player_in_range(&self, origin: Vec2, probe: &dyn Probe) -> bool {
        detect(
            probe,
            origin,
            self.facing,
            self.detection_reach(),
            LayerMask::from(GameLayer::Player),
        )
    }

    /// Advance one fixed step. Returns a strike when an attack connects.
    pub fn fixed_tick(
        &mut self,
        delta: Duration,
        origin: Vec2,
        probe: &dyn Probe,
        io: &mut ActorIo,
    ) -> Option<Strike> {
        if !self.enabled {
            return None;
        }

        match self.state {
            EnemyState::Dead => None,
            EnemyState::Patrolling => self.patrol(origin, probe, io),
            EnemyState::TurningAround { prior_velocity } => {
                self.wait_for_turn(delta, prior_velocity, io);
                None
            }
            EnemyState::Engaging => self.continue_attack(delta, origin, probe, io),
        }
    }

    fn patrol(&mut self, origin: Vec2, probe: &dyn Probe, io: &mut ActorIo) -> Option<Strike> {
        let velocity = Vec2::new(self.tuning.speed * self.facing.sign(), io.velocity().y);
        io.set_velocity(velocity);

        // Engaging wins over turning around
        if self.player_in_range(origin, probe) {
            io.set_velocity(Vec2::ZERO);
            io.set_bool(IS_RUNNING, false);
            self.state = EnemyState::Engaging;
            debug!("Enemy engaging, facing {:?}", self.facing);
            return self.attack(origin, probe, io);
        }

        io.set_bool(IS_RUNNING, velocity.x != 0.0);

        let half = self.half_extents;
        let blocked = wall_ahead(probe, origin, self.facing, half.x)
            || !ground_ahead(probe, origin, self.facing, half.x, half.y);
        if blocked {
            self.begin_turn(velocity, io);
        }
        None
    }

    fn begin_turn(&mut self, prior_velocity: Vec2, io: &mut ActorIo) {
        if !self.turn_timer.start(self.tuning.wait_time, &self.liveness) {
            return;
        }
        io.set_velocity(Vec2::ZERO);
        io.set_bool(IS_RUNNING, false);
        self.state = EnemyState::TurningAround { prior_velocity };
        trace!("Enemy turning around from {:?}", self.facing);
    }

    fn wait_for_turn(&mut self, delta: Duration, prior_velocity: Vec2, io: &mut ActorIo) {
        match self.turn_timer.tick(delta, &self.liveness) {
            Resume::Waiting => {
                let held = Vec2::new(0.0, io.velocity().y);
                io.set_velocity(held);
            }
            Resume::Ready => {
                self.facing = self.facing.flipped();
                io.set_flip_x(self.facing.flip_x());
                io.set_velocity(Vec2::new(
                    self.tuning.speed * self.facing.sign(),
                    prior_velocity.y,
                ));
                self.state = EnemyState::Patrolling;
            }
            Resume::Idle | Resume::Stale => self.state = EnemyState::Patrolling,
        }
    }

    /// Trigger the swing, resolve the hit and start the cooldown.
    fn attack(&mut self, origin: Vec2, probe: &dyn Probe, io: &mut ActorIo) -> Option<Strike> {
        io.set_trigger(ATTACK);
        self.attack_timer
            .start(self.tuning.attack_cooldown, &self.liveness);

        let target = resolve_hit(
            probe,
            origin,
            self.facing,
            self.strike_reach(),
            LayerMask::from(GameLayer::Player),
        )?;
        Some(Strike {
            target,
            amount: self.tuning.damage,
        })
    }

    fn continue_attack(
        &mut self,
        delta: Duration,
        origin: Vec2,
        probe: &dyn Probe,
        io: &mut ActorIo,
    ) -> Option<Strike> {
        match self.attack_timer.tick(delta, &self.liveness) {
            Resume::Waiting => None,
            Resume::Ready if self.player_in_range(origin, probe) => self.attack(origin, probe, io),
            Resume::Ready | Resume::Idle | Resume::Stale => {
                debug!("Enemy lost the player, patrolling");
                self.state = EnemyState::Patrolling;
                None
            }
        }
    }

    /// Damage reaction: play the hurt animation.
    pub fn react_to_damage(&mut self, io: &mut ActorIo) {
        if self.is_dead() {
            return;
        }
        io.set_trigger(TAKE_DAMAGE);
    }

    /// Enter the terminal state. Returns false if already dead.
    pub fn die(&mut self) -> bool {
        if self.is_dead() {
            return false;
        }
        self.turn_timer.cancel();
        self.attack_timer.cancel();
        self.liveness.revoke();
        self.state = EnemyState::Dead;
        true
    }

    pub fn has_pending_timers(&self) -> bool {
        self.turn_timer.is_pending() || self.attack_timer.is_pending()
    }
}

impl Toggle for EnemyController {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
