//! Core domain: cooperative timers guarded by liveness tokens.
//!
//! Deferred actor logic ("wait two seconds, then turn around") never blocks.
//! A `CoopTimer` is ticked once per simulation step by its owner and reports
//! when it is ready to resume. Every pending timer carries the `LivenessToken`
//! that was current when it started; once the owning actor dies the token no
//! longer matches and the resume is dropped as `Resume::Stale`.

use std::time::Duration;

use bevy::prelude::*;

/// Generation marker captured by deferred work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LivenessToken(u32);

/// Tracks whether an actor is still allowed to run deferred logic.
#[derive(Debug, Clone)]
pub struct Liveness {
    generation: u32,
    alive: bool,
}

impl Default for Liveness {
    fn default() -> Self {
        Self {
            generation: 0,
            alive: true,
        }
    }
}

impl Liveness {
    pub fn token(&self) -> LivenessToken {
        LivenessToken(self.generation)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// True if work started under `token` may still run.
    pub fn is_current(&self, token: LivenessToken) -> bool {
        self.alive && token.0 == self.generation
    }

    /// Invalidate every outstanding token. Irreversible.
    pub fn revoke(&mut self) {
        self.alive = false;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Result of ticking a `CoopTimer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    /// No suspension is pending
    Idle,
    /// Still waiting
    Waiting,
    /// The wait elapsed; the owner should resume its deferred logic now
    Ready,
    /// The owner was torn down while waiting; nothing may run
    Stale,
}

#[derive(Debug, Clone)]
struct Suspension {
    timer: Timer,
    token: LivenessToken,
}

/// A single-flight cooperative timer.
#[derive(Debug, Clone, Default)]
pub struct CoopTimer {
    pending: Option<Suspension>,
}

impl CoopTimer {
    /// Begin a suspension of `seconds`.
    ///
    /// Returns `false` without touching the pending wait if one is already in
    /// flight, or if the owner is no longer alive.
    pub fn start(&mut self, seconds: f32, liveness: &Liveness) -> bool {
        if self.pending.is_some() || !liveness.is_alive() {
            return false;
        }
        self.pending = Some(Suspension {
            timer: Timer::from_seconds(seconds.max(0.0), TimerMode::Once),
            token: liveness.token(),
        });
        true
    }

    pub fn tick(&mut self, delta: Duration, liveness: &Liveness) -> Resume {
        let Some(suspension) = self.pending.as_mut() else {
            return Resume::Idle;
        };

        if !liveness.is_current(suspension.token) {
            self.pending = None;
            return Resume::Stale;
        }

        suspension.timer.tick(delta);
        if suspension.timer.remaining_secs() == 0.0 {
            self.pending = None;
            Resume::Ready
        } else {
            Resume::Waiting
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Seconds left on the pending wait, if any.
    pub fn remaining_secs(&self) -> Option<f32> {
        self.pending.as_ref().map(|s| s.timer.remaining_secs())
    }
}
