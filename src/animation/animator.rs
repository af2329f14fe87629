//! Animation domain: the parameter sink controllers write into.

use std::collections::{HashMap, HashSet};

use bevy::prelude::*;

use crate::actor::{AnimationSink, Toggle};

pub const IS_RUNNING: &str = "IsRunning";
pub const IS_GROUNDED: &str = "IsGrounded";
pub const ATTACK: &str = "Attack";
pub const TAKE_DAMAGE: &str = "TakeDamage";

/// Named animation parameters for one actor.
///
/// Only declared parameters are stored. Writes to any other name are dropped,
/// so a controller can drive animators that lack some of its parameters.
#[derive(Component, Debug, Clone)]
pub struct Animator {
    bools: HashMap<String, bool>,
    triggers: HashSet<String>,
    pending: Vec<String>,
    enabled: bool,
}

impl Animator {
    pub fn new<'a>(
        bools: impl IntoIterator<Item = &'a str>,
        triggers: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            bools: bools.into_iter().map(|b| (b.to_string(), false)).collect(),
            triggers: triggers.into_iter().map(str::to_string).collect(),
            pending: Vec::new(),
            enabled: true,
        }
    }

    /// Parameters used by the player rig.
    pub fn player() -> Self {
        Self::new([IS_RUNNING, IS_GROUNDED], [ATTACK, TAKE_DAMAGE])
    }

    /// Parameters used by the enemy rig. Enemies never leave the ground.
    pub fn enemy() -> Self {
        Self::new([IS_RUNNING], [ATTACK, TAKE_DAMAGE])
    }

    /// Current value of a declared bool.
    pub fn bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    /// Consume a pending trigger. Returns true if it had been set.
    pub fn take_trigger(&mut self, name: &str) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t != name);
        self.pending.len() != before
    }

    pub fn has_pending(&self, name: &str) -> bool {
        self.pending.iter().any(|t| t == name)
    }
}

impl AnimationSink for Animator {
    fn set_bool(&mut self, name: &str, value: bool) {
        if let Some(slot) = self.bools.get_mut(name) {
            *slot = value;
        }
    }

    fn set_trigger(&mut self, name: &str) {
        if self.triggers.contains(name) && !self.has_pending(name) {
            self.pending.push(name.to_string());
        }
    }
}

impl Toggle for Animator {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
