//! Health domain: the `Health` component and its observer registry.

use bevy::prelude::*;

use super::events::{HealthNotice, NoticeKind};

/// What a single `take_damage` call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageOutcome {
    /// Requested damage, reported to observers as-is
    pub amount: f32,
    /// True only on the call that brought health to zero
    pub died: bool,
}

/// Health component for damageable actors.
///
/// `current` stays within `[0, max]`. Once dead the component is terminal:
/// further damage and healing are ignored and no more outcomes are reported.
#[derive(Component, Debug, Clone)]
pub struct Health {
    current: f32,
    max: f32,
    dead: bool,
    subscribers: Vec<Entity>,
}

impl Health {
    pub fn new(max: f32) -> Self {
        let max = max.max(f32::MIN_POSITIVE);
        Self {
            current: max,
            max,
            dead: false,
            subscribers: Vec::new(),
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }

    /// Apply `amount` damage. Returns `None` when nothing happened.
    pub fn take_damage(&mut self, amount: f32) -> Option<DamageOutcome> {
        if self.dead || amount.is_nan() || amount <= 0.0 {
            return None;
        }

        self.current = (self.current - amount).max(0.0);
        let died = self.current == 0.0;
        if died {
            self.dead = true;
        }

        Some(DamageOutcome { amount, died })
    }

    /// Restore up to `amount`, never past `max`. Returns the amount restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.dead || amount.is_nan() || amount <= 0.0 {
            return 0.0;
        }
        let actual = amount.min(self.max - self.current);
        self.current += actual;
        actual
    }

    /// Register `observer` for notices. Subscribing twice has no effect.
    pub fn subscribe(&mut self, observer: Entity) {
        if !self.subscribers.contains(&observer) {
            self.subscribers.push(observer);
        }
    }

    pub fn unsubscribe(&mut self, observer: Entity) {
        self.subscribers.retain(|s| *s != observer);
    }

    pub fn subscribers(&self) -> &[Entity] {
        &self.subscribers
    }

    /// Notices for every current subscriber, damage first, then death.
    pub fn notices(&self, owner: Entity, outcome: DamageOutcome) -> Vec<HealthNotice> {
        let mut kinds = vec![NoticeKind::Damaged(outcome.amount)];
        if outcome.died {
            kinds.push(NoticeKind::Died);
        }

        kinds
            .into_iter()
            .flat_map(|kind| {
                self.subscribers.iter().map(move |&subscriber| HealthNotice {
                    subscriber,
                    health: owner,
                    kind,
                })
            })
            .collect()
    }
}
