//! Health domain: damage application and subscription wiring.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::components::Health;
use super::events::{DamageEvent, HealthNotice};

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut notices: MessageWriter<HealthNotice>,
    mut query: Query<&mut Health>,
) {
    for event in damage_events.read() {
        let Ok(mut health) = query.get_mut(event.target) else {
            continue;
        };

        let Some(outcome) = health.take_damage(event.amount) else {
            continue;
        };

        debug!(
            "{:?} hit {:?} for {}: {}/{}",
            event.source,
            event.target,
            event.amount,
            health.current(),
            health.max()
        );
        if outcome.died {
            info!("{:?} died", event.target);
        }

        notices.write_batch(health.notices(event.target, outcome));
    }
}

/// Subscribe every newly spawned `T` to its own `Health`.
pub fn subscribe_owner<T: Component>(mut query: Query<(Entity, &mut Health), Added<T>>) {
    for (entity, mut health) in &mut query {
        health.subscribe(entity);
    }
}
