//! Health domain: damage, healing, death and the observers that react to them.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::core::SimulationSet;

pub use components::{DamageOutcome, Health};
pub use events::{DamageEvent, HealthNotice, NoticeKind};
pub use systems::subscribe_owner;

#[cfg(test)]
pub(crate) use systems::apply_damage;

pub struct HealthPlugin;

impl Plugin for HealthPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<DamageEvent>()
            .add_message::<HealthNotice>()
            .add_systems(
                PostUpdate,
                systems::apply_damage.in_set(SimulationSet::ApplyDamage),
            );
    }
}
