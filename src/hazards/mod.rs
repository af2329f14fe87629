//! Hazards domain: static sensors that hurt the player on contact.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::actor::{Strike, Toggle};
use crate::audio::{PlaySoundEvent, SoundCue};
use crate::content::BlockDef;
use crate::core::GameState;
use crate::health::DamageEvent;
use crate::player::Player;
use crate::probe::{GameLayer, HealthOwners};

#[cfg(test)]
mod tests;

pub const SPIKE_COLOR: Color = Color::srgb(0.75, 0.75, 0.8);

/// Deals a fixed amount of damage to the player each time it touches this sensor.
#[derive(Component, Debug, Clone)]
pub struct ContactDamage {
    pub amount: f32,
    enabled: bool,
}

impl ContactDamage {
    pub fn new(amount: f32) -> Self {
        Self {
            amount,
            enabled: true,
        }
    }

    /// The hit dealt to whatever owns `health_owner`, if anything.
    pub fn strike(&self, health_owner: Option<Entity>) -> Option<Strike> {
        if !self.enabled || self.amount <= 0.0 {
            return None;
        }
        health_owner.map(|target| Strike {
            target,
            amount: self.amount,
        })
    }
}

impl Toggle for ContactDamage {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

pub fn spawn_spikes(commands: &mut Commands, block: &BlockDef, damage: f32) -> Entity {
    let size = block.size();
    commands
        .spawn((
            Name::new("Spikes"),
            ContactDamage::new(damage),
            Sprite {
                color: SPIKE_COLOR,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(block.center.x, block.center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
        ))
        .id()
}

pub(crate) fn apply_contact_damage(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    hazards: Query<&ContactDamage>,
    players: Query<(), With<Player>>,
    owners: HealthOwners,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hazard_entity, other) in pairs {
            let Ok(hazard) = hazards.get(hazard_entity) else {
                continue;
            };
            if !players.contains(other) {
                continue;
            }

            if let Some(strike) = hazard.strike(owners.resolve(other)) {
                debug!("Hazard {:?} hit {:?}", hazard_entity, strike.target);
                damage_events.write(DamageEvent {
                    source: hazard_entity,
                    target: strike.target,
                    amount: strike.amount,
                });
                sounds.write(PlaySoundEvent {
                    cue: SoundCue::EnemyHit,
                });
            }
        }
    }
}

pub struct HazardsPlugin;

impl Plugin for HazardsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            apply_contact_damage.run_if(in_state(GameState::Run)),
        );
    }
}
