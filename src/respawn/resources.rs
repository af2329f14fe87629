//! Respawn domain: spawn configuration.

use bevy::prelude::*;

use crate::player::PlayerTemplate;

/// Marker for the entity whose transform new players spawn at
#[derive(Component, Debug, Default)]
pub struct SpawnPoint;

/// What a respawn does once the old player is gone.
#[derive(Debug, Clone, PartialEq)]
pub enum RespawnPlan {
    Spawn(Transform),
    /// Template or spawn point missing
    Unconfigured,
}

/// Where and from what new players are created.
#[derive(Resource, Debug, Clone, Default)]
pub struct RespawnController {
    pub template: Option<PlayerTemplate>,
    pub spawn_point: Option<Entity>,
}

impl RespawnController {
    pub fn new(template: PlayerTemplate, spawn_point: Entity) -> Self {
        Self {
            template: Some(template),
            spawn_point: Some(spawn_point),
        }
    }

    /// Decide the spawn given the spawn point's current transform, if it
    /// still exists.
    pub fn plan(&self, spawn_transform: Option<&Transform>) -> RespawnPlan {
        match (&self.template, self.spawn_point, spawn_transform) {
            (Some(_), Some(_), Some(at)) => RespawnPlan::Spawn(Transform {
                translation: at.translation,
                rotation: at.rotation,
                ..default()
            }),
            _ => RespawnPlan::Unconfigured,
        }
    }
}
