//! Respawn domain: lifecycle requests.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Replace `instigator` (if any) with a fresh player at the spawn point.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRequest {
    pub instigator: Option<Entity>,
}

impl Message for RespawnRequest {}

/// Force every `Toggle` behavior on `root` and its descendants on.
#[derive(Debug, Clone, Copy)]
pub struct EnableBehaviorsRequest {
    pub root: Entity,
}

impl Message for EnableBehaviorsRequest {}
