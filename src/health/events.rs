//! Health domain: damage requests and observer notices.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A resolved hit, applied to `target`'s `Health` in the same frame.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
}

impl Message for DamageEvent {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeKind {
    Damaged(f32),
    Died,
}

/// Delivered to one subscriber of the `Health` on `health`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthNotice {
    pub subscriber: Entity,
    pub health: Entity,
    pub kind: NoticeKind,
}

impl Message for HealthNotice {}
