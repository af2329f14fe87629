//! Probe domain: the shared sensing used by both controllers.
//!
//! Attack reach and patrol-edge geometry are computed only here so enemy and
//! player probes cannot drift apart.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::layers::{GameLayer, terrain_mask};
use crate::actor::Facing;

/// Extra length added past an actor's half extent for terrain probes.
pub const PROBE_EPSILON: f32 = 0.1;

/// A struck collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub collider: Entity,
    pub distance: f32,
    /// The collider itself or its nearest ancestor that carries `Health`
    pub health_owner: Option<Entity>,
}

/// Ray-cast query provided by the physics world.
pub trait Probe {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit>;
}

/// A ray segment, kept around so the debug overlay can draw what was cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRay {
    pub origin: Vec2,
    pub direction: Dir2,
    pub length: f32,
}

impl ProbeRay {
    pub fn end(&self) -> Vec2 {
        self.origin + self.direction * self.length
    }

    pub fn cast(&self, probe: &dyn Probe, mask: LayerMask) -> Option<ProbeHit> {
        probe.cast(self.origin, self.direction, self.length, mask)
    }
}

/// Horizontal ray along `facing` covering the actor's half width plus `extra`.
pub fn reach_ray(origin: Vec2, facing: Facing, half_width: f32, extra: f32) -> ProbeRay {
    ProbeRay {
        origin,
        direction: facing.direction(),
        length: half_width + extra,
    }
}

/// Forward ray at body height checking for a wall right ahead.
pub fn wall_ray(origin: Vec2, facing: Facing, half_width: f32) -> ProbeRay {
    reach_ray(origin, facing, half_width, PROBE_EPSILON)
}

/// Downward ray from the leading edge checking there is floor to step on.
pub fn ground_ahead_ray(origin: Vec2, facing: Facing, half_width: f32, half_height: f32) -> ProbeRay {
    ProbeRay {
        origin: origin + Vec2::new(half_width * facing.sign(), 0.0),
        direction: Dir2::NEG_Y,
        length: half_height + PROBE_EPSILON,
    }
}

/// Downward ray from the actor's center.
pub fn ground_ray(origin: Vec2, length: f32) -> ProbeRay {
    ProbeRay {
        origin,
        direction: Dir2::NEG_Y,
        length,
    }
}

/// True if anything on `mask` lies within `reach` along `facing`.
pub fn detect(probe: &dyn Probe, origin: Vec2, facing: Facing, reach: f32, mask: LayerMask) -> bool {
    probe.cast(origin, facing.direction(), reach, mask).is_some()
}

/// The first collider on `mask` within melee `reach` along `facing`.
pub fn strike_probe(
    probe: &dyn Probe,
    origin: Vec2,
    facing: Facing,
    reach: f32,
    mask: LayerMask,
) -> Option<ProbeHit> {
    reach_ray(origin, facing, reach, 0.0).cast(probe, mask)
}

/// The `Health` owner struck along `facing`, if the first hit has one.
pub fn resolve_hit(
    probe: &dyn Probe,
    origin: Vec2,
    facing: Facing,
    reach: f32,
    mask: LayerMask,
) -> Option<Entity> {
    strike_probe(probe, origin, facing, reach, mask).and_then(|hit| hit.health_owner)
}

pub fn wall_ahead(probe: &dyn Probe, origin: Vec2, facing: Facing, half_width: f32) -> bool {
    wall_ray(origin, facing, half_width)
        .cast(probe, terrain_mask())
        .is_some()
}

pub fn ground_ahead(
    probe: &dyn Probe,
    origin: Vec2,
    facing: Facing,
    half_width: f32,
    half_height: f32,
) -> bool {
    ground_ahead_ray(origin, facing, half_width, half_height)
        .cast(probe, terrain_mask())
        .is_some()
}

pub fn grounded(probe: &dyn Probe, origin: Vec2, length: f32) -> bool {
    ground_ray(origin, length)
        .cast(probe, LayerMask::from(GameLayer::Ground))
        .is_some()
}
