//! Probe domain: `Probe` over avian2d spatial queries.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::combat::{Probe, ProbeHit};
use crate::health::Health;

/// Walks from a struck collider up to the actor that owns its `Health`.
#[derive(SystemParam)]
pub struct HealthOwners<'w, 's> {
    parents: Query<'w, 's, &'static ChildOf>,
    healths: Query<'w, 's, (), With<Health>>,
}

impl HealthOwners<'_, '_> {
    pub fn resolve(&self, collider: Entity) -> Option<Entity> {
        let mut current = collider;
        loop {
            if self.healths.contains(current) {
                return Some(current);
            }
            current = self.parents.get(current).ok()?.parent();
        }
    }
}

/// Everything needed to probe the physics world from a system.
#[derive(SystemParam)]
pub struct ProbeWorld<'w, 's> {
    spatial: SpatialQuery<'w, 's>,
    owners: HealthOwners<'w, 's>,
}

impl<'w, 's> ProbeWorld<'w, 's> {
    /// A probe that never reports the casting actor itself.
    pub fn for_actor(&self, actor: Entity) -> ActorProbe<'_, 'w, 's> {
        ActorProbe {
            spatial: &self.spatial,
            owners: &self.owners,
            actor,
        }
    }
}

pub struct ActorProbe<'a, 'w, 's> {
    spatial: &'a SpatialQuery<'w, 's>,
    owners: &'a HealthOwners<'w, 's>,
    actor: Entity,
}

impl Probe for ActorProbe<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit> {
        let filter = SpatialQueryFilter::from_mask(mask).with_excluded_entities([self.actor]);
        let hit = self
            .spatial
            .cast_ray(origin, direction, max_distance, true, &filter)?;

        Some(ProbeHit {
            collider: hit.entity,
            distance: hit.distance,
            health_owner: self.owners.resolve(hit.entity),
        })
    }
}
