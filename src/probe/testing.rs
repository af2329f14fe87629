//! Axis-aligned box world for probe and controller tests.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::combat::{Probe, ProbeHit};
use super::layers::{GameLayer, mask_includes};

#[derive(Debug, Clone)]
pub(crate) struct FakeBox {
    pub entity: Entity,
    pub min: Vec2,
    pub max: Vec2,
    pub layer: GameLayer,
    pub health_owner: Option<Entity>,
}

#[derive(Debug, Default)]
pub(crate) struct FakeProbe {
    pub boxes: Vec<FakeBox>,
}

impl FakeProbe {
    pub fn with_box(
        mut self,
        entity: Entity,
        center: Vec2,
        half_extents: Vec2,
        layer: GameLayer,
    ) -> Self {
        self.boxes.push(FakeBox {
            entity,
            min: center - half_extents,
            max: center + half_extents,
            layer,
            health_owner: None,
        });
        self
    }

    /// Like `with_box`, but the box belongs to an actor with `Health`.
    pub fn with_actor(
        mut self,
        entity: Entity,
        center: Vec2,
        half_extents: Vec2,
        layer: GameLayer,
    ) -> Self {
        self = self.with_box(entity, center, half_extents, layer);
        if let Some(last) = self.boxes.last_mut() {
            last.health_owner = Some(entity);
        }
        self
    }

    /// Long flat floor whose top surface is at `top`.
    pub fn with_floor(self, entity: Entity, top: f32) -> Self {
        self.with_box(
            entity,
            Vec2::new(0.0, top - 0.5),
            Vec2::new(100.0, 0.5),
            GameLayer::Ground,
        )
    }

    pub fn remove(&mut self, entity: Entity) {
        self.boxes.retain(|b| b.entity != entity);
    }

    pub fn move_box(&mut self, entity: Entity, center: Vec2) {
        for b in self.boxes.iter_mut().filter(|b| b.entity == entity) {
            let half = (b.max - b.min) * 0.5;
            b.min = center - half;
            b.max = center + half;
        }
    }
}

/// Distance along the ray to the box, zero when starting inside.
fn ray_box(origin: Vec2, direction: Vec2, min: Vec2, max: Vec2) -> Option<f32> {
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;

    for axis in 0..2 {
        let o = origin[axis];
        let d = direction[axis];
        if d.abs() < f32::EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - o) / d;
        let t2 = (max[axis] - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

impl Probe for FakeProbe {
    fn cast(
        &self,
        origin: Vec2,
        direction: Dir2,
        max_distance: f32,
        mask: LayerMask,
    ) -> Option<ProbeHit> {
        self.boxes
            .iter()
            .filter(|b| mask_includes(mask, b.layer))
            .filter_map(|b| {
                let distance = ray_box(origin, direction.as_vec2(), b.min, b.max)?;
                (distance <= max_distance).then_some(ProbeHit {
                    collider: b.entity,
                    distance,
                    health_owner: b.health_owner,
                })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}
