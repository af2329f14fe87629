//! Content domain: gameplay tuning loaded from `assets/data/tuning.ron`.
//!
//! Every field has a default, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::actor::Facing;

#[derive(Debug, Clone, Deserialize, Serialize, Reflect, Resource)]
#[serde(default)]
pub struct GameplayTuning {
    pub schema_version: u32,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub spikes: SpikeTuning,
    pub sound: SoundTuning,
    pub arena: ArenaDef,
}

impl Default for GameplayTuning {
    fn default() -> Self {
        Self {
            schema_version: 1,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            spikes: SpikeTuning::default(),
            sound: SoundTuning::default(),
            arena: ArenaDef::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PlayerTuning {
    pub max_health: f32,
    pub speed: f32,
    /// Upward impulse applied on jump
    pub jump_impulse: f32,
    pub mass: f32,
    pub damage: f32,
    pub attack_cooldown: f32,
    /// Reach past the body edge of a melee swing
    pub attack_distance: f32,
    /// Length of the downward grounded probe from the body center
    pub ground_probe_length: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            speed: 5.0,
            jump_impulse: 6.0,
            mass: 1.0,
            damage: 10.0,
            attack_cooldown: 0.5,
            attack_distance: 0.3,
            ground_probe_length: 0.7,
            half_width: 0.5,
            half_height: 0.5,
        }
    }
}

impl PlayerTuning {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct EnemyTuning {
    pub max_health: f32,
    pub speed: f32,
    pub start_facing: Facing,
    /// Pause before turning around at a wall or ledge
    pub wait_time: f32,
    pub damage: f32,
    /// Detection reach past the body edge
    pub attack_range: f32,
    pub attack_cooldown: f32,
    /// Reach past the body edge of a melee swing
    pub attack_distance: f32,
    pub mass: f32,
    pub half_width: f32,
    pub half_height: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_health: 30.0,
            speed: 3.0,
            start_facing: Facing::Right,
            wait_time: 2.0,
            damage: 10.0,
            attack_range: 0.1,
            attack_cooldown: 0.7,
            attack_distance: 0.3,
            mass: 1.0,
            half_width: 0.5,
            half_height: 0.5,
        }
    }
}

impl EnemyTuning {
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_width, self.half_height)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SpikeTuning {
    pub damage: f32,
}

impl Default for SpikeTuning {
    fn default() -> Self {
        Self { damage: 3.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct SoundTuning {
    pub volume: f32,
}

impl Default for SoundTuning {
    fn default() -> Self {
        Self { volume: 1.0 }
    }
}

/// Serializable point for RON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, Reflect)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

/// Axis-aligned block given by its center and size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct BlockDef {
    pub center: PointDef,
    pub width: f32,
    pub height: f32,
}

impl BlockDef {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Reflect)]
pub struct EnemySpawnDef {
    pub position: PointDef,
    #[serde(default)]
    pub facing: Option<Facing>,
}

/// Layout of the demo arena.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ArenaDef {
    pub spawn_point: PointDef,
    pub ground: Vec<BlockDef>,
    pub walls: Vec<BlockDef>,
    pub spikes: Vec<BlockDef>,
    pub enemies: Vec<EnemySpawnDef>,
}

impl Default for ArenaDef {
    fn default() -> Self {
        let block = |x: f32, y: f32, width: f32, height: f32| BlockDef {
            center: PointDef { x, y },
            width,
            height,
        };
        Self {
            spawn_point: PointDef { x: -7.0, y: 0.5 },
            ground: vec![
                block(-4.0, -1.0, 12.0, 1.0),
                block(8.0, -1.0, 8.0, 1.0),
                block(3.0, -2.0, 2.0, 1.0),
                block(6.0, 2.0, 3.0, 0.5),
            ],
            walls: vec![block(-10.5, 2.0, 1.0, 7.0), block(12.5, 2.0, 1.0, 7.0)],
            spikes: vec![block(3.0, -1.35, 1.6, 0.3)],
            enemies: vec![
                EnemySpawnDef {
                    position: PointDef { x: -2.0, y: 0.0 },
                    facing: None,
                },
                EnemySpawnDef {
                    position: PointDef { x: 9.0, y: 0.0 },
                    facing: Some(Facing::Left),
                },
            ],
        }
    }
}
