//! Arena domain: tests for terrain layout helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::{block_transform, terrain_layers};
use crate::content::{ArenaDef, BlockDef, PointDef};
use crate::probe::{GameLayer, terrain_mask};

#[test]
fn test_terrain_layers_collide_with_actors_only() {
    let layers = terrain_layers(GameLayer::Wall);

    assert_eq!(layers.memberships, LayerMask::from(GameLayer::Wall));
    assert_eq!(
        layers.filters,
        LayerMask::from([GameLayer::Player, GameLayer::Enemy])
    );
}

#[test]
fn test_block_transform_uses_center() {
    let block = BlockDef {
        center: PointDef { x: 3.0, y: -1.35 },
        width: 1.6,
        height: 0.3,
    };

    assert_eq!(
        block_transform(&block).translation,
        Vec3::new(3.0, -1.35, 0.0)
    );
}

#[test]
fn test_terrain_blocks_are_seen_by_probes() {
    let mask = terrain_mask();

    for layer in [GameLayer::Ground, GameLayer::Wall] {
        assert_ne!(terrain_layers(layer).memberships & mask, LayerMask::NONE);
    }
}

#[test]
fn test_default_spawn_point_stands_over_ground() {
    let arena = ArenaDef::default();
    let spawn = arena.spawn_point;

    let supported = arena.ground.iter().any(|block| {
        let half = block.width * 0.5;
        let top = block.center.y + block.height * 0.5;
        (block.center.x - half..=block.center.x + half).contains(&spawn.x) && top <= spawn.y
    });
    assert!(supported);
}
