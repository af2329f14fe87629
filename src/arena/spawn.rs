//! Arena domain: static terrain, hazards, enemies and the player spawn point.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{BlockDef, GameplayTuning};
use crate::enemy::EnemyBundle;
use crate::hazards::spawn_spikes;
use crate::player::PlayerTemplate;
use crate::probe::GameLayer;
use crate::respawn::{RespawnController, RespawnRequest, SpawnPoint};

pub const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
pub const WALL_COLOR: Color = Color::srgb(0.25, 0.25, 0.35);

/// Marker for every static terrain block of the arena
#[derive(Component, Debug, Default)]
pub struct ArenaBlock;

/// Collision layers for a terrain block on `layer`; actors collide with it.
pub fn terrain_layers(layer: GameLayer) -> CollisionLayers {
    CollisionLayers::new(layer, [GameLayer::Player, GameLayer::Enemy])
}

pub fn block_transform(block: &BlockDef) -> Transform {
    Transform::from_xyz(block.center.x, block.center.y, 0.0)
}

fn spawn_block(
    commands: &mut Commands,
    name: &'static str,
    block: &BlockDef,
    layer: GameLayer,
    color: Color,
) {
    let size = block.size();
    commands.spawn((
        ArenaBlock,
        Name::new(name),
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        block_transform(block),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        terrain_layers(layer),
    ));
}

/// Builds the level, configures respawning and requests the first player.
pub(crate) fn spawn_arena(
    mut commands: Commands,
    tuning: Res<GameplayTuning>,
    mut respawn_requests: MessageWriter<RespawnRequest>,
) {
    let arena = &tuning.arena;

    for block in &arena.ground {
        spawn_block(
            &mut commands,
            "Ground",
            block,
            GameLayer::Ground,
            GROUND_COLOR,
        );
    }
    for block in &arena.walls {
        spawn_block(&mut commands, "Wall", block, GameLayer::Wall, WALL_COLOR);
    }
    for block in &arena.spikes {
        spawn_spikes(&mut commands, block, tuning.spikes.damage);
    }
    for spawn in &arena.enemies {
        commands.spawn((
            Name::new("Enemy"),
            EnemyBundle::new(&tuning.enemy, spawn.position.into(), spawn.facing),
        ));
    }

    let spawn_point = commands
        .spawn((
            SpawnPoint,
            Name::new("SpawnPoint"),
            Transform::from_xyz(arena.spawn_point.x, arena.spawn_point.y, 0.0),
        ))
        .id();

    commands.insert_resource(RespawnController::new(
        PlayerTemplate::new(tuning.player.clone()),
        spawn_point,
    ));
    respawn_requests.write(RespawnRequest { instigator: None });

    info!(
        "Arena ready: {} ground, {} walls, {} spikes, {} enemies",
        arena.ground.len(),
        arena.walls.len(),
        arena.spikes.len(),
        arena.enemies.len()
    );
}
