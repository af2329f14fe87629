//! Enemy domain: enemy spawning bundle.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::controller::EnemyController;
use crate::animation::{AnimationController, Animator};
use crate::content::EnemyTuning;
use crate::actor::Facing;
use crate::health::Health;
use crate::probe::GameLayer;

/// Marker for enemy actors
#[derive(Component, Debug, Default)]
pub struct Enemy;

pub const ENEMY_COLOR: Color = Color::srgb(0.8, 0.25, 0.25);

/// Bundle for spawning a patrolling enemy
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub controller: EnemyController,
    pub health: Health,
    pub animator: Animator,
    pub animation: AnimationController,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub mass: Mass,
    pub locked_axes: LockedAxes,
}

impl EnemyBundle {
    pub fn new(tuning: &EnemyTuning, position: Vec2, facing: Option<Facing>) -> Self {
        let facing = facing.unwrap_or(tuning.start_facing);
        let size = tuning.half_extents() * 2.0;

        Self {
            enemy: Enemy,
            controller: EnemyController::new(tuning.clone(), facing),
            health: Health::new(tuning.max_health),
            animator: Animator::enemy(),
            animation: AnimationController::new(ENEMY_COLOR),
            sprite: Sprite {
                color: ENEMY_COLOR,
                custom_size: Some(size),
                flip_x: facing.flip_x(),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Player],
            ),
            velocity: LinearVelocity::default(),
            mass: Mass(tuning.mass),
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}
