//! Player domain: the template new player actors are built from.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::controller::PlayerController;
use crate::actor::Toggle;
use crate::animation::{AnimationController, Animator};
use crate::content::PlayerTuning;
use crate::health::Health;
use crate::probe::GameLayer;

/// Marker for the player root entity
#[derive(Component, Debug, Default)]
pub struct Player;

/// Marker for the child entity carrying the player's sprite and animator
#[derive(Component, Debug, Default)]
pub struct PlayerVisual;

pub const PLAYER_COLOR: Color = Color::srgb(0.3, 0.55, 0.95);

/// Recipe for a fresh player actor.
///
/// Behaviors start dormant; whoever spawns from the template enables them.
#[derive(Debug, Clone)]
pub struct PlayerTemplate {
    pub tuning: PlayerTuning,
    /// Attach rigid body and collider components
    pub physics: bool,
}

impl PlayerTemplate {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            tuning,
            physics: true,
        }
    }

    /// A template for worlds without a physics step.
    pub fn headless(tuning: PlayerTuning) -> Self {
        Self {
            tuning,
            physics: false,
        }
    }

    pub fn spawn(&self, commands: &mut Commands, transform: Transform) -> Entity {
        let tuning = &self.tuning;
        let size = tuning.half_extents() * 2.0;

        let mut animator = Animator::player();
        animator.set_enabled(false);

        let mut player = commands.spawn((
            Player,
            Name::new("Player"),
            PlayerController::dormant(tuning.clone()),
            Health::new(tuning.max_health),
            transform,
            Visibility::default(),
        ));

        if self.physics {
            player.insert((
                RigidBody::Dynamic,
                Collider::rectangle(size.x, size.y),
                CollisionLayers::new(
                    GameLayer::Player,
                    [
                        GameLayer::Ground,
                        GameLayer::Wall,
                        GameLayer::Enemy,
                        GameLayer::Hazard,
                    ],
                ),
                CollisionEventsEnabled,
                LinearVelocity::default(),
                Mass(tuning.mass),
                LockedAxes::ROTATION_LOCKED,
            ));
        }

        player
            .with_children(|parent| {
                parent.spawn((
                    PlayerVisual,
                    animator,
                    AnimationController::new(PLAYER_COLOR),
                    Sprite {
                        color: PLAYER_COLOR,
                        custom_size: Some(size),
                        ..default()
                    },
                    Transform::default(),
                ));
            })
            .id()
    }
}
