//! Platform skirmish: player and enemy actors that patrol, probe, fight,
//! die and respawn on a small arena.

pub mod actor;
pub mod animation;
pub mod arena;
pub mod audio;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod enemy;
pub mod hazards;
pub mod health;
pub mod player;
pub mod probe;
pub mod respawn;

use bevy::prelude::*;

/// Every gameplay plugin. Physics and the default Bevy plugins are added by
/// the application.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            core::CorePlugin,
            audio::SoundPlugin,
            content::ContentPlugin,
            health::HealthPlugin,
            animation::ActorAnimationPlugin,
            enemy::EnemyPlugin,
            player::PlayerPlugin,
            respawn::RespawnPlugin,
            hazards::HazardsPlugin,
            arena::ArenaPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
