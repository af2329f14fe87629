//! Core domain: game state and schedule ordering.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Tuning and sound manifests are loading
    #[default]
    Boot,
    Run,
}

/// Ordering of the per-frame combat pipeline in `PostUpdate`.
///
/// Controllers emit `DamageEvent`s during `FixedUpdate` / `Update`; everything
/// that follows from a hit is resolved in this order within the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Damage messages are applied to `Health`
    ApplyDamage,
    /// Subscribed controllers react to health notices
    Notices,
    /// Respawn requests destroy and instantiate actors
    Respawn,
    /// Freshly instantiated actors get their behaviors switched on
    Enable,
}
