//! Probe domain: physics layers used for collision filtering and ray probes.

use avian2d::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Contact-damage sensors (spikes)
    Hazard,
}

/// True if `layer` is part of `mask`.
pub fn mask_includes(mask: LayerMask, layer: GameLayer) -> bool {
    (mask & LayerMask::from(layer)) != LayerMask::NONE
}

/// Surfaces a patrolling actor can stand on or bump into.
pub fn terrain_mask() -> LayerMask {
    LayerMask::from([GameLayer::Ground, GameLayer::Wall])
}
