//! Actor domain: explicit facing direction.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which way an actor looks and walks.
///
/// Tracked on its own rather than derived from velocity, since patrol probe
/// origins depend on it while the actor is standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, Reflect)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    pub fn direction(self) -> Dir2 {
        match self {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        }
    }

    /// Sprites are authored facing right.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }

    /// Facing implied by a horizontal input axis; `None` while the axis rests.
    pub fn from_axis(axis: f32) -> Option<Self> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}
