//! Debug domain: overlay toggles and probe geometry for drawing.

use bevy::prelude::*;

use crate::actor::Facing;
use crate::enemy::EnemyController;
use crate::player::PlayerController;
use crate::probe::ProbeRay;
use crate::probe::combat::{ground_ahead_ray, ground_ray, reach_ray, wall_ray};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether probe rays are drawn
    pub show_probes: bool,
}

impl DebugState {
    pub fn toggle_probes(&mut self) -> bool {
        self.show_probes = !self.show_probes;
        self.show_probes
    }
}

/// A ray to draw and the color to draw it in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSketch {
    pub ray: ProbeRay,
    pub color: Color,
}

pub const DETECT_COLOR: Color = Color::srgb(1.0, 0.85, 0.2);
pub const STRIKE_COLOR: Color = Color::srgb(1.0, 0.3, 0.3);
pub const TERRAIN_COLOR: Color = Color::srgb(0.3, 0.9, 0.5);

fn strike_sketch(origin: Vec2, facing: Facing, reach: f32) -> ProbeSketch {
    ProbeSketch {
        ray: reach_ray(origin, facing, reach, 0.0),
        color: STRIKE_COLOR,
    }
}

/// The rays an enemy casts on a patrol step.
pub fn enemy_sketches(controller: &EnemyController, origin: Vec2) -> Vec<ProbeSketch> {
    let half = controller.half_extents();
    let facing = controller.facing();
    vec![
        ProbeSketch {
            ray: reach_ray(origin, facing, controller.detection_reach(), 0.0),
            color: DETECT_COLOR,
        },
        strike_sketch(origin, facing, controller.strike_reach()),
        ProbeSketch {
            ray: wall_ray(origin, facing, half.x),
            color: TERRAIN_COLOR,
        },
        ProbeSketch {
            ray: ground_ahead_ray(origin, facing, half.x, half.y),
            color: TERRAIN_COLOR,
        },
    ]
}

/// The rays a player casts for grounding and melee.
pub fn player_sketches(controller: &PlayerController, origin: Vec2) -> Vec<ProbeSketch> {
    vec![
        ProbeSketch {
            ray: ground_ray(origin, controller.tuning().ground_probe_length),
            color: TERRAIN_COLOR,
        },
        strike_sketch(origin, controller.facing(), controller.strike_reach()),
    ]
}
