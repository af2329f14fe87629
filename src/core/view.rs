//! Core domain: camera setup and the visible world rectangle.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Screen pixels per world unit at the default zoom.
pub const PIXELS_PER_UNIT: f32 = 48.0;

/// Horizontal extent of the visible world, refreshed every frame from the
/// primary window and the 2D camera.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub min_x: f32,
    pub max_x: f32,
}

impl ViewBounds {
    /// Bounds for a window `width` pixels wide seen through a camera centered
    /// at `center_x` whose transform scale is `scale` world units per pixel.
    pub fn from_window(width: f32, center_x: f32, scale: f32) -> Self {
        let half = width * 0.5 * scale;
        Self {
            min_x: center_x - half,
            max_x: center_x + half,
        }
    }

    /// Clamp an actor's center so its whole width stays on screen.
    ///
    /// An actor wider than the view is pinned to the view center.
    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        let lo = self.min_x + half_width;
        let hi = self.max_x - half_width;
        if lo > hi {
            return (self.min_x + self.max_x) * 0.5;
        }
        x.clamp(lo, hi)
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 2.0, 0.0).with_scale(Vec3::splat(1.0 / PIXELS_PER_UNIT)),
    ));
}

pub(crate) fn update_view_bounds(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<&Transform, With<Camera2d>>,
) {
    let Some(window) = windows.iter().next() else {
        return;
    };
    let Some(camera) = cameras.iter().next() else {
        return;
    };

    commands.insert_resource(ViewBounds::from_window(
        window.width(),
        camera.translation.x,
        camera.scale.x,
    ));
}
