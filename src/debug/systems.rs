//! Debug domain: hotkeys and gizmo drawing.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::state::{DebugState, ProbeSketch, enemy_sketches, player_sketches};
use crate::enemy::EnemyController;
use crate::health::{DamageEvent, Health};
use crate::player::{Player, PlayerController};

/// Toggle the probe overlay with F3
pub(crate) fn toggle_probe_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        let shown = debug_state.toggle_probes();
        info!("[DEBUG] Probe overlay {}", if shown { "ON" } else { "OFF" });
    }
}

/// Ctrl+K kills the player, Ctrl+H heals it to full
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut players: Query<(Entity, &mut Health), With<Player>>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    for (entity, mut health) in &mut players {
        if keyboard.just_pressed(KeyCode::KeyK) {
            info!("[DEBUG] Killing player {:?}", entity);
            damage_events.write(DamageEvent {
                source: entity,
                target: entity,
                amount: health.max(),
            });
        }
        if keyboard.just_pressed(KeyCode::KeyH) {
            let max = health.max();
            let restored = health.heal(max);
            info!("[DEBUG] Healed player by {:.0}", restored);
        }
    }
}

fn draw(gizmos: &mut Gizmos, sketches: &[ProbeSketch]) {
    for sketch in sketches {
        gizmos.line_2d(sketch.ray.origin, sketch.ray.end(), sketch.color);
    }
}

pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    enemies: Query<(&EnemyController, &Transform)>,
    players: Query<(&PlayerController, &Transform)>,
) {
    for (controller, transform) in &enemies {
        if controller.is_dead() {
            continue;
        }
        draw(
            &mut gizmos,
            &enemy_sketches(controller, transform.translation.truncate()),
        );
    }
    for (controller, transform) in &players {
        draw(
            &mut gizmos,
            &player_sketches(controller, transform.translation.truncate()),
        );
    }
}
