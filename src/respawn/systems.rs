//! Respawn domain: replacing the player and enabling its behaviors.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::events::{EnableBehaviorsRequest, RespawnRequest};
use super::resources::{RespawnController, RespawnPlan, SpawnPoint};
use crate::actor::Toggle;
use crate::animation::Animator;
use crate::enemy::EnemyController;
use crate::hazards::ContactDamage;
use crate::player::PlayerController;

pub(crate) fn process_respawns(
    mut commands: Commands,
    mut requests: MessageReader<RespawnRequest>,
    mut enable_requests: MessageWriter<EnableBehaviorsRequest>,
    respawn: Option<Res<RespawnController>>,
    spawn_points: Query<&Transform, With<SpawnPoint>>,
    existing: Query<Entity>,
) {
    let mut destroyed = Vec::new();

    for request in requests.read() {
        if let Some(old) = request.instigator {
            // Already-despawned instigators are skipped
            if existing.contains(old) && !destroyed.contains(&old) {
                commands.entity(old).despawn();
                destroyed.push(old);
            }
        }

        let Some(respawn) = respawn.as_deref() else {
            warn!("Respawn requested but no RespawnController is configured");
            continue;
        };

        let spawn_transform = respawn
            .spawn_point
            .and_then(|point| spawn_points.get(point).ok());

        match respawn.plan(spawn_transform) {
            RespawnPlan::Spawn(transform) => {
                let Some(template) = respawn.template.as_ref() else {
                    continue;
                };
                let player = template.spawn(&mut commands, transform);
                enable_requests.write(EnableBehaviorsRequest { root: player });
                info!("Spawned player {:?} at {:?}", player, transform.translation);
            }
            RespawnPlan::Unconfigured => {
                warn!("Respawn skipped: player template or spawn point missing");
            }
        }
    }
}

fn enable<T: Toggle>(behavior: Option<Mut<T>>) -> usize {
    behavior.map_or(0, |mut behavior| {
        behavior.set_enabled(true);
        1
    })
}

pub(crate) fn enable_behaviors(
    mut requests: MessageReader<EnableBehaviorsRequest>,
    children: Query<&Children>,
    mut behaviors: Query<(
        Option<&mut PlayerController>,
        Option<&mut EnemyController>,
        Option<&mut Animator>,
        Option<&mut ContactDamage>,
    )>,
) {
    for request in requests.read() {
        let mut enabled = 0;
        let targets = std::iter::once(request.root).chain(children.iter_descendants(request.root));
        for entity in targets {
            let Ok((player, enemy, animator, hazard)) = behaviors.get_mut(entity) else {
                continue;
            };
            enabled += enable(player) + enable(enemy) + enable(animator) + enable(hazard);
        }
        debug!("Enabled {} behaviors under {:?}", enabled, request.root);
    }
}
