//! Player domain: per-frame driving and health notice handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::controller::{PlayerController, PlayerFrame};
use super::input::PlayerInput;
use super::spawn::{Player, PlayerVisual};
use crate::actor::{
    ActorIo, AnimationSink, BodyHandle, PhysicsBody, SoundSink, SoundWriter, SpriteSink,
};
use crate::animation::Animator;
use crate::audio::PlaySoundEvent;
use crate::core::ViewBounds;
use crate::health::{DamageEvent, Health, HealthNotice, NoticeKind};
use crate::probe::ProbeWorld;
use crate::respawn::RespawnRequest;

/// The visual child of a player root, if it has one.
fn visual_of(
    children: Option<&Children>,
    visuals: &Query<(Option<&mut Animator>, Option<&mut Sprite>), With<PlayerVisual>>,
) -> Option<Entity> {
    let children: &[Entity] = children?;
    children.iter().copied().find(|child| visuals.contains(*child))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn drive_player(
    time: Res<Time>,
    input: Res<PlayerInput>,
    view: Option<Res<ViewBounds>>,
    probes: ProbeWorld,
    mut damage_events: MessageWriter<DamageEvent>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut players: Query<
        (
            Entity,
            &mut Transform,
            &mut PlayerController,
            Option<&mut LinearVelocity>,
            Option<&Mass>,
            Option<&Children>,
        ),
        With<Player>,
    >,
    mut visuals: Query<(Option<&mut Animator>, Option<&mut Sprite>), With<PlayerVisual>>,
) {
    for (entity, mut transform, mut controller, velocity, mass, children) in &mut players {
        let frame = PlayerFrame {
            input: *input,
            now: time.elapsed_secs_f64(),
            origin: transform.translation.truncate(),
            view: view.as_deref().copied(),
        };

        let visual = visual_of(children, &visuals);
        let (mut animator, mut sprite) = match visual.and_then(|v| visuals.get_mut(v).ok()) {
            Some((animator, sprite)) => (animator, sprite),
            None => (None, None),
        };

        let mut body = velocity.map(|v| BodyHandle::new(v.into_inner(), mass));
        let mut sound = SoundWriter::new(&mut sounds);
        let mut io = ActorIo {
            body: body.as_mut().map(|b| b as &mut dyn PhysicsBody),
            animation: animator.as_deref_mut().map(|a| a as &mut dyn AnimationSink),
            sprite: sprite.as_deref_mut().map(|s| s as &mut dyn SpriteSink),
            sound: Some(&mut sound as &mut dyn SoundSink),
        };

        let probe = probes.for_actor(entity);
        let result = controller.tick(&frame, &probe, &mut io);

        if let Some(x) = result.clamped_x {
            transform.translation.x = x;
        }
        if let Some(strike) = result.strike {
            debug!("Player struck {:?}", strike.target);
            damage_events.write(DamageEvent {
                source: entity,
                target: strike.target,
                amount: strike.amount,
            });
        }
    }
}

pub(crate) fn handle_player_notices(
    mut notices: MessageReader<HealthNotice>,
    mut respawns: MessageWriter<RespawnRequest>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut players: Query<(&mut PlayerController, Option<&Children>), With<Player>>,
    mut visuals: Query<(Option<&mut Animator>, Option<&mut Sprite>), With<PlayerVisual>>,
    mut healths: Query<&mut Health>,
) {
    for notice in notices.read() {
        let Ok((mut controller, children)) = players.get_mut(notice.subscriber) else {
            continue;
        };

        match notice.kind {
            NoticeKind::Damaged(_) => {
                let visual = visual_of(children, &visuals);
                let mut animator = visual
                    .and_then(|v| visuals.get_mut(v).ok())
                    .and_then(|(animator, _)| animator);
                let mut sound = SoundWriter::new(&mut sounds);
                let mut io = ActorIo {
                    animation: animator.as_deref_mut().map(|a| a as &mut dyn AnimationSink),
                    sound: Some(&mut sound as &mut dyn SoundSink),
                    ..default()
                };
                controller.react_to_damage(&mut io);
            }
            NoticeKind::Died => {
                if !controller.die() {
                    continue;
                }
                if let Ok(mut health) = healths.get_mut(notice.health) {
                    health.unsubscribe(notice.subscriber);
                }
                info!("Player {:?} died, requesting respawn", notice.subscriber);
                respawns.write(RespawnRequest {
                    instigator: Some(notice.subscriber),
                });
            }
        }
    }
}
