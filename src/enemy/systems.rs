//! Enemy domain: fixed-step driving and health notice handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use super::controller::EnemyController;
use crate::actor::{
    ActorIo, AnimationSink, BodyHandle, PhysicsBody, SoundSink, SoundWriter, SpriteSink,
};
use crate::animation::Animator;
use crate::audio::PlaySoundEvent;
use crate::health::{DamageEvent, Health, HealthNotice, NoticeKind};
use crate::probe::ProbeWorld;

pub(crate) fn drive_enemies(
    time: Res<Time>,
    probes: ProbeWorld,
    mut damage_events: MessageWriter<DamageEvent>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut enemies: Query<(
        Entity,
        &Transform,
        &mut EnemyController,
        Option<&mut LinearVelocity>,
        Option<&Mass>,
        Option<&mut Animator>,
        Option<&mut Sprite>,
    )>,
) {
    let delta = time.delta();

    for (entity, transform, mut controller, velocity, mass, mut animator, mut sprite) in
        &mut enemies
    {
        let mut body = velocity.map(|v| BodyHandle::new(v.into_inner(), mass));
        let mut sound = SoundWriter::new(&mut sounds);
        let mut io = ActorIo {
            body: body.as_mut().map(|b| b as &mut dyn PhysicsBody),
            animation: animator.as_deref_mut().map(|a| a as &mut dyn AnimationSink),
            sprite: sprite.as_deref_mut().map(|s| s as &mut dyn SpriteSink),
            sound: Some(&mut sound as &mut dyn SoundSink),
        };

        let probe = probes.for_actor(entity);
        let origin = transform.translation.truncate();
        if let Some(strike) = controller.fixed_tick(delta, origin, &probe, &mut io) {
            debug!("Enemy {:?} struck {:?}", entity, strike.target);
            damage_events.write(DamageEvent {
                source: entity,
                target: strike.target,
                amount: strike.amount,
            });
        }
    }
}

pub(crate) fn handle_enemy_notices(
    mut commands: Commands,
    mut notices: MessageReader<HealthNotice>,
    mut enemies: Query<(&mut EnemyController, Option<&mut Animator>)>,
    mut healths: Query<&mut Health>,
) {
    for notice in notices.read() {
        let Ok((mut controller, mut animator)) = enemies.get_mut(notice.subscriber) else {
            continue;
        };

        match notice.kind {
            NoticeKind::Damaged(_) => {
                let mut io = ActorIo {
                    animation: animator.as_deref_mut().map(|a| a as &mut dyn AnimationSink),
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
                info!("Enemy {:?} destroyed", notice.subscriber);
                commands.entity(notice.subscriber).despawn();
            }
        }
    }
}
