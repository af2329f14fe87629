//! Hazards domain: tests for contact damage.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter, Messages};
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{ContactDamage, apply_contact_damage};
use crate::actor::Toggle;
use crate::actor::testing::test_entities;
use crate::audio::{PlaySoundEvent, SoundCue};
use crate::health::{DamageEvent, Health};
use crate::player::Player;

#[test]
fn test_contact_damages_health_owner() {
    let player = test_entities(1)[0];
    let spikes = ContactDamage::new(3.0);

    let strike = spikes.strike(Some(player)).expect("player has health");
    assert_eq!(strike.target, player);
    assert_eq!(strike.amount, 3.0);
}

#[test]
fn test_contact_without_health_does_nothing() {
    assert!(ContactDamage::new(3.0).strike(None).is_none());
}

#[test]
fn test_disabled_spikes_are_harmless() {
    let player = test_entities(1)[0];
    let mut spikes = ContactDamage::new(3.0);
    spikes.set_enabled(false);
    assert!(spikes.strike(Some(player)).is_none());

    spikes.set_enabled(true);
    assert!(spikes.strike(Some(player)).is_some());
}

fn contact_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    world.init_resource::<Messages<DamageEvent>>();
    world.init_resource::<Messages<PlaySoundEvent>>();
    world
}

fn touch(world: &mut World, pairs: Vec<(Entity, Entity)>) {
    world
        .run_system_once(move |mut writer: MessageWriter<CollisionStart>| {
            for &(collider1, collider2) in &pairs {
                writer.write(CollisionStart {
                    collider1,
                    collider2,
                    body1: Some(collider1),
                    body2: Some(collider2),
                });
            }
        })
        .expect("writer runs");
    world
        .run_system_once(apply_contact_damage)
        .expect("contact damage runs");
}

fn damage(world: &mut World) -> Vec<(Entity, Entity, f32)> {
    world
        .run_system_once(|mut reader: MessageReader<DamageEvent>| {
            reader
                .read()
                .map(|e| (e.source, e.target, e.amount))
                .collect::<Vec<_>>()
        })
        .expect("reader runs")
}

fn sounds(world: &mut World) -> Vec<SoundCue> {
    world
        .run_system_once(|mut reader: MessageReader<PlaySoundEvent>| {
            reader.read().map(|s| s.cue).collect::<Vec<_>>()
        })
        .expect("reader runs")
}

#[test]
fn test_spikes_hurt_player_in_either_collider_order() {
    let mut world = contact_world();
    let spikes = world.spawn(ContactDamage::new(3.0)).id();
    let player = world.spawn((Player, Health::new(100.0))).id();

    touch(&mut world, vec![(spikes, player), (player, spikes)]);

    assert_eq!(
        damage(&mut world),
        vec![(spikes, player, 3.0), (spikes, player, 3.0)]
    );
    assert_eq!(
        sounds(&mut world),
        vec![SoundCue::EnemyHit, SoundCue::EnemyHit]
    );
}

#[test]
fn test_spikes_ignore_enemies() {
    let mut world = contact_world();
    let spikes = world.spawn(ContactDamage::new(3.0)).id();
    let enemy = world.spawn(Health::new(30.0)).id();

    touch(&mut world, vec![(spikes, enemy), (enemy, spikes)]);

    assert!(damage(&mut world).is_empty());
    assert!(sounds(&mut world).is_empty());
}
