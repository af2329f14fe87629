//! Health domain: tests for clamping, death and observer notices.

use bevy::ecs::message::{MessageReader, MessageWriter, Messages};
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::apply_damage;
use super::{DamageEvent, DamageOutcome, Health, HealthNotice, NoticeKind};
use crate::actor::testing::test_entities;

#[test]
fn test_damage_sequence_reaches_zero_and_dies_once() {
    let mut health = Health::new(100.0);

    let first = health.take_damage(30.0);
    assert_eq!(health.current(), 70.0);
    assert_eq!(first, Some(DamageOutcome { amount: 30.0, died: false }));

    let second = health.take_damage(40.0);
    assert_eq!(health.current(), 30.0);
    assert!(!second.is_some_and(|o| o.died));
    assert!(!health.is_dead());

    let third = health.take_damage(50.0);
    assert_eq!(health.current(), 0.0);
    assert_eq!(third, Some(DamageOutcome { amount: 50.0, died: true }));
    assert!(health.is_dead());
}

#[test]
fn test_damage_after_death_is_ignored() {
    let mut health = Health::new(10.0);
    assert!(health.take_damage(10.0).is_some_and(|o| o.died));

    assert_eq!(health.take_damage(5.0), None);
    assert_eq!(health.take_damage(0.0), None);
    assert_eq!(health.heal(50.0), 0.0);
    assert_eq!(health.current(), 0.0);
    assert!(health.is_dead());
}

#[test]
fn test_health_stays_in_range_and_never_rises_without_heal() {
    let mut health = Health::new(50.0);
    let mut previous = health.current();
    for amount in [0.5, 7.0, 0.0, -3.0, 12.25, 100.0, 1.0] {
        health.take_damage(amount);
        assert!(health.current() <= previous);
        assert!((0.0..=health.max()).contains(&health.current()));
        previous = health.current();
    }
}

#[test]
fn test_non_positive_damage_reports_nothing() {
    let mut health = Health::new(20.0);
    assert_eq!(health.take_damage(0.0), None);
    assert_eq!(health.take_damage(-4.0), None);
    assert_eq!(health.take_damage(f32::NAN), None);
    assert_eq!(health.current(), 20.0);
}

#[test]
fn test_heal_is_clamped_to_max() {
    let mut health = Health::new(100.0);
    health.take_damage(30.0);

    assert_eq!(health.heal(10.0), 10.0);
    assert_eq!(health.current(), 80.0);

    assert_eq!(health.heal(50.0), 20.0);
    assert_eq!(health.current(), 100.0);
    assert_eq!(health.fraction(), 1.0);
}

#[test]
fn test_notices_go_to_each_subscriber() {
    let ids = test_entities(3);
    let (owner, a, b) = (ids[0], ids[1], ids[2]);
    let mut health = Health::new(10.0);
    health.subscribe(a);
    health.subscribe(b);
    health.subscribe(a);
    assert_eq!(health.subscribers(), &[a, b]);

    let outcome = health.take_damage(10.0).expect("damage applies");
    let notices = health.notices(owner, outcome);
    assert_eq!(notices.len(), 4);
    assert_eq!(
        notices[0],
        HealthNotice {
            subscriber: a,
            health: owner,
            kind: NoticeKind::Damaged(10.0)
        }
    );
    assert_eq!(
        notices
            .iter()
            .filter(|n| n.kind == NoticeKind::Died)
            .map(|n| n.subscriber)
            .collect::<Vec<_>>(),
        vec![a, b]
    );
}

#[test]
fn test_unsubscribed_observer_receives_nothing() {
    let ids = test_entities(2);
    let (owner, observer) = (ids[0], ids[1]);
    let mut health = Health::new(10.0);
    health.subscribe(observer);
    health.unsubscribe(observer);

    let outcome = health.take_damage(3.0).expect("damage applies");
    assert!(health.notices(owner, outcome).is_empty());
}

fn damage_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<DamageEvent>>();
    world.init_resource::<Messages<HealthNotice>>();
    world
}

fn send_damage(world: &mut World, event: DamageEvent) {
    world
        .run_system_once(move |mut writer: MessageWriter<DamageEvent>| {
            writer.write(event);
        })
        .expect("writer runs");
}

fn read_notices(world: &mut World) -> Vec<HealthNotice> {
    world
        .run_system_once(|mut reader: MessageReader<HealthNotice>| {
            reader.read().copied().collect::<Vec<_>>()
        })
        .expect("reader runs")
}

#[test]
fn test_apply_damage_system_notifies_and_ignores_dead_targets() {
    let mut world = damage_world();
    let source = world.spawn_empty().id();
    let target = world.spawn(Health::new(10.0)).id();
    world
        .get_mut::<Health>(target)
        .expect("health exists")
        .subscribe(target);

    for _ in 0..2 {
        send_damage(
            &mut world,
            DamageEvent {
                source,
                target,
                amount: 10.0,
            },
        );
    }
    world.run_system_once(apply_damage).expect("system runs");

    let kinds: Vec<_> = read_notices(&mut world).into_iter().map(|n| n.kind).collect();
    assert_eq!(kinds, vec![NoticeKind::Damaged(10.0), NoticeKind::Died]);
    assert!(world.get::<Health>(target).expect("health exists").is_dead());
}

#[test]
fn test_apply_damage_skips_targets_without_health() {
    let mut world = damage_world();
    let source = world.spawn_empty().id();
    let target = world.spawn_empty().id();

    send_damage(
        &mut world,
        DamageEvent {
            source,
            target,
            amount: 5.0,
        },
    );
    world.run_system_once(apply_damage).expect("system runs");

    assert!(read_notices(&mut world).is_empty());
}
