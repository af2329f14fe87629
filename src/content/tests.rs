//! Content domain: tests for tuning parsing and validation.

use super::{GameplayTuning, parse_tuning, sanitize_tuning};
use crate::actor::Facing;

#[test]
fn test_defaults_match_reference_values() {
    let tuning = GameplayTuning::default();
    assert_eq!(tuning.enemy.speed, 3.0);
    assert_eq!(tuning.enemy.wait_time, 2.0);
    assert_eq!(tuning.enemy.attack_range, 0.1);
    assert_eq!(tuning.enemy.attack_cooldown, 0.7);
    assert_eq!(tuning.player.speed, 5.0);
    assert_eq!(tuning.player.jump_impulse, 6.0);
    assert_eq!(tuning.player.attack_cooldown, 0.5);
    assert_eq!(tuning.player.ground_probe_length, 0.7);
    assert_eq!(tuning.spikes.damage, 3.0);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let tuning = parse_tuning(
        "inline",
        r#"(
            enemy: (speed: 4.5, start_facing: Left),
            sound: (volume: 0.25),
        )"#,
    )
    .expect("tuning should parse");

    assert_eq!(tuning.enemy.speed, 4.5);
    assert_eq!(tuning.enemy.start_facing, Facing::Left);
    assert_eq!(tuning.enemy.wait_time, 2.0);
    assert_eq!(tuning.sound.volume, 0.25);
    assert_eq!(tuning.player, GameplayTuning::default().player);
}

#[test]
fn test_implicit_some_for_optional_fields() {
    let tuning = parse_tuning(
        "inline",
        r#"(
            arena: (
                enemies: [
                    (position: (x: 1.0, y: 0.0), facing: Left),
                    (position: (x: 4.0, y: 0.0)),
                ],
            ),
        )"#,
    )
    .expect("tuning should parse");

    assert_eq!(tuning.arena.enemies.len(), 2);
    assert_eq!(tuning.arena.enemies[0].facing, Some(Facing::Left));
    assert_eq!(tuning.arena.enemies[1].facing, None);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_tuning("tuning.ron", "(enemy: (speed: fast))").expect_err("should fail");
    assert_eq!(err.file, "tuning.ron");
    assert!(err.to_string().starts_with("Failed to load tuning.ron"));
}

#[test]
fn test_sanitize_clamps_bad_values() {
    let mut tuning = GameplayTuning::default();
    tuning.enemy.speed = -2.0;
    tuning.player.mass = 0.0;
    tuning.sound.volume = 4.0;
    tuning.enemy.wait_time = f32::NAN;

    let errors = sanitize_tuning(&mut tuning);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["player.mass", "enemy.speed", "enemy.wait_time", "sound.volume"]
    );
    assert_eq!(tuning.enemy.speed, 0.0);
    assert!(tuning.player.mass > 0.0);
    assert_eq!(tuning.sound.volume, 1.0);
    assert_eq!(tuning.enemy.wait_time, 0.0);
}

#[test]
fn test_default_tuning_is_valid() {
    let mut tuning = GameplayTuning::default();
    assert!(sanitize_tuning(&mut tuning).is_empty());
}
