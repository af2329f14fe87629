//! Validation for tuning values that would break the simulation.

use super::data::*;

/// A tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Smallest size or duration accepted where zero would be meaningless.
const MIN_POSITIVE: f32 = 0.01;

/// Helper macro for checking a value and clamping it back into range
macro_rules! check_range {
    ($errors:expr, $field:expr, $name:expr, $min:expr, $max:expr, $expected:expr) => {
        let value = $field;
        if value.is_nan() || value < $min || value > $max {
            $errors.push(ValidationError {
                field: $name,
                value,
                expected: $expected,
            });
            $field = if value.is_nan() { $min } else { value.clamp($min, $max) };
        }
    };
}

/// Validate `tuning`, clamping bad values in place.
/// Returns what was wrong, empty if everything was in range.
pub fn sanitize_tuning(tuning: &mut GameplayTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let positive = "positive";
    let non_negative = "zero or more";

    let player = &mut tuning.player;
    check_range!(errors, player.max_health, "player.max_health", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, player.speed, "player.speed", 0.0, f32::MAX, non_negative);
    check_range!(errors, player.jump_impulse, "player.jump_impulse", 0.0, f32::MAX, non_negative);
    check_range!(errors, player.mass, "player.mass", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, player.damage, "player.damage", 0.0, f32::MAX, non_negative);
    check_range!(errors, player.attack_cooldown, "player.attack_cooldown", 0.0, f32::MAX, non_negative);
    check_range!(errors, player.attack_distance, "player.attack_distance", 0.0, f32::MAX, non_negative);
    check_range!(errors, player.ground_probe_length, "player.ground_probe_length", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, player.half_width, "player.half_width", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, player.half_height, "player.half_height", MIN_POSITIVE, f32::MAX, positive);

    let enemy = &mut tuning.enemy;
    check_range!(errors, enemy.max_health, "enemy.max_health", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, enemy.speed, "enemy.speed", 0.0, f32::MAX, non_negative);
    check_range!(errors, enemy.wait_time, "enemy.wait_time", 0.0, f32::MAX, non_negative);
    check_range!(errors, enemy.damage, "enemy.damage", 0.0, f32::MAX, non_negative);
    check_range!(errors, enemy.attack_range, "enemy.attack_range", 0.0, f32::MAX, non_negative);
    check_range!(errors, enemy.attack_cooldown, "enemy.attack_cooldown", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, enemy.attack_distance, "enemy.attack_distance", 0.0, f32::MAX, non_negative);
    check_range!(errors, enemy.mass, "enemy.mass", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, enemy.half_width, "enemy.half_width", MIN_POSITIVE, f32::MAX, positive);
    check_range!(errors, enemy.half_height, "enemy.half_height", MIN_POSITIVE, f32::MAX, positive);

    check_range!(errors, tuning.spikes.damage, "spikes.damage", 0.0, f32::MAX, non_negative);
    check_range!(errors, tuning.sound.volume, "sound.volume", 0.0, 1.0, "between 0 and 1");

    errors
}
