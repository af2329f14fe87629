//! Core domain: tests for cooperative timers and view clamping.

use std::time::Duration;

use super::{CoopTimer, Liveness, Resume, ViewBounds};

fn half_second() -> Duration {
    Duration::from_secs_f32(0.5)
}

// -----------------------------------------------------------------------------
// CoopTimer tests
// -----------------------------------------------------------------------------

#[test]
fn test_idle_timer_reports_idle() {
    let liveness = Liveness::default();
    let mut timer = CoopTimer::default();
    assert_eq!(timer.tick(half_second(), &liveness), Resume::Idle);
    assert!(!timer.is_pending());
}

#[test]
fn test_timer_resumes_after_exact_wait() {
    let liveness = Liveness::default();
    let mut timer = CoopTimer::default();
    assert!(timer.start(2.0, &liveness));

    for _ in 0..3 {
        assert_eq!(timer.tick(half_second(), &liveness), Resume::Waiting);
    }
    assert_eq!(timer.tick(half_second(), &liveness), Resume::Ready);
    assert!(!timer.is_pending());
    assert_eq!(timer.tick(half_second(), &liveness), Resume::Idle);
}

#[test]
fn test_timer_is_single_flight() {
    let liveness = Liveness::default();
    let mut timer = CoopTimer::default();
    assert!(timer.start(1.0, &liveness));
    timer.tick(half_second(), &liveness);

    // A second start must not stack or restart the pending wait
    assert!(!timer.start(5.0, &liveness));
    assert_eq!(timer.tick(half_second(), &liveness), Resume::Ready);
}

#[test]
fn test_revoked_liveness_makes_pending_timer_stale() {
    let mut liveness = Liveness::default();
    let mut timer = CoopTimer::default();
    timer.start(1.0, &liveness);

    liveness.revoke();

    assert_eq!(timer.tick(Duration::from_secs(5), &liveness), Resume::Stale);
    assert!(!timer.is_pending());
    assert_eq!(timer.tick(Duration::from_secs(5), &liveness), Resume::Idle);
}

#[test]
fn test_dead_owner_cannot_start_timer() {
    let mut liveness = Liveness::default();
    liveness.revoke();

    let mut timer = CoopTimer::default();
    assert!(!timer.start(1.0, &liveness));
    assert!(!timer.is_pending());
}

#[test]
fn test_cancel_clears_pending_wait() {
    let liveness = Liveness::default();
    let mut timer = CoopTimer::default();
    timer.start(1.0, &liveness);
    timer.cancel();
    assert_eq!(timer.remaining_secs(), None);
    assert_eq!(timer.tick(Duration::from_secs(2), &liveness), Resume::Idle);
}

#[test]
fn test_liveness_tokens_do_not_survive_revoke() {
    let mut liveness = Liveness::default();
    let token = liveness.token();
    assert!(liveness.is_current(token));

    liveness.revoke();
    assert!(!liveness.is_alive());
    assert!(!liveness.is_current(token));
    assert!(!liveness.is_current(liveness.token()));
}

// -----------------------------------------------------------------------------
// ViewBounds tests
// -----------------------------------------------------------------------------

#[test]
fn test_view_bounds_from_window() {
    let bounds = ViewBounds::from_window(960.0, 2.0, 0.0625);
    assert_eq!(bounds.min_x, -28.0);
    assert_eq!(bounds.max_x, 32.0);
}

#[test]
fn test_clamp_keeps_actor_on_screen() {
    let bounds = ViewBounds {
        min_x: -10.0,
        max_x: 10.0,
    };
    assert_eq!(bounds.clamp_x(12.0, 0.5), 9.5);
    assert_eq!(bounds.clamp_x(-12.0, 0.5), -9.5);
    assert_eq!(bounds.clamp_x(3.0, 0.5), 3.0);
}

#[test]
fn test_clamp_handles_actor_wider_than_view() {
    let bounds = ViewBounds {
        min_x: -1.0,
        max_x: 1.0,
    };
    assert_eq!(bounds.clamp_x(0.7, 2.0), 0.0);
}
