use std::time::{Duration, Instant};

use breathetrack::session::{SessionController, SessionPhase, Transition};
use breathetrack::sparkline::layout;

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

#[test]
fn five_second_hold() {
    let t0 = Instant::now();
    let mut controller = SessionController::default();

    controller.toggle_at(t0);
    for n in 1..=5 {
        controller.poll_at(t0 + secs(n));
    }
    controller.toggle_at(t0 + Duration::from_millis(5400));

    let view = controller.view();
    assert_eq!(view.history.as_slice(), &[5]);
    assert_eq!(view.elapsed_seconds, 0);
    assert!(!view.active);
}

#[test]
fn immediate_stop_leaves_history_unchanged() {
    let t0 = Instant::now();
    let mut controller = SessionController::default();

    controller.toggle_at(t0);
    let transition = controller.toggle_at(t0);

    assert_eq!(transition, Transition::Stopped { committed: None });
    assert!(controller.history().is_empty());
    assert_eq!(controller.phase(), SessionPhase::Idle);
}

#[test]
fn hold_past_cap_commits_cap() {
    let t0 = Instant::now();
    let mut controller = SessionController::default();

    controller.toggle_at(t0);
    for n in 1..=90 {
        controller.poll_at(t0 + secs(n));
        assert!(controller.elapsed_seconds() <= 60);
    }
    assert_eq!(controller.phase(), SessionPhase::Active);

    assert_eq!(
        controller.toggle_at(t0 + secs(90)),
        Transition::Stopped {
            committed: Some(60)
        }
    );
    assert_eq!(controller.history().as_slice(), &[60]);
}

#[test]
fn two_sessions_trend_upwards() {
    let t0 = Instant::now();
    let mut controller = SessionController::default();

    controller.toggle_at(t0);
    controller.poll_at(t0 + secs(5));
    controller.toggle_at(t0 + secs(5));

    let t1 = t0 + secs(30);
    controller.toggle_at(t1);
    controller.poll_at(t1 + secs(40));
    controller.toggle_at(t1 + secs(40));

    assert_eq!(controller.history().as_slice(), &[5, 40]);

    let points = layout(controller.history().as_slice());
    assert_eq!(points.len(), 2);
    assert!(points[0].x < points[1].x);
    assert!(points[1].y < points[0].y);
}
