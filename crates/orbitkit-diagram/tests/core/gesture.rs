use orbitkit_core::{Point, PointerId, PointerPhase, PointerSample, PointerTarget};
use orbitkit_diagram::gesture::{GestureConfig, GestureMachine, GestureOutcome};
use orbitkit_diagram::viewport::{ScaleLimits, View};

fn sample(id: i64, phase: PointerPhase, x: f64, y: f64, t: f64) -> PointerSample {
    PointerSample::new(PointerId(id), phase, Point::new(x, y), t)
}

fn setup() -> (GestureMachine, View) {
    (
        GestureMachine::new(GestureConfig::default()),
        View::new(ScaleLimits::new(0.45, 2.4)),
    )
}

#[test]
fn test_small_moves_do_not_pan() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 100.0, 100.0, 0.0), &mut view);
    let out = gm.handle(&sample(1, PointerPhase::Move, 105.0, 104.0, 10.0), &mut view);
    assert_eq!(out, GestureOutcome::Absorbed);
    assert_eq!(view.origin(), Point::zero());
    gm.handle(&sample(1, PointerPhase::Up, 105.0, 104.0, 20.0), &mut view);
    assert!(gm.state().is_idle());
    assert!(!gm.is_tap_suppressed(21.0));
}

#[test]
fn test_drag_pans_by_full_delta_once_past_threshold() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 100.0, 100.0, 0.0), &mut view);
    let out = gm.handle(&sample(1, PointerPhase::Move, 130.0, 60.0, 16.0), &mut view);
    assert_eq!(out, GestureOutcome::ViewChanged);
    assert_eq!(view.origin(), Point::new(30.0, -40.0));

    // back inside the threshold radius still pans once moved
    gm.handle(&sample(1, PointerPhase::Move, 102.0, 101.0, 32.0), &mut view);
    assert_eq!(view.origin(), Point::new(2.0, 1.0));
}

#[test]
fn test_release_after_drag_suppresses_tap() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 0.0, 0.0, 1000.0), &mut view);
    gm.handle(&sample(1, PointerPhase::Move, 50.0, 0.0, 1050.0), &mut view);
    gm.handle(&sample(1, PointerPhase::Up, 50.0, 0.0, 1100.0), &mut view);
    assert!(gm.is_tap_suppressed(1100.0));
    assert!(gm.is_tap_suppressed(1359.0));
    assert!(!gm.is_tap_suppressed(1360.0));
}

#[test]
fn test_pinch_scales_around_midpoint() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 100.0, 200.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Down, 300.0, 200.0, 5.0), &mut view);
    assert!(gm.state().is_pinching());
    let pivot = view.screen_to_world(Point::new(200.0, 200.0));

    gm.handle(&sample(2, PointerPhase::Move, 400.0, 200.0, 20.0), &mut view);
    // distance 200 -> 300
    assert!((view.scale() - 1.5).abs() < 1e-9);
    let mid = view.world_to_screen(pivot);
    assert!((mid.x - 250.0).abs() < 1e-9);
    assert!((mid.y - 200.0).abs() < 1e-9);
}

#[test]
fn test_pinch_is_clamped() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 0.0, 0.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Down, 10.0, 0.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Move, 1000.0, 0.0, 10.0), &mut view);
    assert_eq!(view.scale(), 2.4);
}

#[test]
fn test_lifting_a_pinch_finger_continues_as_drag() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 100.0, 100.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Down, 200.0, 100.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Move, 220.0, 100.0, 10.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Up, 220.0, 100.0, 20.0), &mut view);
    assert!(gm.state().is_dragging());
    assert!(gm.is_tap_suppressed(200.0));

    let before = view.origin();
    gm.handle(&sample(1, PointerPhase::Move, 100.0, 140.0, 30.0), &mut view);
    assert_eq!(view.origin(), before + Point::new(0.0, 40.0));
}

#[test]
fn test_presses_on_nodes_are_not_tracked() {
    let (mut gm, mut view) = setup();
    let press = sample(1, PointerPhase::Down, 10.0, 10.0, 0.0)
        .with_target(PointerTarget::Node("alpha".into()));
    assert_eq!(gm.handle(&press, &mut view), GestureOutcome::Ignored);
    assert_eq!(gm.tracked_pointers(), 0);
    assert_eq!(
        gm.handle(&sample(1, PointerPhase::Move, 80.0, 80.0, 5.0), &mut view),
        GestureOutcome::Ignored
    );
    assert_eq!(view.origin(), Point::zero());
}

#[test]
fn test_cancel_returns_to_idle() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 0.0, 0.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Down, 50.0, 0.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Cancel, 50.0, 0.0, 5.0), &mut view);
    assert!(gm.state().is_idle());
    assert_eq!(gm.tracked_pointers(), 0);
}

#[test]
fn test_drag_threshold_scenario() {
    let (mut gm, mut view) = setup();
    view.pan_to(40.0, 25.0);
    gm.handle(&sample(1, PointerPhase::Down, 100.0, 100.0, 0.0), &mut view);

    let out = gm.handle(&sample(1, PointerPhase::Move, 104.0, 101.0, 10.0), &mut view);
    assert_eq!(out, GestureOutcome::Absorbed);
    assert!(!gm.state().has_moved());
    assert_eq!(view.origin(), Point::new(40.0, 25.0));

    let out = gm.handle(&sample(1, PointerPhase::Move, 115.0, 100.0, 20.0), &mut view);
    assert_eq!(out, GestureOutcome::ViewChanged);
    assert!(gm.state().has_moved());
    assert_eq!(view.x(), 40.0 + 15.0);
    assert_eq!(view.y(), 25.0);
}

#[test]
fn test_cancel_for_released_pointer_during_drag_is_ignored() {
    let (mut gm, mut view) = setup();
    gm.handle(&sample(1, PointerPhase::Down, 100.0, 100.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Down, 200.0, 100.0, 0.0), &mut view);
    gm.handle(&sample(2, PointerPhase::Up, 200.0, 100.0, 10.0), &mut view);
    assert!(gm.state().is_dragging());

    let out = gm.handle(&sample(2, PointerPhase::Cancel, 200.0, 100.0, 11.0), &mut view);
    assert_eq!(out, GestureOutcome::Ignored);
    assert!(gm.state().is_dragging());
    assert_eq!(gm.tracked_pointers(), 1);

    let before = view.origin();
    gm.handle(&sample(1, PointerPhase::Move, 100.0, 130.0, 20.0), &mut view);
    assert_eq!(view.origin(), before + Point::new(0.0, 30.0));
}
