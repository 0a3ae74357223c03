use orbitkit_core::{Point, Size};
use orbitkit_diagram::viewport::{ScaleLimits, View};
use orbitkit_settings::CameraSettings;

#[test]
fn test_default_view_uses_settings_limits() {
    let view = View::default();
    let limits = view.limits();
    assert_eq!(limits.min, 0.45);
    assert_eq!(limits.max, 2.4);
    assert_eq!(view.scale(), 1.0);
}

#[test]
fn test_screen_world_inverse() {
    let mut view = View::new(ScaleLimits::new(0.1, 10.0));
    view.pan_to(37.0, -12.0);
    view.zoom_to(1.7, Point::new(100.0, 100.0));
    let screen = Point::new(420.0, 133.0);
    let back = view.world_to_screen(view.screen_to_world(screen));
    assert!((back.x - screen.x).abs() < 1e-9);
    assert!((back.y - screen.y).abs() < 1e-9);
}

#[test]
fn test_zoom_in_then_out_returns_to_start() {
    let mut view = View::from_settings(&CameraSettings::default());
    view.pan_to(10.0, 20.0);
    let origin = Point::new(250.0, 180.0);
    view.zoom_by(1.2, origin);
    view.zoom_by(1.0 / 1.2, origin);
    assert!((view.scale() - 1.0).abs() < 1e-9);
    assert!((view.x() - 10.0).abs() < 1e-9);
    assert!((view.y() - 20.0).abs() < 1e-9);
}

#[test]
fn test_fit_centres_canvas_in_viewport() {
    let mut view = View::default();
    assert!(view.fit_to_viewport(Size::new(1200.0, 800.0), Size::new(1600.0, 1600.0), 0.95));
    let expected = 0.5 * 0.95;
    assert!((view.scale() - expected).abs() < 1e-9);

    let canvas_center = view.world_to_screen(Point::new(800.0, 800.0));
    assert!((canvas_center.x - 600.0).abs() < 1e-9);
    assert!((canvas_center.y - 400.0).abs() < 1e-9);
}

#[test]
fn test_fit_result_is_within_limits() {
    let mut view = View::default();
    view.fit_to_viewport(Size::new(200.0, 200.0), Size::new(5000.0, 5000.0), 0.95);
    assert_eq!(view.scale(), 0.45);
    view.fit_to_viewport(Size::new(5000.0, 5000.0), Size::new(200.0, 200.0), 0.95);
    assert_eq!(view.scale(), 1.0);
}

#[test]
fn test_non_finite_pan_is_ignored() {
    let mut view = View::default();
    view.pan_to(3.0, 4.0);
    view.pan_to(f64::NAN, 1.0);
    view.pan_by(f64::INFINITY, 0.0);
    assert_eq!(view.origin(), Point::new(3.0, 4.0));
}
