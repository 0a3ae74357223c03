use orbitkit_core::{
    ControlAction, Feature, FeatureCatalog, HostCapabilities, Point, PointerEventKind,
    PointerTarget, RawInput, RawPointerEvent, RawTouchEvent, Size, TouchPhase, TouchPoint,
};
use orbitkit_diagram::{InputBackend, OrbitController, RecordingSurface};
use orbitkit_settings::OrbitConfig;

fn catalog() -> FeatureCatalog {
    FeatureCatalog::from_json_str(
        r#"[
            {"id": "search", "label": "Search", "description": "Find anything"},
            {"id": "share", "label": "Share", "description": "Send to a friend"},
            {"id": "sync", "label": "Sync", "description": "Keep devices in step"}
        ]"#,
    )
    .unwrap()
}

fn controller() -> OrbitController<RecordingSurface> {
    let surface = RecordingSurface::new(
        Size::new(1000.0, 700.0),
        Size::new(1200.0, 1200.0),
        Size::new(240.0, 160.0),
    );
    let mut c = OrbitController::new(catalog(), OrbitConfig::default(), surface);
    c.render_all();
    c
}

fn pointer(kind: PointerEventKind, id: i64, x: f64, y: f64, t: f64) -> RawInput {
    RawInput::Pointer(RawPointerEvent {
        kind,
        pointer_id: id,
        position: Point::new(x, y),
        target: PointerTarget::Surface,
        timestamp_ms: t,
    })
}

#[test]
fn test_startup_highlights_first_feature() {
    let c = controller();
    let frame = c.surface().last_scene().unwrap();
    assert_eq!(frame.active_id(), Some("search"));
    let detail = frame.detail.as_ref().unwrap();
    assert_eq!(detail.label, "Search");
    assert_eq!(detail.description, "Find anything");
    assert_eq!(frame.nodes.len(), 3);
    assert_eq!(frame.lanes.len(), 3);
}

#[test]
fn test_click_switches_active_feature() {
    let mut c = controller();
    assert!(c.click_node("sync", 0.0));
    let frame = c.surface().last_scene().unwrap();
    assert_eq!(frame.active_id(), Some("sync"));
    assert!(frame.lanes.iter().all(|l| l.active == (l.feature_id == "sync")));
    assert_eq!(frame.detail.as_ref().unwrap().label, "Sync");
}

#[test]
fn test_click_right_after_drag_is_ignored() {
    let mut c = controller();
    c.handle_raw_input(&pointer(PointerEventKind::Down, 1, 500.0, 350.0, 1000.0));
    assert!(c.handle_raw_input(&pointer(PointerEventKind::Move, 1, 560.0, 350.0, 1016.0)));
    c.handle_raw_input(&pointer(PointerEventKind::Up, 1, 560.0, 350.0, 1030.0));

    assert!(!c.click_node("share", 1100.0));
    assert_eq!(c.active_feature_id(), Some("search"));
    assert!(c.click_node("share", 1400.0));
    assert_eq!(c.active_feature_id(), Some("share"));
}

#[test]
fn test_drag_pushes_transform() {
    let mut c = controller();
    let start = c.view().origin();
    let applied = c.surface().transforms.len();
    c.handle_raw_input(&pointer(PointerEventKind::Down, 1, 100.0, 100.0, 0.0));
    c.handle_raw_input(&pointer(PointerEventKind::Move, 1, 140.0, 130.0, 16.0));
    assert_eq!(c.view().origin(), start + Point::new(40.0, 30.0));
    assert_eq!(c.surface().transforms.len(), applied + 1);
    assert_eq!(c.surface().last_transform().unwrap().x, start.x + 40.0);
}

#[test]
fn test_lost_capture_ends_drag() {
    let mut c = controller();
    c.handle_raw_input(&pointer(PointerEventKind::Down, 1, 100.0, 100.0, 0.0));
    c.handle_raw_input(&pointer(PointerEventKind::LostCapture, 1, 100.0, 100.0, 5.0));
    assert!(c.gesture_state().is_idle());
}

#[test]
fn test_touch_fallback_pinch() {
    let caps = HostCapabilities {
        touch_events: true,
        ..HostCapabilities::default()
    };
    let mut c = controller().with_capabilities(caps);
    assert_eq!(c.input_backend(), Some(InputBackend::TouchEvents));
    let before = c.view().scale();

    c.handle_raw_input(&RawInput::Touch(RawTouchEvent {
        phase: TouchPhase::Start,
        changed: vec![
            TouchPoint::new(10, Point::new(400.0, 300.0)),
            TouchPoint::new(11, Point::new(500.0, 300.0)),
        ],
        target: PointerTarget::Surface,
        timestamp_ms: 0.0,
    }));
    assert!(c.gesture_state().is_pinching());

    c.handle_raw_input(&RawInput::Touch(RawTouchEvent {
        phase: TouchPhase::Move,
        changed: vec![TouchPoint::new(11, Point::new(550.0, 300.0))],
        target: PointerTarget::Surface,
        timestamp_ms: 16.0,
    }));
    assert!((c.view().scale() - before * 1.5).abs() < 1e-9);
}

#[test]
fn test_fit_control_restores_fit_after_zoom() {
    let mut c = controller();
    let fitted = c.view().clone();
    c.handle_control(ControlAction::ZoomIn);
    c.handle_control(ControlAction::ZoomIn);
    assert!(c.view().scale() > fitted.scale());
    c.handle_control(ControlAction::Fit);
    assert_eq!(c.view(), &fitted);
}

#[test]
fn test_empty_catalog_renders_hub_only() {
    let surface = RecordingSurface::new(
        Size::new(800.0, 600.0),
        Size::new(800.0, 800.0),
        Size::new(200.0, 120.0),
    );
    let mut c = OrbitController::new(FeatureCatalog::default(), OrbitConfig::default(), surface);
    c.render_all();
    assert_eq!(c.active_feature_id(), None);
    let frame = c.surface().last_scene().unwrap();
    assert!(frame.nodes.is_empty());
    assert!(frame.detail.is_none());
    assert!(!c.activate_feature("anything"));
}

#[test]
fn test_duplicate_feature_ids_are_rejected() {
    let result = FeatureCatalog::new(vec![
        Feature::new("a", "A", ""),
        Feature::new("a", "Again", ""),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_unknown_feature_keeps_previous_active() {
    let mut c = controller();
    assert!(c.activate_feature("share"));
    let scenes = c.surface().scenes.len();
    assert!(!c.activate_feature("unknown"));
    assert_eq!(c.active_feature_id(), Some("share"));
    assert_eq!(c.surface().scenes.len(), scenes);
    assert_eq!(c.surface().last_scene().unwrap().active_id(), Some("share"));
}

#[test]
fn test_pinch_release_then_lost_capture_continues_as_pan() {
    let mut c = controller();
    c.handle_raw_input(&pointer(PointerEventKind::Down, 1, 300.0, 300.0, 0.0));
    c.handle_raw_input(&pointer(PointerEventKind::Down, 2, 400.0, 300.0, 5.0));
    assert!(c.gesture_state().is_pinching());
    c.handle_raw_input(&pointer(PointerEventKind::Move, 2, 450.0, 300.0, 16.0));
    c.handle_raw_input(&pointer(PointerEventKind::Up, 2, 450.0, 300.0, 32.0));
    assert!(c.gesture_state().is_dragging());

    // browsers send lostpointercapture after pointerup of a captured pointer
    assert!(!c.handle_raw_input(&pointer(PointerEventKind::LostCapture, 2, 450.0, 300.0, 33.0)));
    assert!(c.gesture_state().is_dragging());

    let before = c.view().origin();
    assert!(c.handle_raw_input(&pointer(PointerEventKind::Move, 1, 300.0, 340.0, 48.0)));
    assert_eq!(c.view().origin(), before + Point::new(0.0, 40.0));
}
