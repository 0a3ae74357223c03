use orbitkit_core::{Feature, FeatureCatalog, Point, Size};
use orbitkit_diagram::layout::{compute_layout, Ring, Side};
use orbitkit_diagram::LaneAxis;
use orbitkit_settings::LayoutSettings;

fn catalog(n: usize) -> FeatureCatalog {
    FeatureCatalog::new(
        (0..n)
            .map(|i| Feature::new(format!("f{i}"), format!("Feature {i}"), "desc"))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_eight_features_split_four_and_four() {
    let layout = compute_layout(
        &catalog(8),
        Size::new(1000.0, 1000.0),
        Size::new(220.0, 140.0),
        &LayoutSettings::default(),
    );
    let inner = layout.nodes.iter().filter(|n| n.ring == Ring::Inner).count();
    let outer = layout.nodes.iter().filter(|n| n.ring == Ring::Outer).count();
    assert_eq!((inner, outer), (4, 4));

    // inner ring at -90, 0, 90, 180; outer interleaved at -45, 45, 135, 225
    let angles: Vec<f64> = layout.nodes.iter().map(|n| n.angle_deg).collect();
    assert_eq!(
        angles,
        vec![-90.0, 0.0, 90.0, 180.0, -45.0, 45.0, 135.0, 225.0]
    );
}

#[test]
fn test_nodes_face_the_hub() {
    let layout = compute_layout(
        &catalog(4),
        Size::new(1000.0, 1000.0),
        Size::new(200.0, 200.0),
        &LayoutSettings::default(),
    );
    let sides: Vec<Side> = layout.nodes.iter().map(|n| n.side).collect();
    // inner ring: f0 up, f1 down; outer ring: f2 right, f3 left
    assert_eq!(sides, vec![Side::Top, Side::Bottom, Side::Right, Side::Left]);

    let right = layout.node("f2").unwrap();
    let lane = layout.lane("f2").unwrap();
    assert_eq!(lane.axis, LaneAxis::Horizontal);
    assert_eq!(lane.curve.start, right.rect.left_mid());
    assert_eq!(lane.curve.end, layout.hub.right_mid());
}

#[test]
fn test_node_boxes_use_configured_size() {
    let settings = LayoutSettings {
        node_width: 120.0,
        node_height: 40.0,
        ..LayoutSettings::default()
    };
    let layout = compute_layout(
        &catalog(3),
        Size::new(800.0, 600.0),
        Size::new(100.0, 100.0),
        &settings,
    );
    for node in &layout.nodes {
        assert_eq!(node.rect.width, 120.0);
        assert_eq!(node.rect.height, 40.0);
        assert_eq!(node.rect.center(), node.center);
    }
}

#[test]
fn test_radius_uses_shorter_canvas_side() {
    let layout = compute_layout(
        &catalog(1),
        Size::new(1600.0, 900.0),
        Size::new(100.0, 100.0),
        &LayoutSettings::default(),
    );
    let center = Point::new(800.0, 450.0);
    let r = layout.nodes[0].center.distance_to(&center);
    assert!((r - 900.0 * 0.315).abs() < 1e-9);
}

#[test]
fn test_layout_is_deterministic() {
    let c = catalog(7);
    let a = compute_layout(
        &c,
        Size::new(900.0, 700.0),
        Size::new(180.0, 120.0),
        &LayoutSettings::default(),
    );
    let b = compute_layout(
        &c,
        Size::new(900.0, 700.0),
        Size::new(180.0, 120.0),
        &LayoutSettings::default(),
    );
    assert_eq!(a, b);
}
