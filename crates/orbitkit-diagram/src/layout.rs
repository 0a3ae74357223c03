//! Radial layout engine.
//!
//! Places one node per feature on two concentric rings around the hub and
//! connects each node to the hub with a lane curve. A layout is a pure
//! function of the catalog, canvas size, hub size and layout settings: running
//! it twice with the same inputs produces identical output, and every pass
//! builds a fresh [`Layout`] instead of patching the previous one.
//!
//! Angles are in degrees, 0° pointing along +X and increasing clockwise in
//! screen space (Y grows downwards), so -90° is straight up.

use crate::curve::{build_curve, CubicCurve, LaneAxis};
use orbitkit_core::{FeatureCatalog, Point, Rect, Size};
use orbitkit_settings::LayoutSettings;
use serde::Serialize;

/// Which ring a node sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ring {
    Inner,
    Outer,
}

/// The side of the hub a node predominantly faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    pub fn axis(&self) -> LaneAxis {
        match self {
            Side::Left | Side::Right => LaneAxis::Horizontal,
            Side::Top | Side::Bottom => LaneAxis::Vertical,
        }
    }
}

/// A feature's box on the canvas, in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub feature_id: String,
    pub center: Point,
    pub rect: Rect,
    pub ring: Ring,
    pub angle_deg: f64,
    pub side: Side,
}

/// Connector from a node's facing edge to the hub's opposite edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lane {
    pub feature_id: String,
    pub curve: CubicCurve,
    pub axis: LaneAxis,
}

/// Output of one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layout {
    pub canvas: Size,
    pub hub: Rect,
    pub nodes: Vec<Node>,
    pub lanes: Vec<Lane>,
}

impl Layout {
    pub fn node(&self, feature_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.feature_id == feature_id)
    }

    pub fn lane(&self, feature_id: &str) -> Option<&Lane> {
        self.lanes.iter().find(|l| l.feature_id == feature_id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Splits `count` features into `(inner, outer)` ring sizes.
///
/// The inner ring takes the larger half.
pub fn ring_split(count: usize) -> (usize, usize) {
    let inner = count.div_ceil(2);
    (inner, count - inner)
}

/// Angle of node `index` on a ring of `count` nodes.
///
/// The outer ring is rotated by half a slot so its nodes fall between the
/// inner ones.
pub fn ring_angle_deg(ring: Ring, index: usize, count: usize) -> f64 {
    if count == 0 {
        return -90.0;
    }
    let slot = 360.0 / count as f64;
    let offset = match ring {
        Ring::Inner => 0.0,
        Ring::Outer => slot / 2.0,
    };
    -90.0 + offset + index as f64 * slot
}

/// Picks the hub side a node faces from its offset to the hub centre.
///
/// Ties go to the horizontal axis.
pub fn facing_side(hub_center: Point, node_center: Point) -> Side {
    let dx = node_center.x - hub_center.x;
    let dy = node_center.y - hub_center.y;
    if dx.abs() >= dy.abs() {
        if dx >= 0.0 {
            Side::Right
        } else {
            Side::Left
        }
    } else if dy >= 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// Anchor points `(node_anchor, hub_anchor)` for a node on the given side.
pub fn lane_anchors(node: &Rect, hub: &Rect, side: Side) -> (Point, Point) {
    match side {
        Side::Right => (node.left_mid(), hub.right_mid()),
        Side::Left => (node.right_mid(), hub.left_mid()),
        Side::Bottom => (node.top_mid(), hub.bottom_mid()),
        Side::Top => (node.bottom_mid(), hub.top_mid()),
    }
}

/// Computes node and lane geometry for the whole catalog.
pub fn compute_layout(
    catalog: &FeatureCatalog,
    canvas: Size,
    hub_size: Size,
    settings: &LayoutSettings,
) -> Layout {
    let center = canvas.center();
    let hub = Rect::centered_at(center, hub_size);
    let node_size = settings.node_size();

    let min_side = canvas.min_side().max(0.0);
    let inner_radius = min_side * settings.inner_ring_ratio;
    let outer_radius = min_side * settings.outer_ring_ratio;

    let (inner_count, outer_count) = ring_split(catalog.len());
    let mut nodes = Vec::with_capacity(catalog.len());
    let mut lanes = Vec::with_capacity(catalog.len());

    for (i, feature) in catalog.iter().enumerate() {
        let (ring, index, count, radius) = if i < inner_count {
            (Ring::Inner, i, inner_count, inner_radius)
        } else {
            (Ring::Outer, i - inner_count, outer_count, outer_radius)
        };

        let angle_deg = ring_angle_deg(ring, index, count);
        let angle = angle_deg.to_radians();
        let node_center = Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        );
        let rect = Rect::centered_at(node_center, node_size);
        let side = facing_side(center, node_center);
        let (start, end) = lane_anchors(&rect, &hub, side);

        lanes.push(Lane {
            feature_id: feature.id.clone(),
            curve: build_curve(start, end, side.axis()),
            axis: side.axis(),
        });
        nodes.push(Node {
            feature_id: feature.id.clone(),
            center: node_center,
            rect,
            ring,
            angle_deg,
            side,
        });
    }

    tracing::debug!(
        "Layout pass: {} nodes ({} inner, {} outer) on {}x{} canvas",
        nodes.len(),
        inner_count,
        outer_count,
        canvas.width,
        canvas.height
    );

    Layout {
        canvas,
        hub,
        nodes,
        lanes,
    }
}
