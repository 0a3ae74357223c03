//! Render output derived from controller state.
//!
//! A [`SceneFrame`] is rebuilt from the current [`Layout`] and active feature
//! every time either changes. Hosts rebuild their elements when the geometry
//! changes and only restyle them when just the active feature moved (see
//! [`SceneFrame::same_geometry`]). The camera is handled separately by
//! [`ViewTransform`], which is cheap to push on every pan or zoom.

use crate::layout::Layout;
use orbitkit_core::{FeatureCatalog, Rect, Size};
use serde::Serialize;

/// Visual state of one node button.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeVisual {
    pub feature_id: String,
    pub label: String,
    /// Box in world coordinates.
    pub rect: Rect,
    pub active: bool,
}

impl NodeVisual {
    /// Value for the `aria-pressed` attribute.
    pub fn aria_pressed(&self) -> &'static str {
        if self.active {
            "true"
        } else {
            "false"
        }
    }
}

/// Visual state of one lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaneVisual {
    pub feature_id: String,
    /// SVG path data in world coordinates.
    pub path: String,
    pub active: bool,
}

/// Text shown for the active feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailCard {
    pub label: String,
    pub description: String,
}

/// Everything a host needs to draw the diagram apart from the camera.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SceneFrame {
    pub canvas: Size,
    pub hub: Rect,
    pub nodes: Vec<NodeVisual>,
    pub lanes: Vec<LaneVisual>,
    pub detail: Option<DetailCard>,
}

impl SceneFrame {
    /// Id of the node marked active, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.nodes
            .iter()
            .find(|n| n.active)
            .map(|n| n.feature_id.as_str())
    }

    /// True if `other` draws the same nodes, lanes and hub, differing at
    /// most in which feature is active.
    ///
    /// Hosts use this to restyle existing elements instead of rebuilding them.
    pub fn same_geometry(&self, other: &SceneFrame) -> bool {
        self.canvas == other.canvas
            && self.hub == other.hub
            && self.nodes.len() == other.nodes.len()
            && self.lanes.len() == other.lanes.len()
            && self.nodes.iter().zip(&other.nodes).all(|(a, b)| {
                a.feature_id == b.feature_id && a.label == b.label && a.rect == b.rect
            })
            && self
                .lanes
                .iter()
                .zip(&other.lanes)
                .all(|(a, b)| a.feature_id == b.feature_id && a.path == b.path)
    }
}

/// Builds the frame for `layout` with `active` highlighted.
pub fn build_frame(layout: &Layout, catalog: &FeatureCatalog, active: Option<&str>) -> SceneFrame {
    let is_active = |id: &str| active == Some(id);

    let nodes = layout
        .nodes
        .iter()
        .map(|node| NodeVisual {
            feature_id: node.feature_id.clone(),
            label: catalog
                .get(&node.feature_id)
                .map(|f| f.label.clone())
                .unwrap_or_default(),
            rect: node.rect,
            active: is_active(&node.feature_id),
        })
        .collect();

    let lanes = layout
        .lanes
        .iter()
        .map(|lane| LaneVisual {
            feature_id: lane.feature_id.clone(),
            path: lane.curve.to_svg_path(),
            active: is_active(&lane.feature_id),
        })
        .collect();

    let detail = active.and_then(|id| catalog.get(id)).map(|feature| DetailCard {
        label: feature.label.clone(),
        description: feature.description.clone(),
    });

    SceneFrame {
        canvas: layout.canvas,
        hub: layout.hub,
        nodes,
        lanes,
        detail,
    }
}

/// Camera transform applied to the whole canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl ViewTransform {
    /// CSS `transform` value; the canvas must use `transform-origin: 0 0`.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) scale({:.4})",
            self.x, self.y, self.scale
        )
    }
}
