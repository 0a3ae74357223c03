//! # OrbitKit Diagram
//!
//! Interactive orbit diagram: a central hub surrounded by feature nodes on two
//! concentric rings, each joined to the hub by a curved lane. Users pan and
//! zoom the canvas with mouse, wheel, touch or the zoom controls, and select a
//! feature to highlight its node and lane and show its description.
//!
//! ## Core Components
//!
//! - **Layout**: Ring placement, facing sides and lane anchors
//! - **Curves**: Cubic lane curves and their SVG path data
//! - **Viewport**: Camera state, zoom-around-point and fit
//! - **Gestures**: Drag threshold, two-pointer pinch and tap suppression
//! - **Input**: Pointer-event and touch-event gesture sources
//! - **Controller**: Feature activation and render orchestration
//!
//! ## Architecture
//!
//! ```text
//! Host (DOM, headless surface)
//!   ├── RawInput ──> PointerGestureSource ──> PointerSample
//!   └── HostSurface <── SceneFrame / ViewTransform
//!
//! OrbitController
//!   ├── Layout (rebuilt on render_all)
//!   ├── View (camera)
//!   ├── GestureMachine (drag / pinch)
//!   └── active feature
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use orbitkit_diagram::{OrbitController, RecordingSurface};
//!
//! let mut controller = OrbitController::new(catalog, config, surface);
//! controller.render_all();
//! controller.click_node("search", now_ms);
//! ```

pub mod controller;
pub mod curve;
pub mod gesture;
pub mod input;
pub mod layout;
pub mod render;
pub mod surface;
pub mod viewport;

pub use controller::OrbitController;
pub use curve::{build_curve, CubicCurve, LaneAxis};
pub use gesture::{
    DragSession, GestureConfig, GestureMachine, GestureOutcome, GestureState, PinchSession,
};
pub use input::{
    select_gesture_source, InputBackend, PointerEventSource, PointerGestureSource, Samples,
    TouchEventSource,
};
pub use layout::{
    compute_layout, facing_side, lane_anchors, ring_angle_deg, ring_split, Lane, Layout, Node,
    Ring, Side,
};
pub use render::{build_frame, DetailCard, LaneVisual, NodeVisual, SceneFrame, ViewTransform};
pub use surface::{HostSurface, RecordingSurface};
pub use viewport::{ScaleLimits, View};
