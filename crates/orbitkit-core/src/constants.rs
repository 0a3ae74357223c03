//! Default constants shared across OrbitKit crates.
//!
//! These are the defaults of `OrbitConfig`; hosts override them through
//! configuration rather than editing these values.

/// Inner ring radius as a fraction of `min(canvas_width, canvas_height)`.
pub const INNER_RING_RATIO: f64 = 0.315;

/// Outer ring radius as a fraction of `min(canvas_width, canvas_height)`.
pub const OUTER_RING_RATIO: f64 = 0.425;

/// Fixed node box width in world pixels.
pub const NODE_WIDTH: f64 = 184.0;

/// Fixed node box height in world pixels.
pub const NODE_HEIGHT: f64 = 64.0;

/// Smallest camera scale.
pub const MIN_SCALE: f64 = 0.45;

/// Largest camera scale.
pub const MAX_SCALE: f64 = 2.4;

/// Fraction of the viewport the fitted canvas may occupy (5% margin).
pub const FIT_MARGIN: f64 = 0.95;

/// Relative scale change per wheel notch.
pub const WHEEL_STEP: f64 = 0.14;

/// Relative scale change per zoom button press.
pub const BUTTON_STEP: f64 = 0.2;

/// Distance a pointer must travel before a press becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 8.0;

/// How long node activation is ignored after a drag or pinch moved the view.
pub const TAP_SUPPRESS_MS: f64 = 260.0;

/// Distances below this are treated as zero by pinch math.
pub const DEGENERATE_DISTANCE: f64 = 1e-6;
