//! Input records delivered by the host.
//!
//! Hosts translate their native events into these plain structs. Two raw
//! families exist because some environments only deliver touch events; the
//! diagram crate normalises both into [`PointerSample`]s before they reach the
//! gesture state machine.
//!
//! Timestamps are milliseconds on the host's event clock. Only differences
//! between timestamps are ever used.

use crate::geometry::Point;
use std::fmt;

/// Identity of one pointer (mouse, pen, or finger) for the length of a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub i64);

impl fmt::Display for PointerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the pointer landed on, as reported by host hit-testing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PointerTarget {
    /// Empty diagram surface; presses here may start a pan or pinch.
    #[default]
    Surface,
    /// A feature node button.
    Node(String),
    /// Zoom or fit control.
    Control,
}

impl PointerTarget {
    /// Interactive children handle their own presses and never start a gesture.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, PointerTarget::Surface)
    }
}

/// Normalised pointer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    /// Cancelled by the host or capture was lost.
    Cancel,
}

/// One normalised pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub phase: PointerPhase,
    /// Screen position relative to the viewport's top-left corner.
    pub position: Point,
    pub target: PointerTarget,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn new(id: PointerId, phase: PointerPhase, position: Point, timestamp_ms: f64) -> Self {
        Self {
            id,
            phase,
            position,
            target: PointerTarget::Surface,
            timestamp_ms,
        }
    }

    pub fn with_target(mut self, target: PointerTarget) -> Self {
        self.target = target;
        self
    }
}

/// Unified pointer-event kinds as hosts emit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    LostCapture,
}

/// A raw unified pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPointerEvent {
    pub kind: PointerEventKind,
    pub pointer_id: i64,
    pub position: Point,
    pub target: PointerTarget,
    pub timestamp_ms: f64,
}

/// Touch-event phases for hosts without unified pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One finger reported in a touch event's changed list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub identifier: i64,
    pub position: Point,
}

impl TouchPoint {
    pub fn new(identifier: i64, position: Point) -> Self {
        Self {
            identifier,
            position,
        }
    }
}

/// A raw touch event carrying every touch that changed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTouchEvent {
    pub phase: TouchPhase,
    pub changed: Vec<TouchPoint>,
    pub target: PointerTarget,
    pub timestamp_ms: f64,
}

/// Raw input from either event family.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Pointer(RawPointerEvent),
    Touch(RawTouchEvent),
}

/// Mouse-wheel input. Wheel zoom never touches gesture state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSample {
    /// Vertical delta; negative scrolls up (zoom in).
    pub delta_y: f64,
    /// Cursor position in screen space.
    pub position: Point,
}

/// The three discrete trigger controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    ZoomIn,
    ZoomOut,
    Fit,
}

/// What the host environment supports, found by probing at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HostCapabilities {
    pub pointer_events: bool,
    pub touch_events: bool,
    pub resize_observer: bool,
}
