//! Gesture recognition: turns pointer samples into pan and pinch-zoom.
//!
//! [`GestureMachine`] owns the set of pointers currently pressed on the diagram
//! surface and exactly one [`GestureState`]. The state is always re-derived
//! from the number of tracked pointers:
//!
//! - **0 pointers**: `Idle`.
//! - **1 pointer**: `Dragging`, anchored where that pointer was when the drag
//!   began. Movement below the drag threshold is absorbed so a slightly shaky
//!   tap does not pan.
//! - **2 pointers**: `Pinching`. The world point under the midpoint of the two
//!   pointers is captured as the pivot and kept under the midpoint while the
//!   fingers move.
//!
//! Lifting one finger of a pinch starts a fresh drag at the remaining
//! finger's position, so the gesture continues as a pan.
//!
//! # Invariants
//!
//! 1. At most one of drag or pinch is active.
//! 2. Presses on interactive children (nodes, controls) are never tracked.
//! 3. Any drag past the threshold and any applied pinch update arm the
//!    tap-suppression window, so releasing a gesture over a node does not
//!    activate it.
//! 4. A cancel (or lost capture) of a tracked pointer drops every tracked
//!    pointer and returns to `Idle` immediately. Cancels for pointers that
//!    were already released are ignored.
//!
//! # Failure Modes
//!
//! - A pinch whose start or current finger distance is (near) zero skips the
//!   update instead of dividing by zero.

use crate::viewport::View;
use orbitkit_core::constants::DEGENERATE_DISTANCE;
use orbitkit_core::{Point, PointerId, PointerPhase, PointerSample, PointerTarget};
use orbitkit_settings::GestureSettings;
use smallvec::SmallVec;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for gesture recognition.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Distance in screen pixels before a press becomes a drag (default: 8).
    pub drag_threshold_px: f64,
    /// Tap-suppression window in milliseconds (default: 260).
    pub tap_suppress_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::from(&GestureSettings::default())
    }
}

impl From<&GestureSettings> for GestureConfig {
    fn from(settings: &GestureSettings) -> Self {
        Self {
            drag_threshold_px: settings.drag_threshold_px,
            tap_suppress_ms: settings.tap_suppress_ms,
        }
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// A single-pointer pan in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub pointer_id: PointerId,
    pub start_screen: Point,
    pub start_view_origin: Point,
    pub has_moved: bool,
}

/// A two-pointer pinch in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchSession {
    pub pointers: [PointerId; 2],
    pub start_distance: f64,
    pub start_scale: f64,
    pub pivot_world: Point,
    pub has_moved: bool,
}

impl PinchSession {
    fn involves(&self, id: PointerId) -> bool {
        self.pointers.contains(&id)
    }
}

/// The gesture currently in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
    Pinching(PinchSession),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, GestureState::Pinching(_))
    }

    /// True once the gesture has actually moved the view.
    pub fn has_moved(&self) -> bool {
        match self {
            GestureState::Idle => false,
            GestureState::Dragging(drag) => drag.has_moved,
            GestureState::Pinching(pinch) => pinch.has_moved,
        }
    }
}

/// What a sample did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Not for the gesture machine (interactive target or untracked pointer).
    Ignored,
    /// Consumed without changing the view.
    Absorbed,
    /// The view was changed and must be re-applied.
    ViewChanged,
}

// ---------------------------------------------------------------------------
// GestureMachine
// ---------------------------------------------------------------------------

/// Pointer tracking plus the current [`GestureState`].
#[derive(Debug, Clone)]
pub struct GestureMachine {
    config: GestureConfig,
    state: GestureState,
    /// Tracked pointers in press order with their last screen position.
    pointers: SmallVec<[(PointerId, Point); 4]>,
    suppress_until_ms: Option<f64>,
}

impl GestureMachine {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            pointers: SmallVec::new(),
            suppress_until_ms: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Number of pointers currently pressed on the surface.
    pub fn tracked_pointers(&self) -> usize {
        self.pointers.len()
    }

    /// Whether node activation must be ignored at `now_ms`.
    pub fn is_tap_suppressed(&self, now_ms: f64) -> bool {
        self.suppress_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Feeds one pointer sample through the state machine.
    pub fn handle(&mut self, sample: &PointerSample, view: &mut View) -> GestureOutcome {
        let outcome = match sample.phase {
            PointerPhase::Down => self.on_down(sample.id, sample.position, &sample.target, view),
            PointerPhase::Move => {
                self.on_move(sample.id, sample.position, sample.timestamp_ms, view)
            }
            PointerPhase::Up => self.on_up(sample.id, sample.position, sample.timestamp_ms, view),
            PointerPhase::Cancel => self.on_cancel(sample.id),
        };
        tracing::trace!(
            "Pointer {} {:?} at {} -> {:?}, state {:?}",
            sample.id,
            sample.phase,
            sample.position,
            outcome,
            self.state
        );
        outcome
    }

    /// Re-anchors the gesture in progress to the pointers' current positions
    /// and the current view.
    ///
    /// Call after the view was changed by something other than this machine
    /// (wheel, zoom buttons, a refit on resize), so the next move does not
    /// jump back.
    pub fn rebase(&mut self, view: &View) {
        let moved = self.state.has_moved();
        self.state = GestureState::Idle;
        self.rederive(view);
        match &mut self.state {
            GestureState::Idle => {}
            GestureState::Dragging(drag) => drag.has_moved = moved,
            GestureState::Pinching(pinch) => pinch.has_moved = moved,
        }
    }

    /// Drops all pointers and returns to `Idle`. The suppression window is kept.
    pub fn reset(&mut self) {
        self.pointers.clear();
        self.state = GestureState::Idle;
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    fn on_down(
        &mut self,
        id: PointerId,
        position: Point,
        target: &PointerTarget,
        view: &View,
    ) -> GestureOutcome {
        if target.is_interactive() {
            return GestureOutcome::Ignored;
        }
        match self.position_of(id) {
            Some(slot) => self.pointers[slot].1 = position,
            None => self.pointers.push((id, position)),
        }
        self.rederive(view);
        GestureOutcome::Absorbed
    }

    fn on_move(
        &mut self,
        id: PointerId,
        position: Point,
        now_ms: f64,
        view: &mut View,
    ) -> GestureOutcome {
        let Some(slot) = self.position_of(id) else {
            return GestureOutcome::Ignored;
        };
        self.pointers[slot].1 = position;

        let drives_drag = matches!(&self.state, GestureState::Dragging(d) if d.pointer_id == id);
        let drives_pinch = matches!(&self.state, GestureState::Pinching(p) if p.involves(id));
        if drives_drag {
            self.update_drag(position, now_ms, view)
        } else if drives_pinch {
            self.update_pinch(now_ms, view)
        } else {
            GestureOutcome::Absorbed
        }
    }

    fn on_up(
        &mut self,
        id: PointerId,
        position: Point,
        now_ms: f64,
        view: &View,
    ) -> GestureOutcome {
        let Some(slot) = self.position_of(id) else {
            return GestureOutcome::Ignored;
        };
        self.pointers.remove(slot);

        if self.state.has_moved() {
            self.arm_suppression(now_ms);
        }
        tracing::trace!("Pointer {} released at {}", id, position);
        self.rederive(view);
        GestureOutcome::Absorbed
    }

    fn on_cancel(&mut self, id: PointerId) -> GestureOutcome {
        // lost capture arrives after the release of a captured pointer
        if self.position_of(id).is_none() {
            return GestureOutcome::Ignored;
        }
        self.reset();
        GestureOutcome::Absorbed
    }

    /// Picks the state matching the tracked pointer count.
    fn rederive(&mut self, view: &View) {
        let leading: SmallVec<[(PointerId, Point); 2]> =
            self.pointers.iter().take(2).copied().collect();
        match leading.as_slice() {
            [] => self.state = GestureState::Idle,
            [(id, position)] => {
                let keep = matches!(&self.state, GestureState::Dragging(d) if d.pointer_id == *id);
                if !keep {
                    self.begin_drag(*id, *position, view);
                }
            }
            [(a, pa), (b, pb), ..] => {
                let keep = matches!(
                    &self.state,
                    GestureState::Pinching(p) if p.pointers == [*a, *b]
                );
                if !keep {
                    self.begin_pinch([*a, *b], *pa, *pb, view);
                }
            }
        }
    }

    fn begin_drag(&mut self, id: PointerId, position: Point, view: &View) {
        self.state = GestureState::Dragging(DragSession {
            pointer_id: id,
            start_screen: position,
            start_view_origin: view.origin(),
            has_moved: false,
        });
    }

    fn begin_pinch(&mut self, ids: [PointerId; 2], a: Point, b: Point, view: &View) {
        let mid = a.midpoint(&b);
        self.state = GestureState::Pinching(PinchSession {
            pointers: ids,
            start_distance: a.distance_to(&b),
            start_scale: view.scale(),
            pivot_world: view.screen_to_world(mid),
            has_moved: false,
        });
    }

    fn update_drag(&mut self, position: Point, now_ms: f64, view: &mut View) -> GestureOutcome {
        let threshold = self.config.drag_threshold_px;
        let GestureState::Dragging(drag) = &mut self.state else {
            return GestureOutcome::Absorbed;
        };

        let delta = position - drag.start_screen;
        if !drag.has_moved {
            if delta.length() < threshold {
                return GestureOutcome::Absorbed;
            }
            drag.has_moved = true;
        }

        let origin = drag.start_view_origin + delta;
        view.pan_to(origin.x, origin.y);
        self.arm_suppression(now_ms);
        GestureOutcome::ViewChanged
    }

    fn update_pinch(&mut self, now_ms: f64, view: &mut View) -> GestureOutcome {
        let GestureState::Pinching(pinch) = &self.state else {
            return GestureOutcome::Absorbed;
        };
        let (Some(a), Some(b)) = (
            self.point_of(pinch.pointers[0]),
            self.point_of(pinch.pointers[1]),
        ) else {
            return GestureOutcome::Absorbed;
        };

        let distance = a.distance_to(&b);
        if pinch.start_distance < DEGENERATE_DISTANCE || distance < DEGENERATE_DISTANCE {
            tracing::trace!("Skipping pinch update with degenerate distance {}", distance);
            return GestureOutcome::Absorbed;
        }

        let target = pinch.start_scale * distance / pinch.start_distance;
        let pivot = pinch.pivot_world;
        view.pin_world_point(target, pivot, a.midpoint(&b));

        if let GestureState::Pinching(pinch) = &mut self.state {
            pinch.has_moved = true;
        }
        self.arm_suppression(now_ms);
        GestureOutcome::ViewChanged
    }

    fn arm_suppression(&mut self, now_ms: f64) {
        let until = now_ms + self.config.tap_suppress_ms;
        self.suppress_until_ms = Some(self.suppress_until_ms.map_or(until, |u| u.max(until)));
    }

    fn position_of(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|(pid, _)| *pid == id)
    }

    fn point_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, p)| *p)
    }
}

impl Default for GestureMachine {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
