//! Pointer gesture sources.
//!
//! Hosts deliver either unified pointer events or, on older engines, touch
//! events. Each family gets one [`PointerGestureSource`] implementation that
//! normalises raw input into [`PointerSample`]s, so the gesture state machine
//! exists once. The source is chosen at startup by probing the host.

use orbitkit_core::{
    HostCapabilities, PointerEventKind, PointerId, PointerPhase, PointerSample, RawInput,
    RawPointerEvent, RawTouchEvent, TouchPhase,
};
use smallvec::SmallVec;

/// Normalised samples from one raw event. Touch events may carry several.
pub type Samples = SmallVec<[PointerSample; 2]>;

/// Which raw event family a source consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputBackend {
    PointerEvents,
    TouchEvents,
}

/// Translates one raw event family into pointer samples.
pub trait PointerGestureSource {
    fn backend(&self) -> InputBackend;

    /// Normalises `raw`. Input from the other event family yields nothing.
    fn translate(&self, raw: &RawInput) -> Samples;
}

/// Source for unified pointer events (mouse, pen and touch alike).
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerEventSource;

impl PointerEventSource {
    fn phase(kind: PointerEventKind) -> PointerPhase {
        match kind {
            PointerEventKind::Down => PointerPhase::Down,
            PointerEventKind::Move => PointerPhase::Move,
            PointerEventKind::Up => PointerPhase::Up,
            PointerEventKind::Cancel | PointerEventKind::LostCapture => PointerPhase::Cancel,
        }
    }

    fn sample(event: &RawPointerEvent) -> PointerSample {
        PointerSample::new(
            PointerId(event.pointer_id),
            Self::phase(event.kind),
            event.position,
            event.timestamp_ms,
        )
        .with_target(event.target.clone())
    }
}

impl PointerGestureSource for PointerEventSource {
    fn backend(&self) -> InputBackend {
        InputBackend::PointerEvents
    }

    fn translate(&self, raw: &RawInput) -> Samples {
        let mut out = Samples::new();
        if let RawInput::Pointer(event) = raw {
            out.push(Self::sample(event));
        }
        out
    }
}

/// Fallback source for hosts that only emit touch events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchEventSource;

impl TouchEventSource {
    fn phase(phase: TouchPhase) -> PointerPhase {
        match phase {
            TouchPhase::Start => PointerPhase::Down,
            TouchPhase::Move => PointerPhase::Move,
            TouchPhase::End => PointerPhase::Up,
            TouchPhase::Cancel => PointerPhase::Cancel,
        }
    }

    fn samples(event: &RawTouchEvent) -> Samples {
        let phase = Self::phase(event.phase);
        event
            .changed
            .iter()
            .map(|touch| {
                PointerSample::new(
                    PointerId(touch.identifier),
                    phase,
                    touch.position,
                    event.timestamp_ms,
                )
                .with_target(event.target.clone())
            })
            .collect()
    }
}

impl PointerGestureSource for TouchEventSource {
    fn backend(&self) -> InputBackend {
        InputBackend::TouchEvents
    }

    fn translate(&self, raw: &RawInput) -> Samples {
        match raw {
            RawInput::Touch(event) => Self::samples(event),
            RawInput::Pointer(_) => Samples::new(),
        }
    }
}

/// Picks the gesture source for a host.
///
/// Unified pointer events win when available. Without either family only the
/// wheel and the controls drive the camera.
pub fn select_gesture_source(caps: HostCapabilities) -> Option<Box<dyn PointerGestureSource>> {
    if caps.pointer_events {
        Some(Box::new(PointerEventSource))
    } else if caps.touch_events {
        tracing::debug!("Pointer events unavailable, falling back to touch events");
        Some(Box::new(TouchEventSource))
    } else {
        tracing::warn!("Host has neither pointer nor touch events; gestures disabled");
        None
    }
}
