//! Browser event wiring.
//!
//! Converts DOM events into the controller's host-neutral input records and
//! installs the listeners. Listeners live as long as the page.

use crate::dom::DomSurface;
use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::Reflect;
use orbitkit_core::{
    ControlAction, HostCapabilities, Point, PointerEventKind, PointerTarget, RawInput,
    RawPointerEvent, RawTouchEvent, TouchPhase, TouchPoint, WheelSample,
};
use orbitkit_diagram::OrbitController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, MouseEvent, PointerEvent, ResizeObserver, TouchEvent, TouchList,
    WheelEvent, Window,
};

pub(crate) type Shared = Rc<RefCell<OrbitController<DomSurface>>>;

const NODE_SELECTOR: &str = "[data-feature-id]";
const CONTROL_SELECTOR: &str = "[data-orbit-zoom-in], [data-orbit-zoom-out], [data-orbit-fit]";

// ---------------------------------------------------------------------------
// Capability probing
// ---------------------------------------------------------------------------

fn has_global(window: &Window, name: &str) -> bool {
    Reflect::has(window, &JsValue::from_str(name)).unwrap_or(false)
}

/// Probes which input and resize APIs the browser offers.
pub(crate) fn probe_capabilities(window: &Window) -> HostCapabilities {
    HostCapabilities {
        pointer_events: has_global(window, "PointerEvent"),
        touch_events: has_global(window, "ontouchstart") || has_global(window, "TouchEvent"),
        resize_observer: has_global(window, "ResizeObserver"),
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Client coordinates relative to the viewport's top-left corner.
fn local_point(viewport: &HtmlElement, client_x: f64, client_y: f64) -> Point {
    let rect = viewport.get_bounding_client_rect();
    Point::new(client_x - rect.left(), client_y - rect.top())
}

fn classify_target(event: &Event) -> PointerTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return PointerTarget::Surface;
    };
    if let Ok(Some(node)) = element.closest(NODE_SELECTOR) {
        return PointerTarget::Node(node.get_attribute("data-feature-id").unwrap_or_default());
    }
    if let Ok(Some(_)) = element.closest(CONTROL_SELECTOR) {
        return PointerTarget::Control;
    }
    PointerTarget::Surface
}

fn pointer_input(event: &PointerEvent, kind: PointerEventKind, viewport: &HtmlElement) -> RawInput {
    RawInput::Pointer(RawPointerEvent {
        kind,
        pointer_id: event.pointer_id() as i64,
        position: local_point(viewport, event.client_x() as f64, event.client_y() as f64),
        target: classify_target(event),
        timestamp_ms: event.time_stamp(),
    })
}

fn touch_points(list: &TouchList, viewport: &HtmlElement) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .map(|touch| {
            TouchPoint::new(
                touch.identifier() as i64,
                local_point(viewport, touch.client_x() as f64, touch.client_y() as f64),
            )
        })
        .collect()
}

fn touch_input(event: &TouchEvent, phase: TouchPhase, viewport: &HtmlElement) -> RawInput {
    RawInput::Touch(RawTouchEvent {
        phase,
        changed: touch_points(&event.changed_touches(), viewport),
        target: classify_target(event),
        timestamp_ms: event.time_stamp(),
    })
}

fn active_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

fn install_pointer_listeners(shared: &Shared, viewport: &HtmlElement) {
    let kinds = [
        ("pointerdown", PointerEventKind::Down),
        ("pointermove", PointerEventKind::Move),
        ("pointerup", PointerEventKind::Up),
        ("pointercancel", PointerEventKind::Cancel),
        ("lostpointercapture", PointerEventKind::LostCapture),
    ];
    for (name, kind) in kinds {
        let shared = Rc::clone(shared);
        let target = viewport.clone();
        EventListener::new(viewport, name, move |event: &Event| {
            let Some(event) = event.dyn_ref::<PointerEvent>() else {
                return;
            };
            let input = pointer_input(event, kind, &target);
            if kind == PointerEventKind::Down {
                if let RawInput::Pointer(raw) = &input {
                    if !raw.target.is_interactive() {
                        // capture failure only loses moves outside the viewport
                        let _ = target.set_pointer_capture(event.pointer_id());
                    }
                }
            }
            shared.borrow_mut().handle_raw_input(&input);
        })
        .forget();
    }
}

fn install_touch_listeners(shared: &Shared, viewport: &HtmlElement) {
    let phases = [
        ("touchstart", TouchPhase::Start),
        ("touchmove", TouchPhase::Move),
        ("touchend", TouchPhase::End),
        ("touchcancel", TouchPhase::Cancel),
    ];
    for (name, phase) in phases {
        let shared = Rc::clone(shared);
        let target = viewport.clone();
        EventListener::new_with_options(viewport, name, active_options(), move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            let input = touch_input(event, phase, &target);
            let mut controller = shared.borrow_mut();
            controller.handle_raw_input(&input);
            if phase == TouchPhase::Move && !controller.gesture_state().is_idle() {
                event.prevent_default();
            }
        })
        .forget();
    }
}

fn install_wheel_listener(shared: &Shared, viewport: &HtmlElement) {
    let shared = Rc::clone(shared);
    let target = viewport.clone();
    EventListener::new_with_options(viewport, "wheel", active_options(), move |event: &Event| {
        let Some(event) = event.dyn_ref::<WheelEvent>() else {
            return;
        };
        event.prevent_default();
        let position = local_point(&target, event.client_x() as f64, event.client_y() as f64);
        shared.borrow_mut().handle_wheel(WheelSample {
            delta_y: event.delta_y(),
            position,
        });
    })
    .forget();
}

fn install_node_clicks(shared: &Shared, viewport: &HtmlElement) {
    let shared = Rc::clone(shared);
    EventListener::new(viewport, "click", move |event: &Event| {
        let PointerTarget::Node(id) = classify_target(event) else {
            return;
        };
        let now_ms = event.time_stamp();
        shared.borrow_mut().click_node(&id, now_ms);
    })
    .forget();
}

fn install_controls(shared: &Shared) {
    let buttons: Vec<(Element, ControlAction)> = shared.borrow().surface().controls().to_vec();
    for (button, action) in buttons {
        let shared = Rc::clone(shared);
        EventListener::new(&button, "click", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                event.prevent_default();
            }
            shared.borrow_mut().handle_control(action);
        })
        .forget();
    }
}

fn install_resize(shared: &Shared, window: &Window, caps: HostCapabilities) {
    let (viewport, canvas) = {
        let controller = shared.borrow();
        (
            controller.surface().viewport().clone(),
            controller.surface().canvas().clone(),
        )
    };

    if caps.resize_observer {
        let observed = Rc::clone(shared);
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |_entries: JsValue| {
            if let Ok(mut controller) = observed.try_borrow_mut() {
                controller.handle_resize();
            }
        });
        match ResizeObserver::new(callback.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(&viewport);
                observer.observe(&canvas);
                callback.forget();
                return;
            }
            Err(e) => {
                tracing::warn!("ResizeObserver unavailable, using window resize: {:?}", e);
            }
        }
    }

    let shared = Rc::clone(shared);
    EventListener::new(window, "resize", move |_event: &Event| {
        shared.borrow_mut().handle_resize();
    })
    .forget();
}

/// Installs every listener for a mounted diagram.
pub(crate) fn install(shared: &Shared, window: &Window, caps: HostCapabilities) {
    install_controls(shared);
    let viewport = shared.borrow().surface().viewport().clone();

    if caps.pointer_events {
        install_pointer_listeners(shared, &viewport);
    } else if caps.touch_events {
        install_touch_listeners(shared, &viewport);
    }
    install_wheel_listener(shared, &viewport);
    install_node_clicks(shared, &viewport);
    install_resize(shared, window, caps);
}
