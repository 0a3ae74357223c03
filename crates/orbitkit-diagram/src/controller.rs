//! Orbit diagram controller.
//!
//! Ties the layout engine, camera, gesture machine and host surface together.
//! Every input callback mutates state synchronously and then pushes derived
//! output to the surface:
//!
//! - layout or active-feature changes re-present the whole [`SceneFrame`];
//! - camera changes only re-apply the [`ViewTransform`].

use crate::gesture::{GestureConfig, GestureMachine, GestureOutcome, GestureState};
use crate::input::{select_gesture_source, InputBackend, PointerGestureSource, PointerEventSource};
use crate::layout::{compute_layout, Layout};
use crate::render::{build_frame, SceneFrame};
use crate::surface::HostSurface;
use crate::viewport::View;
use orbitkit_core::{
    ControlAction, FeatureCatalog, HostCapabilities, Point, PointerSample, RawInput, WheelSample,
};
use orbitkit_settings::OrbitConfig;

/// Controller for one orbit diagram instance.
pub struct OrbitController<S: HostSurface> {
    catalog: FeatureCatalog,
    config: OrbitConfig,
    surface: S,
    view: View,
    gestures: GestureMachine,
    source: Option<Box<dyn PointerGestureSource>>,
    layout: Layout,
    active: Option<String>,
}

impl<S: HostSurface> OrbitController<S> {
    /// Creates a controller using unified pointer events.
    ///
    /// Nothing is drawn until [`render_all`](Self::render_all) is called.
    pub fn new(catalog: FeatureCatalog, config: OrbitConfig, surface: S) -> Self {
        Self {
            view: View::from_settings(&config.camera),
            gestures: GestureMachine::new(GestureConfig::from(&config.gesture)),
            source: Some(Box::new(PointerEventSource)),
            layout: Layout::default(),
            active: None,
            catalog,
            config,
            surface,
        }
    }

    /// Re-selects the gesture source from probed host capabilities.
    pub fn with_capabilities(mut self, caps: HostCapabilities) -> Self {
        self.source = select_gesture_source(caps);
        self
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &OrbitConfig {
        &self.config
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn gesture_state(&self) -> &GestureState {
        self.gestures.state()
    }

    pub fn gestures(&self) -> &GestureMachine {
        &self.gestures
    }

    pub fn input_backend(&self) -> Option<InputBackend> {
        self.source.as_ref().map(|s| s.backend())
    }

    pub fn active_feature_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Current render output for the layout and active feature.
    pub fn frame(&self) -> SceneFrame {
        build_frame(&self.layout, &self.catalog, self.active.as_deref())
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Rebuilds the layout from the current canvas size, re-presents the
    /// scene and fits the camera.
    ///
    /// Call once at startup and on every viewport or canvas resize.
    pub fn render_all(&mut self) {
        self.layout = compute_layout(
            &self.catalog,
            self.surface.canvas_size(),
            self.surface.hub_size(),
            &self.config.layout,
        );
        if self.active.is_none() {
            self.active = self.catalog.first().map(|f| f.id.clone());
        }
        self.present();
        self.fit_to_viewport();
    }

    /// Pushes the current camera transform to the surface.
    pub fn apply_view(&mut self) {
        let transform = self.view.transform();
        self.surface.apply_transform(&transform);
    }

    fn present(&mut self) {
        let frame = self.frame();
        self.surface.present_scene(&frame);
    }

    // -----------------------------------------------------------------------
    // Feature activation
    // -----------------------------------------------------------------------

    /// Makes `id` the active feature. Unknown ids are ignored.
    ///
    /// Returns `true` if `id` is now active.
    pub fn activate_feature(&mut self, id: &str) -> bool {
        if !self.catalog.contains(id) {
            tracing::debug!("Ignoring activation of unknown feature '{}'", id);
            return false;
        }
        self.active = Some(id.to_string());
        self.present();
        true
    }

    /// Handles a click or tap on a node button.
    ///
    /// Ignored while the tap-suppression window from a recent drag or pinch
    /// is open.
    pub fn click_node(&mut self, id: &str, now_ms: f64) -> bool {
        if self.gestures.is_tap_suppressed(now_ms) {
            tracing::debug!("Suppressed node click on '{}' after gesture", id);
            return false;
        }
        self.activate_feature(id)
    }

    // -----------------------------------------------------------------------
    // Camera
    // -----------------------------------------------------------------------

    /// Zooms around a screen point and applies the view if it changed.
    pub fn zoom_to(&mut self, target_scale: f64, origin: Point) -> bool {
        let changed = self.view.zoom_to(target_scale, origin);
        if changed {
            self.gestures.rebase(&self.view);
            self.apply_view();
        }
        changed
    }

    /// Fits the canvas into the viewport and applies the view.
    pub fn fit_to_viewport(&mut self) -> bool {
        let fitted = self.view.fit_to_viewport(
            self.surface.viewport_size(),
            self.surface.canvas_size(),
            self.config.camera.fit_margin,
        );
        if fitted {
            self.gestures.rebase(&self.view);
            self.apply_view();
        }
        fitted
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Feeds raw host input through the selected gesture source.
    pub fn handle_raw_input(&mut self, raw: &RawInput) -> bool {
        let Some(source) = self.source.as_ref() else {
            return false;
        };
        let samples = source.translate(raw);
        let mut changed = false;
        for sample in &samples {
            changed |= self.handle_pointer(sample);
        }
        changed
    }

    /// Feeds one normalised pointer sample to the gesture machine.
    ///
    /// Returns `true` if the view changed.
    pub fn handle_pointer(&mut self, sample: &PointerSample) -> bool {
        let outcome = self.gestures.handle(sample, &mut self.view);
        if outcome == GestureOutcome::ViewChanged {
            self.apply_view();
            return true;
        }
        false
    }

    /// Zooms one wheel step around the cursor.
    ///
    /// Independent of any drag or pinch in progress.
    pub fn handle_wheel(&mut self, wheel: WheelSample) -> bool {
        if wheel.delta_y == 0.0 || !wheel.delta_y.is_finite() {
            return false;
        }
        let step = 1.0 + self.config.camera.wheel_step;
        let factor = if wheel.delta_y < 0.0 { step } else { 1.0 / step };
        self.zoom_to(self.view.scale() * factor, wheel.position)
    }

    /// Handles the zoom-in, zoom-out and fit controls.
    pub fn handle_control(&mut self, action: ControlAction) -> bool {
        let step = 1.0 + self.config.camera.button_step;
        let center = self.surface.viewport_size().center();
        match action {
            ControlAction::ZoomIn => self.zoom_to(self.view.scale() * step, center),
            ControlAction::ZoomOut => self.zoom_to(self.view.scale() / step, center),
            ControlAction::Fit => self.fit_to_viewport(),
        }
    }

    /// Resize notification from the host.
    pub fn handle_resize(&mut self) {
        self.render_all();
    }
}
