//! Camera view and coordinate transformation.
//!
//! The view maps world coordinates (the canvas' own pixels) to screen
//! coordinates (viewport pixels):
//!
//! ```text
//! screen = world * scale + (x, y)
//! world  = (screen - (x, y)) / scale
//! ```
//!
//! `scale` is kept inside `[min_scale, max_scale]` by every operation. The pan
//! offset is unbounded.

use crate::render::ViewTransform;
use orbitkit_core::{Point, Size};
use orbitkit_settings::CameraSettings;
use std::fmt;

/// Inclusive camera scale bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    pub min: f64,
    pub max: f64,
}

impl ScaleLimits {
    /// Creates limits, swapping the bounds if given in the wrong order.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl From<&CameraSettings> for ScaleLimits {
    fn from(settings: &CameraSettings) -> Self {
        Self::new(settings.min_scale, settings.max_scale)
    }
}

/// Mutable camera state.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    x: f64,
    y: f64,
    scale: f64,
    fit_scale: f64,
    limits: ScaleLimits,
}

impl View {
    /// Creates an identity view (no pan, scale 1 clamped into the limits).
    pub fn new(limits: ScaleLimits) -> Self {
        let scale = limits.clamp(1.0);
        Self {
            x: 0.0,
            y: 0.0,
            scale,
            fit_scale: scale,
            limits,
        }
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(ScaleLimits::from(settings))
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Pan offset as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scale computed by the last fit, kept as a reference value.
    pub fn fit_scale(&self) -> f64 {
        self.fit_scale
    }

    pub fn limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Sets the pan offset. Non-finite input is ignored.
    pub fn pan_to(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            tracing::debug!("Ignoring non-finite pan ({}, {})", x, y);
            return;
        }
        self.x = x;
        self.y = y;
    }

    /// Pans by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_to(self.x + dx, self.y + dy);
    }

    /// Converts a screen point to world coordinates.
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.x) / self.scale,
            (screen.y - self.y) / self.scale,
        )
    }

    /// Converts a world point to screen coordinates.
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.scale + self.x, world.y * self.scale + self.y)
    }

    /// Zooms to `target_scale`, keeping the world point under `origin` fixed.
    ///
    /// The target is clamped to the scale limits. Returns `true` if the view
    /// changed.
    pub fn zoom_to(&mut self, target_scale: f64, origin: Point) -> bool {
        if !target_scale.is_finite() || !origin.is_finite() {
            tracing::debug!("Ignoring zoom to {} around {}", target_scale, origin);
            return false;
        }
        let new_scale = self.limits.clamp(target_scale);
        if new_scale == self.scale {
            return false;
        }

        // x' = origin - (origin - x) * (new / old)
        let ratio = new_scale / self.scale;
        self.x = origin.x - (origin.x - self.x) * ratio;
        self.y = origin.y - (origin.y - self.y) * ratio;
        self.scale = new_scale;
        true
    }

    /// Multiplies the current scale by `factor` around `origin`.
    pub fn zoom_by(&mut self, factor: f64, origin: Point) -> bool {
        self.zoom_to(self.scale * factor, origin)
    }

    /// Sets scale and pan so that `pivot_world` lands under `screen_point`.
    ///
    /// This is the pinch variant of [`View::zoom_to`]: the pivot was captured
    /// when the pinch began, so it stays under the fingers even while they
    /// move.
    pub fn pin_world_point(&mut self, target_scale: f64, pivot_world: Point, screen_point: Point) {
        if !target_scale.is_finite() || !pivot_world.is_finite() || !screen_point.is_finite() {
            tracing::debug!("Ignoring degenerate pinch update");
            return;
        }
        let new_scale = self.limits.clamp(target_scale);
        self.scale = new_scale;
        self.x = screen_point.x - pivot_world.x * new_scale;
        self.y = screen_point.y - pivot_world.y * new_scale;
    }

    /// Fits the whole canvas into the viewport and centres it.
    ///
    /// The fitted scale is the largest value `<= 1` that shows the canvas with
    /// the given margin, clamped to `[min_scale, 1]`. Returns `false` and
    /// leaves the view untouched if either size is degenerate.
    pub fn fit_to_viewport(&mut self, viewport: Size, canvas: Size, margin: f64) -> bool {
        if !viewport.is_positive() || !canvas.is_positive() {
            tracing::debug!(
                "Skipping fit: viewport {}x{}, canvas {}x{}",
                viewport.width,
                viewport.height,
                canvas.width,
                canvas.height
            );
            return false;
        }

        let raw = (viewport.width / canvas.width).min(viewport.height / canvas.height) * margin;
        let upper = self.limits.min.max(1.0);
        let fit = raw.clamp(self.limits.min, upper);

        self.fit_scale = fit;
        self.scale = fit;
        self.x = (viewport.width - canvas.width * fit) / 2.0;
        self.y = (viewport.height - canvas.height * fit) / 2.0;

        tracing::debug!("Fit to viewport: scale {:.4}, origin ({:.1}, {:.1})", fit, self.x, self.y);
        true
    }

    /// Current transform for the renderer.
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            x: self.x,
            y: self.y,
            scale: self.scale,
        }
    }
}

impl Default for View {
    fn default() -> Self {
        Self::from_settings(&CameraSettings::default())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Pan: ({:.1}, {:.1})",
            self.scale, self.x, self.y
        )
    }
}
