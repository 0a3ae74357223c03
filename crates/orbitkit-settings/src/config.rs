//! Configuration for the orbit diagram controller
//!
//! Configuration is organized into logical sections:
//! - Layout settings (ring radii, node box size)
//! - Camera settings (scale limits, fit margin, zoom steps)
//! - Gesture settings (drag threshold, tap suppression window)
//!
//! Every section has defaults, so partial documents are accepted.

use crate::error::{SettingsError, SettingsResult};
use orbitkit_core::constants;
use orbitkit_core::Size;
use serde::{Deserialize, Serialize};

/// Radial layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Inner ring radius as a fraction of the canvas' shorter side
    pub inner_ring_ratio: f64,
    /// Outer ring radius as a fraction of the canvas' shorter side
    pub outer_ring_ratio: f64,
    /// Node box width in world pixels
    pub node_width: f64,
    /// Node box height in world pixels
    pub node_height: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            inner_ring_ratio: constants::INNER_RING_RATIO,
            outer_ring_ratio: constants::OUTER_RING_RATIO,
            node_width: constants::NODE_WIDTH,
            node_height: constants::NODE_HEIGHT,
        }
    }
}

impl LayoutSettings {
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }
}

/// Camera limits and zoom behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fraction of the viewport the fitted canvas may fill
    pub fit_margin: f64,
    /// Relative scale change per wheel notch
    pub wheel_step: f64,
    /// Relative scale change per zoom button press
    pub button_step: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            min_scale: constants::MIN_SCALE,
            max_scale: constants::MAX_SCALE,
            fit_margin: constants::FIT_MARGIN,
            wheel_step: constants::WHEEL_STEP,
            button_step: constants::BUTTON_STEP,
        }
    }
}

/// Pointer gesture thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Pixels a press may wander before it counts as a drag
    pub drag_threshold_px: f64,
    /// Milliseconds node activation stays blocked after the view was moved
    pub tap_suppress_ms: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            drag_threshold_px: constants::DRAG_THRESHOLD_PX,
            tap_suppress_ms: constants::TAP_SUPPRESS_MS,
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub layout: LayoutSettings,
    pub camera: CameraSettings,
    pub gesture: GestureSettings,
}

impl OrbitConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> SettingsResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        let layout = &self.layout;
        if !(layout.inner_ring_ratio > 0.0 && layout.inner_ring_ratio <= 0.5) {
            return Err(SettingsError::invalid(
                "layout.inner_ring_ratio",
                "must be in (0, 0.5]",
            ));
        }
        if !(layout.outer_ring_ratio > 0.0 && layout.outer_ring_ratio <= 0.5) {
            return Err(SettingsError::invalid(
                "layout.outer_ring_ratio",
                "must be in (0, 0.5]",
            ));
        }
        if layout.inner_ring_ratio >= layout.outer_ring_ratio {
            return Err(SettingsError::invalid(
                "layout.inner_ring_ratio",
                "must be smaller than layout.outer_ring_ratio",
            ));
        }
        if !layout.node_size().is_positive() {
            return Err(SettingsError::invalid(
                "layout.node_width",
                "node dimensions must be > 0",
            ));
        }

        let camera = &self.camera;
        if !(camera.min_scale > 0.0 && camera.min_scale <= 1.0) {
            return Err(SettingsError::invalid(
                "camera.min_scale",
                "must be in (0, 1]",
            ));
        }
        if !(camera.max_scale >= 1.0 && camera.max_scale.is_finite()) {
            return Err(SettingsError::invalid(
                "camera.max_scale",
                "must be a finite value >= 1",
            ));
        }
        if !(camera.fit_margin > 0.0 && camera.fit_margin <= 1.0) {
            return Err(SettingsError::invalid(
                "camera.fit_margin",
                "must be in (0, 1]",
            ));
        }
        if !(camera.wheel_step > 0.0 && camera.wheel_step < 1.0) {
            return Err(SettingsError::invalid(
                "camera.wheel_step",
                "must be in (0, 1)",
            ));
        }
        if !(camera.button_step > 0.0 && camera.button_step < 1.0) {
            return Err(SettingsError::invalid(
                "camera.button_step",
                "must be in (0, 1)",
            ));
        }

        let gesture = &self.gesture;
        if !(gesture.drag_threshold_px >= 0.0 && gesture.drag_threshold_px.is_finite()) {
            return Err(SettingsError::invalid(
                "gesture.drag_threshold_px",
                "must be >= 0",
            ));
        }
        if !(gesture.tap_suppress_ms >= 0.0 && gesture.tap_suppress_ms.is_finite()) {
            return Err(SettingsError::invalid(
                "gesture.tap_suppress_ms",
                "must be >= 0",
            ));
        }

        Ok(())
    }
}
