//! # OrbitKit
//!
//! Interactive orbit diagram controller. A central hub is surrounded by feature
//! nodes on two concentric rings, each linked to the hub by a curved lane. The
//! canvas pans and zooms under mouse, wheel, touch and button input, and
//! selecting a node highlights it and shows its description.
//!
//! ## Architecture
//!
//! OrbitKit is organized as a workspace with multiple crates:
//!
//! 1. **orbitkit-core** - Geometry, feature catalog, input records, errors
//! 2. **orbitkit-settings** - Layout, camera and gesture configuration
//! 3. **orbitkit-diagram** - Layout engine, camera, gestures and controller
//! 4. **orbitkit-web** - Browser host (wasm32 only)
//! 5. **orbitkit** - This facade

use anyhow::Context;

pub use orbitkit_core::{
    CatalogError, ControlAction, Error, Feature, FeatureCatalog, HostCapabilities, HostError,
    Point, PointerId, PointerPhase, PointerSample, PointerTarget, RawInput, Rect, Result, Size,
    WheelSample,
};
pub use orbitkit_diagram::{
    GestureState, HostSurface, Layout, OrbitController, RecordingSurface, SceneFrame, View,
    ViewTransform,
};
pub use orbitkit_settings::{OrbitConfig, SettingsError};

pub use orbitkit_diagram as diagram;
pub use orbitkit_settings as settings;

/// Initialize tracing/logging
///
/// Honours `RUST_LOG`, defaulting to `info`. Fails if a global subscriber is
/// already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Builds a controller from catalog and configuration text.
///
/// `config_toml` may be empty to use the defaults.
pub fn build_controller<S: HostSurface>(
    features_json: &str,
    config_toml: &str,
    surface: S,
) -> anyhow::Result<OrbitController<S>> {
    let catalog =
        FeatureCatalog::from_json_str(features_json).context("failed to load feature catalog")?;
    let config = if config_toml.trim().is_empty() {
        OrbitConfig::default()
    } else {
        OrbitConfig::from_toml_str(config_toml).context("failed to load orbit configuration")?
    };
    tracing::info!("Building orbit controller with {} features", catalog.len());
    Ok(OrbitController::new(catalog, config, surface))
}
