//! OrbitKit Settings Crate
//!
//! Holds every tunable constant of the orbit diagram: ring geometry, node box
//! size, camera limits and gesture thresholds. Settings are parsed from JSON or
//! TOML text supplied by the host and validated before use.

pub mod config;
pub mod error;

pub use config::{CameraSettings, GestureSettings, LayoutSettings, OrbitConfig};
pub use error::{SettingsError, SettingsResult};
