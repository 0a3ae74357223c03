//! # OrbitKit Core
//!
//! Core types shared by the OrbitKit crates.
//! Provides the geometry primitives, the feature catalog, host input records
//! and the error types used by the diagram controller and its hosts.

pub mod constants;
pub mod error;
pub mod event;
pub mod feature;
pub mod geometry;

pub use error::{CatalogError, Error, HostError, Result};

pub use event::{
    ControlAction, HostCapabilities, PointerEventKind, PointerId, PointerPhase, PointerSample,
    PointerTarget, RawInput, RawPointerEvent, RawTouchEvent, TouchPhase, TouchPoint, WheelSample,
};

pub use feature::{Feature, FeatureCatalog};

pub use geometry::{Point, Rect, Size};
