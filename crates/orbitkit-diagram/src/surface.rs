//! Host surface abstraction.
//!
//! The controller never touches a document directly. It reads sizes from a
//! [`HostSurface`] and hands it fully derived output: a [`SceneFrame`] when
//! nodes, lanes or the active feature change, and a [`ViewTransform`] when
//! only the camera moved.

use crate::render::{SceneFrame, ViewTransform};
use orbitkit_core::Size;

/// What the controller needs from its embedding environment.
pub trait HostSurface {
    /// Pixel size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Pixel size of the world canvas.
    fn canvas_size(&self) -> Size;

    /// Pixel size of the hub box at the canvas centre.
    fn hub_size(&self) -> Size;

    /// Draws nodes, lanes and the detail card.
    fn present_scene(&mut self, frame: &SceneFrame);

    /// Applies the camera transform to the canvas.
    fn apply_transform(&mut self, transform: &ViewTransform);
}

/// In-memory surface that records everything it is asked to draw.
///
/// Used for headless embedding and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub viewport: Size,
    pub canvas: Size,
    pub hub: Size,
    pub scenes: Vec<SceneFrame>,
    pub transforms: Vec<ViewTransform>,
}

impl RecordingSurface {
    pub fn new(viewport: Size, canvas: Size, hub: Size) -> Self {
        Self {
            viewport,
            canvas,
            hub,
            scenes: Vec::new(),
            transforms: Vec::new(),
        }
    }

    pub fn last_scene(&self) -> Option<&SceneFrame> {
        self.scenes.last()
    }

    pub fn last_transform(&self) -> Option<&ViewTransform> {
        self.transforms.last()
    }
}

impl HostSurface for RecordingSurface {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn canvas_size(&self) -> Size {
        self.canvas
    }

    fn hub_size(&self) -> Size {
        self.hub
    }

    fn present_scene(&mut self, frame: &SceneFrame) {
        self.scenes.push(frame.clone());
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        self.transforms.push(*transform);
    }
}
