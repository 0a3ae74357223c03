//! Host element resolution.
//!
//! A page either provides every element the diagram needs or the mount is
//! abandoned before anything is attached. [`HostElements::resolve`] performs
//! all lookups up front and hands back the complete set, so nothing that
//! mutates the document can run on a partial page.

use orbitkit_core::{ControlAction, HostError};

/// Every element role, in lookup order. Each maps to `[data-orbit-<role>]`.
pub const ROLES: [&str; 8] = [
    "viewport",
    "canvas",
    "hub",
    "title",
    "description",
    "zoom-in",
    "zoom-out",
    "fit",
];

/// Attribute selector for a role.
pub fn role_selector(role: &str) -> String {
    format!("[data-orbit-{role}]")
}

/// The complete set of host elements.
#[derive(Debug, Clone, PartialEq)]
pub struct HostElements<T> {
    pub viewport: T,
    pub canvas: T,
    pub hub: T,
    pub title: T,
    pub description: T,
    pub zoom_in: T,
    pub zoom_out: T,
    pub fit: T,
}

impl<T> HostElements<T> {
    /// Looks up every role with `lookup`. The first missing role aborts with
    /// [`HostError::MissingElement`].
    pub fn resolve<F>(mut lookup: F) -> Result<Self, HostError>
    where
        F: FnMut(&str) -> Result<Option<T>, HostError>,
    {
        let mut find = |role: &str| lookup(role)?.ok_or_else(|| HostError::missing(role));
        Ok(Self {
            viewport: find(ROLES[0])?,
            canvas: find(ROLES[1])?,
            hub: find(ROLES[2])?,
            title: find(ROLES[3])?,
            description: find(ROLES[4])?,
            zoom_in: find(ROLES[5])?,
            zoom_out: find(ROLES[6])?,
            fit: find(ROLES[7])?,
        })
    }

    /// Control buttons with the action each triggers.
    pub fn controls(&self) -> [(&T, ControlAction); 3] {
        [
            (&self.zoom_in, ControlAction::ZoomIn),
            (&self.zoom_out, ControlAction::ZoomOut),
            (&self.fit, ControlAction::Fit),
        ]
    }
}
