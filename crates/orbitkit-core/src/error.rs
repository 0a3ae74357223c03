//! Error handling for OrbitKit
//!
//! Provides error types for the layers that can actually fail:
//! - Catalog errors (feature list validation)
//! - Host errors (embedding environment does not provide what the controller needs)
//!
//! Geometry, camera and gesture operations are total and never produce errors.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Feature catalog error type
///
/// Raised while building a [`FeatureCatalog`](crate::FeatureCatalog) from
/// configuration input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two features share the same id
    #[error("Duplicate feature id '{id}'")]
    DuplicateId {
        /// The id that appeared more than once.
        id: String,
    },

    /// A feature has an empty id
    #[error("Feature at index {index} has an empty id")]
    EmptyId {
        /// Position of the offending feature in the input list.
        index: usize,
    },

    /// Catalog text could not be parsed
    #[error("Invalid feature catalog: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },
}

/// Host environment error type
///
/// Represents a host surface that cannot support the controller. Any of these
/// leaves the controller inert.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A required element is missing from the host document
    #[error("Missing required host element: {role}")]
    MissingElement {
        /// The role the element plays (viewport, canvas, hub, ...).
        role: String,
    },

    /// The host could not create or configure an element
    #[error("Host operation failed: {reason}")]
    Operation {
        /// Description of the failure.
        reason: String,
    },
}

impl HostError {
    /// Convenience constructor for [`HostError::MissingElement`].
    pub fn missing(role: impl Into<String>) -> Self {
        Self::MissingElement { role: role.into() }
    }
}

/// Main error type for OrbitKit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Feature catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Host environment error
    #[error(transparent)]
    Host(#[from] HostError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a message.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Returns true if this error means the host is unusable.
    pub fn is_host_error(&self) -> bool {
        matches!(self, Self::Host(_))
    }
}

/// Result type alias for OrbitKit operations
pub type Result<T> = std::result::Result<T, Error>;
