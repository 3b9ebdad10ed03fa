//! Error types for name rendering.
//!
//! Every compile-time component reports failure by not compiling, so the
//! only runtime errors come from slicing and splitting compiler-rendered
//! type names in [`crate::name`].

use thiserror::Error;

/// Failure to take a name rendering apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// A slicing marker is absent from the rendering
    #[error("marker {marker:?} not found in {rendering:?}")]
    MarkerNotFound {
        rendering: &'static str,
        marker: String,
    },

    /// Brackets do not pair up
    #[error("unbalanced brackets at byte {offset} of {rendering:?}")]
    Unbalanced {
        rendering: &'static str,
        offset: usize,
    },

    #[error("{0:?} has no generic argument list")]
    NoGenericArguments(&'static str),
}

impl NameError {
    pub fn marker_not_found(rendering: &'static str, marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            rendering,
            marker: marker.into(),
        }
    }

    /// The rendering that could not be taken apart.
    pub fn rendering(&self) -> &'static str {
        match self {
            Self::MarkerNotFound { rendering, .. }
            | Self::Unbalanced { rendering, .. }
            | Self::NoGenericArguments(rendering) => rendering,
        }
    }
}

/// Result alias for name operations.
pub type Result<T> = std::result::Result<T, NameError>;
