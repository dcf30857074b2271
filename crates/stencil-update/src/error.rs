//! Update functor errors.

use std::fmt;

use stencil_grid::GridError;

/// Errors arising from an `update` invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateError {
    /// The model advertises neither a per-cell `update` nor an
    /// `update_line_x`, so there is no kernel to dispatch to.
    ModelCapabilityMissing,
    /// A kernel panicked while running on a worker thread.
    KernelFailure(String),
    /// Propagated from the grid layer: an unregistered matrix id, a
    /// permutation mismatch, or an out-of-bounds coordinate.
    Grid(GridError),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelCapabilityMissing => {
                write!(f, "model provides neither update() nor update_line_x()")
            }
            Self::KernelFailure(reason) => write!(f, "update kernel failed: {reason}"),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for UpdateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for UpdateError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
