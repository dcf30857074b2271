//! Self-reported model kernel capabilities.

/// Which update kernels a [`crate::Model`](crate::model::Model) implements.
///
/// The functor checks this once per call, before touching any cell — a
/// model that advertises neither kernel fails fast with
/// [`crate::UpdateError::ModelCapabilityMissing`] rather than panicking
/// partway through a region. `HasUpdateLineX` alone is sufficient; the
/// per-cell form is not required when the line form is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CellCapabilities {
    /// Whether the model provides a per-cell `update`.
    pub has_update: bool,
    /// Whether the model provides a vectorized `update_line_x`.
    pub has_update_line_x: bool,
}

impl CellCapabilities {
    /// Only the per-cell kernel is implemented.
    pub fn per_cell_only() -> Self {
        Self {
            has_update: true,
            has_update_line_x: false,
        }
    }

    /// Only the line kernel is implemented.
    pub fn line_only() -> Self {
        Self {
            has_update: false,
            has_update_line_x: true,
        }
    }

    /// Both kernels are implemented (the line form is preferred at
    /// dispatch time).
    pub fn both() -> Self {
        Self {
            has_update: true,
            has_update_line_x: true,
        }
    }

    /// Neither kernel is implemented.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether at least one kernel is usable.
    pub fn any(&self) -> bool {
        self.has_update || self.has_update_line_x
    }
}
