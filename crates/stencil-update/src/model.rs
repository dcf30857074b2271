//! The per-model update kernel contract.

use stencil_grid::CellStorage;

use crate::capabilities::CellCapabilities;
use crate::hood::{NewHood, OldHood};

/// A stencil model: a cell type plus the kernel(s) that update it from a
/// neighborhood of weighted neighbors.
///
/// A model advertises which kernels it implements via [`Model::capabilities`].
/// Declaring `has_update_line_x` alone is sufficient — the functor never
/// falls back to `update` unless a model also declares `has_update` — so a
/// line-only model must override [`Model::update_line_x`] itself rather
/// than relying on the default, which forwards to `update` and is only
/// meaningful for models that implement both.
pub trait Model {
    /// The cell type this model updates. Must be `Clone` because every
    /// kernel call reads living neighbor values out of shared storage.
    type Cell: Clone;

    /// Which kernels this model provides. Checked once per `update` call,
    /// before any cell is touched.
    fn capabilities() -> CellCapabilities;

    /// Compute the next value of the cell at `old.index()` from its
    /// weighted neighbors.
    ///
    /// The default panics — it exists only so `update_line_x`'s default
    /// body has something to forward to; models that declare
    /// `has_update_line_x` without `has_update` must override
    /// `update_line_x` directly instead of relying on this default.
    fn update<S: CellStorage<Self::Cell>>(old: &OldHood<'_, Self::Cell, S>, nano_step: u32) -> Self::Cell {
        let _ = (old, nano_step);
        unreachable!("Model::capabilities() must not advertise has_update without overriding update()")
    }

    /// Compute every cell in `[old.index(), index_end)`, writing each
    /// result to `new` in order.
    ///
    /// The default walks the range one cell at a time via `update`,
    /// advancing both hoods in lockstep — a correct but non-vectorized
    /// fallback for models that only implement the per-cell kernel.
    fn update_line_x<S: CellStorage<Self::Cell>>(
        new: &mut NewHood<'_, Self::Cell>,
        index_end: usize,
        old: &mut OldHood<'_, Self::Cell, S>,
        nano_step: u32,
    ) {
        while old.index() < index_end {
            let cell = Self::update(old, nano_step);
            new.set(cell);
            old.advance();
            new.advance();
        }
    }
}
