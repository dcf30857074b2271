//! Read and write neighborhood proxies.
//!
//! Both proxies operate purely in physical index space: `remap_region` has
//! already resolved logical coordinates to physical ones by the time a
//! kernel sees a hood, so neither needs to know the grid's dimensionality
//! or hold a full `ReorderingGrid`.

use std::marker::PhantomData;

use stencil_grid::CellStorage;
use stencil_matrix::{Entry, SparseMatrix};

/// Read-side neighborhood proxy, positioned at a physical row.
///
/// `weights()` enumerates that row's `(physical_col, weight)` pairs —
/// including zero-weight padding lanes, which are harmless to sum — and
/// `get` gathers a neighbor's value by physical column. Padding self-refs
/// may point outside the region being updated; reading them is always
/// safe because storage is sized to the grid's full physical length
/// regardless of which indices the current call is updating.
pub struct OldHood<'a, C: Clone, S: CellStorage<C>> {
    storage: &'a S,
    matrix: &'a SparseMatrix,
    index: usize,
    _marker: PhantomData<C>,
}

impl<'a, C: Clone, S: CellStorage<C>> OldHood<'a, C, S> {
    /// Build a hood over `storage`/`matrix`, starting at physical `index`.
    pub fn new(storage: &'a S, matrix: &'a SparseMatrix, index: usize) -> Self {
        Self {
            storage,
            matrix,
            index,
            _marker: PhantomData,
        }
    }

    /// The physical index this hood currently reads from.
    pub fn index(&self) -> usize {
        self.index
    }

    /// This row's neighbor weights, in slot order.
    pub fn weights(&self) -> impl Iterator<Item = Entry> + '_ {
        self.matrix.row_at_physical(self.index)
    }

    /// The matrix's chunk width `C` — the natural lane width for a
    /// vectorized `update_line_x` built on [`crate::peeler`].
    pub fn chunk_width(&self) -> usize {
        self.matrix.chunk_width()
    }

    /// Read a neighbor's value by physical column index.
    pub fn get(&self, physical_col: usize) -> C {
        self.storage.get(physical_col)
    }

    /// Advance to the next physical row.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Advance by `n` physical rows.
    pub fn advance_by(&mut self, n: usize) {
        self.index += n;
    }
}

/// Write-side neighborhood proxy.
///
/// Results are buffered rather than written straight into the new grid's
/// storage, so that a Streak computed on a worker thread can be handed
/// back and committed on the calling thread without the two sharing
/// mutable access to the same storage.
pub struct NewHood<'a, C: Clone> {
    results: &'a mut Vec<C>,
    index: usize,
}

impl<'a, C: Clone> NewHood<'a, C> {
    /// Build a hood writing into `results`, starting at physical `index`.
    pub fn new(results: &'a mut Vec<C>, index: usize) -> Self {
        Self { results, index }
    }

    /// The physical index the next `set` will be recorded at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Record the cell value for the current index.
    pub fn set(&mut self, cell: C) {
        self.results.push(cell);
    }

    /// Advance to the next physical row.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Advance by `n` physical rows.
    pub fn advance_by(&mut self, n: usize) {
        self.index += n;
    }
}
