//! The reordering grid: logical-coordinate access over permuted storage.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use stencil_core::{Coord, CoordBox, Streak};
use stencil_matrix::SparseMatrix;
use stencil_region::Region;

use crate::error::GridError;
use crate::storage::{AosStorage, CellStorage, SoaCell, SoaStorage};

/// Identifies one of a grid's (possibly several) attached weight
/// matrices. A grid may host more than one SELL-C-σ matrix, provided they
/// all agree on the induced permutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MatrixId(pub u32);

impl fmt::Display for MatrixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MatrixId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A grid of `D`-dimensional cells, addressed logically by `Coord<D>` and
/// physically (for storage and stencil gathers) by the permutation `π`
/// induced by its attached SELL-C-σ matrices.
///
/// `S` is the storage backend — [`AosStorage`] or [`SoaStorage`] — chosen
/// independently of the permutation logic, which is identical either way.
pub struct ReorderingGrid<const D: usize, C: Clone, S: CellStorage<C>> {
    shape: CoordBox<D>,
    storage: S,
    /// `permutation[logical_index] = physical_index`. Identity until the
    /// first matrix is attached.
    permutation: Vec<usize>,
    inverse_permutation: Vec<usize>,
    permutation_adopted: bool,
    matrices: IndexMap<MatrixId, SparseMatrix>,
    edge: C,
    _marker: PhantomData<C>,
}

/// Array-of-structs reordering grid.
pub type AosGrid<const D: usize, C> = ReorderingGrid<D, C, AosStorage<C>>;

/// Struct-of-arrays reordering grid. `C` must implement [`SoaCell`].
pub type SoaGrid<const D: usize, C> = ReorderingGrid<D, C, SoaStorage<C>>;

impl<const D: usize, C: Clone, S: CellStorage<C>> ReorderingGrid<D, C, S> {
    /// Create a grid over `shape`, with every cell initialized to `edge`
    /// and an identity permutation (no matrix attached yet).
    pub fn new(shape: CoordBox<D>, edge: C) -> Self {
        let len = shape.volume();
        let storage = S::with_edge(len, edge.clone());
        Self {
            shape,
            storage,
            permutation: (0..len).collect(),
            inverse_permutation: (0..len).collect(),
            permutation_adopted: false,
            matrices: IndexMap::new(),
            edge,
            _marker: PhantomData,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.storage.len()
    }

    /// The grid's shape.
    pub fn shape(&self) -> &CoordBox<D> {
        &self.shape
    }

    /// The edge cell returned for out-of-bounds queries.
    pub fn edge_cell(&self) -> &C {
        &self.edge
    }

    fn logical_index(&self, coord: &Coord<D>) -> Option<usize> {
        if !self.shape.contains(coord) {
            return None;
        }
        let origin = self.shape.origin();
        let dims = self.shape.dimensions();
        let mut index = 0usize;
        let mut stride = 1usize;
        for axis in 0..D {
            let offset = (coord[axis] - origin[axis]) as usize;
            index += offset * stride;
            stride *= dims[axis].max(1) as usize;
        }
        Some(index)
    }

    /// Read the cell at a logical coordinate, applying `π`.
    ///
    /// Returns the edge cell if `coord` is out of bounds.
    pub fn get(&self, coord: &Coord<D>) -> C {
        match self.logical_index(coord) {
            Some(logical) => self.storage.get(self.permutation[logical]),
            None => self.edge.clone(),
        }
    }

    /// Write the cell at a logical coordinate, applying `π`.
    pub fn set(&mut self, coord: &Coord<D>, cell: C) -> Result<(), GridError> {
        let logical = self.logical_index(coord).ok_or(GridError::OutOfBounds)?;
        self.storage.set(self.permutation[logical], cell);
        Ok(())
    }

    /// Read a cell directly by physical index, bypassing the logical
    /// coordinate translation. Used by the update functor's neighborhood
    /// gathers, which already operate in physical index space.
    pub fn get_physical(&self, physical: usize) -> C {
        self.storage.get(physical)
    }

    /// Write a cell directly by physical index.
    pub fn set_physical(&mut self, physical: usize, cell: C) {
        self.storage.set(physical, cell);
    }

    /// Direct access to the backing storage, addressed by physical index.
    ///
    /// Used by the update functor to build neighborhood proxies without
    /// going through logical coordinates.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The logical-to-physical permutation (identity if no matrix has been
    /// attached yet).
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// The physical-to-logical inverse permutation.
    pub fn inverse_permutation(&self) -> &[usize] {
        &self.inverse_permutation
    }

    /// Attach a finalized SELL-C-σ matrix under `id`.
    ///
    /// The first matrix attached to a grid fixes `π`. Every subsequent
    /// matrix must induce the same permutation, or this returns
    /// `Err(GridError::InconsistentPermutation)`.
    pub fn set_weights(&mut self, id: MatrixId, matrix: SparseMatrix) -> Result<(), GridError> {
        if matrix.row_count() != self.cell_count() {
            return Err(GridError::MatrixSizeMismatch {
                cell_count: self.cell_count(),
                matrix_rows: matrix.row_count(),
            });
        }
        if self.permutation_adopted {
            if matrix.permutation() != self.permutation.as_slice() {
                return Err(GridError::InconsistentPermutation);
            }
        } else {
            self.permutation = matrix.permutation().to_vec();
            self.inverse_permutation = matrix.inverse_permutation().to_vec();
            self.permutation_adopted = true;
        }
        self.matrices.insert(id, matrix);
        Ok(())
    }

    /// Look up a previously attached matrix.
    pub fn matrix(&self, id: MatrixId) -> Result<&SparseMatrix, GridError> {
        self.matrices.get(&id).ok_or(GridError::UnknownMatrix)
    }

    /// Map a logical `Region<D>` into physical index space.
    ///
    /// The result is a flat `Region<1>` over physical indices: iterating
    /// it visits exactly `{ π(r) : r ∈ region }`, grouped into maximal
    /// contiguous physical streaks. A logical streak spanning many rows of
    /// `π` may become several disjoint physical streaks.
    pub fn remap_region(&self, region: &Region<D>) -> Region<1> {
        let mut physical = Region::<1>::new();
        for coord in region.coords() {
            if let Some(logical) = self.logical_index(&coord) {
                let p = self.permutation[logical] as i32;
                physical.insert(
                    Streak::new(Coord::<1>::x1(p), p + 1).expect("p < p + 1 always holds"),
                );
            }
        }
        physical
    }
}
