//! Stencil: an unstructured parallel stencil update engine over a
//! SELL-C-σ sparse matrix.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all stencil sub-crates. For most users, adding `stencil` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stencil::prelude::*;
//! use stencil_test_utils::SimpleTestCell;
//!
//! // An 8-cell 1D lattice, each cell summing its own value (a trivial
//! // self-weight matrix) through the update functor.
//! let shape = CoordBox::<1>::new(Coord::x1(0), Coord::x1(8)).unwrap();
//! let mut grid_old: AosGrid<1, SimpleTestCell> = ReorderingGrid::new(shape, SimpleTestCell::new(0.0));
//! let mut grid_new: AosGrid<1, SimpleTestCell> = ReorderingGrid::new(shape, SimpleTestCell::new(0.0));
//!
//! let mut matrix = SparseMatrixBuilder::new(8);
//! for r in 0..8 {
//!     matrix.insert(r, r, 1.0).unwrap();
//!     grid_old.set(&Coord::x1(r as i32), SimpleTestCell::new(r as f64)).unwrap();
//! }
//! let matrix = matrix.finalize(4, 8).unwrap();
//! grid_old.set_weights(MatrixId(0), matrix.clone()).unwrap();
//! grid_new.set_weights(MatrixId(0), matrix).unwrap();
//!
//! let mut region = Region::<1>::new();
//! region.insert(Streak::new(Coord::x1(0), 8).unwrap());
//!
//! update::<1, SimpleTestCell, _>(
//!     &region,
//!     &grid_old,
//!     &mut grid_new,
//!     MatrixId(0),
//!     0,
//!     ConcurrencySpec::sequential(),
//! ).unwrap();
//!
//! assert_eq!(grid_new.get(&Coord::x1(3)).sum, 3.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`geometry`] | `stencil-core` | `Coord`, `CoordBox`, `Streak`, geometry errors |
//! | [`region`] | `stencil-region` | `Region`: the sorted-streak lattice point set |
//! | [`matrix`] | `stencil-matrix` | `SparseMatrix`, `SparseMatrixBuilder` (SELL-C-σ) |
//! | [`grid`] | `stencil-grid` | `ReorderingGrid`, `AosGrid`, `SoaGrid`, cell storage |
//! | [`update`] | `stencil-update` | The update functor, `Model`, neighborhood proxies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Lattice coordinates and geometry primitives (`stencil-core`).
pub use stencil_core as geometry;

/// The sorted-streak lattice point set (`stencil-region`).
pub use stencil_region as region;

/// The SELL-C-σ sparse matrix container and builder (`stencil-matrix`).
pub use stencil_matrix as matrix;

/// Reordered grid storage (`stencil-grid`).
pub use stencil_grid as grid;

/// The update functor, model trait, and neighborhood proxies
/// (`stencil-update`).
pub use stencil_update as update;

/// Common imports for typical stencil usage.
///
/// ```rust
/// use stencil::prelude::*;
/// ```
pub mod prelude {
    pub use stencil_core::{Coord, CoordBox, GeometryError, Streak};
    pub use stencil_region::Region;
    pub use stencil_matrix::{Entry, MatrixError, Slot, SparseMatrix, SparseMatrixBuilder};
    pub use stencil_grid::{
        AosGrid, AosStorage, CellStorage, GridError, MatrixId, ReorderingGrid, SoaCell, SoaGrid,
        SoaStorage,
    };
    pub use stencil_update::{
        peel, update, CellCapabilities, ConcurrencySpec, LoopPeeler, Model, NewHood, OldHood,
        Peel, PeelKind, UpdateError,
    };
}
