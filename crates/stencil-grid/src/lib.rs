//! AoS/SoA cell storage reordered to match a SELL-C-σ matrix's row
//! permutation, and logical-coordinate access over it.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod storage;

pub use error::GridError;
pub use grid::{AosGrid, MatrixId, ReorderingGrid, SoaGrid};
pub use storage::{AosStorage, CellStorage, SoaCell, SoaStorage};
