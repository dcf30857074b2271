//! SELL-C-σ sparse matrix container and builder.
//!
//! A [`SparseMatrix`] stores per-row neighbor lists as fixed-width chunks
//! of `C` rows, with σ-local sorting and padding. Construction goes
//! through [`SparseMatrixBuilder`], which accumulates `(row, col, weight)`
//! triples and is consumed by `finalize` into a read-only matrix plus the
//! row permutation it induces.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod error;
pub mod matrix;

pub use builder::SparseMatrixBuilder;
pub use error::MatrixError;
pub use matrix::{Entry, Slot, SparseMatrix};
