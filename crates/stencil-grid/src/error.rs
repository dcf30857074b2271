//! Grid access and permutation errors.

use std::fmt;

/// Errors arising from grid construction or access.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A coordinate fell outside the grid's shape.
    OutOfBounds,
    /// A matrix was attached whose row permutation conflicts with one
    /// already adopted by this grid.
    InconsistentPermutation,
    /// A matrix's row count does not match the grid's cell count.
    MatrixSizeMismatch {
        /// The grid's cell count.
        cell_count: usize,
        /// The matrix's row count.
        matrix_rows: usize,
    },
    /// No matrix is registered under the requested id.
    UnknownMatrix,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => write!(f, "coordinate out of bounds"),
            Self::InconsistentPermutation => {
                write!(f, "matrix induces a permutation inconsistent with one already adopted")
            }
            Self::MatrixSizeMismatch {
                cell_count,
                matrix_rows,
            } => write!(
                f,
                "matrix has {matrix_rows} rows but grid has {cell_count} cells"
            ),
            Self::UnknownMatrix => write!(f, "no matrix registered under that id"),
        }
    }
}

impl std::error::Error for GridError {}
