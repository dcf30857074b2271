//! Matrix construction errors.

use std::fmt;

/// Errors arising from `SparseMatrix` construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// `chunk_width` was zero, or `sigma` was not a positive power of two,
    /// or `sigma` was not a multiple of `chunk_width`.
    InvalidConfig {
        /// Human-readable description of the violated constraint.
        reason: String,
    },
    /// An inserted triple referenced a row index `>= row_count`.
    RowOutOfBounds {
        /// The offending row index.
        row: usize,
        /// The matrix's declared row count.
        row_count: usize,
    },
    /// An inserted triple referenced a column index `>= row_count`.
    ColOutOfBounds {
        /// The offending column index.
        col: usize,
        /// The matrix's declared row count.
        row_count: usize,
    },
    /// `finalize()` was called, or a row/chunk was queried, before
    /// construction completed (`NotFinalized`).
    NotFinalized,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid SELL-C-sigma config: {reason}"),
            Self::RowOutOfBounds { row, row_count } => {
                write!(f, "row index {row} out of bounds for {row_count} rows")
            }
            Self::ColOutOfBounds { col, row_count } => {
                write!(f, "column index {col} out of bounds for {row_count} rows")
            }
            Self::NotFinalized => write!(f, "matrix construction was not finalized"),
        }
    }
}

impl std::error::Error for MatrixError {}
