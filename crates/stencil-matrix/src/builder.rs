//! Triple-insertion builder for `SparseMatrix`.

use crate::error::MatrixError;
use crate::matrix::{Chunk, SparseMatrix};

/// Accumulates `(row, col, weight)` triples before finalizing into a
/// SELL-C-σ `SparseMatrix`.
///
/// Insertion order within a row is preserved — `SparseMatrix::row` replays
/// entries in the order they were inserted, which is what makes the
/// round-trip property (insert → finalize → enumerate → re-insert →
/// finalize → identical matrix) hold.
#[derive(Clone, Debug)]
pub struct SparseMatrixBuilder {
    row_count: usize,
    rows: Vec<Vec<(usize, f64)>>,
}

impl SparseMatrixBuilder {
    /// Create a builder for a matrix with `row_count` rows (and, since the
    /// weight matrix is square over the cell index space, `row_count`
    /// valid column indices).
    pub fn new(row_count: usize) -> Self {
        Self {
            row_count,
            rows: vec![Vec::new(); row_count],
        }
    }

    /// Declared row count.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Insert a `(row, col, weight)` triple.
    pub fn insert(&mut self, row: usize, col: usize, weight: f64) -> Result<(), MatrixError> {
        if row >= self.row_count {
            return Err(MatrixError::RowOutOfBounds {
                row,
                row_count: self.row_count,
            });
        }
        if col >= self.row_count {
            return Err(MatrixError::ColOutOfBounds {
                col,
                row_count: self.row_count,
            });
        }
        self.rows[row].push((col, weight));
        Ok(())
    }

    /// Finalize: compute the σ-local row permutation and pad chunks.
    ///
    /// `chunk_width` (`C`) must be nonzero. `sigma` (`σ`) must be a power
    /// of two and a multiple of `chunk_width`.
    pub fn finalize(self, chunk_width: usize, sigma: usize) -> Result<SparseMatrix, MatrixError> {
        if chunk_width == 0 {
            return Err(MatrixError::InvalidConfig {
                reason: "chunk_width must be nonzero".into(),
            });
        }
        if sigma == 0 || !sigma.is_power_of_two() {
            return Err(MatrixError::InvalidConfig {
                reason: format!("sigma must be a positive power of two, got {sigma}"),
            });
        }
        if sigma % chunk_width != 0 {
            return Err(MatrixError::InvalidConfig {
                reason: format!(
                    "sigma ({sigma}) must be a multiple of chunk_width ({chunk_width})"
                ),
            });
        }

        let row_count = self.row_count;
        let lengths: Vec<usize> = self.rows.iter().map(|r| r.len()).collect();

        // Step 1: σ-local stable sort descending by row length, producing
        // the permutation (logical row -> physical position).
        let mut permutation = vec![0usize; row_count];
        let mut physical = 0usize;
        let mut window_start = 0usize;
        while window_start < row_count {
            let window_end = (window_start + sigma).min(row_count);
            let mut window_rows: Vec<usize> = (window_start..window_end).collect();
            window_rows.sort_by(|&a, &b| lengths[b].cmp(&lengths[a]));
            for logical_row in window_rows {
                permutation[logical_row] = physical;
                physical += 1;
            }
            window_start = window_end;
        }

        let mut inverse_permutation = vec![0usize; row_count];
        for (logical_row, &phys) in permutation.iter().enumerate() {
            inverse_permutation[phys] = logical_row;
        }

        // Step 2/3: slice physical rows into chunks of `chunk_width`,
        // padding each to Wc = max real row length in the chunk.
        let num_chunks = row_count.div_ceil(chunk_width);
        let mut chunks = Vec::with_capacity(num_chunks);
        for ci in 0..num_chunks {
            let chunk_base = ci * chunk_width;
            let real_rows = chunk_width.min(row_count.saturating_sub(chunk_base));
            let wc = (0..real_rows)
                .map(|lane| lengths[inverse_permutation[chunk_base + lane]])
                .max()
                .unwrap_or(0);

            let mut cols = vec![0usize; wc * chunk_width];
            let mut weights = vec![0f64; wc * chunk_width];
            for lane in 0..real_rows {
                let physical_row = chunk_base + lane;
                let logical_row = inverse_permutation[physical_row];
                let entries = &self.rows[logical_row];
                for slot in 0..wc {
                    let (col, weight) = entries
                        .get(slot)
                        .copied()
                        .unwrap_or((logical_row, 0.0));
                    let phys_col = if slot < entries.len() {
                        permutation[col]
                    } else {
                        // Neutral self-reference padding: weight is 0 so
                        // the gather contributes nothing regardless of
                        // which in-range physical index it names.
                        physical_row
                    };
                    cols[slot * chunk_width + lane] = phys_col;
                    weights[slot * chunk_width + lane] = weight;
                }
            }
            chunks.push(Chunk { wc, cols, weights });
        }

        Ok(SparseMatrix {
            row_count,
            chunk_width,
            sigma,
            permutation,
            inverse_permutation,
            row_lengths: lengths,
            chunks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_power_of_two_sigma() {
        let b = SparseMatrixBuilder::new(4);
        assert!(matches!(
            b.finalize(2, 3),
            Err(MatrixError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn accepts_sigma_that_is_a_multiple_of_chunk_width() {
        let b = SparseMatrixBuilder::new(4);
        assert!(b.finalize(4, 8).is_ok());
    }

    #[test]
    fn rejects_sigma_not_multiple_of_chunk_width() {
        let b = SparseMatrixBuilder::new(4);
        assert!(matches!(
            b.finalize(4, 2),
            Err(MatrixError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_triples() {
        let mut b = SparseMatrixBuilder::new(3);
        assert!(matches!(
            b.insert(3, 0, 1.0),
            Err(MatrixError::RowOutOfBounds { .. })
        ));
        assert!(matches!(
            b.insert(0, 3, 1.0),
            Err(MatrixError::ColOutOfBounds { .. })
        ));
    }
}
