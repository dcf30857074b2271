//! Minimal weighted-sum cell models shared by the workspace's tests.
//!
//! These mirror the throwaway fixtures a stencil test suite typically
//! keeps around: a cell whose `update` is "sum of weighted neighbor
//! values", in both an AoS form implementing the per-cell kernel and an
//! SoA form implementing only the vectorized kernel.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use stencil_grid::{CellStorage, SoaCell};
use stencil_update::{peel, CellCapabilities, Model, NewHood, OldHood};

/// An AoS test cell: `value` is a fixed marker seeded by the test, `sum`
/// is the weighted accumulation `update` computes from neighbor values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleTestCell {
    /// Fixed marker value, unchanged across updates.
    pub value: f64,
    /// Weighted sum of neighbor `value`s, recomputed every update.
    pub sum: f64,
}

impl SimpleTestCell {
    /// A cell seeded with `value` and zero accumulated sum.
    pub fn new(value: f64) -> Self {
        Self { value, sum: 0.0 }
    }
}

impl Model for SimpleTestCell {
    type Cell = SimpleTestCell;

    fn capabilities() -> CellCapabilities {
        CellCapabilities::per_cell_only()
    }

    fn update<S: CellStorage<Self::Cell>>(old: &OldHood<'_, Self::Cell, S>, _nano_step: u32) -> Self::Cell {
        let mut sum = 0.0;
        for entry in old.weights() {
            sum += old.get(entry.col).value * entry.weight;
        }
        let value = old.get(old.index()).value;
        Self::Cell { value, sum }
    }
}

/// An SoA test cell: same semantics as [`SimpleTestCell`], but advertises
/// only the vectorized kernel, exercising the loop peeler the way a real
/// SIMD-backed model would.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimpleSoaTestCell {
    /// Fixed marker value, unchanged across updates.
    pub value: f64,
    /// Weighted sum of neighbor `value`s, recomputed every update.
    pub sum: f64,
}

impl SimpleSoaTestCell {
    /// A cell seeded with `value` and zero accumulated sum.
    pub fn new(value: f64) -> Self {
        Self { value, sum: 0.0 }
    }
}

impl SoaCell for SimpleSoaTestCell {
    const COMPONENTS: usize = 2;

    fn write_components(&self, out: &mut [f32]) {
        out[0] = self.value as f32;
        out[1] = self.sum as f32;
    }

    fn read_components(components: &[f32]) -> Self {
        Self {
            value: components[0] as f64,
            sum: components[1] as f64,
        }
    }
}

impl Model for SimpleSoaTestCell {
    type Cell = SimpleSoaTestCell;

    fn capabilities() -> CellCapabilities {
        CellCapabilities::line_only()
    }

    fn update_line_x<S: CellStorage<Self::Cell>>(
        new: &mut NewHood<'_, Self::Cell>,
        index_end: usize,
        old: &mut OldHood<'_, Self::Cell, S>,
        _nano_step: u32,
    ) {
        let lane_width = old.chunk_width();
        for seg in peel(old.index(), index_end, lane_width) {
            // The reference corpus carries no SIMD crate, so the "vector
            // body" segment is processed the same scalar way as head/tail;
            // only the peeler's structural contract is exercised here.
            for _ in seg.start..seg.end {
                let mut sum = 0.0;
                for entry in old.weights() {
                    sum += old.get(entry.col).value * entry.weight;
                }
                let value = old.get(old.index()).value;
                new.set(Self::Cell { value, sum });
                old.advance();
                new.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_grid::AosStorage;
    use stencil_matrix::SparseMatrixBuilder;

    #[test]
    fn simple_test_cell_sums_single_self_weight() {
        let mut b = SparseMatrixBuilder::new(3);
        b.insert(0, 0, 1.0).unwrap();
        let matrix = b.finalize(2, 2).unwrap();
        let storage = AosStorage::<SimpleTestCell>::with_edge(3, SimpleTestCell::new(0.0));

        let physical_row = matrix.permutation()[0];
        let old = OldHood::new(&storage, &matrix, physical_row);
        let result = SimpleTestCell::update(&old, 0);
        assert_eq!(result.sum, 0.0);
    }
}
