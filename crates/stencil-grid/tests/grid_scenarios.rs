use stencil_core::{Coord, CoordBox, Streak};
use stencil_grid::{AosGrid, MatrixId, ReorderingGrid, SoaCell, SoaGrid};
use stencil_matrix::SparseMatrixBuilder;
use stencil_region::Region;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Scalar(f32);

impl SoaCell for Scalar {
    const COMPONENTS: usize = 1;

    fn write_components(&self, out: &mut [f32]) {
        out[0] = self.0;
    }

    fn read_components(components: &[f32]) -> Self {
        Self(components[0])
    }
}

// DIM=150, every even-indexed row has a single self-weight entry; every
// odd row is empty. Mirrors the even-column matrix used for scenario 1.
fn even_column_matrix(dim: usize) -> stencil_matrix::SparseMatrix {
    let mut b = SparseMatrixBuilder::new(dim);
    for r in (0..dim).step_by(2) {
        b.insert(r, r, 1.0).unwrap();
    }
    b.finalize(4, 32).unwrap()
}

#[test]
fn scenario_even_column_matrix_round_trips_through_aos_grid() {
    const DIM: usize = 150;
    let shape = CoordBox::<1>::new(Coord::x1(0), Coord::x1(DIM as i32)).unwrap();
    let mut grid: AosGrid<1, i32> = ReorderingGrid::new(shape, 0);
    let matrix = even_column_matrix(DIM);
    grid.set_weights(MatrixId(0), matrix).unwrap();

    for r in 0..DIM {
        grid.set(&Coord::x1(r as i32), r as i32).unwrap();
    }
    for r in 0..DIM {
        assert_eq!(grid.get(&Coord::x1(r as i32)), r as i32);
    }
}

#[test]
fn scenario_lower_triangular_matrix_on_soa_grid() {
    const DIM: usize = 150;
    let shape = CoordBox::<1>::new(Coord::x1(0), Coord::x1(DIM as i32)).unwrap();
    let mut grid: SoaGrid<1, Scalar> = ReorderingGrid::new(shape, Scalar(0.0));

    let mut b = SparseMatrixBuilder::new(DIM);
    for r in 0..DIM {
        for c in 0..=r {
            b.insert(r, c, 1.0).unwrap();
        }
    }
    let matrix = b.finalize(4, 32).unwrap();
    assert_eq!(matrix.row_len(DIM - 1), DIM);

    grid.set_weights(MatrixId(0), matrix.clone()).unwrap();
    for r in 0..DIM {
        grid.set(&Coord::x1(r as i32), Scalar(r as f32)).unwrap();
    }

    // Gather each row's weighted sum through the matrix directly against
    // physical storage, bypassing logical coordinates, exactly as the
    // update functor's scalar kernel path would.
    for r in 0..DIM {
        let physical_row = matrix.permutation()[r];
        let expected: f32 = matrix
            .row(r)
            .map(|(col, weight)| col as f32 * weight as f32)
            .sum();
        let gathered: f32 = matrix
            .row_at_physical(physical_row)
            .map(|entry| grid.get_physical(entry.col).0 * entry.weight as f32)
            .sum();
        assert!((gathered - expected).abs() < 1e-6);
    }
}

#[test]
fn remap_region_round_trip_over_a_full_matrix_span() {
    const DIM: usize = 64;
    let shape = CoordBox::<1>::new(Coord::x1(0), Coord::x1(DIM as i32)).unwrap();
    let mut grid: AosGrid<1, i32> = ReorderingGrid::new(shape, 0);
    let mut b = SparseMatrixBuilder::new(DIM);
    for r in 0..DIM {
        b.insert(r, r, 1.0).unwrap();
    }
    let matrix = b.finalize(8, 32).unwrap();
    let perm = matrix.permutation().to_vec();
    grid.set_weights(MatrixId(0), matrix).unwrap();

    let mut region = Region::<1>::new();
    region.insert(Streak::new(Coord::x1(0), DIM as i32).unwrap());
    let physical = grid.remap_region(&region);

    assert_eq!(physical.size(), DIM);
    let mut expected: Vec<i32> = perm.iter().map(|&p| p as i32).collect();
    expected.sort_unstable();
    let mut got: Vec<i32> = physical.coords().map(|c| c.x()).collect();
    got.sort_unstable();
    assert_eq!(got, expected);
}
