//! The top-level update functor.

use stencil_core::Streak;
use stencil_grid::{CellStorage, MatrixId, ReorderingGrid};
use stencil_matrix::SparseMatrix;
use stencil_region::Region;

use crate::capabilities::CellCapabilities;
use crate::concurrency::ConcurrencySpec;
use crate::error::UpdateError;
use crate::hood::{NewHood, OldHood};
use crate::model::Model;

/// Compute every cell in one physical Streak, returning its results in
/// index order (caller knows the Streak's starting physical index and can
/// zip them back together).
fn process_streak<M, S>(
    streak: Streak<1>,
    storage: &S,
    matrix: &SparseMatrix,
    caps: CellCapabilities,
    nano_step: u32,
) -> Vec<M::Cell>
where
    M: Model,
    S: CellStorage<M::Cell>,
{
    let start = streak.start.x() as usize;
    let end = streak.end_x as usize;
    let mut results = Vec::with_capacity(end - start);

    if caps.has_update_line_x {
        let mut old = OldHood::new(storage, matrix, start);
        let mut new = NewHood::new(&mut results, start);
        M::update_line_x(&mut new, end, &mut old, nano_step);
    } else {
        let mut old = OldHood::new(storage, matrix, start);
        while old.index() < end {
            results.push(M::update(&old, nano_step));
            old.advance();
        }
    }

    results
}

/// Update every cell named by `region` (in logical coordinates) into
/// `grid_new`, reading neighbor contributions from `grid_old` through the
/// matrix registered under `matrix_id`.
///
/// `region` is remapped to physical index space via `grid_old`, then
/// processed Streak by Streak. `concurrency.any_parallel()` forks one
/// worker thread per physical Streak via `std::thread::scope`; each
/// worker only reads `grid_old` and writes to its own result buffer, and
/// the results are committed into `grid_new` sequentially on the calling
/// thread afterward, so the four `(outer_parallel, inner_parallel)`
/// combinations are guaranteed to commit writes in the same order and
/// therefore produce identical `grid_new` contents.
pub fn update<const D: usize, M, S>(
    region: &Region<D>,
    grid_old: &ReorderingGrid<D, M::Cell, S>,
    grid_new: &mut ReorderingGrid<D, M::Cell, S>,
    matrix_id: MatrixId,
    nano_step: u32,
    concurrency: ConcurrencySpec,
) -> Result<(), UpdateError>
where
    M: Model,
    M::Cell: Send,
    S: CellStorage<M::Cell> + Sync,
{
    let caps = M::capabilities();
    if !caps.any() {
        return Err(UpdateError::ModelCapabilityMissing);
    }

    let matrix = grid_old.matrix(matrix_id)?;
    let phys_region = grid_old.remap_region(region);
    let streaks: Vec<Streak<1>> = phys_region.streaks().collect();
    let storage = grid_old.storage();

    let writes: Vec<(usize, Vec<M::Cell>)> = if concurrency.any_parallel() && streaks.len() > 1 {
        std::thread::scope(|scope| {
            let handles: Vec<_> = streaks
                .iter()
                .map(|&streak| {
                    let start = streak.start.x() as usize;
                    scope
                        .spawn(move || (start, process_streak::<M, S>(streak, storage, matrix, caps, nano_step)))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().map_err(|_| UpdateError::KernelFailure("update kernel panicked".to_string())))
                .collect::<Result<Vec<_>, _>>()
        })?
    } else {
        streaks
            .iter()
            .map(|&streak| {
                let start = streak.start.x() as usize;
                (start, process_streak::<M, S>(streak, storage, matrix, caps, nano_step))
            })
            .collect()
    };

    for (start, cells) in writes {
        for (offset, cell) in cells.into_iter().enumerate() {
            grid_new.set_physical(start + offset, cell);
        }
    }
    Ok(())
}
