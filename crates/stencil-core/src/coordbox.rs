//! Axis-aligned boxes over the lattice.

use crate::coord::Coord;
use crate::error::GeometryError;
use crate::streak::Streak;

/// An axis-aligned box: an `origin` plus nonnegative `dimensions`.
///
/// Iteration yields every interior `Coord<D>` in row-major order (`x`
/// varies fastest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CoordBox<const D: usize> {
    origin: Coord<D>,
    dimensions: Coord<D>,
}

impl<const D: usize> CoordBox<D> {
    /// Construct a box from an origin and dimensions.
    ///
    /// Returns `Err(GeometryError::NegativeDimension)` if any dimension is
    /// negative.
    pub fn new(origin: Coord<D>, dimensions: Coord<D>) -> Result<Self, GeometryError> {
        for axis in 0..D {
            if dimensions[axis] < 0 {
                return Err(GeometryError::NegativeDimension {
                    axis,
                    value: dimensions[axis],
                });
            }
        }
        Ok(Self { origin, dimensions })
    }

    /// The box's origin (minimum corner, inclusive).
    pub fn origin(&self) -> Coord<D> {
        self.origin
    }

    /// The box's per-axis extents.
    pub fn dimensions(&self) -> Coord<D> {
        self.dimensions
    }

    /// Total number of lattice points contained in the box.
    pub fn volume(&self) -> usize {
        (0..D)
            .map(|axis| self.dimensions[axis] as usize)
            .product()
    }

    /// Whether the box contains zero cells on any axis.
    pub fn is_empty(&self) -> bool {
        (0..D).any(|axis| self.dimensions[axis] == 0)
    }

    /// Whether `coord` lies within `[origin, origin + dimensions)`.
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        (0..D).all(|axis| {
            coord[axis] >= self.origin[axis]
                && coord[axis] < self.origin[axis] + self.dimensions[axis]
        })
    }

    /// Decompose the box into one `Streak` per row (all axes but `x` fixed).
    ///
    /// Empty boxes yield no streaks.
    pub fn streaks(&self) -> Vec<Streak<D>> {
        if self.is_empty() {
            return Vec::new();
        }
        let end_x = self.origin[0] + self.dimensions[0];
        let mut rows: Vec<Coord<D>> = vec![self.origin];
        for axis in 1..D {
            let extent = self.dimensions[axis];
            let mut next = Vec::with_capacity(rows.len() * extent.max(1) as usize);
            for row in &rows {
                for k in 0..extent {
                    let mut c = *row;
                    c[axis] = self.origin[axis] + k;
                    next.push(c);
                }
            }
            rows = next;
        }
        rows.into_iter()
            .map(|start| Streak::new(start, end_x).expect("non-empty box yields non-empty streak"))
            .collect()
    }

    /// Iterate over every interior `Coord<D>`, row-major (`x` fastest).
    pub fn iter(&self) -> impl Iterator<Item = Coord<D>> + '_ {
        self.streaks().into_iter().flat_map(|s| s.iter().collect::<Vec<_>>().into_iter())
    }
}
