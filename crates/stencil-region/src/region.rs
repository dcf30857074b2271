//! `Region<D>`: a sorted-streak lattice point set.

use std::collections::BTreeMap;

use stencil_core::{Coord, Streak};

/// A set of lattice points, represented as a sorted collection of
/// non-overlapping, non-adjacent `Streak`s per row.
///
/// Rows are keyed by their non-`x` components (i.e. `(y, z, ...)`) and
/// iterated in the `Coord` lexicographic order. Within a row, streaks are
/// kept sorted ascending by `start.x` and are eagerly merged on insert so
/// that no two streaks in the same row overlap or touch.
#[derive(Clone, Debug, Default)]
pub struct Region<const D: usize> {
    rows: BTreeMap<Coord<D>, Vec<Streak<D>>>,
}

impl<const D: usize> Region<D> {
    /// An empty region.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    fn row_key(coord: &Coord<D>) -> Coord<D> {
        let mut key = *coord;
        key[0] = 0;
        key
    }

    /// Insert a streak, merging with overlapping or touching neighbors in
    /// the same row.
    ///
    /// Runs in `O(log R + k)` where `R` is the number of streaks currently
    /// in the affected row and `k` is the number of merges performed.
    pub fn insert(&mut self, streak: Streak<D>) {
        let key = Self::row_key(&streak.start);
        let row = self.rows.entry(key).or_default();
        Self::insert_into_row(row, streak);
    }

    fn insert_into_row(row: &mut Vec<Streak<D>>, mut new: Streak<D>) {
        // First index whose streak could overlap or touch `new` from the left.
        let start_idx = row.partition_point(|s| s.end_x < new.start.x());
        let mut end_idx = start_idx;
        while end_idx < row.len() && row[end_idx].start.x() <= new.end_x {
            new = new.merge(&row[end_idx]).unwrap_or(new);
            end_idx += 1;
        }
        row.splice(start_idx..end_idx, std::iter::once(new));
    }

    /// Insert every streak that decomposes a `CoordBox`.
    pub fn insert_box(&mut self, streaks: &[Streak<D>]) {
        for s in streaks {
            self.insert(*s);
        }
    }

    /// Whether `coord` is a member of this region.
    pub fn count(&self, coord: &Coord<D>) -> bool {
        let key = Self::row_key(coord);
        match self.rows.get(&key) {
            Some(row) => {
                let idx = row.partition_point(|s| s.end_x <= coord.x());
                idx < row.len() && row[idx].contains(coord)
            }
            None => false,
        }
    }

    /// Total number of lattice points in the region.
    pub fn size(&self) -> usize {
        self.rows.values().flatten().map(|s| s.len()).sum()
    }

    /// Whether the region contains no points.
    pub fn is_empty(&self) -> bool {
        self.rows.values().all(|r| r.is_empty())
    }

    /// Iterate over every streak, in ascending row-then-x order.
    pub fn streaks(&self) -> impl Iterator<Item = Streak<D>> + '_ {
        self.rows.values().flatten().copied()
    }

    /// Iterate over every coordinate, in ascending row-then-x order.
    pub fn coords(&self) -> impl Iterator<Item = Coord<D>> + '_ {
        self.streaks().flat_map(|s| s.iter().collect::<Vec<_>>().into_iter())
    }

    /// Number of distinct rows with at least one streak.
    pub fn row_count(&self) -> usize {
        self.rows.values().filter(|r| !r.is_empty()).count()
    }

    /// Union with another region: every point in `self` or `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut out = self.clone();
        for s in other.streaks() {
            out.insert(s);
        }
        out
    }

    /// Intersection with another region: points in both `self` and `other`.
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Self::new();
        for (key, row) in &self.rows {
            let Some(other_row) = other.rows.get(key) else {
                continue;
            };
            let mut i = 0;
            let mut j = 0;
            while i < row.len() && j < other_row.len() {
                let a = &row[i];
                let b = &other_row[j];
                let lo = a.start.x().max(b.start.x());
                let hi = a.end_x.min(b.end_x);
                if lo < hi {
                    let mut start = a.start;
                    start[0] = lo;
                    out.insert(Streak::new(start, hi).expect("lo < hi by construction"));
                }
                if a.end_x < b.end_x {
                    i += 1;
                } else {
                    j += 1;
                }
            }
        }
        out
    }

    /// The Minkowski sum of this region with the ℓ∞ ball of radius `k`.
    ///
    /// For `k == 0` this returns a copy of `self`. The ℓ∞ ball is a cube,
    /// so dilating a single streak independently offsets each non-`x` axis
    /// by any value in `[-k, k]` and extends the streak's `x` range by `k`
    /// on both ends; the union of these dilated streaks over the whole
    /// region equals the Minkowski sum (dilation distributes over union).
    pub fn expand(&self, k: i32) -> Self {
        if k == 0 {
            return self.clone();
        }
        let mut out = Self::new();
        for s in self.streaks() {
            for offset in cube_offsets::<D>(k) {
                let mut start = s.start + offset;
                start[0] = s.start.x() - k;
                let end_x = s.end_x + k;
                out.insert(Streak::new(start, end_x).expect("end_x - start.x >= 2k + len > 0"));
            }
        }
        out
    }
}

/// Enumerate every offset vector whose `x` component is `0` and whose
/// remaining components independently range over `[-k, k]`.
fn cube_offsets<const D: usize>(k: i32) -> Vec<Coord<D>> {
    let mut offsets = vec![Coord::<D>::origin()];
    for axis in 1..D {
        let mut next = Vec::with_capacity(offsets.len() * (2 * k as usize + 1));
        for o in &offsets {
            for d in -k..=k {
                let mut c = *o;
                c[axis] = d;
                next.push(c);
            }
        }
        offsets = next;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserting_overlapping_streaks_merges_into_one() {
        let mut r = Region::<1>::new();
        r.insert(Streak::new(Coord::x1(0), 5).unwrap());
        r.insert(Streak::new(Coord::x1(10), 15).unwrap());
        r.insert(Streak::new(Coord::x1(4), 11).unwrap());

        let streaks: Vec<_> = r.streaks().collect();
        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].start.x(), 0);
        assert_eq!(streaks[0].end_x, 15);
    }

    #[test]
    fn size_sums_streak_lengths() {
        let mut r = Region::<1>::new();
        r.insert(Streak::new(Coord::x1(10), 30).unwrap());
        r.insert(Streak::new(Coord::x1(40), 60).unwrap());
        r.insert(Streak::new(Coord::x1(100), 150).unwrap());
        assert_eq!(r.size(), 20 + 20 + 50);
    }

    #[test]
    fn count_reflects_membership() {
        let mut r = Region::<1>::new();
        r.insert(Streak::new(Coord::x1(10), 30).unwrap());
        assert!(r.count(&Coord::x1(15)));
        assert!(!r.count(&Coord::x1(35)));
    }

    #[test]
    fn expand_by_one_in_1d_adds_two_cells_per_streak() {
        let mut r = Region::<1>::new();
        r.insert(Streak::new(Coord::x1(10), 20).unwrap());
        let before = r.size();
        let after = r.expand(1).size();
        assert_eq!(after - before, 2);
    }

    #[test]
    fn expand_by_one_in_2d_box_matches_ghost_zone_count() {
        // A 3x3 block of interior cells expanded by 1 gains a ring of
        // 16 cells (5x5 minus 3x3 = 25 - 9).
        let mut r = Region::<2>::new();
        for y in 0..3 {
            r.insert(Streak::new(Coord::xy(0, y), 3).unwrap());
        }
        let expanded = r.expand(1);
        assert_eq!(expanded.size() - r.size(), 16);
    }

    #[test]
    fn union_and_intersection() {
        let mut a = Region::<1>::new();
        a.insert(Streak::new(Coord::x1(0), 10).unwrap());
        let mut b = Region::<1>::new();
        b.insert(Streak::new(Coord::x1(5), 15).unwrap());

        let u = a.union(&b);
        assert_eq!(u.size(), 15);

        let i = a.intersection(&b);
        assert_eq!(i.size(), 5);
        assert!(i.count(&Coord::x1(7)));
        assert!(!i.count(&Coord::x1(2)));
    }

    #[test]
    fn row_count_counts_distinct_rows() {
        let mut r = Region::<2>::new();
        r.insert(Streak::new(Coord::xy(0, 0), 5).unwrap());
        r.insert(Streak::new(Coord::xy(0, 1), 5).unwrap());
        assert_eq!(r.row_count(), 2);
    }
}
