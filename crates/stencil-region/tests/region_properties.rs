//! Property tests for `Region` invariants.

use proptest::prelude::*;
use stencil_core::{Coord, Streak};
use stencil_region::Region;

fn arb_streak_1d() -> impl Strategy<Value = Streak<1>> {
    (0i32..200, 1i32..20).prop_map(|(start, len)| {
        Streak::new(Coord::x1(start), start + len).unwrap()
    })
}

proptest! {
    /// After inserting any sequence of streaks, the region's streaks
    /// remain sorted, non-overlapping, and non-touching within each row.
    #[test]
    fn insert_preserves_sorted_disjoint_invariant(streaks in proptest::collection::vec(arb_streak_1d(), 0..30)) {
        let mut region = Region::<1>::new();
        for s in &streaks {
            region.insert(*s);
        }
        let collected: Vec<_> = region.streaks().collect();
        for w in collected.windows(2) {
            prop_assert!(w[0].end_x < w[1].start.x(), "streaks must neither overlap nor touch");
        }
    }

    /// Every coordinate from every inserted streak is a member afterward.
    #[test]
    fn insert_implies_membership(streaks in proptest::collection::vec(arb_streak_1d(), 0..10)) {
        let mut region = Region::<1>::new();
        for s in &streaks {
            region.insert(*s);
        }
        for s in &streaks {
            for c in s.iter() {
                prop_assert!(region.count(&c));
            }
        }
    }

    /// `expand(1).size() - size()` equals the ghost-zone perimeter for a
    /// single streak: exactly 2 cells (one on each end) in 1D.
    #[test]
    fn expand_one_in_1d_always_adds_two(start in 0i32..200, len in 1i32..20) {
        let mut region = Region::<1>::new();
        region.insert(Streak::new(Coord::x1(start), start + len).unwrap());
        let delta = region.expand(1).size() - region.size();
        prop_assert_eq!(delta, 2);
    }

    /// Union is commutative and idempotent in size terms.
    #[test]
    fn union_is_commutative(a in arb_streak_1d(), b in arb_streak_1d()) {
        let mut ra = Region::<1>::new();
        ra.insert(a);
        let mut rb = Region::<1>::new();
        rb.insert(b);
        prop_assert_eq!(ra.union(&rb).size(), rb.union(&ra).size());
    }
}

#[test]
fn region_invariant_scenario_merges_three_streaks_into_one() {
    let mut region = Region::<1>::new();
    region.insert(Streak::new(Coord::x1(0), 5).unwrap());
    region.insert(Streak::new(Coord::x1(10), 15).unwrap());
    region.insert(Streak::new(Coord::x1(4), 11).unwrap());

    let streaks: Vec<_> = region.streaks().collect();
    assert_eq!(streaks.len(), 1);
    assert_eq!(streaks[0].start.x(), 0);
    assert_eq!(streaks[0].end_x, 15);
}
