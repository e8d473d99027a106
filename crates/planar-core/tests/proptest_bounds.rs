//! Property-based invariant tests for the bounds family.
//!
//! 1. Every representation of the same region answers `within` identically.
//! 2. `within` agrees with the half-open interval definition on each axis.
//! 3. Overlap is symmetric and reflexive for non-empty regions.
//! 4. Empty regions contain and overlap nothing.
//! 5. Regions sharing a cell always overlap.
//! 6. Row-major and column-major iteration yield `area` distinct in-region
//!    points, the same set in both orders.
//! 7. Iterators reach the end sentinel after exactly `area` steps.

use std::collections::HashSet;

use planar_core::{
    Bounds, BoundsIterEnd, BoundsLike, Extents, FixedExtentsBounds, FixedOriginBounds,
    FixedOriginExtentsBounds, Indices,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn indices_strategy() -> impl Strategy<Value = Indices> {
    (-20isize..=20, -20isize..=20).prop_map(|(row, col)| Indices::new(row, col))
}

fn extents_strategy() -> impl Strategy<Value = Extents> {
    (0usize..=12, 0usize..=12).prop_map(|(rows, cols)| Extents::new(rows, cols))
}

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (indices_strategy(), extents_strategy()).prop_map(|(origin, extents)| Bounds::new(origin, extents))
}

fn non_empty_bounds_strategy() -> impl Strategy<Value = Bounds> {
    bounds_strategy().prop_filter("non-empty", |b| !b.is_empty())
}

fn axis_contains(origin: isize, len: usize, v: isize) -> bool {
    origin <= v && v < origin + len.cast_signed()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Representations agree
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fixed_extents_agrees_with_dynamic(origin in indices_strategy(), pt in indices_strategy()) {
        let fixed = FixedExtentsBounds::<5, 5>::new(origin);
        let dynamic = Bounds::new(origin, Extents::new(5, 5));
        prop_assert_eq!(fixed.within(pt), dynamic.within(pt));
        prop_assert!(fixed.same_region(&dynamic));
    }

    #[test]
    fn fixed_origin_agrees_with_dynamic(extents in extents_strategy(), pt in indices_strategy()) {
        let fixed = FixedOriginBounds::<1, 1>::new(extents);
        let dynamic = Bounds::new(Indices::new(1, 1), extents);
        prop_assert_eq!(fixed.within(pt), dynamic.within(pt));
    }

    #[test]
    fn fully_fixed_agrees_with_dynamic(pt in indices_strategy()) {
        let fixed = FixedOriginExtentsBounds::<-2, 3, 4, 7>::new();
        let dynamic = Bounds::new(Indices::new(-2, 3), Extents::new(4, 7));
        prop_assert_eq!(fixed.within(pt), dynamic.within(pt));
        prop_assert_eq!(fixed.to_bounds(), dynamic);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Containment is the product of two half-open intervals
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn within_matches_axis_intervals(b in bounds_strategy(), pt in indices_strategy()) {
        let o = b.origin();
        let e = b.extents();
        let expected = axis_contains(o.row, e.rows, pt.row) && axis_contains(o.col, e.cols, pt.col);
        prop_assert_eq!(b.within(pt), expected, "bounds={}, pt={}", b, pt);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Overlap is symmetric and reflexive
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overlap_symmetric(a in bounds_strategy(), b in bounds_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a), "a={}, b={}", a, b);
    }

    #[test]
    fn overlap_reflexive(a in non_empty_bounds_strategy()) {
        prop_assert!(a.overlaps(&a));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Empty regions are inert
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn empty_contains_and_overlaps_nothing(
        origin in indices_strategy(),
        len in 0usize..=12,
        other in bounds_strategy(),
        pt in indices_strategy(),
    ) {
        for empty in [
            Bounds::new(origin, Extents::new(0, len)),
            Bounds::new(origin, Extents::new(len, 0)),
        ] {
            prop_assert!(!empty.within(pt));
            prop_assert!(!empty.overlaps(&other));
            prop_assert!(!other.overlaps(&empty));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Sharing a cell implies overlap
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shared_cell_implies_overlap(
        a in non_empty_bounds_strategy(),
        b in non_empty_bounds_strategy(),
    ) {
        if a.row_major().any(|pt| b.within(pt)) {
            prop_assert!(a.overlaps(&b), "a={}, b={}", a, b);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Iteration covers the region exactly once
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn iteration_covers_region(b in bounds_strategy()) {
        let rows: Vec<_> = b.row_major().collect();
        let cols: Vec<_> = b.col_major().collect();
        prop_assert_eq!(rows.len(), b.extents().area());
        prop_assert_eq!(cols.len(), b.extents().area());
        prop_assert!(rows.iter().all(|&pt| b.within(pt)));

        let row_set: HashSet<_> = rows.into_iter().collect();
        let col_set: HashSet<_> = cols.into_iter().collect();
        prop_assert_eq!(row_set.len(), b.extents().area());
        prop_assert_eq!(row_set, col_set);
    }

    #[test]
    fn row_major_is_sorted(b in bounds_strategy()) {
        let rows: Vec<_> = b.row_major().collect();
        prop_assert!(rows.windows(2).all(|w| w[0] < w[1]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. End sentinel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sentinel_after_area_steps(b in bounds_strategy()) {
        let mut it = b.col_major();
        let mut steps = 0;
        while it != BoundsIterEnd {
            prop_assert_eq!(it.len(), b.extents().area() - steps);
            it.next();
            steps += 1;
        }
        prop_assert_eq!(steps, b.extents().area());
        prop_assert_eq!(it.next(), None);
    }
}
