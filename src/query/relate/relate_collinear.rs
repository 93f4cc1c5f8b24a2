use crate::query::relate::{RelateError, RelateTolerances, SegmentRelation};
use crate::shape::Segment;
use crate::utils::{dominant_axis, AxisInterval};

/// Resolves the relation between two segments known to share one supporting
/// line.
///
/// Both segments are projected onto their dominant axis and the relation is
/// read off the ordering of the two projected intervals.
pub(super) fn relate_collinear(
    seg1: &Segment,
    seg2: &Segment,
    tolerances: RelateTolerances,
) -> SegmentRelation {
    let axis = dominant_axis(seg1, seg2);
    let i1 = AxisInterval::new(seg1, axis);
    let i2 = AxisInterval::new(seg2, axis);

    if tolerances.smaller(i1.hi, i2.lo) || tolerances.smaller(i2.hi, i1.lo) {
        return SegmentRelation::Disjoint;
    }

    let opposite = i1.swapped != i2.swapped;
    let eq_ll = tolerances.approx_eq(i1.lo, i2.lo);
    let eq_hh = tolerances.approx_eq(i1.hi, i2.hi);

    if eq_ll && eq_hh {
        return SegmentRelation::Equal { opposite };
    }

    // A single shared endpoint at the junction of the two intervals.
    if tolerances.approx_eq(i1.hi, i2.lo) && !eq_ll && !eq_hh {
        return SegmentRelation::CollinearTouch {
            point: i1.hi_point,
            arrival1: if i1.swapped { 0 } else { -1 },
            arrival2: if i2.swapped { -1 } else { 0 },
        };
    }

    if tolerances.approx_eq(i1.lo, i2.hi) && !eq_ll && !eq_hh {
        return SegmentRelation::CollinearTouch {
            point: i1.lo_point,
            arrival1: if i1.swapped { -1 } else { 0 },
            arrival2: if i2.swapped { 0 } else { -1 },
        };
    }

    if eq_ll != eq_hh {
        // One endpoint shared and the other inside: the shorter segment owns
        // the overlapped interval.
        let owner_is_first = if eq_ll {
            tolerances.smaller(i1.hi, i2.hi)
        } else {
            tolerances.larger(i1.lo, i2.lo)
        };
        let (owner, owner_interval) = if owner_is_first {
            (seg1, &i1)
        } else {
            (seg2, &i2)
        };
        let from_end = if eq_hh {
            !owner_interval.swapped
        } else {
            owner_interval.swapped
        };
        let (arrival1, arrival2) = if eq_hh {
            (
                if i1.swapped { 0 } else { -1 },
                if i2.swapped { 0 } else { -1 },
            )
        } else {
            (
                if i1.swapped { -1 } else { 0 },
                if i2.swapped { -1 } else { 0 },
            )
        };

        return SegmentRelation::CollinearOverlapBoundary {
            owner: *owner,
            owner_is_first,
            arrival1,
            arrival2,
            from_end,
        };
    }

    let within1 = tolerances.larger(i1.lo, i2.lo) && tolerances.smaller(i1.hi, i2.hi);
    let within2 = tolerances.larger(i2.lo, i1.lo) && tolerances.smaller(i2.hi, i1.hi);

    if within1 || within2 {
        let first_within_second = if within1 && within2 {
            // If the fuzzy orderings nest both ways, keep the shorter
            // segment as the contained one.
            seg1.length() <= seg2.length()
        } else {
            within1
        };
        let contained = if first_within_second { *seg1 } else { *seg2 };

        return SegmentRelation::CollinearContains {
            contained,
            first_within_second,
            opposite,
        };
    }

    // A proper partial overlap runs from the larger low end to the smaller
    // high end.
    let (lo_point, lo_val) = if i1.lo > i2.lo {
        (i1.lo_point, i1.lo)
    } else {
        (i2.lo_point, i2.lo)
    };
    let (hi_point, hi_val) = if i1.hi < i2.hi {
        (i1.hi_point, i1.hi)
    } else {
        (i2.hi_point, i2.hi)
    };

    if lo_val.is_finite() && hi_val.is_finite() && lo_val < hi_val {
        return SegmentRelation::CollinearOverlap {
            point1: lo_point,
            point2: hi_point,
            dir1: if i1.swapped { -1 } else { 1 },
            dir2: if i2.swapped { -1 } else { 1 },
            opposite,
        };
    }

    log::error!(
        "Inconsistent collinear interval ordering for segments {:?} and {:?}.",
        seg1,
        seg2
    );
    SegmentRelation::Error(RelateError::CollinearResolution)
}
