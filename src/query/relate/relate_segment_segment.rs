use crate::math::{Point, PromotedReal, Real, Vector, DIM};
use crate::query::relate::relate_collinear::relate_collinear;
use crate::query::relate::{
    RelateError, RelatePolicy, RelateTolerances, SegmentRelation, SideInfo,
};
use crate::shape::Segment;
use crate::utils::AxisInterval;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Classifies the relation between two segments with the default tolerances.
///
/// See [`relate_segment_segment_with_tolerances`] for details on the
/// classification itself.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use relate2d::math::Point;
/// use relate2d::query::{relate_segment_segment, SegmentRelation};
/// use relate2d::shape::Segment;
///
/// let seg1 = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
/// let seg2 = Segment::new(Point::new(0.0, 10.0), Point::new(10.0, 0.0));
///
/// match relate_segment_segment(&seg1, &seg2) {
///     SegmentRelation::Cross { point, .. } => assert_eq!(point, Point::new(5.0, 5.0)),
///     relation => panic!("unexpected relation {:?}", relation),
/// }
/// # }
/// ```
pub fn relate_segment_segment(seg1: &Segment, seg2: &Segment) -> SegmentRelation {
    relate_segment_segment_with_tolerances(seg1, seg2, RelateTolerances::default())
}

/// Classifies the relation between two segments.
///
/// The classification is symmetric: swapping `seg1` and `seg2` yields the
/// same relation with the roles of the two segments exchanged.
///
/// All sidedness decisions are made from the four signed areas of the
/// segment endpoints relative to each other's supporting line. Borderline
/// side configurations that floating-point rounding can produce (both
/// endpoint pairs on one line without matching side flags, two distinct
/// alleged meeting points, a near-touch pushed entirely to one side) are
/// corrected before the relation is read off, so that classification close
/// to the tolerance band degrades to a touching or collinear relation
/// instead of flipping to [`SegmentRelation::Disjoint`].
pub fn relate_segment_segment_with_tolerances(
    seg1: &Segment,
    seg2: &Segment,
    tolerances: RelateTolerances,
) -> SegmentRelation {
    let degenerate1 = seg1.is_degenerate(tolerances.epsilon);
    let degenerate2 = seg2.is_degenerate(tolerances.epsilon);

    if degenerate1 && degenerate2 {
        // Two points: equal or nothing.
        return if tolerances.point_approx_eq(&seg1.a, &seg2.a) {
            SegmentRelation::Equal { opposite: false }
        } else {
            SegmentRelation::Disjoint
        };
    }

    let mut sides = SideInfo::new(seg1, seg2, tolerances.epsilon);
    sides = correct_collinearity(sides, degenerate1, degenerate2);
    sides = correct_meeting(seg1, seg2, sides, tolerances);
    sides = correct_same_side(seg1, seg2, sides, tolerances);

    if sides.same_side1() || sides.same_side2() {
        // The corrections already reclassified every borderline near-touch.
        return SegmentRelation::Disjoint;
    }

    if degenerate1 || degenerate2 {
        return SegmentRelation::Degenerate {
            point: if degenerate1 { seg1.a } else { seg2.a },
            first_is_point: degenerate1,
        };
    }

    if !sides.collinear() {
        let denom = promoted_perp(&seg1.scaled_direction(), &seg2.scaled_direction());

        if !tolerances.promoted_approx_eq(denom, 0.0) {
            let diff = seg2.a - seg1.a;
            let ratio1 = promoted_perp(&diff, &seg2.scaled_direction()) / denom;
            let ratio2 = promoted_perp(&diff, &seg1.scaled_direction()) / denom;
            return relate_non_collinear(seg1, seg2, &sides, ratio1, ratio2, tolerances);
        }
        // A vanishing determinant despite non-collinear side flags means the
        // supporting lines are parallel within rounding.
    }

    relate_collinear(seg1, seg2, tolerances)
}

/// Classifies the relation between two segments and hands the result to
/// `policy`, invoking exactly one of its callbacks.
pub fn relate_segment_segment_with_policy<P: RelatePolicy>(
    seg1: &Segment,
    seg2: &Segment,
    tolerances: RelateTolerances,
    policy: &mut P,
) -> P::Output {
    relate_segment_segment_with_tolerances(seg1, seg2, tolerances).dispatch(policy)
}

// If both endpoints of one segment lie on the other's supporting line, the
// segments share that line, so all four side flags must be zero. The check
// is skipped when the line provider is degenerate since its direction is
// meaningless.
fn correct_collinearity(sides: SideInfo, degenerate1: bool, degenerate2: bool) -> SideInfo {
    let only1 = sides.pair1_on() && !degenerate2 && !sides.pair2_on();
    let only2 = sides.pair2_on() && !degenerate1 && !sides.pair1_on();

    if only1 || only2 {
        log::debug!("Correcting mismatched side flags to collinear: {:?}.", sides);
        sides.forced_collinear()
    } else {
        sides
    }
}

// A meeting configuration with two distinct meeting points is impossible on
// crossing lines: two distinct points shared by both supporting lines mean
// the lines coincide.
fn correct_meeting(
    seg1: &Segment,
    seg2: &Segment,
    sides: SideInfo,
    tolerances: RelateTolerances,
) -> SideInfo {
    if let Some((i1, i2)) = sides.meeting() {
        let meet1 = endpoint(seg1, i1);
        let meet2 = endpoint(seg2, i2);

        if !tolerances.point_approx_eq(&meet1, &meet2) {
            log::debug!(
                "Distinct meeting points {:?} and {:?}, treating the segments as collinear.",
                meet1,
                meet2
            );
            return sides.forced_collinear();
        }
    }

    sides
}

// An endpoint resting on the other segment can come out flagged just off it,
// with both side flags of its segment equal. The lone zero flag sits in the
// opposite pair and names the endpoint carrying the touch; only when that
// endpoint falls inside the coordinate range of the same-side segment is the
// same-side endpoint with the smallest area magnitude put back on the line.
// An endpoint that is exactly on the line but beyond that range is a plain
// miss, not a rounded-away touch.
fn correct_same_side(
    seg1: &Segment,
    seg2: &Segment,
    sides: SideInfo,
    tolerances: RelateTolerances,
) -> SideInfo {
    if !sides.single_on() {
        return sides;
    }

    if sides.same_side1() {
        if let Some(on2) = sides.one_on2() {
            if point_in_ranges(seg1, &endpoint(seg2, on2), tolerances) {
                let i = if sides.areas1[0].abs() <= sides.areas1[1].abs() {
                    0
                } else {
                    1
                };
                log::debug!("Pulling endpoint {} of the first segment onto the other line.", i);
                return sides.with_side1_on(i);
            }
        }
    } else if sides.same_side2() {
        if let Some(on1) = sides.one_on1() {
            if point_in_ranges(seg2, &endpoint(seg1, on1), tolerances) {
                let i = if sides.areas2[0].abs() <= sides.areas2[1].abs() {
                    0
                } else {
                    1
                };
                log::debug!("Pulling endpoint {} of the second segment onto the other line.", i);
                return sides.with_side2_on(i);
            }
        }
    }

    sides
}

fn endpoint(seg: &Segment, i: usize) -> Point<Real> {
    if i == 0 {
        seg.a
    } else {
        seg.b
    }
}

fn ranges_disjoint(seg1: &Segment, seg2: &Segment, tolerances: RelateTolerances) -> bool {
    for axis in 0..DIM {
        let i1 = AxisInterval::new(seg1, axis);
        let i2 = AxisInterval::new(seg2, axis);

        if tolerances.smaller(i1.hi, i2.lo) || tolerances.smaller(i2.hi, i1.lo) {
            return true;
        }
    }

    false
}

fn point_in_ranges(seg: &Segment, point: &Point<Real>, tolerances: RelateTolerances) -> bool {
    for axis in 0..DIM {
        let interval = AxisInterval::new(seg, axis);

        if tolerances.smaller(point[axis], interval.lo)
            || tolerances.larger(point[axis], interval.hi)
        {
            return false;
        }
    }

    true
}

// The 2D cross product with both operands promoted before any arithmetic.
fn promoted_perp(u: &Vector<Real>, v: &Vector<Real>) -> PromotedReal {
    let ux = u.x as PromotedReal;
    let uy = u.y as PromotedReal;
    let vx = v.x as PromotedReal;
    let vy = v.y as PromotedReal;
    ux * vy - uy * vx
}

// The supporting lines intersect in a single point. `ratio1` and `ratio2`
// place that point on the first and the second segment; a boundary value on
// either one makes the shared point an endpoint touch instead of a crossing,
// no matter which segment the caller put first.
fn relate_non_collinear(
    seg1: &Segment,
    seg2: &Segment,
    sides: &SideInfo,
    ratio1: PromotedReal,
    ratio2: PromotedReal,
    tolerances: RelateTolerances,
) -> SegmentRelation {
    if !ratio1.is_finite() || !ratio2.is_finite() {
        log::error!(
            "Non-finite intersection ratio for segments {:?} and {:?}.",
            seg1,
            seg2
        );
        return SegmentRelation::Error(RelateError::NonFiniteRatio);
    }

    let mut ratio1 = ratio1;
    let mut ratio2 = ratio2;
    let below1 = tolerances.promoted_smaller(ratio1, 0.0);
    let above1 = tolerances.promoted_larger(ratio1, 1.0);
    let below2 = tolerances.promoted_smaller(ratio2, 0.0);
    let above2 = tolerances.promoted_larger(ratio2, 1.0);

    if below1 || above1 || below2 || above2 {
        if ranges_disjoint(seg1, seg2, tolerances) {
            return SegmentRelation::Disjoint;
        }
        // A boundary touch pushed outside [0, 1] by rounding.
        if below1 || above1 {
            ratio1 = if below1 { 0.0 } else { 1.0 };
        }
        if below2 || above2 {
            ratio2 = if below2 { 0.0 } else { 1.0 };
        }
    }

    let at_start1 = tolerances.promoted_approx_eq(ratio1, 0.0);
    let at_end1 = tolerances.promoted_approx_eq(ratio1, 1.0);
    let at_start2 = tolerances.promoted_approx_eq(ratio2, 0.0);
    let at_end2 = tolerances.promoted_approx_eq(ratio2, 1.0);
    let boundary = at_start1 || at_end1 || at_start2 || at_end2;

    if boundary && ranges_disjoint(seg1, seg2, tolerances) {
        // The endpoint grazes the other supporting line beyond the other
        // segment's reach.
        return SegmentRelation::Disjoint;
    }

    if sides.crossing() && !boundary {
        return SegmentRelation::Cross {
            point: seg1.point_at_ratio(ratio1),
            ratio: ratio1,
        };
    }

    let point = if at_start1 {
        seg1.a
    } else if at_end1 {
        seg1.b
    } else if at_start2 {
        seg2.a
    } else if at_end2 {
        seg2.b
    } else {
        seg1.point_at_ratio(ratio1)
    };

    SegmentRelation::Touch {
        point,
        arrival1: if at_end1 { -1 } else { 0 },
        arrival2: if at_end2 { -1 } else { 0 },
    }
}
