use crate::math::{Point, PromotedReal, Real};
use crate::query::relate::RelatePolicy;
use crate::shape::Segment;

/// The relation between two segments.
///
/// Positions on a segment are described by arrival codes where relevant:
/// `-1` means the segment's second point is the shared point (the segment
/// arrives and stops there), `0` means the segment starts at the shared
/// point or continues past it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SegmentRelation {
    /// The segments share no point.
    Disjoint,
    /// One of the segments is degenerate (a point) and lies on the other
    /// segment's supporting line.
    Degenerate {
        /// The degenerate segment, as a point.
        point: Point<Real>,
        /// `true` if the first segment is the degenerate one.
        first_is_point: bool,
    },
    /// The segments are equal as point sets.
    Equal {
        /// `true` if the segments run in opposite directions.
        opposite: bool,
    },
    /// The segments share a single point and at least one of them ends
    /// there.
    Touch {
        /// The shared point.
        point: Point<Real>,
        /// Arrival code of the first segment at the shared point.
        arrival1: i8,
        /// Arrival code of the second segment at the shared point.
        arrival2: i8,
    },
    /// The segments cross in a single interior point of both.
    Cross {
        /// The intersection point.
        point: Point<Real>,
        /// The position of the intersection along the first segment, `0.0`
        /// at its first point and `1.0` at its second point.
        ratio: PromotedReal,
    },
    /// The segments lie on one line and share a single endpoint.
    CollinearTouch {
        /// The shared endpoint.
        point: Point<Real>,
        /// Arrival code of the first segment at the shared point.
        arrival1: i8,
        /// Arrival code of the second segment at the shared point.
        arrival2: i8,
    },
    /// The segments lie on one line, share one endpoint, and overlap on a
    /// proper sub-interval starting there.
    CollinearOverlapBoundary {
        /// The segment whose far endpoint stops strictly inside the other.
        owner: Segment,
        /// `true` if `owner` is the first segment.
        owner_is_first: bool,
        /// Arrival code of the first segment at the shared endpoint.
        arrival1: i8,
        /// Arrival code of the second segment at the shared endpoint.
        arrival2: i8,
        /// `true` if the shared endpoint is `owner.b`, `false` if it is
        /// `owner.a`.
        from_end: bool,
    },
    /// The segments lie on one line and one lies strictly inside the other.
    CollinearContains {
        /// The contained segment.
        contained: Segment,
        /// `true` if the first segment is the contained one.
        first_within_second: bool,
        /// `true` if the segments run in opposite directions.
        opposite: bool,
    },
    /// The segments lie on one line and overlap on a proper sub-interval
    /// with both boundaries in a segment interior.
    CollinearOverlap {
        /// The overlap boundary with the smaller dominant-axis coordinate.
        point1: Point<Real>,
        /// The overlap boundary with the larger dominant-axis coordinate.
        point2: Point<Real>,
        /// `1` if the first segment runs along the increasing dominant
        /// axis, `-1` otherwise.
        dir1: i8,
        /// `1` if the second segment runs along the increasing dominant
        /// axis, `-1` otherwise.
        dir2: i8,
        /// `true` if the segments run in opposite directions.
        opposite: bool,
    },
    /// Classification failed on ill-formed input coordinates.
    Error(RelateError),
}

impl SegmentRelation {
    /// Hands this relation to `policy`, invoking exactly one of its
    /// callbacks.
    pub fn dispatch<P: RelatePolicy>(&self, policy: &mut P) -> P::Output {
        match *self {
            SegmentRelation::Disjoint => policy.on_disjoint(),
            SegmentRelation::Degenerate {
                point,
                first_is_point,
            } => policy.on_degenerate(point, first_is_point),
            SegmentRelation::Equal { opposite } => policy.on_equal(opposite),
            SegmentRelation::Touch {
                point,
                arrival1,
                arrival2,
            } => policy.on_touch(point, arrival1, arrival2),
            SegmentRelation::Cross { point, ratio } => policy.on_cross(point, ratio),
            SegmentRelation::CollinearTouch {
                point,
                arrival1,
                arrival2,
            } => policy.on_collinear_touch(point, arrival1, arrival2),
            SegmentRelation::CollinearOverlapBoundary {
                owner,
                owner_is_first,
                arrival1,
                arrival2,
                from_end,
            } => policy.on_collinear_overlap_boundary(
                owner,
                owner_is_first,
                arrival1,
                arrival2,
                from_end,
            ),
            SegmentRelation::CollinearContains {
                contained,
                first_within_second,
                opposite,
            } => policy.on_collinear_contains(contained, first_within_second, opposite),
            SegmentRelation::CollinearOverlap {
                point1,
                point2,
                dir1,
                dir2,
                opposite,
            } => policy.on_collinear_overlap(point1, point2, dir1, dir2, opposite),
            SegmentRelation::Error(error) => policy.on_error(error),
        }
    }

    /// Is this relation [`SegmentRelation::Disjoint`]?
    pub fn is_disjoint(&self) -> bool {
        matches!(*self, SegmentRelation::Disjoint)
    }

    /// Does this relation describe two segments sharing one supporting
    /// line?
    pub fn is_collinear(&self) -> bool {
        matches!(
            *self,
            SegmentRelation::Equal { .. }
                | SegmentRelation::CollinearTouch { .. }
                | SegmentRelation::CollinearOverlapBoundary { .. }
                | SegmentRelation::CollinearContains { .. }
                | SegmentRelation::CollinearOverlap { .. }
        )
    }

    /// Is this relation [`SegmentRelation::Error`]?
    pub fn is_error(&self) -> bool {
        matches!(*self, SegmentRelation::Error(_))
    }
}

/// The ways classification can fail on ill-formed input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelateError {
    /// The collinear interval resolver reached an inconsistent interval
    /// ordering.
    #[error("the collinear interval resolver reached an inconsistent interval ordering; the input coordinates are ill-formed")]
    CollinearResolution,
    /// The intersection ratio evaluated to a non-finite value.
    #[error("the computed intersection ratio is not finite; the input coordinates are ill-formed")]
    NonFiniteRatio,
}
