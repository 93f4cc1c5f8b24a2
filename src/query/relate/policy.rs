use crate::math::{Point, PromotedReal, Real};
use crate::query::relate::RelateError;
use crate::shape::Segment;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// A consumer of segment relation classifications.
///
/// [`SegmentRelation::dispatch`](crate::query::relate::SegmentRelation::dispatch)
/// and
/// [`relate_segment_segment_with_policy`](crate::query::relate::relate_segment_segment_with_policy)
/// invoke exactly one of these callbacks per classified segment pair.
pub trait RelatePolicy {
    /// The value produced by each callback.
    type Output;

    /// The segments share no point.
    fn on_disjoint(&mut self) -> Self::Output;
    /// One segment is degenerate and lies on the other's supporting line.
    fn on_degenerate(&mut self, point: Point<Real>, first_is_point: bool) -> Self::Output;
    /// The segments are equal as point sets.
    fn on_equal(&mut self, opposite: bool) -> Self::Output;
    /// The segments share a single non-collinear point where at least one of
    /// them ends.
    fn on_touch(&mut self, point: Point<Real>, arrival1: i8, arrival2: i8) -> Self::Output;
    /// The segments cross in a single interior point of both.
    fn on_cross(&mut self, point: Point<Real>, ratio: PromotedReal) -> Self::Output;
    /// The segments lie on one line and share a single endpoint.
    fn on_collinear_touch(&mut self, point: Point<Real>, arrival1: i8, arrival2: i8)
        -> Self::Output;
    /// The segments lie on one line and overlap on a sub-interval starting
    /// at a shared endpoint.
    fn on_collinear_overlap_boundary(
        &mut self,
        owner: Segment,
        owner_is_first: bool,
        arrival1: i8,
        arrival2: i8,
        from_end: bool,
    ) -> Self::Output;
    /// The segments lie on one line and one lies strictly inside the other.
    fn on_collinear_contains(
        &mut self,
        contained: Segment,
        first_within_second: bool,
        opposite: bool,
    ) -> Self::Output;
    /// The segments lie on one line and overlap on a sub-interval with both
    /// boundaries in a segment interior.
    fn on_collinear_overlap(
        &mut self,
        point1: Point<Real>,
        point2: Point<Real>,
        dir1: i8,
        dir2: i8,
        opposite: bool,
    ) -> Self::Output;
    /// Classification failed on ill-formed input coordinates.
    fn on_error(&mut self, error: RelateError) -> Self::Output;
}

/// A policy answering whether the segments share at least one point.
///
/// A degenerate pair is never reported as intersecting: the classification
/// only established that the point lies on the other segment's supporting
/// line, not within the segment itself. An error also reports `false`.
#[derive(Copy, Clone, Debug, Default)]
pub struct RelateIntersects;

impl RelatePolicy for RelateIntersects {
    type Output = bool;

    fn on_disjoint(&mut self) -> bool {
        false
    }

    fn on_degenerate(&mut self, _: Point<Real>, _: bool) -> bool {
        false
    }

    fn on_equal(&mut self, _: bool) -> bool {
        true
    }

    fn on_touch(&mut self, _: Point<Real>, _: i8, _: i8) -> bool {
        true
    }

    fn on_cross(&mut self, _: Point<Real>, _: PromotedReal) -> bool {
        true
    }

    fn on_collinear_touch(&mut self, _: Point<Real>, _: i8, _: i8) -> bool {
        true
    }

    fn on_collinear_overlap_boundary(
        &mut self,
        _: Segment,
        _: bool,
        _: i8,
        _: i8,
        _: bool,
    ) -> bool {
        true
    }

    fn on_collinear_contains(&mut self, _: Segment, _: bool, _: bool) -> bool {
        true
    }

    fn on_collinear_overlap(
        &mut self,
        _: Point<Real>,
        _: Point<Real>,
        _: i8,
        _: i8,
        _: bool,
    ) -> bool {
        true
    }

    fn on_error(&mut self, _: RelateError) -> bool {
        false
    }
}

/// A policy collecting the points where segment pairs meet, cross, or start
/// and stop overlapping.
///
/// Disjoint, degenerate, equal, and failed classifications contribute no
/// points.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug, Default)]
pub struct TurnPointCollector {
    /// The points collected so far.
    pub points: Vec<Point<Real>>,
}

#[cfg(feature = "alloc")]
impl TurnPointCollector {
    /// Discards all collected points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(feature = "alloc")]
impl RelatePolicy for TurnPointCollector {
    type Output = ();

    fn on_disjoint(&mut self) {}

    fn on_degenerate(&mut self, _: Point<Real>, _: bool) {}

    fn on_equal(&mut self, _: bool) {}

    fn on_touch(&mut self, point: Point<Real>, _: i8, _: i8) {
        self.points.push(point);
    }

    fn on_cross(&mut self, point: Point<Real>, _: PromotedReal) {
        self.points.push(point);
    }

    fn on_collinear_touch(&mut self, point: Point<Real>, _: i8, _: i8) {
        self.points.push(point);
    }

    fn on_collinear_overlap_boundary(
        &mut self,
        owner: Segment,
        _: bool,
        _: i8,
        _: i8,
        from_end: bool,
    ) {
        let (shared, far) = if from_end {
            (owner.b, owner.a)
        } else {
            (owner.a, owner.b)
        };
        self.points.push(shared);
        self.points.push(far);
    }

    fn on_collinear_contains(&mut self, contained: Segment, _: bool, _: bool) {
        self.points.push(contained.a);
        self.points.push(contained.b);
    }

    fn on_collinear_overlap(
        &mut self,
        point1: Point<Real>,
        point2: Point<Real>,
        _: i8,
        _: i8,
        _: bool,
    ) {
        self.points.push(point1);
        self.points.push(point2);
    }

    fn on_error(&mut self, _: RelateError) {}
}
