//! Definition of the segment shape.

use crate::math::{Point, PromotedReal, Real, Vector};

use core::mem;
use na::Unit;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// A segment shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

/// The side of a directed line on which a point lies.
///
/// Produced by [`Segment::side_of`], with the line directed from the
/// segment's first point toward its second point.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Side {
    /// The point lies on the left of the line (counterclockwise).
    Left,
    /// The point lies on the line, up to tolerance.
    On,
    /// The point lies on the right of the line (clockwise).
    Right,
}

impl Side {
    /// Classifies a doubled signed triangle area into a side.
    ///
    /// Areas with a magnitude smaller than `epsilon` map to [`Side::On`],
    /// positive areas to [`Side::Left`], negative areas to [`Side::Right`].
    pub fn from_signed_area(area: Real, epsilon: Real) -> Side {
        if area.abs() < epsilon || ulps_eq!(area, 0.0) {
            Side::On
        } else if area > 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// `true` if this is [`Side::On`].
    pub fn is_on(self) -> bool {
        self == Side::On
    }

    /// The side seen when the line direction is reversed.
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::On => Side::On,
            Side::Right => Side::Left,
        }
    }
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }
}

impl Segment {
    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` if both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// `true` if both components of this segment's direction are zero, up to
    /// `epsilon`.
    ///
    /// Degenerate segments have no supporting line, so orientation tests
    /// against them are meaningless.
    pub fn is_degenerate(&self, epsilon: Real) -> bool {
        let dir = self.scaled_direction();
        (dir.x.abs() < epsilon || ulps_eq!(dir.x, 0.0))
            && (dir.y.abs() < epsilon || ulps_eq!(dir.y, 0.0))
    }

    /// The cross product of this segment's direction with `p - self.a`.
    ///
    /// This is the doubled signed area of the triangle `(self.a, self.b, p)`:
    /// positive if `p` lies on the left of this segment's supporting line,
    /// negative if it lies on the right.
    pub fn signed_area_to(&self, p: &Point<Real>) -> Real {
        self.scaled_direction().perp(&(p - self.a))
    }

    /// The side of this segment's supporting line on which `p` lies.
    ///
    /// Every sidedness decision of this crate goes through this one
    /// predicate; substituting another formulation breaks the consistency
    /// the robustness corrections of
    /// [`relate_segment_segment`](crate::query::relate_segment_segment)
    /// rely on.
    pub fn side_of(&self, p: &Point<Real>, epsilon: Real) -> Side {
        Side::from_signed_area(self.signed_area_to(p), epsilon)
    }

    /// The point at the given parametric position along this segment.
    ///
    /// A ratio of `0` is `self.a`, a ratio of `1` is `self.b`. The
    /// interpolation runs at [`PromotedReal`] precision before narrowing
    /// back to [`Real`].
    pub fn point_at_ratio(&self, ratio: PromotedReal) -> Point<Real> {
        let ax = self.a.x as PromotedReal;
        let ay = self.a.y as PromotedReal;
        let x = ax + ratio * (self.b.x as PromotedReal - ax);
        let y = ay + ratio * (self.b.y as PromotedReal - ay);
        Point::new(x as Real, y as Real)
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
