use crate::math::{Point, Real};
use crate::shape::Segment;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// The coordinate axis on which two segments have the larger combined extent
/// (`0` = x, `1` = y).
///
/// Interval comparisons between collinear segments run on this axis, so that
/// a near-vertical pair is never ordered along its vanishing horizontal
/// extent.
pub fn dominant_axis(seg1: &Segment, seg2: &Segment) -> usize {
    let dir1 = seg1.scaled_direction();
    let dir2 = seg2.scaled_direction();

    if dir1.x.abs() + dir2.x.abs() >= dir1.y.abs() + dir2.y.abs() {
        0
    } else {
        1
    }
}

/// A segment projected onto one coordinate axis, endpoints sorted by
/// increasing coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisInterval {
    /// The smaller projected coordinate.
    pub lo: Real,
    /// The larger projected coordinate.
    pub hi: Real,
    /// The segment point projecting onto `lo`.
    pub lo_point: Point<Real>,
    /// The segment point projecting onto `hi`.
    pub hi_point: Point<Real>,
    /// `true` if the sort reversed the segment's own endpoint order, i.e.
    /// the segment runs against the axis' increasing direction.
    pub swapped: bool,
}

impl AxisInterval {
    /// Projects `seg` onto the given axis (`0` = x, `1` = y).
    pub fn new(seg: &Segment, axis: usize) -> AxisInterval {
        let a = seg.a[axis];
        let b = seg.b[axis];

        if b < a {
            AxisInterval {
                lo: b,
                hi: a,
                lo_point: seg.b,
                hi_point: seg.a,
                swapped: true,
            }
        } else {
            AxisInterval {
                lo: a,
                hi: b,
                lo_point: seg.a,
                hi_point: seg.b,
                swapped: false,
            }
        }
    }
}
