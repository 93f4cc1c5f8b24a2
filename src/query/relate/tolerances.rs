use crate::math::{Point, PromotedReal, Real};

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// Tolerances applied by the segment relation classification.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelateTolerances {
    /// The absolute threshold below which a signed area, a coordinate
    /// difference, or an intersection ratio offset is treated as zero.
    ///
    /// Every fuzzy comparison made during classification goes through this
    /// single value, so sidedness tests, interval orderings, and ratio range
    /// checks can never contradict each other because of mismatched
    /// thresholds.
    pub epsilon: Real,
}

impl Default for RelateTolerances {
    fn default() -> Self {
        RelateTolerances {
            epsilon: Real::EPSILON * 100.0,
        }
    }
}

impl RelateTolerances {
    /// Are `a` and `b` equal up to the configured tolerance?
    ///
    /// The absolute test is backed by an ulps comparison so that large
    /// coordinates, whose representable neighbors are further apart than
    /// `epsilon`, still compare equal to their rounding neighbors.
    pub fn approx_eq(self, a: Real, b: Real) -> bool {
        (a - b).abs() < self.epsilon || ulps_eq!(a, b)
    }

    /// Is `a` smaller than `b` by more than the configured tolerance?
    pub fn smaller(self, a: Real, b: Real) -> bool {
        a < b && !self.approx_eq(a, b)
    }

    /// Is `a` larger than `b` by more than the configured tolerance?
    pub fn larger(self, a: Real, b: Real) -> bool {
        a > b && !self.approx_eq(a, b)
    }

    /// Are both coordinates of `a` and `b` equal up to the configured
    /// tolerance?
    pub fn point_approx_eq(self, a: &Point<Real>, b: &Point<Real>) -> bool {
        self.approx_eq(a.x, b.x) && self.approx_eq(a.y, b.y)
    }

    /// Like [`Self::approx_eq`] but for values carried at the promoted
    /// precision.
    pub fn promoted_approx_eq(self, a: PromotedReal, b: PromotedReal) -> bool {
        (a - b).abs() < self.epsilon as PromotedReal || ulps_eq!(a, b)
    }

    /// Like [`Self::smaller`] but for values carried at the promoted
    /// precision.
    pub fn promoted_smaller(self, a: PromotedReal, b: PromotedReal) -> bool {
        a < b && !self.promoted_approx_eq(a, b)
    }

    /// Like [`Self::larger`] but for values carried at the promoted
    /// precision.
    pub fn promoted_larger(self, a: PromotedReal, b: PromotedReal) -> bool {
        a > b && !self.promoted_approx_eq(a, b)
    }
}
