use crate::math::Real;
use crate::shape::{Segment, Side};

/// The sides of both endpoints of two segments relative to each other's
/// supporting line, together with the raw signed areas the sides were
/// derived from.
///
/// Index `i` of each array refers to endpoint `a` (`i = 0`) or `b`
/// (`i = 1`) of the corresponding segment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SideInfo {
    /// Sides of the first segment's endpoints relative to the second
    /// segment's supporting line.
    pub sides1: [Side; 2],
    /// Sides of the second segment's endpoints relative to the first
    /// segment's supporting line.
    pub sides2: [Side; 2],
    /// Signed areas behind `sides1`.
    pub areas1: [Real; 2],
    /// Signed areas behind `sides2`.
    pub areas2: [Real; 2],
}

impl SideInfo {
    /// Computes the sides of both endpoints of `seg1` relative to `seg2`'s
    /// supporting line, and conversely.
    pub fn new(seg1: &Segment, seg2: &Segment, epsilon: Real) -> SideInfo {
        let areas1 = [seg2.signed_area_to(&seg1.a), seg2.signed_area_to(&seg1.b)];
        let areas2 = [seg1.signed_area_to(&seg2.a), seg1.signed_area_to(&seg2.b)];

        SideInfo {
            sides1: [
                Side::from_signed_area(areas1[0], epsilon),
                Side::from_signed_area(areas1[1], epsilon),
            ],
            sides2: [
                Side::from_signed_area(areas2[0], epsilon),
                Side::from_signed_area(areas2[1], epsilon),
            ],
            areas1,
            areas2,
        }
    }

    /// Do all four endpoints lie on the other segment's supporting line?
    pub fn collinear(&self) -> bool {
        self.pair1_on() && self.pair2_on()
    }

    /// Do both endpoints of the first segment lie on the second segment's
    /// supporting line?
    pub fn pair1_on(&self) -> bool {
        self.sides1[0] == Side::On && self.sides1[1] == Side::On
    }

    /// Do both endpoints of the second segment lie on the first segment's
    /// supporting line?
    pub fn pair2_on(&self) -> bool {
        self.sides2[0] == Side::On && self.sides2[1] == Side::On
    }

    /// Do both endpoints of the first segment lie strictly on the same side
    /// of the second segment's supporting line?
    pub fn same_side1(&self) -> bool {
        self.sides1[0] == self.sides1[1] && self.sides1[0] != Side::On
    }

    /// Do both endpoints of the second segment lie strictly on the same side
    /// of the first segment's supporting line?
    pub fn same_side2(&self) -> bool {
        self.sides2[0] == self.sides2[1] && self.sides2[0] != Side::On
    }

    /// Does each segment strictly straddle the other's supporting line?
    pub fn crossing(&self) -> bool {
        straddles(self.sides1) && straddles(self.sides2)
    }

    /// The index of the single endpoint of the first segment lying on the
    /// second segment's supporting line, if the other endpoint does not.
    pub fn one_on1(&self) -> Option<usize> {
        match self.sides1 {
            [Side::On, Side::On] => None,
            [Side::On, _] => Some(0),
            [_, Side::On] => Some(1),
            _ => None,
        }
    }

    /// The index of the single endpoint of the second segment lying on the
    /// first segment's supporting line, if the other endpoint does not.
    pub fn one_on2(&self) -> Option<usize> {
        match self.sides2 {
            [Side::On, Side::On] => None,
            [Side::On, _] => Some(0),
            [_, Side::On] => Some(1),
            _ => None,
        }
    }

    /// The endpoint indices of a meeting configuration: exactly one endpoint
    /// of each segment lies on the other's supporting line.
    pub fn meeting(&self) -> Option<(usize, usize)> {
        Some((self.one_on1()?, self.one_on2()?))
    }

    /// Does exactly one of the four endpoints lie on the other segment's
    /// supporting line?
    pub fn single_on(&self) -> bool {
        let all = [self.sides1[0], self.sides1[1], self.sides2[0], self.sides2[1]];
        all.iter().filter(|side| side.is_on()).count() == 1
    }

    /// This side information with endpoint `i` of the first segment forced
    /// onto the second segment's supporting line.
    #[must_use]
    pub fn with_side1_on(mut self, i: usize) -> SideInfo {
        self.sides1[i] = Side::On;
        self
    }

    /// This side information with endpoint `i` of the second segment forced
    /// onto the first segment's supporting line.
    #[must_use]
    pub fn with_side2_on(mut self, i: usize) -> SideInfo {
        self.sides2[i] = Side::On;
        self
    }

    /// This side information with all four endpoints forced onto the other
    /// segment's supporting line.
    #[must_use]
    pub fn forced_collinear(mut self) -> SideInfo {
        self.sides1 = [Side::On, Side::On];
        self.sides2 = [Side::On, Side::On];
        self
    }
}

fn straddles(sides: [Side; 2]) -> bool {
    matches!(sides, [Side::Left, Side::Right] | [Side::Right, Side::Left])
}
