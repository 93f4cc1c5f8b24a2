//! Various unsorted geometrical and logical operators.

pub use self::axis::{dominant_axis, AxisInterval};

mod axis;
