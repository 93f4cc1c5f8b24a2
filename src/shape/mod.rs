//! Shapes supported by relate2d.

pub use self::segment::{Segment, Side};

mod segment;
