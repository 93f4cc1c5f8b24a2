//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::relate_segment_segment()`](crate::query::relate_segment_segment) to classify the relation between two segments.
//! * [`query::relate_segment_segment_with_tolerances()`](crate::query::relate_segment_segment_with_tolerances) to classify with explicit tolerances.
//! * [`query::relate_segment_segment_with_policy()`](crate::query::relate_segment_segment_with_policy) to classify and hand the outcome to a [`RelatePolicy`].
//!
//! The classification outcome is a [`SegmentRelation`]. Ready-made policies
//! are [`RelateIntersects`] and `TurnPointCollector`.

#[cfg(feature = "alloc")]
pub use self::relate::TurnPointCollector;
pub use self::relate::{
    relate_segment_segment, relate_segment_segment_with_policy,
    relate_segment_segment_with_tolerances, RelateError, RelateIntersects, RelatePolicy,
    RelateTolerances, SegmentRelation, SideInfo,
};

pub mod relate;
