//! Robust classification of the relation between two segments.

#[cfg(feature = "alloc")]
pub use self::policy::TurnPointCollector;
pub use self::policy::{RelateIntersects, RelatePolicy};
pub use self::relate_segment_segment::{
    relate_segment_segment, relate_segment_segment_with_policy,
    relate_segment_segment_with_tolerances,
};
pub use self::segment_relation::{RelateError, SegmentRelation};
pub use self::side_info::SideInfo;
pub use self::tolerances::RelateTolerances;

mod policy;
mod relate_collinear;
mod relate_segment_segment;
mod segment_relation;
mod side_info;
mod tolerances;
