//! Curated surface for the CLI and the Python bindings.
//!
//! Keep this list short; anything not re-exported here is an implementation
//! detail of `seg2`.

pub use crate::seg2::rand::{
    draw_pair, draw_pairs, PairCfg, PairKind as Seg2PairKind, ReplayToken as Seg2Replay,
};
pub use crate::seg2::{
    intersect, intersect_checked, intersect_segments, Endpoint, IntersectError,
    IntersectionResult, LinearSystem2, Overlap, ResultKind, Seg2, SegCfg, SegmentIntersector,
    SingularPolicy, DEFAULT_TOL,
};
