//! 2D segment–segment intersection.
//!
//! Purpose
//! - Decide whether two finite segments P = `p0 → p1` and Q = `q0 → q1`
//!   intersect and return the parametric positions `(t, s)` when unique.
//! - Classify the singular configurations explicitly: collinear overlap,
//!   collinear with a gap, and offset parallel lines.
//!
//! Numerics
//! - The 2×2 system keeps `adj(M)·rhs` un-normalized and divides by `det(M)`
//!   only after the non-singular branch is taken.
//! - All thresholds come from one `SegCfg::tol`; see `SingularPolicy` for the
//!   two ways to resolve singular systems the norm test cannot settle.
//!
//! Code cross-refs: `LinearSystem2`, `SegmentIntersector`, `intersect`

mod classify;
mod intersector;
pub mod rand;
mod system;
mod types;

pub use classify::{
    intersect, intersect_checked, intersect_segments, Endpoint, IntersectError,
    IntersectionResult, Overlap, ResultKind,
};
pub use intersector::SegmentIntersector;
pub use system::LinearSystem2;
pub use types::{Pt2, Seg2, SegCfg, SingularPolicy, DEFAULT_TOL};

#[cfg(test)]
mod tests_props;
