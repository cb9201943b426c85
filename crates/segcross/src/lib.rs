//! Two-segment intersection in the plane.
//!
//! Given P = `p0 → p1` and Q = `q0 → q1`, decide whether they meet and
//! return the parametric positions `(t, s)` (0 at the start, 1 at the end of
//! each segment). Singular configurations are classified rather than
//! reported as errors: collinear overlap, collinear with a gap, and offset
//! parallel lines.
//!
//! Two entry points share one solve step (`seg2::LinearSystem2`):
//! - `seg2::intersect`: pure function returning an `IntersectionResult`.
//! - `seg2::SegmentIntersector`: reusable `set_segments`-then-query object,
//!   one per worker thread.
//!
//! API Policy
//! - Callers inside the workspace (CLI, Python bindings) track this crate
//!   closely; prefer `api` or `prelude` re-exports over deep paths.

pub mod api;
pub mod seg2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use seg2::{intersect, IntersectionResult, SegCfg, SegmentIntersector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::seg2::rand::{draw_pair, draw_pairs, PairCfg, PairKind, ReplayToken};
    pub use crate::seg2::{
        intersect, intersect_checked, intersect_segments, IntersectionResult, Overlap, ResultKind,
        Seg2, SegCfg, SegmentIntersector, SingularPolicy, DEFAULT_TOL,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}

/// Signed area of the parallelogram spanned by `a` and `b` in R².
/// Zero iff the two directions are parallel; `det(M)` of a query is
/// `-parallelogram_area(p1 - p0, q1 - q0)`.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
