//! Segment–segment classification: result type and the pure entry points.
//!
//! - `intersect`: stateless query returning an `IntersectionResult`.
//! - `intersect_checked`: same, but rejects NaN/Inf endpoints.
//!
//! Containment in `[0, 1]` is never applied implicitly; callers pick the
//! strictness they need (`lies_on_segments`).

use std::fmt;

use super::system::LinearSystem2;
use super::types::{is_finite, Pt2, Seg2, SegCfg};

/// Collinear overlap of P and Q.
///
/// Invariants:
/// - `0 <= t0 <= t1 <= 1` (parameters along P).
/// - `s0`, `s1` are the Q parameters of the same two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Overlap {
    pub t0: f64,
    pub t1: f64,
    pub s0: f64,
    pub s1: f64,
    pub(crate) p0: Pt2,
    pub(crate) dp: Pt2,
}

impl Overlap {
    #[inline]
    pub fn begin_point(&self) -> Pt2 {
        self.p0 + self.dp * self.t0
    }
    #[inline]
    pub fn end_point(&self) -> Pt2 {
        self.p0 + self.dp * self.t1
    }
    /// Overlap is a single point (end-to-end touch or degenerate segment).
    #[inline]
    pub fn is_touch(&self, eps: f64) -> bool {
        (self.t1 - self.t0).abs() <= eps
    }
}

/// Outcome of one segment pair query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntersectionResult {
    /// Non-singular system; `t` along P, `s` along Q (unbounded).
    Unique { t: f64, s: f64 },
    /// Collinear and overlapping or touching.
    Overlap(Overlap),
    /// Collinear, separated by a gap.
    CollinearDisjoint,
    /// Parallel lines with a perpendicular offset.
    Parallel,
    /// Singular, undecided; treated as possibly intersecting.
    Inconclusive,
}

/// Short stable label, used in CSV/JSON output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Unique,
    Overlap,
    CollinearDisjoint,
    Parallel,
    Inconclusive,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultKind::Unique => "unique",
            ResultKind::Overlap => "overlap",
            ResultKind::CollinearDisjoint => "collinear_disjoint",
            ResultKind::Parallel => "parallel",
            ResultKind::Inconclusive => "inconclusive",
        }
    }
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IntersectionResult {
    /// True for `Unique`, `Overlap` and `Inconclusive`.
    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(
            self,
            IntersectionResult::Unique { .. }
                | IntersectionResult::Overlap(_)
                | IntersectionResult::Inconclusive
        )
    }

    pub fn kind(&self) -> ResultKind {
        match self {
            IntersectionResult::Unique { .. } => ResultKind::Unique,
            IntersectionResult::Overlap(_) => ResultKind::Overlap,
            IntersectionResult::CollinearDisjoint => ResultKind::CollinearDisjoint,
            IntersectionResult::Parallel => ResultKind::Parallel,
            IntersectionResult::Inconclusive => ResultKind::Inconclusive,
        }
    }

    /// `(t, s)` for `Unique`; the overlap start for `Overlap`.
    pub fn params(&self) -> Option<(f64, f64)> {
        match *self {
            IntersectionResult::Unique { t, s } => Some((t, s)),
            IntersectionResult::Overlap(ov) => Some((ov.t0, ov.s0)),
            _ => None,
        }
    }

    /// Intersection point on P (overlap start for `Overlap`).
    pub fn point_on_p(&self, p: &Seg2) -> Option<Pt2> {
        self.params().map(|(t, _)| p.point_at(t))
    }

    /// Segment containment: both parameters within `[-eps, 1 + eps]`.
    pub fn lies_on_segments(&self, eps: f64) -> bool {
        let inside = |x: f64| x > -eps && x < 1.0 + eps;
        match *self {
            IntersectionResult::Unique { t, s } => inside(t) && inside(s),
            IntersectionResult::Overlap(_) => true,
            _ => false,
        }
    }
}

/// Which of the four query points was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    P0,
    P1,
    Q0,
    Q1,
}

/// Errors surfaced by the checked entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntersectError {
    /// A coordinate is NaN or infinite.
    NonFinite { endpoint: Endpoint },
}

impl fmt::Display for IntersectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntersectError::NonFinite { endpoint } => {
                write!(f, "endpoint {:?} has a non-finite coordinate", endpoint)
            }
        }
    }
}

impl std::error::Error for IntersectError {}

/// Classify segment P = `p0 → p1` against Q = `q0 → q1`.
///
/// Pre: all coordinates finite (not checked; see `intersect_checked`).
#[inline]
pub fn intersect(p0: Pt2, p1: Pt2, q0: Pt2, q1: Pt2, cfg: &SegCfg) -> IntersectionResult {
    LinearSystem2::new(p0, p1, q0, q1).classify(cfg)
}

#[inline]
pub fn intersect_segments(p: &Seg2, q: &Seg2, cfg: &SegCfg) -> IntersectionResult {
    intersect(p.start, p.end, q.start, q.end, cfg)
}

pub fn intersect_checked(
    p0: Pt2,
    p1: Pt2,
    q0: Pt2,
    q1: Pt2,
    cfg: &SegCfg,
) -> Result<IntersectionResult, IntersectError> {
    for (pt, endpoint) in [
        (p0, Endpoint::P0),
        (p1, Endpoint::P1),
        (q0, Endpoint::Q0),
        (q1, Endpoint::Q1),
    ] {
        if !is_finite(pt) {
            return Err(IntersectError::NonFinite { endpoint });
        }
    }
    Ok(intersect(p0, p1, q0, q1, cfg))
}
