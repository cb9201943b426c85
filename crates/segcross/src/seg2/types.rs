//! Basic 2D segment types and the tolerance/policy configuration.
//!
//! - `SegCfg`: tolerance plus the singular-case policy used by `classify`.
//! - `SingularPolicy`: how undecidable singular systems are resolved.
//! - `Seg2`: ordered segment `start → end` with parametric helpers.
//!
//! Code cross-refs: `system::LinearSystem2`, `classify::IntersectionResult`

use nalgebra::Vector2;

/// Point in R².
pub type Pt2 = Vector2<f64>;

/// Default tolerance for determinant, norm and dot-product tests.
pub const DEFAULT_TOL: f64 = 1e-10;

/// How a singular system (`|det| <= tol`) is resolved when the collinear
/// norm test cannot settle it on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SingularPolicy {
    /// Report every undecided singular case as `Inconclusive`, which counts
    /// as "has a solution". False positives are possible for offset
    /// parallel lines.
    Conservative,
    /// Add a perpendicular-offset test for non-collinear singular systems and
    /// an overlap-range test for zero-length segments on a shared line.
    #[default]
    Strict,
}

/// Segment intersection configuration.
#[derive(Clone, Copy, Debug)]
pub struct SegCfg {
    pub tol: f64,
    pub policy: SingularPolicy,
}

impl Default for SegCfg {
    fn default() -> Self {
        Self {
            tol: DEFAULT_TOL,
            policy: SingularPolicy::Strict,
        }
    }
}

impl SegCfg {
    #[inline]
    pub fn with_tol(tol: f64) -> Self {
        Self {
            tol,
            ..Self::default()
        }
    }
    #[inline]
    pub fn conservative(tol: f64) -> Self {
        Self {
            tol,
            policy: SingularPolicy::Conservative,
        }
    }
}

/// Ordered segment `start → end`; `t = 0` at `start`, `t = 1` at `end`.
///
/// Zero-length segments are valid (degenerate) values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seg2 {
    pub start: Pt2,
    pub end: Pt2,
}

impl Seg2 {
    #[inline]
    pub fn new(start: Pt2, end: Pt2) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn dir(&self) -> Pt2 {
        self.end - self.start
    }
    #[inline]
    pub fn len2(&self) -> f64 {
        self.dir().norm_squared()
    }
    #[inline]
    pub fn point_at(&self, t: f64) -> Pt2 {
        self.start + self.dir() * t
    }
    #[inline]
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.len2() <= eps * eps
    }
    #[inline]
    pub fn is_finite(&self) -> bool {
        is_finite(self.start) && is_finite(self.end)
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}

#[inline]
pub(crate) fn is_finite(p: Pt2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// z-component of the 2D cross product `a × b`.
#[inline]
pub(crate) fn cross(a: Pt2, b: Pt2) -> f64 {
    a.x * b.y - a.y * b.x
}
