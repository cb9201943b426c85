//! Reusable two-phase intersector: `set_segments`, then query.
//!
//! One instance per worker; `set_segments` overwrites the cached system, so
//! sharing an instance across threads needs external synchronization.

use super::classify::IntersectionResult;
use super::system::LinearSystem2;
use super::types::{Pt2, SegCfg, SingularPolicy};

#[derive(Clone, Debug, Default)]
pub struct SegmentIntersector {
    sys: LinearSystem2,
    policy: SingularPolicy,
}

impl SegmentIntersector {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_policy(policy: SingularPolicy) -> Self {
        Self {
            sys: LinearSystem2::default(),
            policy,
        }
    }

    pub fn set_segments(&mut self, p0: Pt2, p1: Pt2, q0: Pt2, q1: Pt2) {
        self.sys = LinearSystem2::new(p0, p1, q0, q1);
    }

    /// `det(M)`; `0` before the first `set_segments`.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.sys.det
    }

    #[inline]
    pub fn is_singular(&self, tol: f64) -> bool {
        self.sys.is_singular(tol)
    }

    #[inline]
    pub fn has_solution(&self, tol: f64) -> bool {
        self.classify(tol).has_solution()
    }

    /// `(t, s)`; `(NaN, NaN)` before the first `set_segments`.
    #[inline]
    pub fn solution(&self) -> (f64, f64) {
        self.sys.solution()
    }

    pub fn classify(&self, tol: f64) -> IntersectionResult {
        self.sys.classify(&SegCfg {
            tol,
            policy: self.policy,
        })
    }

    #[inline]
    pub fn system(&self) -> &LinearSystem2 {
        &self.sys
    }
}
