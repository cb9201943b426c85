//! The 2×2 linear system behind a segment pair query.
//!
//! Solves `p0 + t (p1 − p0) = q0 + s (q1 − q0)` written as `M [t, s]ᵀ = rhs`
//! with `M = [p1 − p0 | q0 − q1]` (columns) and `rhs = q0 − p0`.
//!
//! The adjugate is kept scaled by the determinant (`adj_times_det`) and
//! `sol_times_det = adj_times_det · rhs` stays un-normalized: division by
//! `det` happens only once the system is known to be non-singular.
//!
//! Invariant: every field is derived in `new`, so the matrix, determinant and
//! right-hand side always describe the same four points.

use nalgebra::{Matrix2, Vector2};

use super::classify::{IntersectionResult, Overlap};
use super::types::{cross, Pt2, SegCfg, SingularPolicy};

#[derive(Clone, Copy, Debug)]
pub struct LinearSystem2 {
    pub p0: Pt2,
    pub p1: Pt2,
    pub q0: Pt2,
    pub q1: Pt2,
    pub mat: Matrix2<f64>,
    pub det: f64,
    pub adj_times_det: Matrix2<f64>,
    pub rhs: Vector2<f64>,
    pub sol_times_det: Vector2<f64>,
}

impl Default for LinearSystem2 {
    /// Sentinel for "no query yet": `det = 0`, solution `(NaN, NaN)`.
    fn default() -> Self {
        let nan = Vector2::new(f64::NAN, f64::NAN);
        Self {
            p0: nan,
            p1: nan,
            q0: nan,
            q1: nan,
            mat: Matrix2::zeros(),
            det: 0.0,
            adj_times_det: Matrix2::zeros(),
            rhs: nan,
            sol_times_det: nan,
        }
    }
}

impl LinearSystem2 {
    pub fn new(p0: Pt2, p1: Pt2, q0: Pt2, q1: Pt2) -> Self {
        let mat = Matrix2::from_columns(&[p1 - p0, q0 - q1]);
        let rhs = q0 - p0;
        let det = mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)];
        #[rustfmt::skip]
        let adj_times_det = Matrix2::new(
             mat[(1, 1)], -mat[(0, 1)],
            -mat[(1, 0)],  mat[(0, 0)],
        );
        let sol_times_det = adj_times_det * rhs;
        Self {
            p0,
            p1,
            q0,
            q1,
            mat,
            det,
            adj_times_det,
            rhs,
            sol_times_det,
        }
    }

    #[inline]
    pub fn is_singular(&self, tol: f64) -> bool {
        self.det.abs() < tol
    }

    /// `(t, s) = sol_times_det / det`. No containment check; meaningless
    /// unless `|det|` is known to be above tolerance.
    #[inline]
    pub fn solution(&self) -> (f64, f64) {
        let sol = self.sol_times_det / self.det;
        (sol.x, sol.y)
    }

    pub fn classify(&self, cfg: &SegCfg) -> IntersectionResult {
        let tol = cfg.tol;
        if self.det.abs() > tol {
            let (t, s) = self.solution();
            return IntersectionResult::Unique { t, s };
        }
        if self.sol_times_det.dot(&self.sol_times_det).abs() < tol {
            return self.classify_collinear(cfg);
        }
        match cfg.policy {
            SingularPolicy::Conservative => IntersectionResult::Inconclusive,
            SingularPolicy::Strict => self.classify_offset(tol),
        }
    }

    /// Both segments lie on one line (norm test passed).
    fn classify_collinear(&self, cfg: &SegCfg) -> IntersectionResult {
        let tol = cfg.tol;
        let dp = self.p1 - self.p0;
        let dq = self.q1 - self.q0;
        let dpdq = dp.dot(&dq);
        if dpdq > tol && ((self.p0 - self.q1).dot(&dp) > tol || (self.q0 - self.p1).dot(&dq) > tol)
        {
            // same direction, gap between them
            return IntersectionResult::CollinearDisjoint;
        }
        if dpdq < -tol && ((self.q0 - self.p0).dot(&dq) > tol || (self.q1 - self.p1).dot(&dp) > tol)
        {
            // opposite directions, gap between them
            return IntersectionResult::CollinearDisjoint;
        }
        match self.overlap_range(tol) {
            Some(ov) => IntersectionResult::Overlap(ov),
            None => match cfg.policy {
                SingularPolicy::Conservative => IntersectionResult::Inconclusive,
                SingularPolicy::Strict => IntersectionResult::CollinearDisjoint,
            },
        }
    }

    /// Shared parameter range of two collinear segments, clamped to P's `[0, 1]`.
    ///
    /// Projects onto P unless P is degenerate (length `<= tol`, as in
    /// `Seg2::is_degenerate`); then onto Q. `None` if the projections do not
    /// meet within `tol`.
    pub fn overlap_range(&self, tol: f64) -> Option<Overlap> {
        let dp = self.p1 - self.p0;
        let dq = self.q1 - self.q0;
        let lp = dp.norm_squared();
        let lq = dq.norm_squared();
        // squared lengths, so compare against tol²
        let min_len2 = tol * tol;
        let s_of = |x: Pt2| {
            if lq > min_len2 {
                (x - self.q0).dot(&dq) / lq
            } else {
                0.0
            }
        };
        if lp > min_len2 {
            let a = (self.q0 - self.p0).dot(&dp) / lp;
            let b = (self.q1 - self.p0).dot(&dp) / lp;
            let lo = a.min(b).max(0.0);
            let hi = a.max(b).min(1.0);
            if lo > hi + tol {
                return None;
            }
            let hi = hi.max(lo);
            return Some(Overlap {
                t0: lo,
                t1: hi,
                s0: s_of(self.p0 + dp * lo),
                s1: s_of(self.p0 + dp * hi),
                p0: self.p0,
                dp,
            });
        }
        let s = if lq > min_len2 {
            let s = s_of(self.p0);
            if s < -tol || s > 1.0 + tol {
                return None;
            }
            s.clamp(0.0, 1.0)
        } else {
            // both degenerate: coincident points or nothing
            if (self.p0 - self.q0).norm_squared() > min_len2 {
                return None;
            }
            0.0
        };
        Some(Overlap {
            t0: 0.0,
            t1: 0.0,
            s0: s,
            s1: s,
            p0: self.p0,
            dp,
        })
    }

    /// Singular but not collinear by the norm test: measure the perpendicular
    /// offset against the line of the longer segment.
    fn classify_offset(&self, tol: f64) -> IntersectionResult {
        let dp = self.p1 - self.p0;
        let dq = self.q1 - self.q0;
        let lp = dp.norm_squared();
        let lq = dq.norm_squared();
        let offset = if lp >= lq && lp > 0.0 {
            cross(dp, self.q0 - self.p0).abs() / lp.sqrt()
        } else if lq > 0.0 {
            cross(dq, self.p0 - self.q0).abs() / lq.sqrt()
        } else {
            return IntersectionResult::Inconclusive;
        };
        if offset > tol {
            IntersectionResult::Parallel
        } else {
            IntersectionResult::Inconclusive
        }
    }
}
