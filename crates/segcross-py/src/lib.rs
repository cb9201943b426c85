//! PyO3 bindings for the `segcross` segment intersector.
//!
//! Notes
//! - Keep bindings thin and predictable: points are `(x, y)` tuples, results
//!   are plain tuples. Input validation goes through `intersect_checked`, so
//!   NaN/Inf raise `ValueError` instead of producing garbage.

mod common;

use pyo3::prelude::*;
use segcross::api::IntersectionResult;

use common::{classify_py, PyPt};

/// Classify segment P = p0→p1 against Q = q0→q1.
///
/// Returns `(kind, t, s)`; `t`/`s` are `None` unless `kind == "unique"`.
#[pyfunction]
#[pyo3(signature = (p0, p1, q0, q1, tol=segcross::api::DEFAULT_TOL, strict=true))]
fn intersect(
    p0: PyPt,
    p1: PyPt,
    q0: PyPt,
    q1: PyPt,
    tol: f64,
    strict: bool,
) -> PyResult<(&'static str, Option<f64>, Option<f64>)> {
    let r = classify_py(p0, p1, q0, q1, tol, strict)?;
    let (t, s) = match r {
        IntersectionResult::Unique { t, s } => (Some(t), Some(s)),
        _ => (None, None),
    };
    Ok((r.kind().as_str(), t, s))
}

/// Parameter range `(t0, t1)` along P shared with a collinear Q, else `None`.
#[pyfunction]
#[pyo3(signature = (p0, p1, q0, q1, tol=segcross::api::DEFAULT_TOL))]
fn overlap_range(p0: PyPt, p1: PyPt, q0: PyPt, q1: PyPt, tol: f64) -> PyResult<Option<(f64, f64)>> {
    match classify_py(p0, p1, q0, q1, tol, true)? {
        IntersectionResult::Overlap(ov) => Ok(Some((ov.t0, ov.t1))),
        _ => Ok(None),
    }
}

/// Signed area of the parallelogram spanned by a and b.
#[pyfunction]
fn parallelogram_area(a: PyPt, b: PyPt) -> f64 {
    segcross::parallelogram_area(common::pt(a), common::pt(b))
}

#[pymodule]
fn segcross_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(intersect, m)?)?;
    m.add_function(wrap_pyfunction!(overlap_range, m)?)?;
    m.add_function(wrap_pyfunction!(parallelogram_area, m)?)?;
    m.add("DEFAULT_TOL", segcross::api::DEFAULT_TOL)?;
    Ok(())
}
