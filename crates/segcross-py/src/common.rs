use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use segcross::api::{intersect_checked, IntersectError, IntersectionResult, SegCfg};

pub type PyPt = (f64, f64);

#[inline]
pub fn pt(p: PyPt) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

pub fn map_intersect_err(err: IntersectError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn cfg_from_py(tol: f64, strict: bool) -> PyResult<SegCfg> {
    if !(tol.is_finite() && tol >= 0.0) {
        return Err(PyValueError::new_err("tol must be a finite, non-negative number"));
    }
    Ok(if strict {
        SegCfg::with_tol(tol)
    } else {
        SegCfg::conservative(tol)
    })
}

pub fn classify_py(
    p0: PyPt,
    p1: PyPt,
    q0: PyPt,
    q1: PyPt,
    tol: f64,
    strict: bool,
) -> PyResult<IntersectionResult> {
    let cfg = cfg_from_py(tol, strict)?;
    intersect_checked(pt(p0), pt(p1), pt(q0), pt(q1), &cfg).map_err(map_intersect_err)
}
