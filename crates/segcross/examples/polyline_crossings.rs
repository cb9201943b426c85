//! Crossing scan between two polylines, the way a regridding driver would
//! walk cell edges against a target edge.
//!
//! Purpose
//! - Show the intended consumer pattern: one `SegmentIntersector` reused
//!   across all edge pairs, with the caller choosing segment containment.
//! - Print each hit with its parameters and the shared point.

use nalgebra::Vector2;
use segcross::prelude::*;

fn main() {
    // zig-zag against a sine-ish staircase
    let a: Vec<Vec2<f64>> = (0..=8)
        .map(|i| Vector2::new(i as f64, if i % 2 == 0 { 0.0 } else { 1.0 }))
        .collect();
    let b: Vec<Vec2<f64>> = vec![
        Vector2::new(-0.5, 0.5),
        Vector2::new(3.0, 0.5),
        Vector2::new(3.0, 0.0),
        Vector2::new(6.0, 0.0),
        Vector2::new(8.5, 0.75),
    ];

    let tol = DEFAULT_TOL;
    let mut lli = SegmentIntersector::new();
    let mut hits = 0usize;
    for (i, pa) in a.windows(2).enumerate() {
        for (j, pb) in b.windows(2).enumerate() {
            lli.set_segments(pa[0], pa[1], pb[0], pb[1]);
            let r = lli.classify(tol);
            if !r.lies_on_segments(1e-12) {
                continue;
            }
            hits += 1;
            match r {
                IntersectionResult::Unique { t, s } => {
                    let x = Seg2::new(pa[0], pa[1]).point_at(t);
                    println!(
                        "a[{i}] x b[{j}]: t={t:.6} s={s:.6} at ({:.6}, {:.6})",
                        x.x, x.y
                    );
                }
                IntersectionResult::Overlap(ov) => {
                    let (u, v) = (ov.begin_point(), ov.end_point());
                    println!(
                        "a[{i}] x b[{j}]: overlap t=[{:.6}, {:.6}] from ({:.3}, {:.3}) to ({:.3}, {:.3})",
                        ov.t0, ov.t1, u.x, u.y, v.x, v.y
                    );
                }
                _ => {}
            }
        }
    }
    println!("hits={hits}");
}
