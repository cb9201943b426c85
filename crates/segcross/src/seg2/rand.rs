//! Random segment pairs (shape families + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for benches, property tests and the CLI `sample`
//!   command. Each draw is addressable by `(seed, index)`.
//!
//! Model
//! - `Generic`: four endpoints uniform in `[-w, w]²`.
//! - `Crossing`: two segments through a shared point, directions at least a
//!   few degrees apart, so the system is well conditioned.
//! - `Collinear`: two sub-segments of one random line (may or may not overlap).
//! - `Parallel`: a segment and a copy shifted perpendicular by at least
//!   `min_offset`.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Pt2, Seg2};

/// Shape family of a drawn pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairKind {
    Generic,
    Crossing,
    Collinear,
    Parallel,
}

impl PairKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "generic" => Some(PairKind::Generic),
            "crossing" => Some(PairKind::Crossing),
            "collinear" => Some(PairKind::Collinear),
            "parallel" => Some(PairKind::Parallel),
            _ => None,
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PairCfg {
    pub kind: PairKind,
    /// Half width of the sampling box around the origin.
    pub half_width: f64,
    /// Minimum perpendicular shift for `Parallel`.
    pub min_offset: f64,
}

impl Default for PairCfg {
    fn default() -> Self {
        Self {
            kind: PairKind::Generic,
            half_width: 10.0,
            min_offset: 1e-3,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one `(P, Q)` pair.
pub fn draw_pair(cfg: PairCfg, tok: ReplayToken) -> (Seg2, Seg2) {
    let mut rng = tok.to_std_rng();
    let w = cfg.half_width.abs().max(1e-9);
    match cfg.kind {
        PairKind::Generic => {
            let p = Seg2::new(uniform_pt(&mut rng, w), uniform_pt(&mut rng, w));
            let q = Seg2::new(uniform_pt(&mut rng, w), uniform_pt(&mut rng, w));
            (p, q)
        }
        PairKind::Crossing => {
            let x = uniform_pt(&mut rng, 0.5 * w);
            let a = rng.gen::<f64>() * std::f64::consts::PI;
            // keep the two directions at least ~6° apart
            let gap = rng.gen_range(0.1..(std::f64::consts::PI - 0.1));
            let (u, v) = (unit(a), unit(a + gap));
            let p = Seg2::new(
                x - u * rng.gen_range((0.01 * w)..w),
                x + u * rng.gen_range((0.01 * w)..w),
            );
            let q = Seg2::new(
                x - v * rng.gen_range((0.01 * w)..w),
                x + v * rng.gen_range((0.01 * w)..w),
            );
            (p, q)
        }
        PairKind::Collinear => {
            let o = uniform_pt(&mut rng, 0.5 * w);
            let u = unit(rng.gen::<f64>() * std::f64::consts::TAU);
            let mut at = || o + u * rng.gen_range(-w..w);
            let p = Seg2::new(at(), at());
            let q = Seg2::new(at(), at());
            (p, q)
        }
        PairKind::Parallel => {
            let o = uniform_pt(&mut rng, 0.5 * w);
            let u = unit(rng.gen::<f64>() * std::f64::consts::TAU);
            let n = Vector2::new(-u.y, u.x);
            let lo = cfg.min_offset.abs().max(1e-9);
            let off = rng.gen_range(lo..(lo + w));
            let side = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            let p = Seg2::new(
                o + u * rng.gen_range(-w..0.0),
                o + u * rng.gen_range((0.01 * w)..w),
            );
            let shift = n * (side * off) + u * rng.gen_range(-w..w);
            let q = Seg2::new(p.start + shift, p.end + shift);
            (p, q)
        }
    }
}

/// Draw `count` pairs with consecutive indices starting at `tok.index`.
pub fn draw_pairs(cfg: PairCfg, tok: ReplayToken, count: usize) -> Vec<(Seg2, Seg2)> {
    (0..count as u64)
        .map(|i| {
            draw_pair(
                cfg,
                ReplayToken {
                    seed: tok.seed,
                    index: tok.index.wrapping_add(i),
                },
            )
        })
        .collect()
}

#[inline]
fn uniform_pt<R: Rng>(rng: &mut R, w: f64) -> Pt2 {
    Vector2::new(rng.gen_range(-w..=w), rng.gen_range(-w..=w))
}

#[inline]
fn unit(a: f64) -> Pt2 {
    Vector2::new(a.cos(), a.sin())
}
