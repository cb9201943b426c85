//! Property tests over the seeded pair sampler.
//!
//! Crossing pairs are well conditioned (directions >= 0.1 rad apart, lengths
//! bounded below), so parameter comparisons use a fixed absolute slack.

use super::rand::{draw_pair, PairCfg, PairKind, ReplayToken};
use super::*;
use proptest::prelude::*;

const SLACK: f64 = 1e-8;

fn pair(kind: PairKind, seed: u64, index: u64) -> (Seg2, Seg2) {
    draw_pair(
        PairCfg {
            kind,
            ..PairCfg::default()
        },
        ReplayToken { seed, index },
    )
}

fn unique(r: IntersectionResult) -> (f64, f64) {
    match r {
        IntersectionResult::Unique { t, s } => (t, s),
        other => panic!("expected unique solution, got {:?}", other),
    }
}

fn any_kind() -> impl Strategy<Value = PairKind> {
    prop_oneof![
        Just(PairKind::Generic),
        Just(PairKind::Crossing),
        Just(PairKind::Collinear),
        Just(PairKind::Parallel),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn crossing_pairs_meet_inside_both_segments(seed in any::<u64>(), index in 0u64..10_000) {
        let (p, q) = pair(PairKind::Crossing, seed, index);
        let r = intersect_segments(&p, &q, &SegCfg::default());
        let (t, s) = unique(r);
        prop_assert!(r.lies_on_segments(SLACK));
        prop_assert!((p.point_at(t) - q.point_at(s)).norm() < 1e-7);
    }

    #[test]
    fn swapping_segments_swaps_parameters(seed in any::<u64>(), index in 0u64..10_000) {
        let (p, q) = pair(PairKind::Crossing, seed, index);
        let cfg = SegCfg::default();
        let (t, s) = unique(intersect_segments(&p, &q, &cfg));
        let (t2, s2) = unique(intersect_segments(&q, &p, &cfg));
        prop_assert!((t - s2).abs() < SLACK);
        prop_assert!((s - t2).abs() < SLACK);
    }

    #[test]
    fn uniform_scaling_keeps_parameters(
        seed in any::<u64>(),
        index in 0u64..10_000,
        k in prop_oneof![0.01f64..100.0, -100.0f64..-0.01],
    ) {
        let (p, q) = pair(PairKind::Crossing, seed, index);
        let cfg = SegCfg::default();
        let (t, s) = unique(intersect_segments(&p, &q, &cfg));
        let (ts, ss) = unique(intersect(p.start * k, p.end * k, q.start * k, q.end * k, &cfg));
        prop_assert!((t - ts).abs() < SLACK);
        prop_assert!((s - ss).abs() < SLACK);
    }

    #[test]
    fn repeated_set_segments_is_idempotent(
        kind in any_kind(),
        seed in any::<u64>(),
        index in 0u64..10_000,
    ) {
        let (p, q) = pair(kind, seed, index);
        let mut lli = SegmentIntersector::new();
        lli.set_segments(p.start, p.end, q.start, q.end);
        let first = (lli.determinant(), lli.has_solution(DEFAULT_TOL), lli.classify(DEFAULT_TOL));
        let sol = lli.solution();
        lli.set_segments(p.start, p.end, q.start, q.end);
        prop_assert_eq!(first.0.to_bits(), lli.determinant().to_bits());
        prop_assert_eq!(first.1, lli.has_solution(DEFAULT_TOL));
        prop_assert_eq!(first.2, lli.classify(DEFAULT_TOL));
        let sol2 = lli.solution();
        prop_assert_eq!(sol.0.to_bits(), sol2.0.to_bits());
        prop_assert_eq!(sol.1.to_bits(), sol2.1.to_bits());
    }

    #[test]
    fn stateful_and_pure_paths_agree(
        kind in any_kind(),
        seed in any::<u64>(),
        index in 0u64..10_000,
        strict in any::<bool>(),
    ) {
        let (p, q) = pair(kind, seed, index);
        let policy = if strict { SingularPolicy::Strict } else { SingularPolicy::Conservative };
        let mut lli = SegmentIntersector::with_policy(policy);
        lli.set_segments(p.start, p.end, q.start, q.end);
        let cfg = SegCfg { tol: DEFAULT_TOL, policy };
        prop_assert_eq!(lli.classify(DEFAULT_TOL), intersect_segments(&p, &q, &cfg));
    }

    #[test]
    fn collinear_pairs_never_cross_properly(seed in any::<u64>(), index in 0u64..10_000) {
        let (p, q) = pair(PairKind::Collinear, seed, index);
        let r = intersect_segments(&p, &q, &SegCfg::default());
        match r {
            IntersectionResult::Overlap(ov) => {
                prop_assert!(0.0 <= ov.t0 && ov.t0 <= ov.t1 && ov.t1 <= 1.0);
                if q.len2() > 1e-6 {
                    prop_assert!(ov.s0 > -SLACK && ov.s0 < 1.0 + SLACK);
                    prop_assert!((q.point_at(ov.s0) - ov.begin_point()).norm() < 1e-7);
                }
            }
            IntersectionResult::CollinearDisjoint => {}
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn parallel_pairs_depend_on_policy(seed in any::<u64>(), index in 0u64..10_000) {
        let (p, q) = pair(PairKind::Parallel, seed, index);
        let strict = intersect_segments(&p, &q, &SegCfg::default());
        prop_assert_eq!(strict, IntersectionResult::Parallel);
        prop_assert!(!strict.has_solution());
        let cons = intersect_segments(&p, &q, &SegCfg::conservative(DEFAULT_TOL));
        prop_assert_eq!(cons, IntersectionResult::Inconclusive);
        prop_assert!(cons.has_solution());
    }
}
