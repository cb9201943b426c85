//! Criterion benchmarks for segment pair classification.
//! Families: generic, crossing, collinear, parallel (1024 pairs each).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p segcross

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use segcross::prelude::*;

const BATCH: usize = 1024;

fn bench_intersect(c: &mut Criterion) {
    let mut group = c.benchmark_group("seg2");
    let kinds = [
        ("generic", PairKind::Generic),
        ("crossing", PairKind::Crossing),
        ("collinear", PairKind::Collinear),
        ("parallel", PairKind::Parallel),
    ];
    for (name, kind) in kinds {
        let pairs = draw_pairs(
            PairCfg {
                kind,
                ..PairCfg::default()
            },
            ReplayToken { seed: 43, index: 0 },
            BATCH,
        );
        let cfg = SegCfg::default();
        group.bench_with_input(BenchmarkId::new("intersect", name), &pairs, |b, pairs| {
            b.iter(|| {
                let mut hits = 0usize;
                for (p, q) in pairs {
                    if intersect_segments(p, q, &cfg).has_solution() {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
        group.bench_with_input(BenchmarkId::new("stateful", name), &pairs, |b, pairs| {
            let mut lli = SegmentIntersector::new();
            b.iter(|| {
                let mut hits = 0usize;
                for (p, q) in pairs {
                    lli.set_segments(p.start, p.end, q.start, q.end);
                    if lli.has_solution(DEFAULT_TOL) {
                        hits += 1;
                    }
                }
                black_box(hits)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_intersect);
criterion_main!(benches);
