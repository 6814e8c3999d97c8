//! Criterion benchmarks for the pairwise overlap tests.
//! Convex sizes: n in {3, 8, 16, 64} vertices per polygon.
//! Results land under target/criterion by default.

use collide2d::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn convex_pair(n: usize, seed: u64) -> (Convex, Convex) {
    let cfg = ConvexCfg {
        vertex_count: VertexCount::Fixed(n),
        ..ConvexCfg::default()
    };
    let a = draw_convex(cfg, ReplayToken { seed, index: 0 }).expect("convex");
    let b = draw_convex(cfg, ReplayToken { seed, index: 1 }).expect("convex");
    (a, b)
}

fn bench_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlap2");

    let a1 = draw_aabb(BoxCfg::default(), ReplayToken { seed: 7, index: 0 }).expect("aabb");
    let a2 = draw_aabb(BoxCfg::default(), ReplayToken { seed: 7, index: 1 }).expect("aabb");
    group.bench_function("aabb", |b| {
        b.iter(|| aabb_overlap(black_box(&a1), black_box(&a2)))
    });

    let o1 = draw_obb(BoxCfg::default(), ReplayToken { seed: 7, index: 0 }).expect("obb");
    let o2 = draw_obb(BoxCfg::default(), ReplayToken { seed: 7, index: 1 }).expect("obb");
    group.bench_function("obb", |b| {
        b.iter(|| obb_overlap(black_box(&o1), black_box(&o2)))
    });

    let c1 = draw_circle(CircleCfg::default(), ReplayToken { seed: 7, index: 0 }).expect("circle");
    let c2 = draw_circle(CircleCfg::default(), ReplayToken { seed: 7, index: 1 }).expect("circle");
    group.bench_function("circle", |b| {
        b.iter(|| circle_overlap(black_box(&c1), black_box(&c2)))
    });

    for &n in &[3usize, 8, 16, 64] {
        group.bench_with_input(BenchmarkId::new("convex", n), &n, |b, &n| {
            b.iter_batched(
                || convex_pair(n, 43),
                |(p1, p2)| convex_overlap(black_box(&p1), black_box(&p2)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_overlap);
criterion_main!(benches);
