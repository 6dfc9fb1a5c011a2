//! Criterion benchmarks for the closest-pair solver.
//! Focus sizes: n in {64, 256, 1024, 4096}.

use closest_pair::closest::min_distance;
use closest_pair::points::rand::{draw_points_uniform, BoxCfg, ReplayToken};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_closest(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest");
    for &n in &[64usize, 256, 1024, 4096] {
        group.bench_with_input(BenchmarkId::new("min_distance", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    draw_points_uniform(
                        BoxCfg {
                            count: n,
                            half_width: 1000.0,
                        },
                        ReplayToken {
                            seed: 43,
                            index: n as u64,
                        },
                    )
                },
                |pts| {
                    let _d = min_distance(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closest);
criterion_main!(benches);
