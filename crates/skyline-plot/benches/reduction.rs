//! Benchmarks for the point-reduction stages over large synthetic clouds.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use skyline_plot::{FieldValue, Point3D, aggregate, sample};

fn cloud(n: usize) -> Vec<Point3D> {
    (0..n)
        .map(|i| {
            // Deterministic pseudo-scatter without pulling in an RNG.
            let x = ((i * 7919) % 10_000) as f64 / 100.0;
            let y = ((i * 104_729) % 10_000) as f64 / 100.0;
            let z = ((i * 1_299_709) % 5_000) as f64 / 100.0;
            Point3D::new(
                x,
                y,
                z,
                FieldValue::Number(x),
                FieldValue::Number(y),
                FieldValue::Number(z),
                i,
            )
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for size in [10_000, 50_000, 100_000] {
        let points = cloud(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| aggregate(black_box(points), 25_000));
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");

    for size in [10_000, 100_000] {
        let points = cloud(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &points, |b, points| {
            b.iter(|| sample(black_box(points), 0.25));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_sample);
criterion_main!(benches);
