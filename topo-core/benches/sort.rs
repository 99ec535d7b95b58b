//! Sort throughput for chain and fan-in shaped dependency sets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use topo_core::{sort, Dependencies};

fn chain(size: u32) -> Dependencies<u32> {
    (1..size).map(|i| (i - 1, i)).collect()
}

fn fan_in(size: u32) -> Dependencies<u32> {
    (1..size).map(|i| (i, 0)).collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [16u32, 128, 512] {
        let elements: Vec<u32> = (0..size).collect();

        let deps = chain(size);
        group.bench_with_input(BenchmarkId::new("chain", size), &deps, |b, deps| {
            b.iter(|| {
                let mut data = elements.clone();
                sort(black_box(&mut data), black_box(deps)).unwrap();
                data
            })
        });

        let deps = fan_in(size);
        group.bench_with_input(BenchmarkId::new("fan_in", size), &deps, |b, deps| {
            b.iter(|| {
                let mut data = elements.clone();
                sort(black_box(&mut data), black_box(deps)).unwrap();
                data
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
