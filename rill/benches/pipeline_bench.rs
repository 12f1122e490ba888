// Copyright 2026 Rill Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rill::{join, stream};
use std::hint::black_box;
use tokio::runtime::Builder;

pub fn bench_pipeline(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .worker_threads(2)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("pipeline_throughput");

    for &len in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bencher, &len| {
            bencher.iter(|| {
                rt.block_on(async {
                    let total = stream(0..len as i64)
                        .filter(|n| n % 2 == 0)
                        .map(|n| n + 1)
                        .reduce_default(|acc, n| acc + n)
                        .await;

                    black_box(total);
                });
            });
        });
    }

    group.finish();
}

pub fn bench_join(c: &mut Criterion) {
    let rt = Builder::new_multi_thread()
        .worker_threads(2)
        .build()
        .unwrap();

    let mut group = c.benchmark_group("join_fan_in");

    for &inputs in &[2usize, 4, 8] {
        let per_input = 1_000usize;
        group.throughput(Throughput::Elements((inputs * per_input) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(inputs),
            &inputs,
            |bencher, &inputs| {
                bencher.iter(|| {
                    rt.block_on(async {
                        let sources: Vec<_> = (0..inputs)
                            .map(|i| stream((0..per_input as i64).map(move |n| n + i as i64)))
                            .collect();

                        let total = join(sources).reduce_default(|acc, n| acc + n).await;
                        black_box(total);
                    });
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_join);
criterion_main!(benches);
