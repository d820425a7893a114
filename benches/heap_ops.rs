//! Wall-clock benchmarks for the indexed heap operations
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_ops
//!
//! # Only decrease_key, only at n=10000
//! cargo bench --bench heap_ops -- 'decrease_key/10000'
//! ```
//!
//! The `minheap-bench` binary reports operation counts for the same
//! workloads; these benches give statistically sound timings.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use indexed_minheap::{HeapHandle, IndexedMinHeap};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_values(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..1_000_000)).collect()
}

fn filled(values: &[u32]) -> (IndexedMinHeap<u32>, Vec<HeapHandle>) {
    let mut heap = IndexedMinHeap::with_capacity(values.len());
    let handles = values.iter().map(|&v| heap.insert(v)).collect();
    (heap, handles)
}

fn benchmark_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n in &SIZES {
        let values = random_values(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut heap = IndexedMinHeap::new();
                for &v in values {
                    heap.insert(v);
                }
                black_box(heap.len())
            })
        });
    }
    group.finish();
}

fn benchmark_extract_min(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_min");
    for &n in &SIZES {
        let values = random_values(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter_batched(
                || IndexedMinHeap::from_vec(values.clone()),
                |mut heap| {
                    while let Ok(v) = heap.extract_min() {
                        black_box(v);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn benchmark_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");
    for &n in &SIZES {
        let values = random_values(n, 42);
        group.throughput(Throughput::Elements((n / 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter_batched(
                || filled(values),
                |(mut heap, handles)| {
                    let mut rng = SmallRng::seed_from_u64(7);
                    for _ in 0..n / 2 {
                        let handle = &handles[rng.random_range(0..handles.len())];
                        if let Some(&current) = heap.get(handle) {
                            let lowered = current.saturating_sub(rng.random_range(0..100));
                            black_box(heap.decrease_key(handle, lowered)).ok();
                        }
                    }
                    heap
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &n in &SIZES {
        let left = IndexedMinHeap::from_vec(random_values(n, 1));
        let right = IndexedMinHeap::from_vec(random_values(n, 2));
        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(left.merge(&right)))
        });
    }
    group.finish();
}

/// Bulk construction against n individual inserts
fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &SIZES {
        let values = random_values(n, 42);
        group.bench_with_input(BenchmarkId::new("from_vec", n), &values, |b, values| {
            b.iter_batched(
                || values.clone(),
                |values| black_box(IndexedMinHeap::from_vec(values)),
                BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("inserts", n), &values, |b, values| {
            b.iter(|| black_box(filled(values)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_insert,
    benchmark_extract_min,
    benchmark_decrease_key,
    benchmark_merge,
    benchmark_build,
);

criterion_main!(benches);
