//! Benchmark workloads for the indexed heap
//!
//! Each workload fills heaps from a fixed-seed RNG, resets the counters,
//! times one operation type, and reports what the heap recorded. The same
//! seed gives the same counter values on every run, which makes the reports
//! comparable across changes.

use std::fmt;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::indexed::IndexedMinHeap;
use crate::metrics::{CounterSnapshot, OperationCounter};
use crate::traits::DecreaseOutcome;

/// Element count used when none is given or it does not parse
pub const DEFAULT_SIZE: usize = 1_000;

/// Sizes exercised by `minheap-bench all`
pub const ALL_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

const SEED: u64 = 42;

/// Heap operation exercised by a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    Extract,
    Decrease,
    Merge,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Insert,
        Operation::Extract,
        Operation::Decrease,
        Operation::Merge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Insert => "insert",
            Operation::Extract => "extract",
            Operation::Decrease => "decrease",
            Operation::Merge => "merge",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a workload size, falling back to [`DEFAULT_SIZE`]
pub fn parse_size(arg: Option<&str>) -> usize {
    match arg {
        None => DEFAULT_SIZE,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("invalid size {:?}, using default: {}", raw, DEFAULT_SIZE);
            DEFAULT_SIZE
        }),
    }
}

/// Outcome of one workload run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    pub operation: Operation,
    /// Workload size `n`
    pub size: usize,
    /// Number of timed operations performed
    pub operations: usize,
    /// Heap length when the timed region ended
    pub final_len: usize,
    /// Input heap sizes, for merge
    pub inputs: Option<(usize, usize)>,
    pub counters: CounterSnapshot,
}

impl BenchReport {
    /// Mean wall time per timed operation, in milliseconds
    pub fn avg_millis(&self) -> f64 {
        if self.operations == 0 {
            0.0
        } else {
            self.counters.elapsed.as_secs_f64() * 1_000.0 / self.operations as f64
        }
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== IndexedMinHeap {} benchmark (n={}) ===", self.operation, self.size)?;
        if let Some((left, right)) = self.inputs {
            writeln!(f, "Heap1 Size: {}", left)?;
            writeln!(f, "Heap2 Size: {}", right)?;
        }
        writeln!(f, "Operations: {}", self.operations)?;
        writeln!(f, "Final Size: {}", self.final_len)?;
        writeln!(f, "Comparisons: {}", self.counters.comparisons)?;
        writeln!(f, "Swaps: {}", self.counters.swaps)?;
        writeln!(f, "Array Accesses: {}", self.counters.array_accesses)?;
        writeln!(f, "Allocations: {}", self.counters.allocations)?;
        writeln!(
            f,
            "Execution Time: {:.3} ms",
            self.counters.elapsed.as_secs_f64() * 1_000.0
        )?;
        write!(f, "Average Time per Operation: {:.6} ms", self.avg_millis())
    }
}

/// Runs one workload of size `n`
pub fn run(operation: Operation, n: usize) -> BenchReport {
    debug!("running {} workload with n={}", operation, n);
    match operation {
        Operation::Insert => bench_insert(n),
        Operation::Extract => bench_extract(n),
        Operation::Decrease => bench_decrease(n),
        Operation::Merge => bench_merge(n),
    }
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

fn bench_insert(n: usize) -> BenchReport {
    let mut rng = rng();
    let mut heap: IndexedMinHeap<u32> = IndexedMinHeap::new();

    heap.metrics_mut().start_timer();
    for _ in 0..n {
        heap.insert(rng.random_range(0..1_000u32));
    }
    heap.metrics_mut().stop_timer();

    BenchReport {
        operation: Operation::Insert,
        size: n,
        operations: n,
        final_len: heap.len(),
        inputs: None,
        counters: heap.metrics().snapshot(),
    }
}

fn bench_extract(n: usize) -> BenchReport {
    let mut rng = rng();
    let mut heap: IndexedMinHeap<u32> = IndexedMinHeap::new();
    for _ in 0..n {
        heap.insert(rng.random_range(0..1_000u32));
    }

    heap.reset_metrics();
    heap.metrics_mut().start_timer();
    let mut extracted = 0;
    while heap.extract_min().is_ok() {
        extracted += 1;
    }
    heap.metrics_mut().stop_timer();

    BenchReport {
        operation: Operation::Extract,
        size: n,
        operations: extracted,
        final_len: heap.len(),
        inputs: None,
        counters: heap.metrics().snapshot(),
    }
}

fn bench_decrease(n: usize) -> BenchReport {
    let mut rng = rng();
    let mut heap: IndexedMinHeap<u32> = IndexedMinHeap::new();
    let handles: Vec<_> = (0..n)
        .map(|_| heap.insert(rng.random_range(500..1_500u32)))
        .collect();

    heap.reset_metrics();
    heap.metrics_mut().start_timer();
    let mut decreased = 0;
    if !handles.is_empty() {
        for _ in 0..n / 2 {
            let handle = handles[rng.random_range(0..handles.len())];
            let Some(&current) = heap.get(&handle) else {
                continue;
            };
            let lowered = current.saturating_sub(rng.random_range(0..100u32));
            if let Ok(DecreaseOutcome::Decreased) = heap.decrease_key(&handle, lowered) {
                decreased += 1;
            }
        }
    }
    heap.metrics_mut().stop_timer();

    BenchReport {
        operation: Operation::Decrease,
        size: n,
        operations: decreased,
        final_len: heap.len(),
        inputs: None,
        counters: heap.metrics().snapshot(),
    }
}

fn bench_merge(n: usize) -> BenchReport {
    let mut rng = rng();
    let mut left: IndexedMinHeap<u32> = IndexedMinHeap::new();
    let mut right: IndexedMinHeap<u32> = IndexedMinHeap::new();
    for _ in 0..n {
        left.insert(rng.random_range(0..1_000u32));
        right.insert(rng.random_range(0..1_000u32));
    }

    let mut timer = OperationCounter::new();
    timer.start_timer();
    let merged = left.merge(&right);
    timer.stop_timer();

    let mut counters = merged.metrics().snapshot();
    counters.elapsed = timer.elapsed();

    BenchReport {
        operation: Operation::Merge,
        size: n,
        operations: 1,
        final_len: merged.len(),
        inputs: Some((left.len(), right.len())),
        counters,
    }
}
