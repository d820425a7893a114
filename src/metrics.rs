//! Operation counters for algorithmic analysis
//!
//! Every heap owns one [`OperationCounter`]. The heap calls the `record_*`
//! hooks as it works; callers read the totals, take a [`CounterSnapshot`],
//! time a region with [`start_timer`](OperationCounter::start_timer) /
//! [`stop_timer`](OperationCounter::stop_timer), and reset between runs.
//!
//! Counters only ever grow until [`reset`](OperationCounter::reset).

use std::cell::Cell;
use std::fmt;
use std::time::{Duration, Instant};

/// Cumulative operation counts and a start/stop timer
///
/// Array accesses are kept in a [`Cell`] so read-only heap operations such as
/// `peek` can record them through a shared borrow. This makes the counter
/// (and any heap that owns it) `!Sync`.
#[derive(Debug, Clone, Default)]
pub struct OperationCounter {
    comparisons: u64,
    swaps: u64,
    array_accesses: Cell<u64>,
    allocations: u64,
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl OperationCounter {
    /// Creates a counter with everything zeroed
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one comparator call
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Counts one slot exchange
    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Counts one slot read or write
    #[inline]
    pub fn record_array_access(&self) {
        self.record_array_accesses(1);
    }

    /// Counts `n` slot reads or writes
    #[inline]
    pub fn record_array_accesses(&self, n: u64) {
        self.array_accesses.set(self.array_accesses.get() + n);
    }

    /// Counts one growth of the backing storage
    #[inline]
    pub fn record_allocation(&mut self) {
        self.allocations += 1;
    }

    /// Marks the start of a timed region, clearing any previous stop mark
    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
        self.stopped = None;
    }

    /// Marks the end of a timed region
    pub fn stop_timer(&mut self) {
        self.stopped = Some(Instant::now());
    }

    /// Comparator calls recorded so far
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Slot exchanges recorded so far
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Slot reads and writes recorded so far
    pub fn array_accesses(&self) -> u64 {
        self.array_accesses.get()
    }

    /// Storage growths recorded so far
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Time between the last `start_timer` and `stop_timer`
    ///
    /// Zero unless both marks are set.
    pub fn elapsed(&self) -> Duration {
        match (self.started, self.stopped) {
            (Some(start), Some(stop)) => stop.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// [`elapsed`](Self::elapsed) in fractional milliseconds
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }

    /// Zeroes all counters and clears the timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Copies the current totals
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons,
            swaps: self.swaps,
            array_accesses: self.array_accesses.get(),
            allocations: self.allocations,
            elapsed: self.elapsed(),
        }
    }
}

impl fmt::Display for OperationCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.snapshot().fmt(f)
    }
}

/// Point-in-time copy of an [`OperationCounter`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub array_accesses: u64,
    pub allocations: u64,
    pub elapsed: Duration,
}

impl CounterSnapshot {
    /// Counts accumulated between `earlier` and `self`
    pub fn since(&self, earlier: &CounterSnapshot) -> CounterSnapshot {
        CounterSnapshot {
            comparisons: self.comparisons.saturating_sub(earlier.comparisons),
            swaps: self.swaps.saturating_sub(earlier.swaps),
            array_accesses: self.array_accesses.saturating_sub(earlier.array_accesses),
            allocations: self.allocations.saturating_sub(earlier.allocations),
            elapsed: self.elapsed.saturating_sub(earlier.elapsed),
        }
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons={}, swaps={}, array_accesses={}, allocations={}, elapsed={:.3}ms",
            self.comparisons,
            self.swaps,
            self.array_accesses,
            self.allocations,
            self.elapsed.as_secs_f64() * 1_000.0
        )
    }
}
