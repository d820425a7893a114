//! Indexed binary min-heap for Rust
//!
//! This crate provides an array-backed binary min-heap with an auxiliary
//! position index, so elements already in the heap can be lowered in
//! O(log n) with `decrease_key`, not just the root.
//!
//! # Features
//!
//! - **[`IndexedMinHeap`]**: handle-addressed heap. `insert` returns a
//!   generational [`HeapHandle`]; `decrease_key` takes that handle.
//! - **[`ValueIndexedHeap`]** (feature `value-index`, on by default):
//!   addresses elements by value, `decrease_key(&old, new)`.
//! - **O(n) bulk construction** from a `Vec` and a non-destructive O(n + m)
//!   `merge` that leaves both inputs untouched.
//! - **Operation counters**: every heap records comparisons, swaps, array
//!   accesses and allocations in an [`OperationCounter`], with a
//!   start/stop timer for benchmark regions.
//! - **Custom ordering** through [`Compare`], including plain closures.
//!
//! # Example
//!
//! ```rust
//! use indexed_minheap::{DecreaseOutcome, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new();
//! let handle1 = heap.insert(5);
//! heap.insert(3);
//! assert_eq!(heap.decrease_key(&handle1, 1), Ok(DecreaseOutcome::Decreased));
//! assert_eq!(heap.peek(), Ok(&1));
//! assert!(heap.metrics().comparisons() > 0);
//! ```
//!
//! The heaps are single-threaded. Share one behind a single lock if several
//! threads need it.

#[cfg(feature = "value-index")]
pub mod by_value;
pub mod compare;
pub mod indexed;
pub mod metrics;
pub mod traits;
#[cfg(feature = "workload")]
pub mod workload;

#[cfg(feature = "value-index")]
pub use by_value::ValueIndexedHeap;
pub use compare::{Compare, Natural};
pub use indexed::{HeapHandle, IndexedMinHeap};
pub use metrics::{CounterSnapshot, OperationCounter};
pub use traits::{DecreaseKeyHeap, DecreaseOutcome, Handle, Heap, HeapError};
