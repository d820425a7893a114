//! Common traits for the heaps in this crate
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`Heap`]: push / pop / peek / merge over elements that are their own priority
//! - [`DecreaseKeyHeap`]: adds handle-based insertion and `decrease_key`
//!
//! Both heaps in the crate implement [`Heap`], which lets tests and benchmarks
//! be written once and instantiated per implementation. Only the handle-based
//! [`IndexedMinHeap`](crate::indexed::IndexedMinHeap) implements
//! [`DecreaseKeyHeap`].

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `peek` or `extract_min` was called on an empty heap
    Empty,
    /// The new value compares greater than the current one
    PriorityIncreased,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
            HeapError::PriorityIncreased => {
                write!(f, "new value must not be greater than the current value")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Result of a `decrease_key` that passed validation
///
/// A missing element is not an error: callers may probe speculatively for
/// elements that were already extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// The element was found and now holds the new value
    Decreased,
    /// No live element matched the handle or value
    NotFound,
}

impl DecreaseOutcome {
    /// Returns true if the element was found and updated
    pub fn is_decreased(self) -> bool {
        matches!(self, DecreaseOutcome::Decreased)
    }
}

/// A handle to an element in the heap, used for decrease_key operations
///
/// Handles are opaque and stay valid until the element they name is
/// extracted. They are not tied to the element's value, so equal values
/// inserted twice get two distinct handles.
pub trait Handle: Copy + PartialEq + Eq + fmt::Debug {}

/// Base trait for min-heaps whose elements are their own priority
///
/// Unlike `std::collections::BinaryHeap`, these are min-heaps and empty-heap
/// access is reported as [`HeapError::Empty`] instead of `None`.
///
/// # Example
///
/// ```rust
/// use indexed_minheap::{Heap, HeapError, IndexedMinHeap};
///
/// let mut heap: IndexedMinHeap<i32> = IndexedMinHeap::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.len(), 2);
///
/// heap.pop().unwrap();
/// heap.pop().unwrap();
/// assert_eq!(heap.pop(), Err(HeapError::Empty));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T, HeapError>;

    /// Removes and returns the minimum element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;

    /// Builds a new heap holding the elements of both heaps
    ///
    /// Neither input is modified.
    ///
    /// # Time Complexity
    /// O(n + m)
    fn merged(&self, other: &Self) -> Self
    where
        Self: Sized;
}

/// Extended heap trait with `decrease_key` support
///
/// # Example
///
/// ```rust
/// use indexed_minheap::{DecreaseKeyHeap, DecreaseOutcome, Heap, IndexedMinHeap};
///
/// let mut heap: IndexedMinHeap<i32> = IndexedMinHeap::new();
/// let handle = heap.push_with_handle(10);
/// heap.push(7);
/// assert_eq!(heap.decrease_key(&handle, 5), Ok(DecreaseOutcome::Decreased));
/// assert_eq!(heap.peek(), Ok(&5));
/// ```
pub trait DecreaseKeyHeap<T>: Heap<T> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element, returning a handle for later `decrease_key` calls
    fn push_with_handle(&mut self, item: T) -> Self::Handle;

    /// Lowers the element identified by `handle` to `new_value`
    ///
    /// # Errors
    /// Returns [`HeapError::PriorityIncreased`] if `new_value` is greater than
    /// the current value. Equal values are accepted.
    ///
    /// # Time Complexity
    /// O(log n)
    fn decrease_key(
        &mut self,
        handle: &Self::Handle,
        new_value: T,
    ) -> Result<DecreaseOutcome, HeapError>;
}
