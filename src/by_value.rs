//! Value-addressed min-heap
//!
//! [`ValueIndexedHeap`] names elements by their value instead of by handle:
//! `decrease_key(&old, new)` finds an element equal to `old` and lowers it.
//! It wraps an [`IndexedMinHeap`] and keeps a second index from value to the
//! handles currently holding that value.
//!
//! Equal values are interchangeable. When several live elements equal `old`,
//! `decrease_key` lowers one of them; which one is unspecified. Callers that
//! need to tell duplicates apart should use the handle API directly.
//!
//! # Example
//!
//! ```rust
//! use indexed_minheap::{DecreaseOutcome, HeapError, ValueIndexedHeap};
//!
//! let mut heap = ValueIndexedHeap::new();
//! for v in [10, 20, 30, 40] {
//!     heap.insert(v);
//! }
//!
//! assert_eq!(heap.decrease_key(&30, 5), Ok(DecreaseOutcome::Decreased));
//! assert_eq!(heap.peek(), Ok(&5));
//! assert_eq!(heap.decrease_key(&10, 15), Err(HeapError::PriorityIncreased));
//! assert_eq!(heap.decrease_key(&99, 1), Ok(DecreaseOutcome::NotFound));
//! ```

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::compare::{Compare, Natural};
use crate::indexed::{HeapHandle, IndexedMinHeap};
use crate::metrics::OperationCounter;
use crate::traits::{DecreaseOutcome, Heap, HeapError};

/// Min-heap whose `decrease_key` is addressed by element value
#[derive(Clone)]
pub struct ValueIndexedHeap<T, C = Natural> {
    heap: IndexedMinHeap<T, C>,
    /// Value -> handles of the live elements equal to it
    handles: FxHashMap<T, SmallVec<[HeapHandle; 1]>>,
}

impl<T: Ord + Hash + Clone> ValueIndexedHeap<T, Natural> {
    /// Creates an empty heap ordered by `T: Ord`
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Builds a heap from `items` in O(n)
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with(items, Natural)
    }
}

impl<T: Eq + Hash + Clone, C: Compare<T>> ValueIndexedHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: IndexedMinHeap::with_comparator(cmp),
            handles: FxHashMap::default(),
        }
    }

    /// Builds a heap from `items` ordered by `cmp` in O(n)
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        Self::index(IndexedMinHeap::from_vec_with(items, cmp))
    }

    fn index(heap: IndexedMinHeap<T, C>) -> Self {
        let mut handles: FxHashMap<T, SmallVec<[HeapHandle; 1]>> = FxHashMap::default();
        handles.reserve(heap.len());
        for (handle, value) in heap.entries() {
            handles.entry(value.clone()).or_default().push(handle);
        }
        Self { heap, handles }
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Inserts `value`
    pub fn insert(&mut self, value: T) {
        let handle = self.heap.insert(value.clone());
        self.handles.entry(value).or_default().push(handle);
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.heap.peek()
    }

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        let (handle, value) = self.heap.extract_min_with_handle()?;
        self.unindex(&value, handle);
        Ok(value)
    }

    /// Replaces one element equal to `old` with `new`
    ///
    /// # Errors
    /// [`HeapError::PriorityIncreased`] if `new` orders after `old`. This is
    /// checked before the lookup, so it is reported even when `old` is absent.
    ///
    /// Returns `Ok(DecreaseOutcome::NotFound)` if no live element equals `old`.
    pub fn decrease_key(&mut self, old: &T, new: T) -> Result<DecreaseOutcome, HeapError> {
        self.heap.metrics_mut().record_comparison();
        if self.heap.comparator().less(old, &new) {
            return Err(HeapError::PriorityIncreased);
        }

        let Some(&handle) = self.handles.get(old).and_then(|list| list.last()) else {
            return Ok(DecreaseOutcome::NotFound);
        };

        let outcome = self.heap.decrease_key(&handle, new.clone())?;
        if outcome.is_decreased() {
            self.unindex(old, handle);
            self.handles.entry(new).or_default().push(handle);
        }
        Ok(outcome)
    }

    /// Returns true if some live element equals `value`
    pub fn contains(&self, value: &T) -> bool {
        self.handles.contains_key(value)
    }

    /// Number of live elements equal to `value`
    pub fn count(&self, value: &T) -> usize {
        self.handles.get(value).map_or(0, |list| list.len())
    }

    /// Iterates over the elements in array (not sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.heap.iter()
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Builds a new heap holding the elements of `self` and `other`
    ///
    /// Neither input is modified. The result has its own counter.
    pub fn merge(&self, other: &Self) -> Self
    where
        C: Clone,
    {
        Self::index(self.heap.merge(&other.heap))
    }

    /// Counters recorded by the underlying heap
    pub fn metrics(&self) -> &OperationCounter {
        self.heap.metrics()
    }

    /// Mutable access to the counters, e.g. to start and stop the timer
    pub fn metrics_mut(&mut self) -> &mut OperationCounter {
        self.heap.metrics_mut()
    }

    /// Zeroes the counters and timer; contents are unaffected
    pub fn reset_metrics(&mut self) {
        self.heap.reset_metrics();
    }

    fn unindex(&mut self, value: &T, handle: HeapHandle) {
        if let Some(list) = self.handles.get_mut(value) {
            list.retain(|h| *h != handle);
            if list.is_empty() {
                self.handles.remove(value);
            }
        }
    }
}

impl<T: Ord + Hash + Clone> Default for ValueIndexedHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Hash + Clone> FromIterator<T> for ValueIndexedHeap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Eq + Hash + Clone, C: Compare<T> + Clone> Heap<T> for ValueIndexedHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Result<&T, HeapError> {
        self.heap.peek()
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.extract_min()
    }

    fn merged(&self, other: &Self) -> Self {
        self.merge(other)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for ValueIndexedHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueIndexedHeap")
            .field("heap", &self.heap)
            .field("distinct", &self.handles.len())
            .finish()
    }
}
