//! Indexed binary min-heap
//!
//! An array-backed binary heap paired with a position index. Every inserted
//! element gets an opaque [`HeapHandle`]; the index maps each live handle to
//! the element's current slot, so `decrease_key` finds its element in O(1)
//! and restores the heap in O(log n).
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `peek`         | O(1)       |
//! | `decrease_key` | O(log n)   |
//! | `contains`     | O(1)       |
//! | `from_vec`     | O(n)       |
//! | `merge`        | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use indexed_minheap::{DecreaseOutcome, HeapError, IndexedMinHeap};
//!
//! let mut heap = IndexedMinHeap::new();
//! let ten = heap.insert(10);
//! heap.insert(20);
//! let thirty = heap.insert(30);
//!
//! assert_eq!(heap.decrease_key(&thirty, 5), Ok(DecreaseOutcome::Decreased));
//! assert_eq!(heap.peek(), Ok(&5));
//! assert_eq!(heap.decrease_key(&ten, 15), Err(HeapError::PriorityIncreased));
//!
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.decrease_key(&thirty, 1), Ok(DecreaseOutcome::NotFound));
//! ```

use std::fmt;

use log::{debug, trace};
use slotmap::{new_key_type, SlotMap};

use crate::compare::{Compare, Natural};
use crate::metrics::OperationCounter;
use crate::traits::{DecreaseKeyHeap, DecreaseOutcome, Handle, Heap, HeapError};

new_key_type! {
    /// Handle to an element in an [`IndexedMinHeap`]
    ///
    /// Handles are generational: once the element is extracted the handle is
    /// dead and never matches a later element. A handle is only meaningful to
    /// the heap that issued it (or a `clone` of that heap).
    pub struct HeapHandle;
}

impl Handle for HeapHandle {}

#[derive(Clone)]
struct Entry<T> {
    handle: HeapHandle,
    value: T,
}

/// Binary min-heap with a handle-to-position index
///
/// Ordering comes from the comparator `C`, [`Natural`] by default. Every
/// comparison, swap, array access and growth of the backing vector is
/// recorded in the heap's [`OperationCounter`].
#[derive(Clone)]
pub struct IndexedMinHeap<T, C = Natural> {
    /// Entries in binary-tree order
    data: Vec<Entry<T>>,
    /// Live handle -> index into `data`
    positions: SlotMap<HeapHandle, usize>,
    cmp: C,
    counter: OperationCounter,
}

impl<T: Ord> IndexedMinHeap<T, Natural> {
    /// Creates an empty heap ordered by `T: Ord`
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, Natural)
    }

    /// Builds a heap from `items` in O(n)
    pub fn from_vec(items: Vec<T>) -> Self {
        Self::from_vec_with(items, Natural)
    }
}

impl<T, C: Compare<T>> IndexedMinHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    ///
    /// ```rust
    /// use indexed_minheap::IndexedMinHeap;
    ///
    /// // max-heap by inverting the order
    /// let mut heap = IndexedMinHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// heap.insert(1);
    /// heap.insert(9);
    /// assert_eq!(heap.peek(), Ok(&9));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            positions: SlotMap::with_key(),
            cmp,
            counter: OperationCounter::new(),
        }
    }

    /// Creates an empty heap ordered by `cmp` with room for `capacity` elements
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        let mut heap = Self {
            data: Vec::with_capacity(capacity),
            positions: SlotMap::with_capacity_and_key(capacity),
            cmp,
            counter: OperationCounter::new(),
        };
        if capacity > 0 {
            heap.counter.record_allocation();
        }
        heap
    }

    /// Builds a heap from `items` ordered by `cmp`
    ///
    /// All elements are placed first, then the heap property is restored by
    /// sifting down every internal node from `n/2 - 1` to the root. This is
    /// O(n), not the O(n log n) of repeated inserts.
    pub fn from_vec_with(items: Vec<T>, cmp: C) -> Self {
        let mut positions = SlotMap::with_capacity_and_key(items.len());
        let data: Vec<Entry<T>> = items
            .into_iter()
            .enumerate()
            .map(|(i, value)| Entry {
                handle: positions.insert(i),
                value,
            })
            .collect();

        let mut heap = Self {
            data,
            positions,
            cmp,
            counter: OperationCounter::new(),
        };
        heap.counter.record_allocation();
        heap.counter.record_array_accesses(heap.data.len() as u64);
        heap.heapify();
        debug!(
            "built heap of {} elements ({} comparisons, {} swaps)",
            heap.data.len(),
            heap.counter.comparisons(),
            heap.counter.swaps()
        );
        heap
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts `value` and returns its handle
    ///
    /// Never fails; the vector grows as needed.
    pub fn insert(&mut self, value: T) -> HeapHandle {
        if self.data.len() == self.data.capacity() {
            self.counter.record_allocation();
        }
        let pos = self.data.len();
        let handle = self.positions.insert(pos);
        self.data.push(Entry { handle, value });
        self.counter.record_array_access();
        self.sift_up(pos);
        handle
    }

    /// Returns the minimum element without removing it
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        let root = self.data.first().ok_or(HeapError::Empty)?;
        self.counter.record_array_access();
        Ok(&root.value)
    }

    /// Removes and returns the minimum element
    ///
    /// The last element moves into the root slot and sifts down. The
    /// extracted element's handle is dead afterwards.
    ///
    /// # Errors
    /// [`HeapError::Empty`] if the heap has no elements; nothing changes.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        self.extract_min_with_handle().map(|(_, value)| value)
    }

    /// Like [`extract_min`](Self::extract_min), also returning the handle the
    /// element was known by
    pub fn extract_min_with_handle(&mut self) -> Result<(HeapHandle, T), HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let min = self.data.swap_remove(0);
        self.counter.record_array_accesses(2);
        self.positions.remove(min.handle);

        if !self.data.is_empty() {
            let moved = self.data[0].handle;
            self.positions[moved] = 0;
            self.counter.record_swap();
            self.sift_down(0);
        }

        Ok((min.handle, min.value))
    }

    /// Lowers the element named by `handle` to `new_value`
    ///
    /// Equal values are accepted. The element only ever moves toward the
    /// root.
    ///
    /// # Errors
    /// [`HeapError::PriorityIncreased`] if `new_value` orders after the
    /// current value; the heap is left untouched.
    ///
    /// Returns `Ok(DecreaseOutcome::NotFound)` for a handle whose element was
    /// already extracted.
    pub fn decrease_key(
        &mut self,
        handle: &HeapHandle,
        new_value: T,
    ) -> Result<DecreaseOutcome, HeapError> {
        let Some(&pos) = self.positions.get(*handle) else {
            trace!("decrease_key: {:?} not in heap", handle);
            return Ok(DecreaseOutcome::NotFound);
        };

        self.counter.record_comparison();
        self.counter.record_array_access();
        if self.cmp.less(&self.data[pos].value, &new_value) {
            return Err(HeapError::PriorityIncreased);
        }

        self.data[pos].value = new_value;
        self.counter.record_array_access();
        self.sift_up(pos);
        Ok(DecreaseOutcome::Decreased)
    }

    /// Returns true if `handle` names an element still in the heap
    pub fn contains(&self, handle: &HeapHandle) -> bool {
        self.positions.contains_key(*handle)
    }

    /// Returns the current value of the element named by `handle`
    pub fn get(&self, handle: &HeapHandle) -> Option<&T> {
        let &pos = self.positions.get(*handle)?;
        self.counter.record_array_access();
        Some(&self.data[pos].value)
    }

    /// Iterates over the elements in array (not sorted) order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.data.iter().map(|e| &e.value)
    }

    /// Iterates over `(handle, value)` pairs in array order
    ///
    /// This is how callers recover handles for elements added by
    /// [`from_vec`](Self::from_vec) or [`merge`](Self::merge).
    pub fn entries(&self) -> impl Iterator<Item = (HeapHandle, &T)> + '_ {
        self.data.iter().map(|e| (e.handle, &e.value))
    }

    /// Removes every element; all handles die. Counters are kept.
    pub fn clear(&mut self) {
        self.data.clear();
        self.positions.clear();
    }

    /// Consumes the heap, returning its elements in array order
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_iter().map(|e| e.value).collect()
    }

    /// Consumes the heap, returning its elements in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Builds a new heap holding the elements of `self` and `other`
    ///
    /// Both inputs are left as they were, counters included. The result uses
    /// `self`'s comparator, issues fresh handles (see
    /// [`entries`](Self::entries)) and starts with a fresh counter that
    /// records only its own O(n + m) build.
    pub fn merge(&self, other: &Self) -> Self
    where
        T: Clone,
        C: Clone,
    {
        let mut items = Vec::with_capacity(self.data.len() + other.data.len());
        items.extend(self.data.iter().map(|e| e.value.clone()));
        items.extend(other.data.iter().map(|e| e.value.clone()));
        debug!(
            "merging heaps of {} and {} elements",
            self.data.len(),
            other.data.len()
        );
        Self::from_vec_with(items, self.cmp.clone())
    }

    /// The comparator fixed at construction
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Counters recorded by this heap
    pub fn metrics(&self) -> &OperationCounter {
        &self.counter
    }

    /// Mutable access to the counters, e.g. to start and stop the timer
    pub fn metrics_mut(&mut self) -> &mut OperationCounter {
        &mut self.counter
    }

    /// Zeroes the counters and timer; contents are unaffected
    pub fn reset_metrics(&mut self) {
        self.counter.reset();
    }

    fn heapify(&mut self) {
        let len = self.data.len();
        for i in (0..len / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            self.counter.record_comparison();
            self.counter.record_array_accesses(2);
            if !self
                .cmp
                .less(&self.data[index].value, &self.data[parent].value)
            {
                break;
            }
            self.swap_entries(index, parent);
            index = parent;
        }
        trace!("sift_up settled at {}", index);
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len {
                self.counter.record_comparison();
                self.counter.record_array_accesses(2);
                if self
                    .cmp
                    .less(&self.data[left].value, &self.data[smallest].value)
                {
                    smallest = left;
                }
            }
            if right < len {
                self.counter.record_comparison();
                self.counter.record_array_accesses(2);
                if self
                    .cmp
                    .less(&self.data[right].value, &self.data[smallest].value)
                {
                    smallest = right;
                }
            }

            if smallest == index {
                break;
            }
            self.swap_entries(index, smallest);
            index = smallest;
        }
        trace!("sift_down settled at {}", index);
    }

    /// Swaps two slots and repoints both handles
    fn swap_entries(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.positions[self.data[a].handle] = a;
        self.positions[self.data[b].handle] = b;
        self.counter.record_swap();
        self.counter.record_array_accesses(4);
    }
}

impl<T: Ord> Default for IndexedMinHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vec<T>> for IndexedMinHeap<T, Natural> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Ord> FromIterator<T> for IndexedMinHeap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C: Compare<T>> Extend<T> for IndexedMinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Clone, C: Compare<T> + Clone> Heap<T> for IndexedMinHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, item: T) {
        self.insert(item);
    }

    fn peek(&self) -> Result<&T, HeapError> {
        IndexedMinHeap::peek(self)
    }

    fn pop(&mut self) -> Result<T, HeapError> {
        self.extract_min()
    }

    fn merged(&self, other: &Self) -> Self {
        self.merge(other)
    }
}

impl<T: Clone, C: Compare<T> + Clone> DecreaseKeyHeap<T> for IndexedMinHeap<T, C> {
    type Handle = HeapHandle;

    fn push_with_handle(&mut self, item: T) -> HeapHandle {
        self.insert(item)
    }

    fn decrease_key(
        &mut self,
        handle: &HeapHandle,
        new_value: T,
    ) -> Result<DecreaseOutcome, HeapError> {
        IndexedMinHeap::decrease_key(self, handle, new_value)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for IndexedMinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedMinHeap")
            .field("size", &self.data.len())
            .field("heap", &DebugValues(&self.data))
            .finish()
    }
}

impl<T: fmt::Debug, C> fmt::Display for IndexedMinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexedMinHeap {{ size: {}, heap: {:?} }}",
            self.data.len(),
            DebugValues(&self.data)
        )
    }
}

struct DebugValues<'a, T>(&'a [Entry<T>]);

impl<T: fmt::Debug> fmt::Debug for DebugValues<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|e| &e.value)).finish()
    }
}
