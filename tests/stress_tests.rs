//! Stress tests that push the heaps through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use indexed_minheap::{DecreaseKeyHeap, DecreaseOutcome, Heap, IndexedMinHeap};

#[cfg(feature = "value-index")]
use indexed_minheap::ValueIndexedHeap;

/// Test massive numbers of inserts and pops
fn test_massive_operations<H: Heap<i32> + Default>() {
    let mut heap = H::default();

    for i in (0..5000).rev() {
        heap.push(i);
    }
    assert_eq!(heap.len(), 5000);

    for i in 0..5000 {
        assert_eq!(heap.pop(), Ok(i));
    }
    assert!(heap.is_empty());
}

/// Test many decrease_key operations
fn test_many_decrease_keys<H: DecreaseKeyHeap<i32> + Default>() {
    let mut heap = H::default();
    let mut handles = Vec::new();

    for i in 0..2000 {
        handles.push(heap.push_with_handle(100_000 + i));
    }

    // Lower in reverse so every decrease has to climb to the root
    for (i, handle) in handles.iter().enumerate().rev() {
        assert_eq!(heap.decrease_key(handle, i as i32), Ok(DecreaseOutcome::Decreased));
        assert_eq!(heap.peek(), Ok(&(i as i32)));
    }

    for i in 0..2000 {
        assert_eq!(heap.pop(), Ok(i));
    }
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32> + Default>() {
    let mut heap = H::default();

    for i in 0..1000 {
        heap.push(i * 2 + 1);
        heap.push(i * 2);
        assert!(heap.pop().is_ok());
    }
    assert_eq!(heap.len(), 1000);

    let mut last = i32::MIN;
    while let Ok(v) = heap.pop() {
        assert!(v >= last);
        last = v;
    }
}

/// Test merge with large heaps
fn test_large_merge<H: Heap<i32> + Default>() {
    let mut heap1 = H::default();
    let mut heap2 = H::default();

    for i in 0..2000 {
        heap1.push(i * 2);
        heap2.push(i * 2 + 1);
    }

    let mut merged = heap1.merged(&heap2);
    assert_eq!(merged.len(), 4000);
    assert_eq!(heap1.len(), 2000);
    assert_eq!(heap2.len(), 2000);

    for i in 0..4000 {
        assert_eq!(merged.pop(), Ok(i));
    }
}

/// Decreasing after many pops only touches live handles
fn test_decrease_after_pops<H: DecreaseKeyHeap<i32> + Default>() {
    let mut heap = H::default();
    let mut handles = Vec::new();

    for i in 0..300 {
        handles.push(heap.push_with_handle(i * 10));
    }
    for _ in 0..100 {
        assert!(heap.pop().is_ok());
    }

    for handle in handles.iter().take(100) {
        assert_eq!(heap.decrease_key(handle, -1), Ok(DecreaseOutcome::NotFound));
    }
    for (i, handle) in handles.iter().enumerate().skip(100) {
        assert_eq!(heap.decrease_key(handle, i as i32 - 1_000), Ok(DecreaseOutcome::Decreased));
    }

    assert_eq!(heap.len(), 200);
    assert_eq!(heap.pop(), Ok(100 - 1_000));
}

/// Test rapid-fire mixed operations
fn test_rapid_fire<H: DecreaseKeyHeap<i32> + Default>() {
    let mut heap = H::default();
    let mut handles = Vec::new();

    for i in 0..400 {
        handles.push(heap.push_with_handle(i));
    }
    for (i, handle) in handles.iter().enumerate().step_by(2) {
        assert!(heap.decrease_key(handle, i as i32 - 10).is_ok());
    }
    for _ in 0..100 {
        assert!(heap.pop().is_ok());
    }
    for i in 400..500 {
        heap.push(i);
    }

    assert_eq!(heap.len(), 400);
    let mut last = i32::MIN;
    while let Ok(v) = heap.pop() {
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn test_indexed_massive() {
    test_massive_operations::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_many_decrease_keys() {
    test_many_decrease_keys::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_alternating() {
    test_alternating_ops::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_large_merge() {
    test_large_merge::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_decrease_after_pops() {
    test_decrease_after_pops::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_rapid_fire() {
    test_rapid_fire::<IndexedMinHeap<i32>>();
}

#[test]
fn test_indexed_bulk_build_large() {
    let values: Vec<i32> = (0..20_000).map(|i| (i * 7_919) % 20_000).collect();
    let heap = IndexedMinHeap::from_vec(values);
    assert_eq!(heap.len(), 20_000);
    assert_eq!(heap.into_sorted_vec(), (0..20_000).collect::<Vec<_>>());
}

#[test]
fn test_indexed_handles_survive_churn() {
    let mut heap = IndexedMinHeap::new();
    let keeper = heap.insert(1_000_000);

    for round in 0..50 {
        for i in 0..100 {
            heap.insert(round * 100 + i);
        }
        for _ in 0..100 {
            assert!(heap.extract_min().is_ok());
        }
        assert_eq!(heap.get(&keeper), Some(&1_000_000));
    }

    assert_eq!(heap.decrease_key(&keeper, -1), Ok(DecreaseOutcome::Decreased));
    assert_eq!(heap.extract_min(), Ok(-1));
    assert!(heap.is_empty());
}

#[cfg(feature = "value-index")]
mod value_indexed {
    use super::*;

    #[test]
    fn test_value_massive() {
        test_massive_operations::<ValueIndexedHeap<i32>>();
    }

    #[test]
    fn test_value_alternating() {
        test_alternating_ops::<ValueIndexedHeap<i32>>();
    }

    #[test]
    fn test_value_large_merge() {
        test_large_merge::<ValueIndexedHeap<i32>>();
    }

    #[test]
    fn test_value_many_duplicates() {
        let mut heap = ValueIndexedHeap::new();
        for i in 0..3000 {
            heap.insert(i % 10 + 100);
        }
        assert_eq!(heap.count(&105), 300);

        for _ in 0..300 {
            assert_eq!(heap.decrease_key(&105, 5), Ok(DecreaseOutcome::Decreased));
        }
        assert_eq!(heap.count(&105), 0);
        assert_eq!(heap.count(&5), 300);
        assert_eq!(heap.decrease_key(&105, 5), Ok(DecreaseOutcome::NotFound));

        for _ in 0..300 {
            assert_eq!(heap.extract_min(), Ok(5));
        }
        assert_eq!(heap.peek(), Ok(&100));
        assert_eq!(heap.len(), 2700);
    }
}
