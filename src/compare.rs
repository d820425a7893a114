//! Ordering capability used by the heaps
//!
//! A heap evaluates every comparison through one [`Compare`] value fixed at
//! construction, so the order stays consistent across all operations on that
//! instance. [`Natural`] uses the element's `Ord` impl; any
//! `Fn(&T, &T) -> Ordering` closure works as a custom comparator, which is
//! also how callers get max-heap behaviour.

use std::cmp::Ordering;

/// A total order over `T`
pub trait Compare<T> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The element type's own `Ord` implementation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &2));
        assert_eq!(Natural.compare(&"b", &"a"), Ordering::Greater);
    }

    #[test]
    fn test_closure_comparator() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert!(reversed.less(&5, &3));
        assert!(!reversed.less(&3, &5));
    }
}
