//! Ordering relations used by the priority queue
//!
//! A [`PriorityQueue`](crate::binary::PriorityQueue) always keeps the element
//! that compares *least* under its comparator at the top. A max-heap is the
//! same structure under [`ReverseOrder`].
//!
//! The comparator must be a consistent total order for as long as the queue
//! lives. An inconsistent comparator leaves the element order unspecified but
//! never causes memory unsafety.

use std::cmp::Ordering;
use std::fmt;

/// A total order over `T`
pub trait Comparator<T: ?Sized> {
    /// Compares two elements
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns true if `a` orders strictly before `b`
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}

/// The natural `Ord` ordering of `T` (min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The reverse of `T`'s natural ordering (max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReverseOrder;

impl<T: Ord + ?Sized> Comparator<T> for ReverseOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Adapts a closure `Fn(&T, &T) -> Ordering` into a [`Comparator`]
///
/// ```rust
/// use rust_priority_queue::compare::{Comparator, FnComparator};
///
/// let by_len = FnComparator::new(|a: &&str, b: &&str| a.len().cmp(&b.len()));
/// assert!(by_len.less(&"ab", &"abc"));
/// ```
#[derive(Clone, Copy)]
pub struct FnComparator<F> {
    f: F,
}

impl<F> FnComparator<F> {
    /// Wraps a comparison closure
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Returns the wrapped closure
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator")
    }
}

/// Orders elements by a key extracted from them
///
/// Shorthand for a [`FnComparator`] that compares `key(a)` with `key(b)`.
pub fn by_key<T, K, F>(key: F) -> FnComparator<impl Fn(&T, &T) -> Ordering>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    FnComparator::new(move |a: &T, b: &T| key(a).cmp(&key(b)))
}
