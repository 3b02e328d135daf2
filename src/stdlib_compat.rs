//! Standard library trait implementations
//!
//! Lets [`PriorityQueue`] be used the way `std::collections::BinaryHeap` is:
//! collected from iterators, converted from and into `Vec`, and consumed with a
//! `for` loop.
//!
//! # Differences from BinaryHeap
//!
//! - **Min-heap vs Max-heap**: With the default comparator this is a min-heap,
//!   while `BinaryHeap` is a max-heap. Use
//!   [`ReverseOrder`](crate::compare::ReverseOrder) for max-heap behavior.
//! - **Consuming iteration is sorted**: `for x in queue` yields elements in
//!   ascending order under the comparator. Borrowed iteration (`&queue`) is in
//!   storage order, like `BinaryHeap::iter`.
//! - **No `Extend`**: inserting can fail on fixed-size queues; use
//!   [`PriorityQueue::try_extend`] instead.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::PriorityQueue;
//!
//! let queue: PriorityQueue<i32> = vec![5, 3, 7].into_iter().collect();
//! assert_eq!(queue.peek(), Ok(&3));
//!
//! let sorted: Vec<i32> = queue.into_iter().collect();
//! assert_eq!(sorted, vec![3, 5, 7]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::binary::PriorityQueue;
use crate::compare::Comparator;

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        PriorityQueue::with_comparator(C::default())
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("growth", &self.growth())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vec(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for PriorityQueue<T, C> {
    fn from(vec: Vec<T>) -> Self {
        PriorityQueue::from_vec(vec, C::default())
    }
}

impl<T, C: Comparator<T> + Default, const N: usize> From<[T; N]> for PriorityQueue<T, C> {
    fn from(arr: [T; N]) -> Self {
        PriorityQueue::from_vec(Vec::from(arr), C::default())
    }
}

impl<T, C: Comparator<T>> From<PriorityQueue<T, C>> for Vec<T> {
    fn from(queue: PriorityQueue<T, C>) -> Self {
        queue.into_vec()
    }
}

/// Consuming iterator that yields elements in ascending order
pub struct IntoSorted<T, C: Comparator<T>> {
    queue: PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for IntoSorted<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for IntoSorted<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for IntoSorted<T, C> {}

impl<T, C: Comparator<T>> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = IntoSorted<T, C>;

    fn into_iter(self) -> IntoSorted<T, C> {
        IntoSorted { queue: self }
    }
}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}
