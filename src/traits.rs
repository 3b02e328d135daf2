//! Common trait for priority queues
//!
//! [`Heap`] is the operation set shared by every queue in this crate. It
//! mirrors the shape of `std::collections::BinaryHeap` (`push`, `peek`,
//! `pop`) but every operation that can fail reports it through
//! [`QueueError`](crate::error::QueueError) instead of returning `Option` or
//! panicking, so capacity limits and allocation failures reach the caller.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::{Heap, PriorityQueue};
//!
//! fn smallest_two<H: Heap<u32>>(heap: &mut H) -> Vec<u32> {
//!     (0..2).filter_map(|_| heap.pop().ok()).collect()
//! }
//!
//! let mut queue = PriorityQueue::new();
//! queue.push(7).unwrap();
//! queue.push(2).unwrap();
//! queue.push(5).unwrap();
//! assert_eq!(smallest_two(&mut queue), vec![2, 5]);
//! ```

use crate::binary::PriorityQueue;
use crate::compare::Comparator;
use crate::error::Result;

/// Base trait for heap/priority queue data structures
pub trait Heap<T> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, item: T) -> Result<()>;

    /// Returns the least element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Result<&T>;

    /// Removes and returns the least element
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// Either every element of `other` is moved in, or the call fails and
    /// `self` is unchanged.
    fn merge(&mut self, other: Self) -> Result<()>
    where
        Self: Sized;
}

impl<T, C: Comparator<T>> Heap<T> for PriorityQueue<T, C> {
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn push(&mut self, item: T) -> Result<()> {
        self.insert(item)
    }

    fn peek(&self) -> Result<&T> {
        PriorityQueue::peek(self)
    }

    fn pop(&mut self) -> Result<T> {
        self.extract_min()
    }

    fn merge(&mut self, mut other: Self) -> Result<()> {
        self.append(&mut other)
    }
}
