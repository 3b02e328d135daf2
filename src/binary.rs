//! Binary heap priority queue
//!
//! [`PriorityQueue`] keeps its elements in an implicit complete binary tree
//! stored in a [`GrowableArray`]. The element that orders least under the
//! queue's [`Comparator`] is always at index 0.
//!
//! # Time Complexity
//!
//! | Operation          | Complexity |
//! |--------------------|------------|
//! | `insert`           | O(log n)   |
//! | `extract_min`      | O(log n)   |
//! | `peek`             | O(1)       |
//! | `replace_top`      | O(log n)   |
//! | `from_vec`         | O(n)       |
//! | `into_sorted_vec`  | O(n log n) |
//!
//! # Capacity
//!
//! A queue is either fixed-size, in which case inserting into a full queue
//! fails with [`QueueError::CapacityExceeded`], or doubling, in which case the
//! buffer doubles before the insert proceeds. Every failed operation leaves
//! the queue exactly as it was.
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! for value in [5, 3, 8, 1, 4] {
//!     queue.insert(value).unwrap();
//! }
//!
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.extract_min(), Ok(1));
//! assert_eq!(queue.extract_min(), Ok(3));
//! assert_eq!(queue.len(), 3);
//! ```

use std::iter::FusedIterator;
use std::mem;
use std::slice;

use crate::compare::{Comparator, NaturalOrder};
use crate::config::{GrowthPolicy, QueueConfig};
use crate::error::{QueueError, ReplaceError, Result};
use crate::storage::GrowableArray;
use crate::tree;

/// A binary min-heap ordered by a [`Comparator`]
///
/// With the default [`NaturalOrder`] the smallest element comes out first.
/// Use [`ReverseOrder`](crate::compare::ReverseOrder) for a max-heap.
#[derive(Clone)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    data: GrowableArray<T>,
    growth: GrowthPolicy,
    max_capacity: Option<usize>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Creates an empty, growable queue in natural order
    ///
    /// Nothing is allocated until the first insert.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates a growable queue with room for `capacity` elements
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationError`] if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_config(QueueConfig::growable(capacity), NaturalOrder)
    }

    /// Creates a queue that holds at most `capacity` elements
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationError`] if the buffer cannot be allocated.
    pub fn fixed(capacity: usize) -> Result<Self> {
        Self::with_config(QueueConfig::fixed(capacity), NaturalOrder)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty, growable queue ordered by `cmp`
    ///
    /// Nothing is allocated until the first insert.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: GrowableArray::new(),
            growth: GrowthPolicy::Doubling,
            max_capacity: None,
            cmp,
        }
    }

    /// Creates a queue from `config`, ordered by `cmp`
    ///
    /// A zero initial capacity is clamped up to one.
    ///
    /// # Errors
    /// Returns [`QueueError::InvalidConfig`] if `config` does not validate, or
    /// [`QueueError::AllocationError`] if the buffer cannot be allocated.
    pub fn with_config(config: QueueConfig, cmp: C) -> Result<Self> {
        config.validate()?;
        if config.initial_capacity == 0 {
            log::warn!("priority queue capacity 0 requested, clamping to 1");
        }
        let capacity = config.effective_initial_capacity();
        let data = GrowableArray::with_capacity(capacity)?;
        log::trace!(
            "priority queue created: capacity={}, growth={}, max_capacity={:?}",
            capacity,
            config.growth,
            config.max_capacity
        );
        Ok(Self {
            data,
            growth: config.growth,
            max_capacity: config.max_capacity,
            cmp,
        })
    }

    /// Builds a growable queue from arbitrary elements in O(n)
    pub fn from_vec(data: Vec<T>, cmp: C) -> Self {
        let mut data = GrowableArray::from_vec(data);
        tree::heapify(data.as_mut_slice(), &cmp);
        Self {
            data,
            growth: GrowthPolicy::Doubling,
            max_capacity: None,
            cmp,
        }
    }

    /// Number of elements in the queue
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements the buffer holds before it must grow
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The growth policy this queue was built with
    #[inline]
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Upper bound on capacity for doubling queues, if any
    #[inline]
    pub fn max_capacity(&self) -> Option<usize> {
        self.max_capacity
    }

    /// Returns true if the next insert would fail with
    /// [`QueueError::CapacityExceeded`]
    pub fn is_full(&self) -> bool {
        match self.growth {
            GrowthPolicy::Fixed => self.data.is_full(),
            GrowthPolicy::Doubling => matches!(self.max_capacity, Some(max) if self.len() >= max),
        }
    }

    /// The comparator ordering this queue
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Inserts `value`
    ///
    /// # Errors
    /// - [`QueueError::CapacityExceeded`] if the queue is fixed-size and full,
    ///   or doubling and at its `max_capacity`
    /// - [`QueueError::AllocationError`] if doubling the buffer fails
    ///
    /// In both cases the queue is unchanged and `value` is dropped.
    ///
    /// # Time Complexity
    /// O(log n), plus O(n) when the buffer doubles.
    pub fn insert(&mut self, value: T) -> Result<()> {
        self.reserve_for(1)?;
        self.data.push_within_capacity(value);
        let last = self.data.len() - 1;
        tree::sift_up(self.data.as_mut_slice(), last, &self.cmp);
        Ok(())
    }

    /// Returns the least element without removing it
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T> {
        self.data.first().ok_or(QueueError::EmptyQueue)
    }

    /// Removes and returns the least element
    ///
    /// The last leaf is moved into the root and sifted down. When both
    /// children of a node compare equal, the left one is taken.
    ///
    /// # Errors
    /// Returns [`QueueError::EmptyQueue`] if the queue is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn extract_min(&mut self) -> Result<T> {
        let mut item = self.data.pop().ok_or(QueueError::EmptyQueue)?;
        if !self.data.is_empty() {
            mem::swap(&mut item, &mut self.data[0]);
            let len = self.data.len();
            tree::sift_down(self.data.as_mut_slice(), 0, len, &self.cmp);
        }
        Ok(item)
    }

    /// Replaces the least element with `value` and returns the old one
    ///
    /// Equivalent to `extract_min` followed by `insert`, with a single
    /// sift-down and no capacity check.
    ///
    /// # Errors
    /// If the queue is empty, returns [`QueueError::EmptyQueue`] together with
    /// `value`; the queue is unchanged.
    pub fn replace_top(&mut self, value: T) -> std::result::Result<T, ReplaceError<T>> {
        let len = self.data.len();
        match self.data.first_mut() {
            Some(top) => {
                let old = mem::replace(top, value);
                tree::sift_down(self.data.as_mut_slice(), 0, len, &self.cmp);
                Ok(old)
            }
            None => Err(ReplaceError {
                error: QueueError::EmptyQueue,
                value,
            }),
        }
    }

    /// Inserts `value` and then removes the least element
    ///
    /// Never fails and never grows the buffer: if `value` is not greater than
    /// the current minimum it comes straight back.
    pub fn push_pop(&mut self, mut value: T) -> T {
        let len = self.data.len();
        if let Some(top) = self.data.first_mut() {
            if self.cmp.less(top, &value) {
                mem::swap(top, &mut value);
                tree::sift_down(self.data.as_mut_slice(), 0, len, &self.cmp);
            }
        }
        value
    }

    /// Moves every element of `other` into this queue, leaving `other` empty
    ///
    /// # Errors
    /// Fails with [`QueueError::CapacityExceeded`] or
    /// [`QueueError::AllocationError`] before moving anything if the combined
    /// size does not fit. Both queues are unchanged in that case.
    pub fn append(&mut self, other: &mut Self) -> Result<()> {
        if other.is_empty() {
            return Ok(());
        }
        self.reserve_for(other.len())?;

        let rebuild = other.len() > self.len();
        for value in other.data.drain() {
            self.data.push_within_capacity(value);
            if !rebuild {
                let last = self.data.len() - 1;
                tree::sift_up(self.data.as_mut_slice(), last, &self.cmp);
            }
        }
        if rebuild {
            tree::heapify(self.data.as_mut_slice(), &self.cmp);
        }
        Ok(())
    }

    /// Inserts every element of `iter` in turn
    ///
    /// # Errors
    /// Stops at the first failed insert and returns its error. Elements
    /// inserted before the failure stay in the queue.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        for value in iter {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Removes every element, keeping the allocated capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements in storage order (not sorted)
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The live elements in storage order
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the queue and returns its elements in storage order
    pub fn into_vec(self) -> Vec<T> {
        self.data.into_vec()
    }

    /// Consumes the queue and returns its elements in ascending order under
    /// the comparator (heapsort)
    pub fn into_sorted_vec(self) -> Vec<T> {
        let cmp = self.cmp;
        let mut data = self.data.into_vec();
        for end in (1..data.len()).rev() {
            data.swap(0, end);
            tree::sift_down(&mut data, 0, end, &cmp);
        }
        data.reverse();
        data
    }

    /// Removes elements in ascending order as the iterator is advanced
    ///
    /// Elements not yet yielded when the iterator is dropped are removed too.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { queue: self }
    }

    /// Drains the queue into a `Vec` in ascending order
    pub fn drain_to_vec(&mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }

    /// Returns true if the heap property holds for every live element
    pub fn is_valid_heap(&self) -> bool {
        tree::is_heap(self.data.as_slice(), &self.cmp)
    }

    /// Makes room for `additional` more elements according to the growth policy
    fn reserve_for(&mut self, additional: usize) -> Result<()> {
        let needed = self
            .len()
            .checked_add(additional)
            .ok_or(QueueError::AllocationError { requested: usize::MAX })?;
        let capacity = self.data.capacity();
        if needed <= capacity {
            return Ok(());
        }

        match self.growth {
            GrowthPolicy::Fixed => {
                log::debug!(
                    "insert rejected: fixed capacity {} cannot hold {} elements",
                    capacity,
                    needed
                );
                Err(QueueError::CapacityExceeded { capacity })
            }
            GrowthPolicy::Doubling => {
                if let Some(max) = self.max_capacity {
                    if needed > max {
                        log::debug!(
                            "insert rejected: {} elements exceed max capacity {}",
                            needed,
                            max
                        );
                        return Err(QueueError::CapacityExceeded { capacity: max });
                    }
                }
                let mut target = capacity.max(1);
                while target < needed {
                    target = target.checked_mul(2).unwrap_or(needed);
                }
                if let Some(max) = self.max_capacity {
                    target = target.min(max);
                }
                self.data.grow_to(target)
            }
        }
    }
}

/// Draining iterator returned by [`PriorityQueue::drain_sorted`]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    queue: &'a mut PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.extract_min().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> Drop for DrainSorted<'_, T, C> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}
