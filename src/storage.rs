//! Growable array backing store
//!
//! [`GrowableArray`] is a contiguous buffer with an explicit logical capacity.
//! Appending into a full array doubles that capacity: a new allocation is
//! obtained, the existing elements are moved over in order, and the old
//! allocation is released. Unlike `Vec::push`, growth is fallible: a failed
//! allocation is reported as [`QueueError::AllocationError`] and the array is
//! left untouched.
//!
//! # Time Complexity
//!
//! | Operation | Complexity     |
//! |-----------|----------------|
//! | `push`    | O(1) amortized |
//! | `pop`     | O(1)           |
//! | `get`     | O(1)           |
//! | `grow`    | O(n)           |

use std::ops::{Deref, DerefMut};

use crate::error::{QueueError, Result};

/// A contiguous buffer that doubles its capacity when full
#[derive(Debug)]
pub struct GrowableArray<T> {
    data: Vec<T>,
    /// Logical capacity. `data.capacity()` may be larger, never smaller.
    capacity: usize,
}

impl<T> GrowableArray<T> {
    /// Creates an empty array with zero capacity, without allocating
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
        }
    }

    /// Allocates room for exactly `capacity` elements
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationError`] if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|e| QueueError::allocation(capacity, e))?;
        Ok(Self { data, capacity })
    }

    /// Wraps an existing vector; its length becomes the capacity floor
    pub fn from_vec(data: Vec<T>) -> Self {
        let capacity = data.len().max(data.capacity());
        Self { data, capacity }
    }

    /// Number of live elements
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no live elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current logical capacity
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the next `push` requires growth
    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    /// Returns a reference to the element at `index`, if it is live
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Grows the capacity to at least `new_capacity`
    ///
    /// Does nothing when the capacity is already large enough.
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationError`] if the allocation fails. The
    /// array and its elements are unchanged in that case.
    pub fn grow_to(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }
        let additional = new_capacity - self.data.len();
        self.data
            .try_reserve_exact(additional)
            .map_err(|e| QueueError::allocation(new_capacity, e))?;
        log::debug!(
            "growable array resized: capacity {} -> {}",
            self.capacity,
            new_capacity
        );
        self.capacity = new_capacity;
        Ok(())
    }

    /// Doubles the capacity (a zero capacity becomes one)
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationError`] if the doubled size overflows
    /// or cannot be allocated.
    pub fn grow(&mut self) -> Result<()> {
        let doubled = match self.capacity {
            0 => 1,
            n => n
                .checked_mul(2)
                .ok_or(QueueError::AllocationError { requested: usize::MAX })?,
        };
        self.grow_to(doubled)
    }

    /// Appends `value`, doubling the capacity first if the array is full
    ///
    /// # Errors
    /// Returns [`QueueError::AllocationError`] if growth fails. The value is
    /// dropped and the array is unchanged.
    pub fn push(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            self.grow()?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Appends `value` without growing
    ///
    /// The caller guarantees there is room.
    #[inline]
    pub(crate) fn push_within_capacity(&mut self, value: T) {
        debug_assert!(!self.is_full());
        self.data.push(value);
    }

    /// Removes and returns the last element
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Removes and yields every element in order, keeping the capacity
    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, T> {
        self.data.drain(..)
    }

    /// Removes every element, keeping the capacity
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the live elements as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the live elements as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the array and returns the live elements
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        // `Vec::clone` only keeps `len` slots; keep the logical capacity backed.
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
