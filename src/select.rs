//! Bounded top-k selection
//!
//! Finding the `k` greatest of `n` elements by sorting costs O(n log n). Keeping
//! a `k`-element min-heap of the best candidates seen so far costs
//! O(n log k): the heap's minimum is the weakest candidate, and any incoming
//! element that beats it replaces it via
//! [`replace_top`](crate::binary::PriorityQueue::replace_top).
//!
//! ```rust
//! use rust_priority_queue::select::{kth_largest, largest_k, smallest_k};
//!
//! let data = [7, 1, 9, 4, 9, 3];
//! assert_eq!(largest_k(data, 3).unwrap(), vec![9, 9, 7]);
//! assert_eq!(smallest_k(data, 2).unwrap(), vec![1, 3]);
//! assert_eq!(kth_largest(data, 4).unwrap(), Some(4));
//! ```

use crate::binary::PriorityQueue;
use crate::compare::{Comparator, NaturalOrder, ReverseOrder};
use crate::config::QueueConfig;
use crate::error::Result;

/// Collects the `k` elements of `iter` that order last under `cmp`
///
/// The result is sorted from the greatest down. Fewer than `k` elements are
/// returned if `iter` is shorter.
///
/// # Errors
/// Returns [`QueueError::AllocationError`](crate::error::QueueError::AllocationError)
/// if the candidate buffer cannot be allocated.
pub fn largest_k_by<T, C, I>(iter: I, k: usize, cmp: C) -> Result<Vec<T>>
where
    C: Comparator<T>,
    I: IntoIterator<Item = T>,
{
    let mut candidates = bounded_candidates(iter, k, cmp)?;
    let mut out = candidates.drain_to_vec();
    out.reverse();
    Ok(out)
}

/// The `k` largest elements of `iter`, greatest first
pub fn largest_k<T: Ord, I: IntoIterator<Item = T>>(iter: I, k: usize) -> Result<Vec<T>> {
    largest_k_by(iter, k, NaturalOrder)
}

/// The `k` smallest elements of `iter`, least first
pub fn smallest_k<T: Ord, I: IntoIterator<Item = T>>(iter: I, k: usize) -> Result<Vec<T>> {
    largest_k_by(iter, k, ReverseOrder)
}

/// The `k`-th largest element of `iter` (1-based)
///
/// Returns `None` when `k` is zero or `iter` has fewer than `k` elements.
pub fn kth_largest<T: Ord, I: IntoIterator<Item = T>>(iter: I, k: usize) -> Result<Option<T>> {
    let mut candidates = bounded_candidates(iter, k, NaturalOrder)?;
    if k == 0 || candidates.len() < k {
        return Ok(None);
    }
    Ok(candidates.extract_min().ok())
}

fn bounded_candidates<T, C, I>(iter: I, k: usize, cmp: C) -> Result<PriorityQueue<T, C>>
where
    C: Comparator<T>,
    I: IntoIterator<Item = T>,
{
    let iter = iter.into_iter();
    if k == 0 {
        return Ok(PriorityQueue::with_comparator(cmp));
    }

    // Size for the input when it is known to be short; never beyond k.
    let (lower, _) = iter.size_hint();
    let config = QueueConfig::builder()
        .initial_capacity(lower.clamp(1, k))
        .max_capacity(k)
        .build()?;
    let mut candidates = PriorityQueue::with_config(config, cmp)?;

    for value in iter {
        if candidates.len() < k {
            candidates.insert(value)?;
        } else {
            let beats_weakest = match candidates.peek() {
                Ok(weakest) => candidates.comparator().less(weakest, &value),
                Err(_) => false,
            };
            if beats_weakest {
                // Non-empty here, so the replacement cannot be refused.
                candidates.replace_top(value).map_err(|e| e.error)?;
            }
        }
    }
    Ok(candidates)
}
