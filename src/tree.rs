//! Implicit complete-binary-tree index arithmetic
//!
//! A binary heap of `n` elements lives in `buf[0..n]`, laid out level by level
//! from left to right. Node `i` has children `2i + 1` and `2i + 2` and parent
//! `(i - 1) / 2`. Callers bound every index by the live length, never by the
//! allocated capacity.

use std::mem;

use crate::compare::Comparator;

/// Index of the parent of node `i`
///
/// `i` must not be the root.
#[inline]
pub const fn parent(i: usize) -> usize {
    debug_assert!(i > 0);
    (i - 1) / 2
}

/// Index of the left child of node `i`
#[inline]
pub const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of node `i`
#[inline]
pub const fn right(i: usize) -> usize {
    2 * i + 2
}

/// Index of the last node that has at least one child, if any
#[inline]
pub const fn last_internal(len: usize) -> Option<usize> {
    if len < 2 {
        None
    } else {
        Some(parent(len - 1))
    }
}

/// Returns the first index whose element orders strictly before its parent
///
/// `None` means the slice satisfies the heap property under `cmp`.
pub fn first_violation<T, C: Comparator<T> + ?Sized>(data: &[T], cmp: &C) -> Option<usize> {
    (1..data.len()).find(|&i| cmp.less(&data[i], &data[parent(i)]))
}

/// Returns true if `data` satisfies the heap property under `cmp`
pub fn is_heap<T, C: Comparator<T> + ?Sized>(data: &[T], cmp: &C) -> bool {
    first_violation(data, cmp).is_none()
}

/// Moves the element at `index` toward the root while it orders strictly
/// before its parent. Returns its final index.
pub(crate) fn sift_up<T, C: Comparator<T> + ?Sized>(
    data: &mut [T],
    mut index: usize,
    cmp: &C,
) -> usize {
    while index > 0 {
        let p = parent(index);
        if cmp.less(&data[index], &data[p]) {
            data.swap(index, p);
            index = p;
        } else {
            break;
        }
    }
    index
}

/// Moves the element at `index` toward the leaves while some child orders
/// strictly before it. Only `data[..len]` is considered live.
///
/// The smaller child is chosen; on a tie the left child wins.
pub(crate) fn sift_down<T, C: Comparator<T> + ?Sized>(
    data: &mut [T],
    mut index: usize,
    len: usize,
    cmp: &C,
) -> usize {
    loop {
        let l = left(index);
        if l >= len {
            break;
        }
        let r = right(index);
        let mut child = l;
        if r < len && cmp.less(&data[r], &data[l]) {
            child = r;
        }

        if cmp.less(&data[child], &data[index]) {
            data.swap(index, child);
            index = child;
        } else {
            break;
        }
    }
    index
}

/// Rearranges `data` into a heap in O(n), sifting down from the last
/// internal node back to the root.
pub(crate) fn heapify<T, C: Comparator<T> + ?Sized>(data: &mut [T], cmp: &C) {
    // Zero-sized values are indistinguishable, so any arrangement is a heap.
    if mem::size_of::<T>() == 0 {
        return;
    }
    let len = data.len();
    if let Some(last) = last_internal(len) {
        for i in (0..=last).rev() {
            sift_down(data, i, len, cmp);
        }
    }
}
