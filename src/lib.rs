//! Binary Heap Priority Queue for Rust
//!
//! This crate provides a generic priority queue backed by a binary heap laid
//! out as an implicit complete binary tree in a contiguous buffer.
//!
//! # Features
//!
//! - **Pluggable ordering**: any [`Comparator`](compare::Comparator); natural
//!   order by default, [`ReverseOrder`](compare::ReverseOrder) for a max-heap,
//!   or a closure via [`FnComparator`](compare::FnComparator)
//! - **Fixed or doubling capacity**: fixed-size queues reject inserts when full,
//!   doubling queues grow their buffer, optionally up to a ceiling
//! - **Explicit errors**: empty, full and allocation failures are returned as
//!   [`QueueError`]; a failed operation never changes the queue
//! - **Extras**: O(n) heapify, `replace_top`, `push_pop`, heapsort and bounded
//!   top-k selection
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `peek`         | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use rust_priority_queue::{PriorityQueue, QueueError};
//!
//! let mut queue = PriorityQueue::fixed(2).unwrap();
//! queue.insert(5).unwrap();
//! queue.insert(3).unwrap();
//! assert_eq!(queue.insert(8), Err(QueueError::CapacityExceeded { capacity: 2 }));
//!
//! assert_eq!(queue.extract_min(), Ok(3));
//! assert_eq!(queue.extract_min(), Ok(5));
//! assert_eq!(queue.extract_min(), Err(QueueError::EmptyQueue));
//! ```
//!
//! # Logging
//!
//! Capacity growth, rejected inserts and construction are reported through the
//! [`log`] facade. No logger is installed by this crate.

pub mod binary;
pub mod compare;
pub mod config;
pub mod error;
pub mod select;
pub mod stdlib_compat;
pub mod storage;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use binary::PriorityQueue;
pub use compare::{Comparator, FnComparator, NaturalOrder, ReverseOrder};
pub use config::{GrowthPolicy, QueueConfig};
pub use error::{QueueError, Result};
pub use traits::Heap;
