//! Kani verification proofs for priority queue operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use rust_priority_queue::{tree, NaturalOrder, PriorityQueue, QueueError};

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len() {
    let mut queue: PriorityQueue<u32> = PriorityQueue::new();
    let initial_len = queue.len();

    let value: u32 = kani::any();
    assert!(queue.insert(value).is_ok());

    // Post-condition: length must increase by exactly 1
    assert!(queue.len() == initial_len + 1);
}

/// Proof that extract_min on an empty queue reports EmptyQueue
#[cfg(kani)]
#[kani::proof]
fn verify_empty_queue_errors() {
    let mut queue: PriorityQueue<u8> = PriorityQueue::new();
    assert!(queue.peek() == Err(QueueError::EmptyQueue));
    assert!(queue.extract_min() == Err(QueueError::EmptyQueue));
}

/// Proof that extract_min returns the minimum of three inserted values
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_extract_returns_min() {
    let mut queue = PriorityQueue::fixed(3).unwrap();

    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();
    queue.insert(a).unwrap();
    queue.insert(b).unwrap();
    queue.insert(c).unwrap();

    let peeked = *queue.peek().unwrap();
    let min = queue.extract_min().unwrap();

    // Post-condition: peek and extract agree and are <= every value
    assert!(peeked == min);
    assert!(min <= a && min <= b && min <= c);
    assert!(tree::is_heap(queue.as_slice(), &NaturalOrder));
}

/// Proof that a full fixed queue rejects inserts without changing
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_capacity_exceeded_is_atomic() {
    let mut queue = PriorityQueue::fixed(2).unwrap();

    let a: u16 = kani::any();
    let b: u16 = kani::any();
    let c: u16 = kani::any();
    queue.insert(a).unwrap();
    queue.insert(b).unwrap();

    let top_before = *queue.peek().unwrap();
    assert!(queue.insert(c) == Err(QueueError::CapacityExceeded { capacity: 2 }));
    assert!(queue.len() == 2);
    assert!(*queue.peek().unwrap() == top_before);
}

/// Proof that the index functions are inverse to each other
#[cfg(kani)]
#[kani::proof]
fn verify_parent_child_mapping() {
    let i: usize = kani::any();
    kani::assume(i < (usize::MAX - 2) / 2);
    assert!(tree::parent(tree::left(i)) == i);
    assert!(tree::parent(tree::right(i)) == i);
}
