//! Generic tests for every queue configuration
//!
//! These tests are written against the [`Heap`] trait and run once per
//! queue flavour: lazily allocated, pre-sized doubling, tiny doubling (so
//! growth happens constantly), and large fixed-size.

use rust_priority_queue::compare::by_key;
use rust_priority_queue::{
    Heap, NaturalOrder, PriorityQueue, QueueConfig, QueueError, ReverseOrder,
};

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), Err(QueueError::EmptyQueue));
    assert_eq!(heap.pop(), Err(QueueError::EmptyQueue));
}

/// Test the documented insert/extract trace
fn test_example_trace<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    for v in [5, 3, 8, 1, 4] {
        heap.push(v).unwrap();
    }

    assert_eq!(heap.len(), 5);
    assert_eq!(heap.pop(), Ok(1));
    assert_eq!(heap.pop(), Ok(3));
    assert_eq!(heap.pop(), Ok(4));
    assert_eq!(heap.pop(), Ok(5));
    assert_eq!(heap.pop(), Ok(8));
    assert_eq!(heap.pop(), Err(QueueError::EmptyQueue));
    assert!(heap.is_empty());
}

/// Test that peek always agrees with the next pop
fn test_peek_pop_agreement<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    for v in [42, -7, 13, 0, 99, -7, 5] {
        heap.push(v).unwrap();
    }
    while !heap.is_empty() {
        let peeked = *heap.peek().unwrap();
        assert_eq!(heap.pop(), Ok(peeked));
    }
}

/// Test that draining to empty and refilling works
fn test_drain_and_refill<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    for round in 0..3 {
        for v in (0..20).rev() {
            heap.push(v + round).unwrap();
        }
        for v in 0..20 {
            assert_eq!(heap.pop(), Ok(v + round));
        }
        assert_eq!(heap.peek(), Err(QueueError::EmptyQueue));
    }
}

/// Test ascending insertion
fn test_ascending_insertion<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    for i in 0..100 {
        heap.push(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(heap.pop(), Ok(i));
    }
}

/// Test descending insertion
fn test_descending_insertion<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    for i in (0..100).rev() {
        heap.push(i).unwrap();
    }
    for i in 0..100 {
        assert_eq!(heap.pop(), Ok(i));
    }
}

/// Test many duplicates mixed with distinct values
fn test_duplicates<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    for i in 0..60 {
        heap.push(i % 3).unwrap();
    }
    let mut last = i32::MIN;
    let mut count = 0;
    while let Ok(v) = heap.pop() {
        assert!(v >= last);
        last = v;
        count += 1;
    }
    assert_eq!(count, 60);
}

/// Test merge of two heaps
fn test_merge<H: Heap<i32>>(new: fn() -> H) {
    let mut heap1 = new();
    let mut heap2 = new();
    for v in [10, 30, 50] {
        heap1.push(v).unwrap();
    }
    for v in [20, 40, 60, 0] {
        heap2.push(v).unwrap();
    }

    heap1.merge(heap2).unwrap();
    assert_eq!(heap1.len(), 7);
    for expected in [0, 10, 20, 30, 40, 50, 60] {
        assert_eq!(heap1.pop(), Ok(expected));
    }
}

/// Test size accounting across interleaved operations
fn test_size_accounting<H: Heap<i32>>(new: fn() -> H) {
    let mut heap = new();
    let mut inserted = 0usize;
    let mut extracted = 0usize;
    for i in 0..50 {
        heap.push(i * 7 % 13).unwrap();
        inserted += 1;
        if i % 3 == 0 {
            heap.pop().unwrap();
            extracted += 1;
        }
        assert_eq!(heap.len(), inserted - extracted);
    }
}

fn lazy() -> PriorityQueue<i32> {
    PriorityQueue::new()
}

fn presized() -> PriorityQueue<i32> {
    PriorityQueue::with_capacity(128).unwrap()
}

fn tiny() -> PriorityQueue<i32> {
    PriorityQueue::with_config(QueueConfig::growable(0), NaturalOrder).unwrap()
}

fn fixed() -> PriorityQueue<i32> {
    PriorityQueue::fixed(1024).unwrap()
}

macro_rules! heap_suite {
    ($name:ident, $factory:expr) => {
        mod $name {
            use super::*;

            #[test]
            fn empty_heap() {
                test_empty_heap($factory);
            }

            #[test]
            fn example_trace() {
                test_example_trace($factory);
            }

            #[test]
            fn peek_pop_agreement() {
                test_peek_pop_agreement($factory);
            }

            #[test]
            fn drain_and_refill() {
                test_drain_and_refill($factory);
            }

            #[test]
            fn ascending_insertion() {
                test_ascending_insertion($factory);
            }

            #[test]
            fn descending_insertion() {
                test_descending_insertion($factory);
            }

            #[test]
            fn duplicates() {
                test_duplicates($factory);
            }

            #[test]
            fn merge() {
                test_merge($factory);
            }

            #[test]
            fn size_accounting() {
                test_size_accounting($factory);
            }
        }
    };
}

heap_suite!(lazy_queue, lazy);
heap_suite!(presized_queue, presized);
heap_suite!(tiny_queue, tiny);
heap_suite!(fixed_queue, fixed);

#[test]
fn test_fixed_capacity_exceeded_leaves_queue_intact() {
    let mut queue = PriorityQueue::fixed(2).unwrap();
    queue.insert(7).unwrap();
    queue.insert(3).unwrap();

    assert_eq!(
        queue.insert(1),
        Err(QueueError::CapacityExceeded { capacity: 2 })
    );
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.peek(), Ok(&3));
    assert_eq!(queue.extract_min(), Ok(3));
    queue.insert(1).unwrap();
    assert_eq!(queue.extract_min(), Ok(1));
}

#[test]
fn test_max_heap() {
    let mut queue = PriorityQueue::with_comparator(ReverseOrder);
    for v in [5, 3, 8, 1, 4] {
        queue.insert(v).unwrap();
    }
    let drained: Vec<_> = queue.drain_sorted().collect();
    assert_eq!(drained, vec![8, 5, 4, 3, 1]);
}

#[test]
fn test_struct_elements_by_key() {
    #[derive(Debug, PartialEq)]
    struct Job {
        priority: u8,
        name: String,
    }

    let mut queue = PriorityQueue::with_comparator(by_key(|j: &Job| j.priority));
    for (priority, name) in [(3, "c"), (1, "a"), (2, "b")] {
        queue
            .insert(Job {
                priority,
                name: name.to_string(),
            })
            .unwrap();
    }
    let names: Vec<String> = queue.into_iter().map(|j| j.name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_strings() {
    let mut queue: PriorityQueue<String> = PriorityQueue::new();
    for word in ["pear", "apple", "fig", "banana"] {
        queue.insert(word.to_string()).unwrap();
    }
    assert_eq!(queue.peek().map(String::as_str), Ok("apple"));
    assert_eq!(
        queue.into_sorted_vec(),
        vec!["apple", "banana", "fig", "pear"]
    );
}

#[test]
fn test_config_from_builder() {
    let config = QueueConfig::builder()
        .initial_capacity(1)
        .max_capacity(3)
        .build()
        .unwrap();
    let mut queue = PriorityQueue::with_config(config, NaturalOrder).unwrap();
    queue.try_extend([3, 2, 1]).unwrap();
    assert!(queue.insert(0).unwrap_err().is_capacity_exceeded());
    assert_eq!(queue.capacity(), 3);
    assert_eq!(queue.into_sorted_vec(), vec![1, 2, 3]);
}
