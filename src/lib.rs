//! Mergeable priority queue backed by a leftist heap
//!
//! This crate provides [`LeftistHeap`], an ordered multiset supporting
//! retrieval of the extreme element, insertion, removal of the extreme
//! element, and structural merging of two independent queues, all in
//! O(log n) worst case. Array-backed binary heaps cannot merge in
//! sub-linear time; a leftist heap merges by splicing right spines, which
//! is also the single primitive every other mutation is built on.
//!
//! # Features
//!
//! - **O(log n) merge**: combine two heaps by reusing their nodes, leaving
//!   the donor empty
//! - **Pluggable ordering**: a [`Comparator`] strategy chosen at
//!   construction, either [`NaturalOrder`] (max-first), [`ReverseOrder`]
//!   (min-first), or any predicate via [`OrderBy`]
//! - **All-or-nothing operations**: comparators may fail, and a failure
//!   at any point of any operation leaves the affected heap(s) exactly as
//!   they were before the call
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::LeftistHeap;
//!
//! let mut heap: LeftistHeap<i32> = LeftistHeap::new();
//! heap.push(3).unwrap();
//! heap.push(8).unwrap();
//! heap.push(5).unwrap();
//! assert_eq!(heap.pop().unwrap(), 8);
//!
//! let mut other: LeftistHeap<i32> = LeftistHeap::new();
//! other.push(10).unwrap();
//! other.push(2).unwrap();
//!
//! heap.merge(&mut other).unwrap();
//! assert_eq!(heap.len(), 4);
//! assert_eq!(heap.peek(), Some(&10));
//! assert!(other.is_empty());
//! ```

pub mod leftist;
pub mod traits;

pub use leftist::LeftistHeap;
pub use traits::{Comparator, HeapError, NaturalOrder, OrderBy, ReverseOrder};
