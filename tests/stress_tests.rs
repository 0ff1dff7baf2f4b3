//! Stress tests that push the heap through large workloads
//!
//! These tests perform large numbers of operations in adversarial
//! patterns: sorted input (which degenerates the tree into a left chain),
//! heavy churn, and repeated merging of many queues.

use leftist_heap::{LeftistHeap, ReverseOrder};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Ascending pushes into a max-queue build a pure left chain; teardown,
/// clone, and drain must all survive the 100k-deep left spine without
/// exhausting the call stack.
#[test]
fn degenerate_left_chain_survives_clone_drop_and_drain() {
    const N: i32 = 100_000;

    let mut heap: LeftistHeap<i32> = LeftistHeap::new();
    for v in 0..N {
        heap.push(v).unwrap();
    }
    assert_eq!(heap.len(), N as usize);
    assert_eq!(heap.peek(), Some(&(N - 1)));

    let clone = heap.clone();
    assert_eq!(clone.len(), N as usize);

    for expected in (0..N).rev() {
        assert_eq!(heap.pop().unwrap(), expected);
    }
    assert!(heap.is_empty());

    // `clone` is dropped here with its full chain intact.
}

#[test]
fn massive_random_operations() {
    const N: usize = 50_000;

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut values: Vec<i64> = (0..N as i64).collect();
    values.shuffle(&mut rng);

    let mut heap: LeftistHeap<i64> = LeftistHeap::new();
    for &v in &values {
        heap.push(v).unwrap();
    }
    assert_eq!(heap.len(), N);
    assert!(heap.verify_internal_structure());

    for expected in (0..N as i64).rev() {
        assert_eq!(heap.pop().unwrap(), expected);
    }
    assert!(heap.is_empty());
}

#[test]
fn churn_keeps_sizes_consistent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap: LeftistHeap<u32, ReverseOrder> = LeftistHeap::new();
    let mut live = 0usize;

    let mut values: Vec<u32> = (0..20_000).collect();
    values.shuffle(&mut rng);

    for (i, v) in values.into_iter().enumerate() {
        heap.push(v).unwrap();
        live += 1;
        // Pop two of every three pushes once warmed up.
        if i % 3 != 0 && !heap.is_empty() {
            heap.pop().unwrap();
            live -= 1;
        }
        assert_eq!(heap.len(), live);
    }
    assert!(heap.verify_internal_structure());

    let mut previous = 0u32;
    while let Ok(v) = heap.pop() {
        assert!(v >= previous);
        previous = v;
    }
}

#[test]
fn merging_many_queues_accumulates_everything() {
    const PIECES: usize = 200;
    const PER_PIECE: usize = 100;

    let mut rng = StdRng::seed_from_u64(42);
    let mut values: Vec<u64> = (0..(PIECES * PER_PIECE) as u64).collect();
    values.shuffle(&mut rng);

    let mut pieces: Vec<LeftistHeap<u64>> = values
        .chunks(PER_PIECE)
        .map(|chunk| chunk.iter().copied().collect())
        .collect();

    let mut all: LeftistHeap<u64> = LeftistHeap::new();
    for piece in &mut pieces {
        all.merge(piece).unwrap();
        assert!(piece.is_empty());
    }

    assert_eq!(all.len(), PIECES * PER_PIECE);
    assert!(all.verify_internal_structure());

    for expected in (0..(PIECES * PER_PIECE) as u64).rev() {
        assert_eq!(all.pop().unwrap(), expected);
    }
}
