//! The comparator seam and error types for the heap
//!
//! This module provides:
//!
//! - [`Comparator`]: the strategy trait through which the heap orders its
//!   elements. Comparisons are allowed to fail, and every heap operation
//!   that invokes a comparator restores its prior state before surfacing
//!   the failure.
//! - [`NaturalOrder`] / [`ReverseOrder`]: infallible `Ord`-based
//!   comparators for max-first and min-first queues.
//! - [`OrderBy`]: adapter turning a caller-supplied predicate closure into
//!   a comparator.
//! - [`HeapError`]: the error type for operations that can fail for more
//!   than one reason.

use std::convert::Infallible;
use std::fmt;

/// A strict weak ordering over `T` whose comparisons may fail.
///
/// The heap calls [`try_less`](Comparator::try_less) to decide which of two
/// elements ranks below the other. A comparator that can never fail should
/// use `Error = Infallible`, which lets callers discharge the error arm
/// statically.
///
/// The ordering must be a strict weak order over the elements currently
/// stored; the heap does not (and cannot) enforce this.
pub trait Comparator<T> {
    /// The failure type surfaced when a comparison cannot be carried out.
    type Error;

    /// Returns `true` if `a` has strictly lower priority than `b`.
    fn try_less(&self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

/// Orders elements by their `Ord` instance, largest first.
///
/// This is the default comparator of [`LeftistHeap`](crate::LeftistHeap):
/// `peek` and `pop` yield the greatest element, matching the behavior of
/// `std::collections::BinaryHeap`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    type Error = Infallible;

    fn try_less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(a < b)
    }
}

/// Orders elements by their `Ord` instance, smallest first.
///
/// Use this to turn [`LeftistHeap`](crate::LeftistHeap) into a min-queue
/// without wrapping every element in `std::cmp::Reverse`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder;

impl<T: Ord> Comparator<T> for ReverseOrder {
    type Error = Infallible;

    fn try_less(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        Ok(b < a)
    }
}

/// Comparator backed by a caller-supplied predicate.
///
/// The closure answers "does `a` rank strictly below `b`?" and may fail:
///
/// ```rust
/// use leftist_heap::{LeftistHeap, OrderBy};
///
/// // Order f64 samples, refusing to rank NaN.
/// let cmp = OrderBy::new(|a: &f64, b: &f64| {
///     a.partial_cmp(b).map(|o| o.is_lt()).ok_or("not comparable")
/// });
/// let mut heap = LeftistHeap::with_comparator(cmp);
/// heap.push(1.5).unwrap();
/// assert!(heap.push(f64::NAN).is_err());
/// assert_eq!(heap.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OrderBy<F>(F);

impl<F> OrderBy<F> {
    /// Wraps a `Fn(&T, &T) -> Result<bool, E>` predicate as a comparator.
    pub fn new(pred: F) -> Self {
        OrderBy(pred)
    }
}

impl<T, E, F> Comparator<T> for OrderBy<F>
where
    F: Fn(&T, &T) -> Result<bool, E>,
{
    type Error = E;

    fn try_less(&self, a: &T, b: &T) -> Result<bool, E> {
        (self.0)(a, b)
    }
}

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError<E> {
    /// The operation requires a non-empty heap
    Empty,
    /// The comparator failed; the heap was left exactly as it was before
    /// the operation
    Compare(E),
}

impl<E: fmt::Display> fmt::Display for HeapError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "operation on an empty heap"),
            HeapError::Compare(e) => write!(f, "comparator failed: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for HeapError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::Empty => None,
            HeapError::Compare(e) => Some(e),
        }
    }
}
