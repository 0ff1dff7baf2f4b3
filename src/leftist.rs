//! Leftist heap implementation
//!
//! A leftist heap is a heap-ordered binary tree with a relaxed balance
//! invariant: every node's left child has a null path length at least that
//! of its right child. The right spine of an n-node leftist tree therefore
//! has at most ⌊log₂(n+1)⌋ nodes, and a single recursive merge along the
//! right spines gives:
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(log n)   |
//! | `pop`     | O(log n)   |
//! | `peek`    | O(1)       |
//! | `merge`   | O(log(n+m))|
//!
//! Unlike an array-backed binary heap, two leftist heaps merge in
//! logarithmic time, and the merge reuses the existing nodes instead of
//! reinserting elements one by one.
//!
//! Ordering is delegated to a [`Comparator`] supplied at construction.
//! Comparators may fail, and every mutating operation is all-or-nothing:
//! if the comparator fails at any depth of the merge recursion, the heap
//! (and, for a two-heap merge, both heaps) is left exactly as it was
//! before the call.

use crate::traits::{Comparator, HeapError, NaturalOrder};
use std::convert::Infallible;
use std::fmt;
use std::mem;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
    /// Null path length: shortest distance to a node with fewer than two
    /// children. A leaf has npl 0; an absent child counts as -1.
    npl: i32,
}

impl<T> Node<T> {
    fn singleton(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
            npl: 0,
        })
    }
}

fn npl<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |n| n.npl)
}

/// Returned by [`merge_trees`] when the comparator fails: the error plus
/// both input trees, handed back unmodified and in their original
/// positions so the caller can reinstall them.
struct Unmerged<T, E> {
    error: E,
    first: Link<T>,
    second: Link<T>,
}

/// Merges two heap-ordered leftist trees into one, reusing their nodes.
///
/// If either input is absent the other is returned verbatim without
/// consulting the comparator. Otherwise the comparator is invoked exactly
/// once per recursion frame, before that frame changes anything; all
/// structural updates (reattaching the merged right subtree, the child
/// swap restoring the leftist property, the npl recomputation) happen
/// only after the recursive call has returned successfully. A failing
/// frame reattaches whatever it detached and hands both inputs back, so
/// an error at any depth yields [`Unmerged`] with both trees exactly as
/// received.
///
/// Recursion walks right spines only, so the depth is O(log(n+m)).
fn merge_trees<T, C: Comparator<T>>(
    cmp: &C,
    first: Link<T>,
    second: Link<T>,
) -> Result<Link<T>, Unmerged<T, C::Error>> {
    let (a, b) = match (first, second) {
        (None, tree) | (tree, None) => return Ok(tree),
        (Some(a), Some(b)) => (a, b),
    };

    let a_below_b = match cmp.try_less(&a.item, &b.item) {
        Ok(below) => below,
        Err(error) => {
            return Err(Unmerged {
                error,
                first: Some(a),
                second: Some(b),
            })
        }
    };
    let (mut winner, loser) = if a_below_b { (b, a) } else { (a, b) };

    match merge_trees(cmp, winner.right.take(), Some(loser)) {
        Ok(subtree) => {
            winner.right = subtree;
            if npl(&winner.left) < npl(&winner.right) {
                mem::swap(&mut winner.left, &mut winner.right);
            }
            winner.npl = npl(&winner.right) + 1;
            Ok(Some(winner))
        }
        Err(unmerged) => {
            // The child frame handed back (detached right, loser)
            // untouched; reattach the right child and return the inputs
            // in the positions they arrived in.
            winner.right = unmerged.first;
            let loser = unmerged.second;
            let (first, second) = if a_below_b {
                (loser, Some(winner))
            } else {
                (Some(winner), loser)
            };
            Err(Unmerged {
                error: unmerged.error,
                first,
                second,
            })
        }
    }
}

/// Releases a tree with an explicit worklist. The left spine of a valid
/// leftist tree can hold nearly every node, so recursive teardown would
/// overflow the stack on large degenerate heaps.
fn release_tree<T>(root: Link<T>) {
    let mut work = Vec::new();
    work.extend(root);
    while let Some(mut node) = work.pop() {
        work.extend(node.left.take());
        work.extend(node.right.take());
    }
}

/// Post-order worklist frame shared by the non-recursive tree walks.
enum Frame<'a, T> {
    Visit(&'a Node<T>),
    Build(&'a Node<T>),
}

/// Deep-clones a tree without recursing (see [`release_tree`] for why).
/// Stored null path lengths are carried over unchanged.
fn clone_tree<T: Clone>(root: &Node<T>) -> Box<Node<T>> {
    let mut work = vec![Frame::Visit(root)];
    let mut done: Vec<Box<Node<T>>> = Vec::new();

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Visit(node) => {
                work.push(Frame::Build(node));
                if let Some(left) = node.left.as_deref() {
                    work.push(Frame::Visit(left));
                }
                if let Some(right) = node.right.as_deref() {
                    work.push(Frame::Visit(right));
                }
            }
            Frame::Build(node) => {
                // Finished subtrees sit on top of `done`: left above right.
                let left = node.left.as_ref().map(|_| done.pop().unwrap());
                let right = node.right.as_ref().map(|_| done.pop().unwrap());
                done.push(Box::new(Node {
                    item: node.item.clone(),
                    left,
                    right,
                    npl: node.npl,
                }));
            }
        }
    }

    done.pop().unwrap()
}

/// A mergeable priority queue backed by a leftist heap.
///
/// Elements are ordered by a [`Comparator`] fixed at construction; the
/// default [`NaturalOrder`] yields the greatest element first. Two heaps
/// merge in O(log(n+m)) by splicing their trees together rather than
/// reinserting elements.
///
/// Every operation that consults the comparator is all-or-nothing: on a
/// comparator failure the error is returned and the heap's contents,
/// structure, and length are exactly as they were before the call.
///
/// # Example
///
/// ```rust
/// use leftist_heap::LeftistHeap;
///
/// let mut heap: LeftistHeap<i32> = LeftistHeap::new();
/// heap.push(3).unwrap();
/// heap.push(8).unwrap();
/// heap.push(5).unwrap();
///
/// assert_eq!(heap.peek(), Some(&8));
/// assert_eq!(heap.pop().unwrap(), 8);
/// assert_eq!(heap.len(), 2);
///
/// let mut other: LeftistHeap<i32> = LeftistHeap::new();
/// other.push(10).unwrap();
/// heap.merge(&mut other).unwrap();
/// assert!(other.is_empty());
/// assert_eq!(heap.peek(), Some(&10));
/// ```
pub struct LeftistHeap<T, C = NaturalOrder> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

impl<T, C: Default> LeftistHeap<T, C> {
    /// Creates an empty heap with a default-constructed comparator.
    pub fn new() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> LeftistHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`.
    pub fn with_comparator(cmp: C) -> Self {
        LeftistHeap {
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the extreme element without removing it, or `None` if the
    /// heap is empty. Never consults the comparator.
    pub fn peek(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.item)
    }

    /// Returns a reference to the heap's comparator.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        release_tree(self.root.take());
        self.len = 0;
    }
}

impl<T, C: Comparator<T>> LeftistHeap<T, C> {
    /// Inserts an element.
    ///
    /// On comparator failure the element is dropped and the heap is
    /// unchanged.
    pub fn push(&mut self, item: T) -> Result<(), C::Error> {
        match merge_trees(&self.cmp, self.root.take(), Some(Node::singleton(item))) {
            Ok(root) => {
                self.root = root;
                self.len += 1;
                Ok(())
            }
            Err(unmerged) => {
                // The failed merge hands the previous tree back untouched;
                // the orphaned single node in `second` is dropped here.
                self.root = unmerged.first;
                Err(unmerged.error)
            }
        }
    }

    /// Removes and returns the extreme element.
    ///
    /// Fails with [`HeapError::Empty`] on an empty heap. On comparator
    /// failure while re-merging the root's children, the old root is
    /// reassembled and [`HeapError::Compare`] is returned with the heap
    /// unchanged.
    pub fn pop(&mut self) -> Result<T, HeapError<C::Error>> {
        let mut root = self.root.take().ok_or(HeapError::Empty)?;
        let left = root.left.take();
        let right = root.right.take();

        match merge_trees(&self.cmp, left, right) {
            Ok(merged) => {
                self.root = merged;
                self.len -= 1;
                Ok(root.item)
            }
            Err(unmerged) => {
                root.left = unmerged.first;
                root.right = unmerged.second;
                self.root = Some(root);
                Err(HeapError::Compare(unmerged.error))
            }
        }
    }

    /// Moves every element of `other` into `self`, using `self`'s
    /// comparator, in O(log(n+m)).
    ///
    /// On success `other` is left empty. On comparator failure both heaps
    /// are exactly as they were before the call, and `other` keeps its
    /// elements.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), C::Error> {
        match merge_trees(&self.cmp, self.root.take(), other.root.take()) {
            Ok(root) => {
                self.root = root;
                self.len += mem::take(&mut other.len);
                Ok(())
            }
            Err(unmerged) => {
                self.root = unmerged.first;
                other.root = unmerged.second;
                Err(unmerged.error)
            }
        }
    }

    /// Walks the whole tree and checks the structural invariants: stored
    /// null path lengths, the leftist property, heap order, and length
    /// consistency. Intended for tests and debugging; runs in O(n).
    ///
    /// Returns `false` if any invariant is violated or the comparator
    /// fails during the walk.
    pub fn verify_internal_structure(&self) -> bool {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return self.len == 0,
        };

        let mut work = vec![Frame::Visit(root)];
        let mut npls: Vec<i32> = Vec::new();
        let mut count = 0usize;

        while let Some(frame) = work.pop() {
            match frame {
                Frame::Visit(node) => {
                    count += 1;
                    for child in [node.left.as_deref(), node.right.as_deref()]
                        .into_iter()
                        .flatten()
                    {
                        // Heap order: the parent must not rank below the child.
                        match self.cmp.try_less(&node.item, &child.item) {
                            Ok(false) => {}
                            Ok(true) | Err(_) => return false,
                        }
                    }
                    work.push(Frame::Build(node));
                    if let Some(left) = node.left.as_deref() {
                        work.push(Frame::Visit(left));
                    }
                    if let Some(right) = node.right.as_deref() {
                        work.push(Frame::Visit(right));
                    }
                }
                Frame::Build(node) => {
                    let left = if node.left.is_some() {
                        npls.pop().unwrap()
                    } else {
                        -1
                    };
                    let right = if node.right.is_some() {
                        npls.pop().unwrap()
                    } else {
                        -1
                    };
                    if left < right || node.npl != right + 1 {
                        return false;
                    }
                    npls.push(node.npl);
                }
            }
        }

        count == self.len
    }
}

impl<T, C> Drop for LeftistHeap<T, C> {
    fn drop(&mut self) {
        release_tree(self.root.take());
    }
}

impl<T: Clone, C: Clone> Clone for LeftistHeap<T, C> {
    /// Deep clone: the new heap shares no nodes with `self`, and stored
    /// null path lengths carry over unchanged.
    fn clone(&self) -> Self {
        LeftistHeap {
            root: self.root.as_deref().map(clone_tree),
            len: self.len,
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C: Default> Default for LeftistHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> fmt::Debug for LeftistHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeftistHeap")
            .field("len", &self.len)
            .finish()
    }
}

impl<T, C> FromIterator<T> for LeftistHeap<T, C>
where
    C: Comparator<T, Error = Infallible> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C> Extend<T> for LeftistHeap<T, C>
where
    C: Comparator<T, Error = Infallible>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            match self.push(item) {
                Ok(()) => {}
                Err(never) => match never {},
            }
        }
    }
}
