//! Persistent singly-linked list
//!
//! The language's primary sequence type. Nodes are `Arc`-shared and never
//! mutated once a list is handed out, so any number of lists may share a
//! suffix and be read from several threads at once.
//!
//! # Cost model
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `empty`, `cons`, `head`, `tail`, `len` | O(1) |
//! | `append(a, b)` | O(len a), shares all of `b` |
//! | `snoc`, `reverse`, `map`, `get(i)` | O(n) |
//!
//! `append` rebuilds the spine of its left operand in front of the right
//! operand; neither input is touched, which is what keeps structural sharing
//! sound without copying.
//!
//! # Examples
//!
//! ```
//! use curio_core::List;
//!
//! let a: List<i64> = [1, 2, 3].into_iter().collect();
//! let b = List::cons(0, a.clone());
//! assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
//! assert_eq!(a.len(), 3);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

pub struct List<T> {
    node: Option<Arc<Node<T>>>,
}

struct Node<T> {
    head: T,
    tail: List<T>,
    // Cached length of the list starting at this node
    len: usize,
}

impl<T> List<T> {
    /// The empty list
    pub const fn empty() -> Self {
        List { node: None }
    }

    /// Prepend `head` to `tail`, sharing `tail`
    pub fn cons(head: T, tail: List<T>) -> Self {
        let len = tail.len() + 1;
        List {
            node: Some(Arc::new(Node { head, tail, len })),
        }
    }

    pub fn singleton(value: T) -> Self {
        List::cons(value, List::empty())
    }

    /// Method form of [`List::cons`]
    pub fn prepend(&self, head: T) -> Self {
        List::cons(head, self.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    pub fn len(&self) -> usize {
        self.node.as_ref().map_or(0, |n| n.len)
    }

    pub fn head(&self) -> Option<&T> {
        self.node.as_ref().map(|n| &n.head)
    }

    /// Everything after the head; `None` for the empty list
    pub fn tail(&self) -> Option<List<T>> {
        self.node.as_ref().map(|n| n.tail.clone())
    }

    pub fn uncons(&self) -> Option<(&T, List<T>)> {
        self.node.as_ref().map(|n| (&n.head, n.tail.clone()))
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len() {
            return None;
        }
        self.iter().nth(index)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.node.as_deref(),
            remaining: self.len(),
        }
    }

    /// Do both lists start at the very same node?
    pub fn ptr_eq(&self, other: &List<T>) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> List<U> {
        List::from_back(self.iter().map(f).collect())
    }

    // Build a list from a vector, consing from the back
    fn from_back(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(List::empty(), |tail, head| List::cons(head, tail))
    }
}

impl<T: Clone> List<T> {
    /// Elements of `self` followed by elements of `other`
    ///
    /// Copies the spine of `self`; `other` is shared unchanged.
    pub fn append(&self, other: &List<T>) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let front: Vec<&T> = self.iter().collect();
        front
            .into_iter()
            .rev()
            .fold(other.clone(), |tail, head| List::cons(head.clone(), tail))
    }

    /// Append a single element at the end
    pub fn snoc(&self, value: T) -> Self {
        self.append(&List::singleton(value))
    }

    pub fn reverse(&self) -> Self {
        self.iter()
            .fold(List::empty(), |acc, item| List::cons(item.clone(), acc))
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            node: self.node.clone(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::empty()
    }
}

// Unlink uniquely-owned nodes one at a time so long lists don't recurse
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.node.take();
        while let Some(node) = next {
            match Arc::into_inner(node) {
                Some(mut node) => next = node.tail.node.take(),
                None => break,
            }
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        List::from_back(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        List::from_back(items)
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator from head to tail
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.tail.node.as_deref();
            self.remaining -= 1;
            &node.head
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
