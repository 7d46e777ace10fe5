//! An owned singly-linked list whose nodes can be sorted by relinking.
//!
//! Each [`ListNode`] exclusively owns its successor through a [`Link`]. The sorting routines
//! take a head by value and hand back the new head; nodes are never cloned or reallocated,
//! only their `next` links are rewired.
//!
//! # Example
//!
//! ```
//! use sortkit_engine::list::List;
//!
//! let mut list: List<_> = [3, 1, 2].into_iter().collect();
//! list.merge_sort();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

mod merge_sort;

pub use merge_sort::{merge_sort_list, merge_sort_list_by};

use std::fmt::{self, Debug};

/// A link to the next node, or `None` at the end of the chain.
pub type Link<T> = Option<Box<ListNode<T>>>;

pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    pub fn new(val: T) -> Self {
        Self { val, next: None }
    }
}

/// Owning handle over a chain of [`ListNode`]s.
///
/// Dropping a `List` frees its nodes one by one, so arbitrarily long lists do not overflow the
/// stack the way a recursively dropped `Box` chain would.
pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Takes ownership of an existing chain. The chain must be finite.
    pub fn from_head(head: Link<T>) -> Self {
        let mut len = 0;
        let mut cursor = head.as_deref();
        while let Some(node) = cursor {
            len += 1;
            cursor = node.next.as_deref();
        }
        Self { head, len }
    }

    /// Releases the chain without freeing it.
    pub fn into_head(mut self) -> Link<T> {
        self.len = 0;
        self.head.take()
    }

    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, val: T) {
        let node = Box::new(ListNode {
            val,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.val
        })
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Sorts the list in non-descending order. See [`merge_sort_list`].
    pub fn merge_sort(&mut self)
    where
        T: Ord,
    {
        self.merge_sort_by(|a, b| a < b)
    }

    pub fn merge_sort_by<F>(&mut self, is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        self.head = merge_sort_list_by(self.head.take(), is_less);
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for val in iter {
            tail = &mut tail.insert(Box::new(ListNode::new(val))).next;
            list.len += 1;
        }
        list
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.val
        })
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
