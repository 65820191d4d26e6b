//! Owning list handle.

use std::fmt;
use std::ptr::NonNull;

use crate::node::Node;

/// Errors that can occur during list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("pop_front on empty list")]
    Empty,
}

/// A doubly-linked list holding the sole owning reference to its first node.
///
/// Ownership runs strictly forward: the list owns the head, each node owns
/// its successor. Back links are observation only. Assigning a `List` moves
/// the whole chain in O(1); duplicating one requires an explicit
/// [`Clone::clone`], which deep-copies every node.
pub struct List {
    head: Option<Box<Node>>,
}

// Safety: the list is the unique owner of its chain and the nodes' back
// links never escape it, so sending the handle to another thread moves the
// whole structure. `&self` methods are read-only with no interior
// mutability, so shared references are safe across threads too.
unsafe impl Send for List {}
unsafe impl Sync for List {}

static_assertions::assert_impl_all!(List: Send, Sync);

impl List {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements by walking the chain. O(n).
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut curr = self.head.as_deref();
        while let Some(node) = curr {
            len += 1;
            curr = node.next();
        }
        len
    }

    /// Returns the first node, or `None` if the list is empty.
    #[inline]
    pub fn front(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    /// Returns the first node mutably, or `None` if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut Node> {
        self.head.as_deref_mut()
    }

    /// Inserts `value` as the new first element.
    ///
    /// The previous first node (if any) has its back link pointed at the
    /// new node and its ownership transferred under it.
    pub fn push_front(&mut self, value: i32) {
        let mut node = Node::detached(value);
        if let Some(mut old) = self.head.take() {
            old.prev = Some(NonNull::from(&mut *node));
            node.next = Some(old);
        }
        self.head = Some(node);
    }

    /// Removes the first node and returns its value.
    ///
    /// The second node (if any) becomes the new head with its back link
    /// cleared. The removed node is destroyed, emitting its trace event.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Empty`] if the list has no elements.
    pub fn pop_front(&mut self) -> Result<i32, ListError> {
        let mut first = self.head.take().ok_or(ListError::Empty)?;
        if let Some(mut next) = first.next.take() {
            next.prev = None;
            self.head = Some(next);
        }
        Ok(first.value())
    }

    /// Returns the node at zero-based `index`, or `None` if the chain ends
    /// before reaching it. O(index).
    pub fn at(&self, index: usize) -> Option<&Node> {
        let mut curr = self.head.as_deref();
        for _ in 0..index {
            curr = curr?.next();
        }
        curr
    }

    /// Returns the node at zero-based `index` mutably, or `None` if the
    /// chain ends before reaching it. O(index).
    pub fn at_mut(&mut self, index: usize) -> Option<&mut Node> {
        let mut curr = self.head.as_deref_mut();
        for _ in 0..index {
            curr = curr?.next_mut();
        }
        curr
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for List {
    /// Deep copy: one fresh node per source node, first to last, with back
    /// links recomputed against the new chain. The copy shares nothing
    /// with the source.
    fn clone(&self) -> Self {
        let Some(src_head) = self.head.as_deref() else {
            return Self::new();
        };
        tracing::debug!("deep-copying list");

        let mut head = Node::detached(src_head.value());
        let mut curr: &mut Node = &mut head;
        let mut src = src_head.next();
        while let Some(src_node) = src {
            let prev = NonNull::from(&mut *curr);
            let mut node = Node::detached(src_node.value());
            node.prev = Some(prev);
            curr.next = Some(node);
            curr = curr.next.as_deref_mut().expect("just linked");
            src = src_node.next();
        }
        Self { head: Some(head) }
    }
}

impl fmt::Display for List {
    /// Renders `[ v0 v1 … vn ]`; an empty list renders as `[ ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut curr = self.front();
        while let Some(node) = curr {
            write!(f, " {}", node.value())?;
            curr = node.next();
        }
        f.write_str(" ]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace;

    fn list_of(values: &[i32]) -> List {
        // push_front reverses, so feed it back to front
        let mut list = List::new();
        for &v in values.iter().rev() {
            list.push_front(v);
        }
        list
    }

    fn values(list: &List) -> Vec<i32> {
        let mut out = Vec::new();
        let mut curr = list.front();
        while let Some(node) = curr {
            out.push(node.value());
            curr = node.next();
        }
        out
    }

    #[test]
    fn new_is_empty() {
        let list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
    }

    #[test]
    fn push_front_reverses_call_order() {
        let mut list = List::new();
        list.push_front(1);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(values(&list), vec![3, 2, 1]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn push_front_links_back_reference() {
        let mut list = List::new();
        list.push_front(2);
        list.push_front(1);

        assert!(list.front().unwrap().prev().is_none());
        let second = list.at(1).unwrap();
        assert_eq!(second.prev().unwrap().value(), 1);
    }

    #[test]
    fn pop_front_returns_values_in_sequence_order() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_front(), Ok(2));
        assert_eq!(list.pop_front(), Ok(3));
        assert_eq!(list.pop_front(), Err(ListError::Empty));
        assert!(list.is_empty());
    }

    #[test]
    fn pop_front_clears_new_head_back_reference() {
        let mut list = list_of(&[1, 2]);
        list.pop_front().unwrap();
        assert!(list.front().unwrap().prev().is_none());
    }

    #[test]
    fn pop_front_destroys_exactly_one_node() {
        let mut list = list_of(&[1, 2, 3]);
        let (popped, events) = trace::capture(|| list.pop_front().unwrap());
        assert_eq!(popped, 1);
        assert_eq!(events, vec![1]);
    }

    #[test]
    fn pop_front_on_empty_reports_error() {
        let mut list = List::new();
        assert_eq!(list.pop_front(), Err(ListError::Empty));
    }

    #[test]
    fn at_walks_forward() {
        let list = list_of(&[10, 20, 30]);
        assert_eq!(list.at(0).unwrap().value(), 10);
        assert_eq!(list.at(1).unwrap().value(), 20);
        assert_eq!(list.at(2).unwrap().value(), 30);
    }

    #[test]
    fn at_past_the_end_is_none() {
        let list = list_of(&[10, 20, 30]);
        assert!(list.at(3).is_none());
        assert!(list.at(100).is_none());
        assert!(List::new().at(0).is_none());
    }

    #[test]
    fn clone_is_independent_both_ways() {
        let mut a = list_of(&[1, 2, 3, 4]);
        let mut b = a.clone();
        assert_eq!(values(&b), vec![1, 2, 3, 4]);

        a.at_mut(0).unwrap().erase(); // a loses 2
        b.push_front(0);
        b.pop_front().unwrap();
        b.at_mut(1).unwrap().insert(99);

        assert_eq!(values(&a), vec![1, 3, 4]);
        assert_eq!(values(&b), vec![1, 2, 99, 3, 4]);
    }

    #[test]
    fn clone_recomputes_back_references() {
        let a = list_of(&[1, 2, 3]);
        let b = a.clone();
        let third = b.at(2).unwrap();
        assert_eq!(third.prev().unwrap().value(), 2);
        assert_eq!(third.prev().unwrap().prev().unwrap().value(), 1);
        assert!(b.front().unwrap().prev().is_none());
    }

    #[test]
    fn clone_creates_no_destruction_events() {
        let a = list_of(&[1, 2, 3]);
        let (b, events) = trace::capture(|| a.clone());
        assert!(events.is_empty());
        assert_eq!(values(&b), vec![1, 2, 3]);
    }

    #[test]
    fn move_empties_the_source() {
        let mut a = list_of(&[1, 2, 3]);
        let b = std::mem::take(&mut a);
        assert!(a.front().is_none());
        assert!(a.is_empty());
        assert_eq!(values(&b), vec![1, 2, 3]);
    }

    #[test]
    fn move_neither_creates_nor_destroys_nodes() {
        let mut a = list_of(&[1, 2, 3]);
        let (b, events) = trace::capture(|| std::mem::take(&mut a));
        assert!(events.is_empty());
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn drop_destroys_first_to_last() {
        let list = list_of(&[1, 2, 3, 4]);
        let (_, events) = trace::capture(|| drop(list));
        assert_eq!(events, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display_matches_rendering_contract() {
        assert_eq!(list_of(&[1, 4, 9, 2, 8, 5, 7]).to_string(), "[ 1 4 9 2 8 5 7 ]");
        assert_eq!(list_of(&[42]).to_string(), "[ 42 ]");
        assert_eq!(List::new().to_string(), "[ ]");
    }

    #[test]
    fn erase_through_at_mut_removes_the_successor() {
        let mut list = list_of(&[1, 4, 9, 2, 8, 5, 7]);
        list.at_mut(2).unwrap().erase(); // successor of 9 is 2
        assert_eq!(values(&list), vec![1, 4, 9, 8, 5, 7]);
    }

    #[test]
    fn erase_on_last_node_is_a_noop() {
        let mut list = list_of(&[1, 2, 3]);
        let (_, events) = trace::capture(|| list.at_mut(2).unwrap().erase());
        assert!(events.is_empty());
        assert_eq!(values(&list), vec![1, 2, 3]);
    }
}
