//! List node with an owning forward link and a non-owning back link.

use std::ptr::NonNull;

use crate::trace;

/// A list element.
///
/// `next` owns the successor: dropping or overwriting it destroys the rest
/// of the chain. `prev` is a raw back-reference for traversal only; it is
/// kept consistent with whichever forward link currently owns this node
/// (`None` for the first node, whose owner is the list head).
pub struct Node {
    pub(crate) value: i32,
    pub(crate) next: Option<Box<Node>>,
    pub(crate) prev: Option<NonNull<Node>>,
}

impl Node {
    pub(crate) fn detached(value: i32) -> Box<Node> {
        Box::new(Node {
            value,
            next: None,
            prev: None,
        })
    }

    /// Returns the payload.
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the successor, if any.
    #[inline]
    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    /// Returns the successor mutably, if any.
    #[inline]
    pub fn next_mut(&mut self) -> Option<&mut Node> {
        self.next.as_deref_mut()
    }

    /// Returns the predecessor, if any.
    pub fn prev(&self) -> Option<&Node> {
        // Safety: a non-null `prev` always points at the live predecessor
        // whose forward link owns this node, so it outlives `&self`.
        self.prev.map(|p| unsafe { &*p.as_ptr() })
    }

    /// Inserts a new node carrying `value` immediately after this one.
    ///
    /// An existing successor is moved (not copied) under the new node and
    /// has its back link redirected to it; no node is destroyed.
    pub fn insert(&mut self, value: i32) {
        let mut node = Node::detached(value);
        node.prev = Some(NonNull::from(&mut *self));
        if let Some(mut succ) = self.next.take() {
            succ.prev = Some(NonNull::from(&mut *node));
            node.next = Some(succ);
        }
        self.next = Some(node);
    }

    /// Removes this node's immediate successor, if it has one.
    ///
    /// The successor's own successor (if any) is re-linked to this node;
    /// the removed node is destroyed exactly once, emitting its trace
    /// event. A node with no successor is left unchanged.
    pub fn erase(&mut self) {
        let Some(mut removed) = self.next.take() else {
            return;
        };
        if let Some(mut succ) = removed.next.take() {
            succ.prev = Some(NonNull::from(&mut *self));
            self.next = Some(succ);
        }
        // `removed` drops here with its forward link already detached.
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        trace::emit(self.value);
        // Drain the owned tail iteratively so dropping a long chain never
        // recurses one stack frame per node. Each drained node has its
        // forward link taken before it drops, and the drain order matches
        // the recursive order: nearest the former head first.
        let mut curr = self.next.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}
