//! Single-owner doubly-linked list with observable destruction.
//!
//! A deliberately small list of integers built around one rule: every node
//! has exactly one owner. The list owns its first node through `head`, and
//! each node owns its successor through `next`. Back links exist purely
//! for traversal and never keep a node alive.
//!
//! Every node reports its own destruction exactly once through the
//! [`trace`] hook, which makes leaks and double-frees directly observable
//! in tests.
//!
//! ```
//! use ownlist::List;
//!
//! let mut list = List::new();
//! for v in [7, 5, 8, 2, 9, 4, 1] {
//!     list.push_front(v);
//! }
//! assert_eq!(list.to_string(), "[ 1 4 9 2 8 5 7 ]");
//!
//! // erase() removes the *successor* of the receiving node
//! list.at_mut(2).unwrap().erase();
//! assert_eq!(list.to_string(), "[ 1 4 9 8 5 7 ]");
//! ```

pub mod list;
pub mod node;
pub mod trace;

pub use list::{List, ListError};
pub use node::Node;
