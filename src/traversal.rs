//! Depth-first traversal reports.
//!
//! A report lists every distinct element once, regardless of how many times it was inserted,
//! formatted like `[2, 3, 4]`. An empty tree renders as `[]`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{Order, OrderedTree};
//!
//! let tree: OrderedTree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert_eq!(tree.traversal(Order::In).to_string(), "[1, 2, 3]");
//! assert_eq!(tree.traversal(Order::Pre).to_string(), "[2, 1, 3]");
//! assert_eq!(tree.traversal(Order::Post).to_string(), "[1, 3, 2]");
//! ```

use std::fmt;

use crate::OrderedTree;

/// The order in which a depth-first walk visits a node relative to its subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields ascending order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// A borrowed view of a tree that renders its elements in a given [`Order`].
#[derive(Debug)]
pub struct Traversal<'a, E> {
    tree: &'a OrderedTree<E>,
    order: Order,
}

impl<'a, E> Traversal<'a, E> {
    pub(crate) fn new(tree: &'a OrderedTree<E>, order: Order) -> Self {
        Self { tree, order }
    }

    /// The order this report walks in.
    pub fn order(&self) -> Order {
        self.order
    }
}

impl<E> Clone for Traversal<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<E> Copy for Traversal<'_, E> {}

impl<E> fmt::Display for Traversal<'_, E>
where
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.tree.elements(self.order).into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}
