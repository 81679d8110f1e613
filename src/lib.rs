//! An ordered multiset backed by an unbalanced Binary Search Tree (BST).
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Because both comparisons are strict, equal elements can't live in separate
//! nodes. [`OrderedTree`] instead keeps a count on each node of how many times
//! its element was inserted, and [`OrderedTree::size`] is the sum of those counts.
//!
//! Searching takes `O(height)`. [`OrderedTree`] does no rebalancing so the
//! height is whatever the insertion order makes it, up to the number of distinct
//! elements when they arrive sorted. Sorted output falls out of visiting the
//! left subtree, then the subtree root, then the right subtree (see [`Order`]).
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeErrorKind};
//!
//! let tree: OrderedTree<_> = [5, 3, 7, 2, 4, 6, 8].into_iter().collect();
//!
//! assert_eq!(tree.in_order(), "[2, 3, 4, 5, 6, 7, 8]");
//! assert_eq!(tree.pre_order(), "[5, 3, 2, 4, 7, 6, 8]");
//! assert_eq!(tree.post_order(), "[2, 4, 3, 6, 8, 7, 5]");
//!
//! assert_eq!(tree.search(&9).unwrap_err().kind(), TreeErrorKind::NotFound);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod collection;
mod error;
mod ordered;
mod traversal;
mod util;

#[cfg(test)]
mod test;

pub use collection::SearchTree;
pub use error::{TreeError, TreeErrorKind, TreeResult};
pub use ordered::OrderedTree;
pub use traversal::{Order, Traversal};
