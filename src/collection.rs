//! The operation set shared by ordered search trees.

use std::fmt;

use crate::error::TreeResult;

/// An ordered collection of elements that may be inserted more than once.
///
/// Code that only needs the public contract (tests, benchmarks, callers swapping in another
/// implementation) can be written against this trait instead of a concrete tree.
///
/// # Examples
///
/// ```
/// use ordered_tree::{OrderedTree, SearchTree};
///
/// fn fill<T: SearchTree<i32>>(tree: &mut T, xs: &[i32]) {
///     for x in xs {
///         tree.insert(*x);
///     }
/// }
///
/// let mut tree = OrderedTree::new();
/// fill(&mut tree, &[3, 1, 2, 3]);
///
/// assert_eq!(tree.size(), 4);
/// assert_eq!(tree.in_order(), "[1, 2, 3]");
/// ```
pub trait SearchTree<E>
where
    E: Ord,
{
    /// Whether the collection holds no elements.
    fn is_empty(&self) -> bool;

    /// How many insertions have not yet been undone by a deletion.
    fn size(&self) -> usize;

    /// Adds one occurrence of `element`.
    fn insert(&mut self, element: E);

    /// Whether `element` is present at all.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`][crate::TreeError::EmptyTree] when there are no elements.
    fn contains(&self, element: &E) -> TreeResult<bool>;

    /// The stored element equal to `element`.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`][crate::TreeError::EmptyTree] when there are no elements and
    /// [`TreeError::NotFound`][crate::TreeError::NotFound] when nothing matches.
    fn search(&self, element: &E) -> TreeResult<&E>;

    /// Removes one occurrence of `element`, returning whether anything was removed.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyTree`][crate::TreeError::EmptyTree] when there are no elements.
    fn delete(&mut self, element: &E) -> TreeResult<bool>;

    /// Distinct elements in ascending order, formatted like `[1, 2, 3]`.
    fn in_order(&self) -> String
    where
        E: fmt::Display;

    /// Distinct elements with each node before its subtrees.
    fn pre_order(&self) -> String
    where
        E: fmt::Display;

    /// Distinct elements with each node after its subtrees.
    fn post_order(&self) -> String
    where
        E: fmt::Display;
}
