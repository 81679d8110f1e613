//! An unbalanced BST that counts duplicates. Each distinct element lives in exactly one node and
//! inserting it again only bumps that node's count.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, TreeError};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet, so lookups are rejected.
//! assert_eq!(tree.contains(&1), Err(TreeError::empty_tree()));
//!
//! tree.insert(1);
//! tree.insert(1);
//! assert_eq!(tree.contains(&1), Ok(true));
//! assert_eq!(tree.size(), 2);
//!
//! // Deleting a duplicate only removes one occurrence.
//! assert_eq!(tree.delete(&1), Ok(true));
//! assert_eq!(tree.search(&1), Ok(&1));
//!
//! // Deleting the last one empties the tree.
//! assert_eq!(tree.delete(&1), Ok(true));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace};

use crate::collection::SearchTree;
use crate::error::{TreeError, TreeResult};
use crate::traversal::{Order, Traversal};
use crate::util::Removal;

type Link<E> = Option<Box<Node<E>>>;

/// A Binary Search Tree over any totally ordered element type. No rebalancing is performed so
/// inserting in sorted order produces a tree shaped like a linked list.
pub struct OrderedTree<E> {
    root: Link<E>,
    /// Sum of every node's `count`.
    size: usize,
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for OrderedTree<E> {
    // Dropping the boxes recursively would use stack proportional to the height, which is the
    // element count for a degenerate tree.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<E>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<E> Clone for OrderedTree<E>
where
    E: Clone,
{
    // Like `drop`, this avoids recursing once per level. Nodes are rebuilt in post-order so
    // both subtrees of a node are on top of `built` when the node itself is reached.
    fn clone(&self) -> Self {
        let mut pending: Vec<&Node<E>> = self.root.as_deref().into_iter().collect();
        let mut reverse_post_order = Vec::new();
        while let Some(node) = pending.pop() {
            reverse_post_order.push(node);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        let mut built: Vec<Box<Node<E>>> = Vec::new();
        for node in reverse_post_order.into_iter().rev() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                element: node.element.clone(),
                count: node.count,
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            size: self.size,
        }
    }
}

impl<E> fmt::Debug for OrderedTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("size", &self.size)
            .field("root", &self.root)
            .finish()
    }
}

impl<E> OrderedTree<E> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many insertions haven't been undone by a deletion. Duplicates count once per
    /// insertion.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Inserts one occurrence of `element`. If an equal element is already stored, its count goes
    /// up and the stored instance is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(7);
    /// tree.insert(7);
    ///
    /// assert_eq!(tree.size(), 2);
    /// assert_eq!(tree.in_order(), "[7]");
    /// ```
    pub fn insert(&mut self, element: E)
    where
        E: Ord,
    {
        let duplicate = Node::insert(&mut self.root, element);
        self.size += 1;
        trace!(size = self.size, duplicate, "inserted element");
    }

    /// Whether an element equal to `element` is stored, however many times.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.contains(&1), Ok(true));
    /// assert_eq!(tree.contains(&42), Ok(false));
    /// ```
    pub fn contains(&self, element: &E) -> TreeResult<bool>
    where
        E: Ord,
    {
        Ok(self.non_empty_root("contains")?.find(element).is_some())
    }

    /// Finds the stored element equal to `element`. The returned reference is to the instance
    /// that was inserted first, which may be distinguishable from the query in ways the ordering
    /// ignores.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no elements and
    /// [`TreeError::NotFound`] if no stored element is equal to `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(4);
    ///
    /// assert_eq!(tree.search(&4), Ok(&4));
    /// assert_eq!(tree.search(&5), Err(TreeError::not_found()));
    /// ```
    pub fn search(&self, element: &E) -> TreeResult<&E>
    where
        E: Ord,
    {
        self.non_empty_root("search")?
            .find(element)
            .map(|node| &node.element)
            .ok_or_else(TreeError::not_found)
    }

    /// Removes one occurrence of `element`. Returns `Ok(false)` and changes nothing if no equal
    /// element is stored.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyTree`] if the tree has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(10);
    /// tree.insert(5);
    /// tree.insert(15);
    ///
    /// assert_eq!(tree.delete(&10), Ok(true));
    /// assert_eq!(tree.delete(&20), Ok(false));
    /// assert_eq!(tree.in_order(), "[5, 15]");
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn delete(&mut self, element: &E) -> TreeResult<bool>
    where
        E: Ord,
    {
        if self.is_empty() {
            debug!(operation = "delete", "rejected on empty tree");
            return Err(TreeError::empty_tree());
        }

        let removal = Node::delete(&mut self.root, element);
        if removal.removed() {
            self.size -= 1;
        }
        debug!(outcome = removal.as_str(), size = self.size, "deleted element");

        Ok(removal.removed())
    }

    /// A report of the distinct elements in the given order. See [`Traversal`].
    pub fn traversal(&self, order: Order) -> Traversal<'_, E> {
        Traversal::new(self, order)
    }

    /// Distinct elements in ascending order, e.g. `[2, 3, 4]`.
    pub fn in_order(&self) -> String
    where
        E: fmt::Display,
    {
        self.traversal(Order::In).to_string()
    }

    /// Distinct elements with each node ahead of its left then right subtree.
    pub fn pre_order(&self) -> String
    where
        E: fmt::Display,
    {
        self.traversal(Order::Pre).to_string()
    }

    /// Distinct elements with each node after its left then right subtree.
    pub fn post_order(&self) -> String
    where
        E: fmt::Display,
    {
        self.traversal(Order::Post).to_string()
    }

    /// References to every distinct element in the given order.
    pub(crate) fn elements(&self, order: Order) -> Vec<&E> {
        let mut out = Vec::new();
        if let Some(root) = self.root.as_deref() {
            root.walk(order, &mut out);
        }
        out
    }

    fn non_empty_root(&self, operation: &'static str) -> TreeResult<&Node<E>> {
        self.root.as_deref().ok_or_else(|| {
            debug!(operation, "rejected on empty tree");
            TreeError::empty_tree()
        })
    }
}

impl<E> SearchTree<E> for OrderedTree<E>
where
    E: Ord,
{
    fn is_empty(&self) -> bool {
        OrderedTree::is_empty(self)
    }

    fn size(&self) -> usize {
        OrderedTree::size(self)
    }

    fn insert(&mut self, element: E) {
        OrderedTree::insert(self, element)
    }

    fn contains(&self, element: &E) -> TreeResult<bool> {
        OrderedTree::contains(self, element)
    }

    fn search(&self, element: &E) -> TreeResult<&E> {
        OrderedTree::search(self, element)
    }

    fn delete(&mut self, element: &E) -> TreeResult<bool> {
        OrderedTree::delete(self, element)
    }

    fn in_order(&self) -> String
    where
        E: fmt::Display,
    {
        OrderedTree::in_order(self)
    }

    fn pre_order(&self) -> String
    where
        E: fmt::Display,
    {
        OrderedTree::pre_order(self)
    }

    fn post_order(&self) -> String
    where
        E: fmt::Display,
    {
        OrderedTree::post_order(self)
    }
}

impl<E> FromIterator<E> for OrderedTree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for OrderedTree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

struct Node<E> {
    element: E,
    /// How many insertions of `element` haven't been deleted. Always at least 1.
    count: usize,
    left: Link<E>,
    right: Link<E>,
}

impl<E> fmt::Debug for Node<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("count", &self.count)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<E> Node<E> {
    fn new_boxed(element: E) -> Box<Self> {
        Box::new(Node {
            element,
            count: 1,
            left: None,
            right: None,
        })
    }

    /// Adds one occurrence of `element` below `link`, returning whether it was already present.
    fn insert(mut link: &mut Link<E>, element: E) -> bool
    where
        E: Ord,
    {
        while let Some(node) = link {
            match element.cmp(&node.element) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => {
                    node.count += 1;
                    return true;
                }
                Ordering::Greater => link = &mut node.right,
            }
        }
        *link = Some(Self::new_boxed(element));
        false
    }

    fn find(&self, element: &E) -> Option<&Self>
    where
        E: Ord,
    {
        let mut node = self;
        loop {
            let next = match element.cmp(&node.element) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(node),
                Ordering::Greater => &node.right,
            };
            node = next.as_deref()?;
        }
    }

    fn walk<'a>(&'a self, order: Order, out: &mut Vec<&'a E>) {
        if order == Order::Pre {
            out.push(&self.element);
        }
        if let Some(left) = self.left.as_deref() {
            left.walk(order, out);
        }
        if order == Order::In {
            out.push(&self.element);
        }
        if let Some(right) = self.right.as_deref() {
            right.walk(order, out);
        }
        if order == Order::Post {
            out.push(&self.element);
        }
    }

    /// Deletes one occurrence of `element` from the subtree in `link`. See [`Removal`] for what
    /// the return values mean.
    fn delete(mut link: &mut Link<E>, element: &E) -> Removal
    where
        E: Ord,
    {
        loop {
            let ordering = match link.as_deref() {
                Some(node) => element.cmp(&node.element),
                None => return Removal::Absent,
            };
            // The match has to be found before reborrowing `link` for the next step.
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return Removal::Absent;
            };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        if let Some(node) = link.as_deref_mut() {
            if node.count > 1 {
                node.count -= 1;
                return Removal::Decremented;
            }
        }
        Self::unlink(link);
        Removal::Unlinked
    }

    /// Removes the node in `link` from the tree, leaving its subtrees in place.
    fn unlink(link: &mut Link<E>)
    where
        E: Ord,
    {
        let Some(mut node) = link.take() else {
            return;
        };
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (None, Some(child)) | (Some(child), None) => Some(child),

            // With two children the node stays where it is and takes over the element and count
            // of its in-order successor, the smallest node of the right subtree. That node has
            // no left child so detaching it is a single splice.
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = Self::take_min(&mut node.right) {
                    node.element = successor.element;
                    node.count = successor.count;
                }

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left.as_deref() {
                        assert!(left.element < node.element);
                    }
                    if let Some(right) = node.right.as_deref() {
                        assert!(node.element < right.element);
                    }
                }
                Some(node)
            }
        };
    }

    /// Detaches the smallest node of the subtree in `link`, splicing its right child into its
    /// place.
    fn take_min(mut link: &mut Link<E>) -> Option<Box<Self>> {
        while link.as_ref()?.left.is_some() {
            let Some(node) = link else {
                return None;
            };
            link = &mut node.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }
}
