//! Errors reported by [`OrderedTree`][crate::OrderedTree] operations.

use std::borrow::Cow;

/// Default message carried by [`TreeError::EmptyTree`].
const EMPTY_TREE_MESSAGE: &str = "The tree is empty.";

/// Default message carried by [`TreeError::NotFound`].
const NOT_FOUND_MESSAGE: &str = "The node is not found.";

/// The ways a lookup or deletion can be rejected. Both carry a human readable
/// message which defaults to a fixed string but can be replaced at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// The operation needs at least one element but the tree has none.
    #[error("{0}")]
    EmptyTree(Cow<'static, str>),
    /// A search walked to an empty slot without finding a match.
    #[error("{0}")]
    NotFound(Cow<'static, str>),
}

/// The kind of a [`TreeError`], without its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeErrorKind {
    /// See [`TreeError::EmptyTree`].
    EmptyTree,
    /// See [`TreeError::NotFound`].
    NotFound,
}

impl TreeError {
    /// An [`EmptyTree`][TreeError::EmptyTree] error with the default message.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::TreeError;
    ///
    /// assert_eq!(TreeError::empty_tree().to_string(), "The tree is empty.");
    /// ```
    pub fn empty_tree() -> Self {
        Self::EmptyTree(Cow::Borrowed(EMPTY_TREE_MESSAGE))
    }

    /// An [`EmptyTree`][TreeError::EmptyTree] error with a custom message.
    pub fn empty_tree_with(message: impl Into<Cow<'static, str>>) -> Self {
        Self::EmptyTree(message.into())
    }

    /// A [`NotFound`][TreeError::NotFound] error with the default message.
    pub fn not_found() -> Self {
        Self::NotFound(Cow::Borrowed(NOT_FOUND_MESSAGE))
    }

    /// A [`NotFound`][TreeError::NotFound] error with a custom message.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{TreeError, TreeErrorKind};
    ///
    /// let err = TreeError::not_found_with(format!("no such id: {}", 42));
    /// assert_eq!(err.kind(), TreeErrorKind::NotFound);
    /// assert_eq!(err.to_string(), "no such id: 42");
    /// ```
    pub fn not_found_with(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(message.into())
    }

    /// Which kind of failure this is.
    pub fn kind(&self) -> TreeErrorKind {
        match self {
            Self::EmptyTree(_) => TreeErrorKind::EmptyTree,
            Self::NotFound(_) => TreeErrorKind::NotFound,
        }
    }

    /// The human readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::EmptyTree(message) | Self::NotFound(message) => message,
        }
    }
}

/// Result alias for fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
