use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::de::{Deserialize, DeserializeOwned};
use serde::Serialize;
use tracing::debug;

use crate::traits::{Exception, Value};
use crate::tree::tree_node::{BinaryTreeNode, PreOrder};
use crate::utils::ancestor::lowest_common_ancestor;
use crate::utils::cousins::are_cousins;
use crate::utils::depth::{max_depth, min_depth};
use crate::utils::path_sum::max_path_sum;
use crate::utils::search::next_larger;

/// A generic Result from an operation involving a `BinaryTree`.
pub type BinaryTreeResult<T> = Result<T, Exception>;

/// A handle over an optional root node.  An absent root is an empty tree.
///
/// Queries that take nodes as arguments (`are_cousins`, `lowest_common_ancestor`) compare them
/// by identity, so the nodes should be borrowed from this tree, e.g. via `root()` and
/// `BinaryTreeNode::left`/`BinaryTreeNode::right`.
/// # Properties
/// * **root**: The root of the tree, owning every other node.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryTree<T: Value> {
    root: Option<Box<BinaryTreeNode<T>>>,
}

impl<T: Value> Default for BinaryTree<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Value> BinaryTree<T> {
    /// Creates a new `BinaryTree` from an optional root.
    #[inline]
    #[must_use]
    pub fn new(root: Option<BinaryTreeNode<T>>) -> Self {
        Self {
            root: root.map(Box::new),
        }
    }

    /// Creates a `BinaryTree` with no nodes.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Gets the root node.
    #[inline]
    pub fn root(&self) -> Option<&BinaryTreeNode<T>> {
        self.root.as_deref()
    }

    /// Gets the root node for in-place edits.
    #[inline]
    pub fn root_mut(&mut self) -> Option<&mut BinaryTreeNode<T>> {
        self.root.as_deref_mut()
    }

    /// Replaces the root, dropping the previous tree.
    #[inline]
    pub fn set_root(&mut self, root: Option<BinaryTreeNode<T>>) {
        self.root = root.map(Box::new);
    }

    /// Whether the tree has no root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the values of the tree in pre-order.
    #[inline]
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// The number of levels down to the shallowest leaf.  A lone root has depth 1.
    #[inline]
    pub fn min_depth(&self) -> usize {
        min_depth(self.root())
    }

    /// The number of levels down to the deepest leaf.  A lone root has depth 1.
    #[inline]
    pub fn max_depth(&self) -> usize {
        max_depth(self.root())
    }

    /// The largest sum along any path that visits each node at most once.
    /// The path need not include the root or end at a leaf.  An empty tree sums to zero.
    /// Integer sums saturate at the bounds of `T` rather than overflowing.
    #[inline]
    pub fn max_sum(&self) -> T {
        max_path_sum(self.root())
    }

    /// The smallest value strictly greater than `lower_bound`, if any.
    #[inline]
    pub fn next_larger(&self, lower_bound: T) -> Option<T> {
        next_larger(self.root(), lower_bound)
    }

    /// Whether the two nodes are on the same level with different parents.
    #[inline]
    pub fn are_cousins(&self, first: &BinaryTreeNode<T>, second: &BinaryTreeNode<T>) -> bool {
        are_cousins(self.root(), first, second)
    }

    /// The deepest node with both `first` and `second` in its subtree.
    /// Returns the root when either node is not in the tree, and `None` for an empty tree.
    #[inline]
    pub fn lowest_common_ancestor(
        &self,
        first: &BinaryTreeNode<T>,
        second: &BinaryTreeNode<T>,
    ) -> Option<&BinaryTreeNode<T>> {
        lowest_common_ancestor(self.root(), first, second)
    }
}

impl<T: Value + Serialize> BinaryTree<T> {
    /// Encodes the tree as nested `[value,[left,right]]` arrays, with `null` for absent
    /// children.  An empty tree encodes as `null`.
    /// # Errors
    /// `Exception` generated when a value cannot be encoded.
    #[inline]
    pub fn serialize(&self) -> BinaryTreeResult<String> {
        let encoded = serde_json::to_string(&self.root)?;
        debug!(bytes = encoded.len(), "serialized tree");
        Ok(encoded)
    }
}

impl<T: Value + DeserializeOwned> BinaryTree<T> {
    /// Rebuilds a tree from the encoding produced by `serialize`.
    /// # Errors
    /// `Exception` generated when `encoded` is not valid JSON, does not follow the
    /// `[value,[left,right]]` shape, or holds a value that does not fit `T`.
    #[inline]
    pub fn deserialize(encoded: &str) -> BinaryTreeResult<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(encoded);
        // Nesting grows with tree depth, so the decoder must not cap it.  The stacker grows
        // the stack on demand while descending.
        deserializer.disable_recursion_limit();
        let root = Option::<Box<BinaryTreeNode<T>>>::deserialize(serde_stacker::Deserializer::new(
            &mut deserializer,
        ))?;
        deserializer.end()?;
        let tree = Self { root };
        debug!(bytes = encoded.len(), nodes = tree.len(), "deserialized tree");
        Ok(tree)
    }
}

impl<T: Value> From<BinaryTreeNode<T>> for BinaryTree<T> {
    #[inline]
    fn from(root: BinaryTreeNode<T>) -> Self {
        Self::new(Some(root))
    }
}

impl<T: Value + Serialize> Display for BinaryTree<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let encoded = self.serialize().map_err(|_| std::fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl<T: Value + DeserializeOwned> FromStr for BinaryTree<T> {
    type Err = Exception;

    #[inline]
    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Self::deserialize(encoded)
    }
}
