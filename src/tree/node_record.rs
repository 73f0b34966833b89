#[cfg(feature = "use_serde")]
use serde::{Deserialize, Serialize};

use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// A field-named view of a subtree.
/// With `use_serde` enabled it serializes as `{"value":..,"left":..,"right":..}`, which suits
/// callers that embed trees inside their own serde documents rather than exchanging the
/// bracketed wire encoding.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(Serialize, Deserialize))]
pub struct NodeRecord<T> {
    /// The value held by the node.
    pub value: T,
    /// The left subtree, if any.
    pub left: Option<Box<NodeRecord<T>>>,
    /// The right subtree, if any.
    pub right: Option<Box<NodeRecord<T>>>,
}

impl<T: Value> From<&BinaryTreeNode<T>> for NodeRecord<T> {
    #[inline]
    fn from(node: &BinaryTreeNode<T>) -> Self {
        Self {
            value: node.value,
            left: node.left().map(|left| Box::new(Self::from(left))),
            right: node.right().map(|right| Box::new(Self::from(right))),
        }
    }
}

impl<T: Value> From<NodeRecord<T>> for BinaryTreeNode<T> {
    #[inline]
    fn from(record: NodeRecord<T>) -> Self {
        Self::with_children(
            record.value,
            record.left.map(|left| Self::from(*left)),
            record.right.map(|right| Self::from(*right)),
        )
    }
}

impl<T: Value> BinaryTreeNode<T> {
    /// Copies this subtree into a `NodeRecord`.
    #[inline]
    #[must_use]
    pub fn to_record(&self) -> NodeRecord<T> {
        NodeRecord::from(self)
    }

    /// Rebuilds a subtree from a `NodeRecord`.
    #[inline]
    #[must_use]
    pub fn from_record(record: NodeRecord<T>) -> Self {
        Self::from(record)
    }
}
