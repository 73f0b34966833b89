use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// Finds the smallest value in the tree that is strictly greater than `lower_bound`.
/// Every node is visited: the tree is not assumed to be ordered.
#[inline]
pub fn next_larger<T: Value>(root: Option<&BinaryTreeNode<T>>, lower_bound: T) -> Option<T> {
    root.into_iter()
        .flat_map(BinaryTreeNode::iter)
        .filter(|&value| value > lower_bound)
        .fold(None, |best, value| match best {
            Some(current) if value < current => Some(value),
            Some(current) => Some(current),
            None => Some(value),
        })
}
