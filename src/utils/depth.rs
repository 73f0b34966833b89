use tracing::trace;

use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// Counts the levels from `root` down to its shallowest leaf.
/// The walk is breadth-first and stops at the first leaf it meets, so only the levels above
/// that leaf are expanded.  A lone root has depth 1 and an empty tree has depth 0.
#[inline]
pub fn min_depth<T: Value>(root: Option<&BinaryTreeNode<T>>) -> usize {
    let mut depth = 0;
    let mut level: Vec<&BinaryTreeNode<T>> = root.into_iter().collect();

    while !level.is_empty() {
        depth += 1;
        let mut next_level = Vec::with_capacity(level.len() * 2);
        for node in level {
            if node.is_leaf() {
                trace!(depth, "reached the shallowest leaf");
                return depth;
            }
            next_level.extend(node.left());
            next_level.extend(node.right());
        }
        level = next_level;
    }

    depth
}

/// Counts the levels from `root` down to its deepest leaf with a full breadth-first walk.
/// A lone root has depth 1 and an empty tree has depth 0.
#[inline]
pub fn max_depth<T: Value>(root: Option<&BinaryTreeNode<T>>) -> usize {
    let mut depth = 0;
    let mut level: Vec<&BinaryTreeNode<T>> = root.into_iter().collect();

    while !level.is_empty() {
        depth += 1;
        trace!(depth, width = level.len(), "expanding level");
        level = level
            .into_iter()
            .flat_map(|node| node.left().into_iter().chain(node.right()))
            .collect();
    }

    depth
}
