use std::ptr;

use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// Finds the deepest node that has both `first` and `second` in its subtree, where a node
/// counts as part of its own subtree.  Nodes are matched by identity.
///
/// Falls back to `root` when either node is missing from the tree, and returns `None` only
/// for an empty tree.
#[inline]
pub fn lowest_common_ancestor<'a, T: Value>(
    root: Option<&'a BinaryTreeNode<T>>,
    first: &BinaryTreeNode<T>,
    second: &BinaryTreeNode<T>,
) -> Option<&'a BinaryTreeNode<T>> {
    let mut search = AncestorSearch {
        first,
        second,
        lowest: None,
    };
    search.visit(root);
    search.lowest.or(root)
}

/// Post-order search state for `lowest_common_ancestor`.
struct AncestorSearch<'a, 'n, T: Value> {
    first: &'n BinaryTreeNode<T>,
    second: &'n BinaryTreeNode<T>,
    /// Set once, at the first node whose subtree covers both targets.
    lowest: Option<&'a BinaryTreeNode<T>>,
}

impl<'a, 'n, T: Value> AncestorSearch<'a, 'n, T> {
    fn is_target(&self, node: &BinaryTreeNode<T>) -> bool {
        ptr::eq(node, self.first) || ptr::eq(node, self.second)
    }

    /// Returns the target found in this subtree while only one of them has been seen.
    /// Once both are covered the ancestor is recorded and nothing more is passed upward.
    fn visit(&mut self, node: Option<&'a BinaryTreeNode<T>>) -> Option<&'a BinaryTreeNode<T>> {
        let node = node?;
        let right = self.visit(node.right());
        let left = self.visit(node.left());

        if self.is_target(node) {
            if right.is_some() || left.is_some() || ptr::eq(self.first, self.second) {
                self.lowest = Some(node);
                return None;
            }
            return Some(node);
        }

        match (left, right) {
            (Some(_), Some(_)) => {
                self.lowest = Some(node);
                None
            }
            (found @ Some(_), None) | (None, found) => found,
        }
    }
}
