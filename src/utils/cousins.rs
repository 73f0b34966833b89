use std::ptr;

use tracing::trace;

use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// Checks whether `first` and `second` sit on the same level under different parents.
/// Nodes are matched by identity, not by value.  Siblings, a node paired with itself, and
/// nodes missing from the tree are never cousins.
#[inline]
pub fn are_cousins<T: Value>(
    root: Option<&BinaryTreeNode<T>>,
    first: &BinaryTreeNode<T>,
    second: &BinaryTreeNode<T>,
) -> bool {
    let is_target = |node: &BinaryTreeNode<T>| ptr::eq(node, first) || ptr::eq(node, second);
    let mut parents: Vec<&BinaryTreeNode<T>> = root.into_iter().collect();
    let mut depth = 1_usize;

    while !parents.is_empty() {
        let mut children = Vec::with_capacity(parents.len() * 2);
        let mut matches = 0_usize;
        for parent in parents {
            let mut siblings = 0_usize;
            for child in parent.left().into_iter().chain(parent.right()) {
                if is_target(child) {
                    siblings += 1;
                }
                children.push(child);
            }
            if siblings >= 2 {
                trace!(depth, "targets share a parent");
                return false;
            }
            matches += siblings;
        }

        if matches > 0 {
            trace!(depth, matches, "found targets below this level");
            return matches == 2;
        }
        parents = children;
        depth += 1;
    }

    false
}
