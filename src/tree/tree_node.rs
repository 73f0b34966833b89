use crate::traits::Value;

/// A node in the tree.
/// Each node exclusively owns its children, so a tree built from nodes is always acyclic.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryTreeNode<T: Value> {
    /// The value held by this node.
    pub(crate) value: T,
    /// The root of the left subtree, if any.
    pub(crate) left: Option<Box<BinaryTreeNode<T>>>,
    /// The root of the right subtree, if any.
    pub(crate) right: Option<Box<BinaryTreeNode<T>>>,
}

impl<T: Value> BinaryTreeNode<T> {
    /// Creates a new childless `BinaryTreeNode`.
    #[inline]
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a new `BinaryTreeNode` that takes ownership of the given subtrees.
    #[inline]
    #[must_use]
    pub fn with_children(value: T, left: Option<Self>, right: Option<Self>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Gets the value of this node.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Gets the left child of this node.
    #[inline]
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Gets the right child of this node.
    #[inline]
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Gets the left child of this node for in-place edits.
    #[inline]
    pub fn left_mut(&mut self) -> Option<&mut Self> {
        self.left.as_deref_mut()
    }

    /// Gets the right child of this node for in-place edits.
    #[inline]
    pub fn right_mut(&mut self) -> Option<&mut Self> {
        self.right.as_deref_mut()
    }

    /// A leaf has neither a left nor a right child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Replaces the left subtree, dropping the previous one.
    #[inline]
    pub fn set_left(&mut self, left: Option<Self>) {
        self.left = left.map(Box::new);
    }

    /// Replaces the right subtree, dropping the previous one.
    #[inline]
    pub fn set_right(&mut self, right: Option<Self>) {
        self.right = right.map(Box::new);
    }

    /// Detaches and returns the left subtree.
    #[inline]
    pub fn take_left(&mut self) -> Option<Self> {
        self.left.take().map(|node| *node)
    }

    /// Detaches and returns the right subtree.
    #[inline]
    pub fn take_right(&mut self) -> Option<Self> {
        self.right.take().map(|node| *node)
    }

    /// Iterates over the values of this subtree in pre-order (node, left, right).
    #[inline]
    pub fn iter(&self) -> PreOrder<'_, T> {
        PreOrder::new(Some(self))
    }
}

/// Pre-order iterator over the values of a subtree.
#[derive(Debug)]
pub struct PreOrder<'a, T: Value> {
    /// Nodes still to visit; the top of the stack is visited next.
    stack: Vec<&'a BinaryTreeNode<T>>,
}

impl<'a, T: Value> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a BinaryTreeNode<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T: Value> Iterator for PreOrder<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BinaryTreeNode<i32> {
        BinaryTreeNode::with_children(
            1,
            Some(BinaryTreeNode::with_children(
                2,
                Some(BinaryTreeNode::new(4)),
                None,
            )),
            Some(BinaryTreeNode::new(3)),
        )
    }

    #[test]
    fn it_iterates_in_pre_order() {
        let values: Vec<i32> = sample().iter().collect();
        assert_eq!(values, vec![1, 2, 4, 3]);
    }

    #[test]
    fn it_detects_leaves() {
        let node = sample();
        assert!(!node.is_leaf());
        assert!(node.right().map_or(false, BinaryTreeNode::is_leaf));
        assert!(!node.left().map_or(true, BinaryTreeNode::is_leaf));
    }

    #[test]
    fn it_reassigns_links() {
        let mut node = sample();
        let left = node.take_left();
        assert_eq!(left.map(|l| l.value()), Some(2));
        assert!(node.left().is_none());

        node.set_left(Some(BinaryTreeNode::new(9)));
        node.set_right(None);
        let values: Vec<i32> = node.iter().collect();
        assert_eq!(values, vec![1, 9]);

        if let Some(left) = node.left_mut() {
            left.set_right(Some(BinaryTreeNode::new(10)));
        }
        let right = node.take_right();
        assert!(right.is_none());
        let values: Vec<i32> = node.iter().collect();
        assert_eq!(values, vec![1, 9, 10]);
    }
}
