//! The bracketed wire encoding of a subtree.
//!
//! A node is written as `[value,[left,right]]`, where `left` and `right` are either
//! `null` or another encoded node.  An empty tree is written as `null`.  The encoding is
//! valid JSON, so it is produced and consumed with `serde_json`.
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// The shape a node takes on the wire: the value, then the pair of children.
type Encoded<T, Child> = (T, (Option<Child>, Option<Child>));

impl<T: Value + Serialize> Serialize for BinaryTreeNode<T> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let encoded: Encoded<&T, &Self> = (&self.value, (self.left(), self.right()));
        encoded.serialize(serializer)
    }
}

impl<'de, T: Value + Deserialize<'de>> Deserialize<'de> for BinaryTreeNode<T> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (value, (left, right)): Encoded<T, Box<Self>> = Deserialize::deserialize(deserializer)?;
        Ok(Self { value, left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_encodes_a_leaf() {
        let leaf = BinaryTreeNode::new(7_i32);
        assert_eq!(serde_json::to_string(&leaf).unwrap(), "[7,[null,null]]");
    }

    #[test]
    fn it_encodes_nested_children() {
        let node = BinaryTreeNode::with_children(
            1_i64,
            Some(BinaryTreeNode::new(2)),
            Some(BinaryTreeNode::with_children(
                3,
                None,
                Some(BinaryTreeNode::new(-4)),
            )),
        );
        assert_eq!(
            serde_json::to_string(&node).unwrap(),
            "[1,[[2,[null,null]],[3,[null,[-4,[null,null]]]]]]"
        );
    }

    #[test]
    fn it_decodes_with_whitespace() {
        let node: BinaryTreeNode<i32> =
            serde_json::from_str(" [ 5 , [ [ 6 , [ null , null ] ] , null ] ] ").unwrap();
        assert_eq!(
            node,
            BinaryTreeNode::with_children(5, Some(BinaryTreeNode::new(6)), None)
        );
    }

    #[test]
    fn it_rejects_a_missing_child_pair() {
        assert!(serde_json::from_str::<BinaryTreeNode<i32>>("[5]").is_err());
        assert!(serde_json::from_str::<BinaryTreeNode<i32>>("[5,[null]]").is_err());
        assert!(serde_json::from_str::<BinaryTreeNode<i32>>("[5,[null,null,null]]").is_err());
    }

    #[test]
    fn it_rejects_values_of_the_wrong_type() {
        assert!(serde_json::from_str::<BinaryTreeNode<i32>>("[\"5\",[null,null]]").is_err());
        assert!(serde_json::from_str::<BinaryTreeNode<u8>>("[-1,[null,null]]").is_err());
    }
}
