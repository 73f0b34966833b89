//! Classic binary tree traversals over an owned, in-memory tree.
//!
//! Level-order walks answer depth and cousin queries, post-order recursion answers path-sum
//! and ancestor queries, and trees round-trip through a bracketed JSON encoding.
//! # Examples
//! ```
//! use arbor::{BinaryTree, BinaryTreeNode};
//!
//! let tree = BinaryTree::from(BinaryTreeNode::with_children(
//!     1,
//!     Some(BinaryTreeNode::new(2)),
//!     Some(BinaryTreeNode::new(3)),
//! ));
//! assert_eq!(tree.max_depth(), 2);
//! assert_eq!(tree.max_sum(), 6);
//! assert_eq!(tree.to_string(), "[1,[[2,[null,null]],[3,[null,null]]]]");
//! ```

/// Holds the `BinaryTree` handle and its queries.
pub mod binary_tree;
/// Traits and errors shared across the crate.
pub mod traits;
/// Node types and their encodings.
pub mod tree;
/// The traversal algorithms behind `BinaryTree`.
pub mod utils;

pub use crate::binary_tree::{BinaryTree, BinaryTreeResult};
pub use crate::traits::{Exception, Value};
pub use crate::tree::node_record::NodeRecord;
pub use crate::tree::tree_node::BinaryTreeNode;
