/// Holds the `NodeRecord` struct.
pub mod node_record;
/// Holds the `BinaryTreeNode` struct.
pub mod tree_node;
/// Holds the bracketed wire encoding of `BinaryTreeNode`.
pub mod wire;
