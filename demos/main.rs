use arbor::{BinaryTree, BinaryTreeNode, BinaryTreeResult};

fn main() -> BinaryTreeResult<()> {
    //        6
    //      /   \
    //     5     5
    //    / \     \
    //   3   2     1
    let mut tree = BinaryTree::from(BinaryTreeNode::with_children(
        6,
        Some(BinaryTreeNode::with_children(
            5,
            Some(BinaryTreeNode::new(3)),
            Some(BinaryTreeNode::new(2)),
        )),
        Some(BinaryTreeNode::with_children(
            5,
            None,
            Some(BinaryTreeNode::new(1)),
        )),
    ));

    // Depth and path queries
    assert_eq!(tree.min_depth(), 3);
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(tree.max_sum(), 20);
    assert_eq!(tree.next_larger(3), Some(5));

    // Node queries compare identity, so borrow the nodes from the tree itself
    if let Some(root) = tree.root() {
        let left = root.left();
        let right = root.right();
        if let (Some(left), Some(right)) = (left, right) {
            let three = left.left().unwrap_or(left);
            let one = right.right().unwrap_or(right);
            assert!(tree.are_cousins(three, one));
            assert!(!tree.are_cousins(left, right));
            let ancestor = tree.lowest_common_ancestor(three, one).map(BinaryTreeNode::value);
            assert_eq!(ancestor, Some(6));
        }
    }

    // Encoding a tree and reading it back
    let encoded = tree.serialize()?;
    println!("{}", encoded);
    let decoded: BinaryTree<i32> = encoded.parse()?;
    assert_eq!(decoded, tree);

    // Reassigning links is the only way to reshape a tree
    if let Some(root) = tree.root_mut() {
        root.set_right(None);
    }
    assert_eq!(tree.iter().collect::<Vec<_>>(), vec![6, 5, 3, 2]);

    Ok(())
}
