use crate::traits::Value;
use crate::tree::tree_node::BinaryTreeNode;

/// Finds the largest sum along any path in the tree.
/// A path may bend once at an apex node, taking one branch down each side, and need not touch
/// the root or reach a leaf.  An empty tree sums to zero, and integer sums saturate at the
/// bounds of `T`.
#[inline]
pub fn max_path_sum<T: Value>(root: Option<&BinaryTreeNode<T>>) -> T {
    let mut best = None;
    branch_gain(root, &mut best);
    best.unwrap_or_else(T::zero)
}

/// Returns the best sum of a path that starts at `node` and runs down at most one branch,
/// recording in `best` the best path that bends at `node`.
fn branch_gain<T: Value>(node: Option<&BinaryTreeNode<T>>, best: &mut Option<T>) -> T {
    let node = match node {
        Some(node) => node,
        None => return T::zero(),
    };

    // A branch that would lower the sum is left out of the path.
    let right_gain = branch_gain(node.right(), best).larger(T::zero());
    let left_gain = branch_gain(node.left(), best).larger(T::zero());

    let apex = right_gain.bounded_add(left_gain).bounded_add(node.value());
    *best = Some(match *best {
        Some(current) => current.larger(apex),
        None => apex,
    });

    node.value().bounded_add(right_gain.larger(left_gain))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i64) -> BinaryTreeNode<i64> {
        BinaryTreeNode::new(value)
    }

    fn branch(
        value: i64,
        left: Option<BinaryTreeNode<i64>>,
        right: Option<BinaryTreeNode<i64>>,
    ) -> BinaryTreeNode<i64> {
        BinaryTreeNode::with_children(value, left, right)
    }

    #[test]
    fn it_sums_an_empty_tree_to_zero() {
        assert_eq!(max_path_sum::<i64>(None), 0);
    }

    #[test]
    fn it_sums_a_single_node() {
        assert_eq!(max_path_sum(Some(&leaf(-4))), -4);
        assert_eq!(max_path_sum(Some(&leaf(9))), 9);
    }

    #[test]
    fn it_bends_through_an_apex() {
        //     6
        //    / \
        //   5   5
        //  / \   \
        // 3   2   1
        //    /
        //   1
        let root = branch(
            6,
            Some(branch(5, Some(leaf(3)), Some(branch(2, Some(leaf(1)), None)))),
            Some(branch(5, None, Some(leaf(1)))),
        );
        assert_eq!(max_path_sum(Some(&root)), 20);
    }

    #[test]
    fn it_skips_negative_branches() {
        //     -1
        //    /  \
        //  10    -20
        //        /  \
        //      15    7
        let root = branch(
            -1,
            Some(leaf(10)),
            Some(branch(-20, Some(leaf(15)), Some(leaf(7)))),
        );
        assert_eq!(max_path_sum(Some(&root)), 15);
    }

    #[test]
    fn it_picks_the_largest_value_when_all_are_negative() {
        let root = branch(-8, Some(branch(-3, Some(leaf(-9)), None)), Some(leaf(-5)));
        assert_eq!(max_path_sum(Some(&root)), -3);
    }

    #[test]
    fn it_saturates_instead_of_overflowing() {
        let root = BinaryTreeNode::with_children(
            100_u8,
            Some(BinaryTreeNode::new(100)),
            Some(BinaryTreeNode::new(100)),
        );
        assert_eq!(max_path_sum(Some(&root)), u8::MAX);

        let root = branch(i64::MAX - 1, Some(leaf(5)), Some(leaf(i64::MAX)));
        assert_eq!(max_path_sum(Some(&root)), i64::MAX);
    }

    #[test]
    fn it_sums_floats() {
        let root = BinaryTreeNode::with_children(
            1.5_f64,
            Some(BinaryTreeNode::new(2.25)),
            Some(BinaryTreeNode::new(-0.5)),
        );
        assert!((max_path_sum(Some(&root)) - 3.75).abs() < f64::EPSILON);
    }
}
