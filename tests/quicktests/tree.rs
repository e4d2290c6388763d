use bst::traversal;
use bst::tree::{Node, Tree};
use quickcheck_macros::quickcheck;

use crate::Distinct;

/// Checks the BST ordering below `node`, keeping track of the open range it must fall in.
fn ordered(node: Option<&Node<i64>>, low: Option<i64>, high: Option<i64>) -> bool {
    let Some(n) = node else {
        return true;
    };
    let v = *n.value();
    low.is_none_or(|l| l < v)
        && high.is_none_or(|h| v < h)
        && ordered(n.left(), low, Some(v))
        && ordered(n.right(), Some(v), high)
}

#[quickcheck]
fn built_tree_is_balanced(xs: Distinct) -> bool {
    Tree::from_values(xs.0).is_balanced()
}

#[quickcheck]
fn built_tree_is_ordered(xs: Distinct) -> bool {
    let tree = Tree::from_values(xs.0);
    ordered(tree.root(), None, None)
}

#[quickcheck]
fn built_tree_has_minimal_height(xs: Distinct) -> bool {
    let n = xs.0.len();
    let tree = Tree::from_values(xs.0);
    // ceil(lg(n + 1))
    let minimal = (usize::BITS - n.leading_zeros()) as usize;
    tree.height() == minimal
}

#[quickcheck]
fn built_tree_contains_everything(xs: Distinct, nots: Vec<i64>) -> bool {
    let tree = Tree::from_values(xs.0.clone());
    tree.len() == xs.0.len()
        && xs.0.iter().all(|x| tree.contains(x))
        && nots
            .iter()
            .filter(|x| !xs.0.contains(x))
            .all(|x| !tree.contains(x))
}

#[quickcheck]
fn insertion_keeps_order_and_drops_repeats(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut added = 0;
    for x in &xs {
        if tree.insert(*x as i64) {
            added += 1;
        }
    }

    let mut expected: Vec<i64> = xs.iter().map(|&x| x as i64).collect();
    expected.sort_unstable();
    expected.dedup();

    added == expected.len()
        && ordered(tree.root(), None, None)
        && traversal::in_order(&tree) == expected
}

#[quickcheck]
fn repeated_values_are_dropped_when_building(xs: Vec<i8>) -> bool {
    let tree = Tree::from_values(xs.iter().map(|&x| x as i64).collect());
    let mut expected: Vec<i64> = xs.iter().map(|&x| x as i64).collect();
    expected.sort_unstable();
    expected.dedup();

    tree.is_balanced() && traversal::in_order(&tree) == expected
}
