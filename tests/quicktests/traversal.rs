use bst::traversal::{self, Order};
use bst::tree::Tree;
use quickcheck_macros::quickcheck;

use crate::Distinct;

#[quickcheck]
fn in_order_is_sorted_input(xs: Distinct) -> bool {
    let sorted = xs.sorted();
    traversal::in_order(&Tree::from_values(xs.0)) == sorted
}

#[quickcheck]
fn pre_order_starts_at_split_point(xs: Distinct) -> bool {
    let sorted = xs.sorted();
    let first = traversal::pre_order(&Tree::from_values(xs.0)).first().copied();
    if sorted.is_empty() {
        first.is_none()
    } else {
        first == Some(sorted[(sorted.len() - 1) / 2])
    }
}

#[quickcheck]
fn post_order_ends_at_root(xs: Distinct) -> bool {
    let tree = Tree::from_values(xs.0);
    traversal::post_order(&tree).last() == tree.root().map(|n| n.value())
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Distinct) -> bool {
    let sorted = xs.sorted();
    let tree = Tree::from_values(xs.0);
    Order::ALL.iter().all(|order| {
        let mut seen = order.values(&tree);
        seen.sort_unstable();
        seen == sorted
    })
}

#[quickcheck]
fn traversals_are_repeatable(xs: Distinct) -> bool {
    let tree = Tree::from_values(xs.0);
    Order::ALL
        .iter()
        .all(|order| order.values(&tree) == order.values(&tree))
}
