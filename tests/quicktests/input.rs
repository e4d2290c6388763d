use bst::input::{parse_values, InputError};
use bst::traversal;
use bst::tree::Tree;
use quickcheck_macros::quickcheck;
use std::collections::BTreeSet;

use crate::Distinct;

/// The input parser can't see minus signs, so only use magnitudes (without repeats).
fn non_negative(xs: &Distinct) -> Vec<i64> {
    let magnitudes: BTreeSet<i64> = xs.0.iter().map(|x| x.abs()).collect();
    magnitudes.into_iter().collect()
}

#[quickcheck]
fn formatted_values_parse_back(xs: Distinct, use_spaces: bool) -> bool {
    let values = non_negative(&xs);
    let sep = if use_spaces { " " } else { ", " };
    let text = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(sep);

    match parse_values(&text) {
        Ok(parsed) => parsed == values,
        Err(InputError::Empty) => values.is_empty(),
        Err(_) => false,
    }
}

#[quickcheck]
fn any_repeat_is_rejected(xs: Distinct, pick: usize) -> bool {
    let mut values = non_negative(&xs);
    if values.is_empty() {
        return true;
    }
    let repeat = values[pick % values.len()];
    values.push(repeat);
    let text = values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");

    parse_values(&text) == Err(InputError::Duplicate { value: repeat })
}

#[quickcheck]
fn parsed_input_builds_sorted_tree(text: String) -> bool {
    match parse_values(&text) {
        Ok(values) => {
            let mut sorted = values.clone();
            sorted.sort_unstable();
            traversal::in_order(&Tree::from_values(values)) == sorted
        }
        Err(_) => true,
    }
}
