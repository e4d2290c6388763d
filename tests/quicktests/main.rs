//! Property tests run with quickcheck.

mod input;
mod traversal;
mod tree;

use quickcheck::{Arbitrary, Gen};
use std::collections::BTreeSet;

/// A list of distinct values in no particular order, like what the input parser hands out.
#[derive(Clone, Debug)]
pub(crate) struct Distinct(pub Vec<i64>);

impl Arbitrary for Distinct {
    /// Tells quickcheck how to produce lists without repeats.
    fn arbitrary(g: &mut Gen) -> Self {
        let mut seen = BTreeSet::new();
        let values = Vec::<i16>::arbitrary(g)
            .into_iter()
            .map(i64::from)
            .filter(|x| seen.insert(*x))
            .collect();
        Distinct(values)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(|mut xs| {
            let mut seen = BTreeSet::new();
            xs.retain(|x| seen.insert(*x));
            Distinct(xs)
        }))
    }
}

impl Distinct {
    pub(crate) fn sorted(&self) -> Vec<i64> {
        let mut xs = self.0.clone();
        xs.sort_unstable();
        xs
    }
}
