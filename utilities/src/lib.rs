//! Test fixtures shared by the integration tests of the workspace.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// The input of the running example: eleven elements, one more than the quick sort cutoff.
pub const SCENARIO: [i32; 11] = [8, 79, 6, 56, 2, 0, 5, 44, 29, 31, 157];
pub const SCENARIO_SORTED: [i32; 11] = [0, 2, 5, 6, 8, 29, 31, 44, 56, 79, 157];

/// A value tagged with the index it had in the input.
///
/// Only `value` takes part in comparisons, so equal values can still be told apart by
/// `origin` after sorting.
#[derive(Debug, Clone, Copy)]
pub struct Tagged<T> {
    pub value: T,
    pub origin: usize,
}

impl<T: PartialEq> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tagged<T> {}

impl<T: Ord> PartialOrd for Tagged<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Tagged<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

pub fn tag<T: Clone>(values: &[T]) -> Vec<Tagged<T>> {
    values
        .iter()
        .cloned()
        .enumerate()
        .map(|(origin, value)| Tagged { value, origin })
        .collect()
}

pub fn origins<T>(tagged: &[Tagged<T>]) -> Vec<usize> {
    tagged.iter().map(|t| t.origin).collect()
}

pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

/// True when both slices hold the same elements the same number of times.
pub fn same_multiset<T: Ord>(a: &[T], b: &[T]) -> bool {
    fn counts<T: Ord>(slice: &[T]) -> BTreeMap<&T, usize> {
        let mut counts = BTreeMap::new();
        for elem in slice {
            *counts.entry(elem).or_insert(0) += 1;
        }
        counts
    }

    a.len() == b.len() && counts(a) == counts(b)
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_vec(rng: &mut StdRng, len: usize, max: i32) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(0..=max)).collect()
}

/// Inputs of length `len` with shapes that tend to trip up sorting code.
pub fn patterns(len: usize, seed: u64) -> Vec<(&'static str, Vec<i32>)> {
    let mut random = rng(seed);
    let n = len as i32;

    vec![
        ("ascending", (0..n).collect()),
        ("descending", (0..n).rev().collect()),
        ("all_equal", vec![7; len]),
        ("saw", (0..n).map(|i| i % 5).collect()),
        ("organ_pipe", (0..n).map(|i| i.min(n - 1 - i)).collect()),
        ("few_distinct", random_vec(&mut random, len, 3)),
        ("random", random_vec(&mut random, len, i32::MAX)),
    ]
}
