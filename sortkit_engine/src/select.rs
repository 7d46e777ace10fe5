//! Order statistics with [Quickselect](https://en.wikipedia.org/wiki/Quickselect).
//!
//! Quick select partitions exactly like [`quick_sort`](crate::quick_sort) does, but after each
//! partition it only keeps working on the side that holds the requested rank. On average that
//! is `O(n)` comparisons instead of `O(n log n)`.
//!
//! # Example
//!
//! ```
//! use sortkit_engine::quick_select;
//!
//! let mut slice = [8, 79, 6, 56, 2, 0, 5, 44, 29, 31, 157];
//! quick_select(&mut slice, 3);
//! assert_eq!(slice[3], 6);
//! ```

use crate::error::{Error, Result};
use crate::sorters::insertion_sorter::insert_each;
use crate::sorters::quick_sorter::{partition, CUTOFF};

/// Moves the `k`th smallest element (zero based) of `slice` to index `k`.
///
/// The order of the other elements is unspecified afterwards.
///
/// # Panics
///
/// Panics if `k >= slice.len()`. See [`try_quick_select`] for a checked version.
pub fn quick_select<T: Ord>(slice: &mut [T], k: usize) {
    quick_select_by(slice, k, |a, b| a < b)
}

/// Like [`quick_select`], with `is_less` as the strict ordering.
///
/// # Panics
///
/// Panics if `k >= slice.len()`.
pub fn quick_select_by<T, F>(slice: &mut [T], k: usize, is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if let Err(err) = try_quick_select_by(slice, k, is_less) {
        panic!("quick_select: {err}");
    }
}

/// Checked [`quick_select`]: returns [`Error::RankOutOfRange`] instead of panicking and leaves
/// the slice untouched in that case.
pub fn try_quick_select<T: Ord>(slice: &mut [T], k: usize) -> Result<()> {
    try_quick_select_by(slice, k, |a, b| a < b)
}

pub fn try_quick_select_by<T, F>(slice: &mut [T], k: usize, mut is_less: F) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    if k >= slice.len() {
        return Err(Error::RankOutOfRange {
            rank: k,
            len: slice.len(),
        });
    }

    select_range(slice, 0, slice.len() - 1, k, &mut is_less);
    Ok(())
}

// `k` is an absolute index and always lies in `[left, right]`.
fn select_range<T, F>(
    slice: &mut [T],
    mut left: usize,
    mut right: usize,
    k: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while right - left >= CUTOFF {
        let i = partition(slice, left, right, is_less);

        if k < i {
            right = i - 1;
        } else if k > i {
            left = i + 1;
        } else {
            return;
        }
    }

    // TODO: a rank-aware selection would save the comparisons spent ordering the far side of k.
    insert_each(&mut slice[left..=right], is_less);
}

#[cfg(test)]
mod tests {

    use super::*;

    fn kth_smallest(slice: &[i32], k: usize) -> i32 {
        let mut sorted = slice.to_vec();
        sorted.sort_unstable();
        sorted[k]
    }

    #[test]
    fn scenario_extremes() {
        let input = [8, 79, 6, 56, 2, 0, 5, 44, 29, 31, 157];

        let mut slice = input;
        quick_select(&mut slice, 0);
        assert_eq!(slice[0], 0);

        let mut slice = input;
        quick_select(&mut slice, 10);
        assert_eq!(slice[10], 157);
    }

    #[test]
    fn every_rank_of_a_partitioned_range() {
        let input = (0..40).map(|i| (i * 17 + 5) % 41).collect::<Vec<i32>>();
        for k in 0..input.len() {
            let mut slice = input.clone();
            quick_select(&mut slice, k);
            assert_eq!(slice[k], kth_smallest(&input, k), "k = {k}");
        }
    }

    #[test]
    fn single_element() {
        let mut slice = [42];
        quick_select(&mut slice, 0);
        assert_eq!(slice, [42]);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut slice = [3, 1, 2];
        assert_eq!(
            try_quick_select(&mut slice, 3),
            Err(Error::RankOutOfRange { rank: 3, len: 3 })
        );
        assert_eq!(slice, [3, 1, 2]);

        let mut empty: [i32; 0] = [];
        assert!(try_quick_select(&mut empty, 0).is_err());
    }

    #[test]
    fn non_strict_predicate_keeps_elements() {
        let input = (0..500).map(|i| (i * 31) % 17).collect::<Vec<i32>>();
        let mut expected = input.clone();
        expected.sort_unstable();

        for k in [0, 1, 250, 498, 499] {
            let mut slice = input.clone();
            quick_select_by(&mut slice, k, |a, b| a <= b);
            slice.sort_unstable();
            assert_eq!(slice, expected, "k = {k}");

            let mut slice = input.clone();
            quick_select_by(&mut slice, k, |_, _| true);
            slice.sort_unstable();
            assert_eq!(slice, expected, "k = {k}");
        }
    }

    #[test]
    #[should_panic(expected = "rank 5 is out of range")]
    fn out_of_range_panics() {
        let mut slice = [3, 1, 2];
        quick_select(&mut slice, 5);
    }
}
