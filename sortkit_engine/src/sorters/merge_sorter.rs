use std::mem;

use crate::sorters::Sorter;

/// An implementation of top-down [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
///
/// # Usage
///```
/// use sortkit_engine::{MergeSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// The slice is split in two halves, each half is sorted recursively and the two sorted halves
/// are merged. A single scratch buffer the size of the whole slice is allocated per call and
/// reused by every merge, so the auxiliary space is `O(n)`.
///
/// # Ties
///
/// When the head of the left half is not less than the head of the right half, the right head
/// is taken first. Equal elements therefore do not keep their relative order: sorting
/// `[2a, 1, 2b]` yields `[1, 2b, 2a]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct MergeSorter;

impl<T: Clone> Sorter<T> for MergeSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        merge_sort_by(slice, is_less)
    }
}

pub fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    merge_sort_by(slice, |a, b| a < b)
}

/// `Clone` is only used once, to fill the scratch buffer. Merging moves elements by swapping
/// them between the slice and the buffer.
pub fn merge_sort_by<T, F>(slice: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if slice.len() < 2 {
        return;
    }

    let mut scratch = slice.to_vec();
    let right = slice.len() - 1;
    sort_range(slice, &mut scratch, 0, right, &mut is_less);
}

// `left` and `right` are inclusive.
fn sort_range<T, F>(
    slice: &mut [T],
    scratch: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    sort_range(slice, scratch, left, mid, is_less);
    sort_range(slice, scratch, mid + 1, right, is_less);
    merge(slice, scratch, left, mid, right, is_less);
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]`.
///
/// The merged run is built in `scratch[left..=right]`, then swapped back into place. Whatever
/// `scratch` held in that range ends up in the consumed slots of `slice` and is overwritten by
/// the final swap.
fn merge<T, F>(
    slice: &mut [T],
    scratch: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    let mut left_pos = left;
    let mut right_pos = mid + 1;
    let mut out = left;

    while left_pos <= mid && right_pos <= right {
        if is_less(&slice[left_pos], &slice[right_pos]) {
            mem::swap(&mut scratch[out], &mut slice[left_pos]);
            left_pos += 1;
        } else {
            mem::swap(&mut scratch[out], &mut slice[right_pos]);
            right_pos += 1;
        }
        out += 1;
    }

    // Remains of the first half
    while left_pos <= mid {
        mem::swap(&mut scratch[out], &mut slice[left_pos]);
        left_pos += 1;
        out += 1;
    }

    // Remains of the second half
    while right_pos <= right {
        mem::swap(&mut scratch[out], &mut slice[right_pos]);
        right_pos += 1;
        out += 1;
    }

    slice[left..=right].swap_with_slice(&mut scratch[left..=right]);
}
