use crate::sorters::insertion_sorter::insert_each;
use crate::sorters::Sorter;

/// Ranges with `right - left` below this are insertion sorted instead of partitioned. The
/// partition scan needs at least a few elements between the two median-of-three sentinels.
pub(crate) const CUTOFF: usize = 10;

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
///
/// # Usage
///```
/// use sortkit_engine::{QuickSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// QuickSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Quicksort is an in-place sorting algorithm. Developed
/// by British computer scientist Tony Hoare in 1959 and published
/// in 1961 it is still a commonly used algorithm for
/// sorting.
///
/// # Algorithm
///
/// Quicksort is a divide-and-conquer algorithm. It selects a 'pivot' element and partitions the
/// other elements into two sub-arrays according to whether they are less than or greater than
/// the pivot. The sub-arrays are then sorted recursively.
///
/// This version picks the pivot as the median of the first, middle and last element of the range
/// and leaves the smaller and the larger of the three at the ends, where they stop the partition
/// scans. Ranges of fewer than 11 elements are handed to insertion sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuickSorter;

impl<T> Sorter<T> for QuickSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        quick_sort_by(slice, is_less)
    }
}

pub fn quick_sort<T: Ord>(slice: &mut [T]) {
    quick_sort_by(slice, |a, b| a < b)
}

pub fn quick_sort_by<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if slice.len() < 2 {
        return;
    }

    let right = slice.len() - 1;
    sort_range(slice, 0, right, &mut is_less);
}

// Recurse into the smaller side and loop on the larger one, so the stack stays O(log n)
// whatever the pivots turn out to be.
fn sort_range<T, F>(slice: &mut [T], mut left: usize, mut right: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while right - left >= CUTOFF {
        let i = partition(slice, left, right, is_less);

        if i - left < right - i {
            sort_range(slice, left, i - 1, is_less);
            left = i + 1;
        } else {
            sort_range(slice, i + 1, right, is_less);
            right = i - 1;
        }
    }

    insert_each(&mut slice[left..=right], is_less);
}

/// Orders `slice[left]`, `slice[mid]` and `slice[right]`, then parks the median at
/// `right - 1`. Returns the pivot position.
fn choose_pivot<T, F>(slice: &mut [T], left: usize, right: usize, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mid = left + (right - left) / 2;

    if is_less(&slice[mid], &slice[left]) {
        slice.swap(left, mid);
    }
    if is_less(&slice[right], &slice[left]) {
        slice.swap(left, right);
    }
    if is_less(&slice[right], &slice[mid]) {
        slice.swap(mid, right);
    }

    slice.swap(mid, right - 1);
    right - 1
}

/// Partitions `[left, right]` around a median-of-three pivot and returns the pivot's final
/// index `i`. Afterwards nothing in `[left, i)` is greater than the pivot and nothing in
/// `(i, right]` is less than it.
///
/// Requires `right - left >= CUTOFF`. Both returned halves, `[left, i - 1]` and
/// `[i + 1, right]`, are non-empty.
pub(crate) fn partition<T, F>(
    slice: &mut [T],
    left: usize,
    right: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(right - left >= CUTOFF);

    let pivot = choose_pivot(slice, left, right, is_less);

    // `slice[left] <= pivot` stops `j`, the pivot itself stops `i`. The bounds only matter
    // when `is_less` is not a strict order; they keep `i` in `(left, pivot]` so both halves
    // stay non-empty. The pivot slot is never touched by the swaps below since
    // `i < j < pivot` whenever they happen.
    let mut i = left;
    let mut j = pivot;
    loop {
        i += 1;
        while i < pivot && is_less(&slice[i], &slice[pivot]) {
            i += 1;
        }
        j -= 1;
        while j > left && is_less(&slice[pivot], &slice[j]) {
            j -= 1;
        }

        if i < j {
            slice.swap(i, j);
        } else {
            break;
        }
    }

    slice.swap(i, pivot);
    i
}
