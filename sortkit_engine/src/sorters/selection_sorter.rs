use crate::sorters::Sorter;

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
///
/// # Usage
///```
/// use sortkit_engine::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
/// # Explanation
///
/// Selection sort is an in-place comparison sorting
/// algorithm. It has an O(n2) time complexity, which
/// makes it inefficient on large lists, and generally
/// performs worse than the similar insertion sort. It does
/// however perform at most `n - 1` swaps.
///
/// # Algorithm
///
/// The slice is divided into a sorted prefix, built up from
/// left to right, and the remaining unsorted items. On each
/// pass the smallest element of the unsorted part is found and
/// swapped with the leftmost unsorted element, moving the
/// boundary one element to the right.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        selection_sort_by(slice, is_less)
    }
}

pub fn selection_sort<T: Ord>(slice: &mut [T]) {
    selection_sort_by(slice, |a, b| a < b)
}

pub fn selection_sort_by<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // The last element is in place once everything before it is.
    for unsorted in 0..slice.len().saturating_sub(1) {
        let mut smallest_in_rest = unsorted;
        for i in (unsorted + 1)..slice.len() {
            if is_less(&slice[i], &slice[smallest_in_rest]) {
                smallest_in_rest = i;
            }
        }
        if unsorted != smallest_in_rest {
            slice.swap(unsorted, smallest_in_rest);
        }
    }
}
